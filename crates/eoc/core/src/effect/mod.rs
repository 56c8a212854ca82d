//! Effect model - the nodes that make up an emitted record's effect body.
//!
//! Effect bodies are JSON documents understood by the game's scripting layer.
//! Only two shapes matter to the merge passes, so they get typed variants:
//!
//! - `{"run_eocs": [ids...]}` becomes [`Effect::Invocation`]
//! - `{"if": guard, "then": [...], "else": [...]}` becomes [`Effect::Conditional`]
//!
//! Everything else, including malformed invocations and conditionals, is kept
//! as [`Effect::Opaque`] and passed through untouched.
//!
//! # Normalization
//!
//! `run_eocs` may name a single id as a bare string. Parsing reads it as a
//! one-target invocation, and every invocation is written back as a list, so
//! `{"run_eocs": "a"}` comes out as `{"run_eocs": ["a"]}`. The game reads
//! both forms the same way.
//!
//! # Ordering
//!
//! The order of effects in a list is the execution order. The merge passes in
//! [`merge`] only coalesce adjacent nodes; they never reorder.

mod guard;
mod merge;

pub use guard::Guard;
pub use merge::{merge_conditionals, merge_effects, merge_invocations};

use serde_json::{Map, Value};

const RUN_EOCS: &str = "run_eocs";
const IF: &str = "if";
const THEN: &str = "then";
const ELSE: &str = "else";

/// A single effect inside a record body.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum Effect {
    /// Runs every listed record in the current script context.
    ///
    /// Always serialized with a list of targets, even when parsed from a bare id.
    Invocation(Vec<String>),

    /// Guarded branch.
    Conditional(ConditionalEffect),

    /// Any other payload, carried through unmodified and never merged.
    Opaque(Value),
}

/// Guard expression with a `then` branch and an optional `else` branch.
#[derive(Clone, Debug, PartialEq)]
pub struct ConditionalEffect {
    pub guard: Guard,
    pub then: Vec<Effect>,
    pub otherwise: Option<Vec<Effect>>,
}

impl ConditionalEffect {
    pub fn new(guard: Guard, then: Vec<Effect>) -> Self {
        Self {
            guard,
            then,
            otherwise: None,
        }
    }

    /// Builder: set the `else` branch.
    pub fn otherwise(mut self, otherwise: Vec<Effect>) -> Self {
        self.otherwise = Some(otherwise);
        self
    }

    /// Returns true if this conditional carries an `else` branch.
    pub fn has_else(&self) -> bool {
        self.otherwise.is_some()
    }
}

impl Effect {
    /// Creates an invocation of the given record ids.
    pub fn invoke<I, S>(targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Effect::Invocation(targets.into_iter().map(Into::into).collect())
    }

    /// Creates a conditional without an `else` branch.
    pub fn when(guard: Guard, then: Vec<Effect>) -> Self {
        Effect::Conditional(ConditionalEffect::new(guard, then))
    }

    /// Creates a conditional with both branches.
    pub fn when_else(guard: Guard, then: Vec<Effect>, otherwise: Vec<Effect>) -> Self {
        Effect::Conditional(ConditionalEffect::new(guard, then).otherwise(otherwise))
    }

    /// Wraps an arbitrary payload.
    pub fn opaque(value: impl Into<Value>) -> Self {
        Effect::Opaque(value.into())
    }

    /// Shorthand for a `{"math": [lhs, op, rhs]}` assignment effect.
    pub fn math(lhs: impl Into<String>, op: &str, rhs: impl ToString) -> Self {
        let lhs: String = lhs.into();
        Effect::Opaque(serde_json::json!({ "math": [lhs, op, rhs.to_string()] }))
    }

    /// Returns the invocation targets if this is an invocation.
    pub fn targets(&self) -> Option<&[String]> {
        match self {
            Effect::Invocation(targets) => Some(targets.as_slice()),
            _ => None,
        }
    }

    /// Returns the conditional node if this is a conditional.
    pub fn as_conditional(&self) -> Option<&ConditionalEffect> {
        match self {
            Effect::Conditional(conditional) => Some(conditional),
            _ => None,
        }
    }

    /// Converts this effect into its JSON form.
    pub fn to_value(&self) -> Value {
        Value::from(self.clone())
    }

    fn from_object(map: Map<String, Value>) -> Self {
        if map.len() == 1 {
            if let Some(targets) = map.get(RUN_EOCS).and_then(parse_targets) {
                return Effect::Invocation(targets);
            }
        }

        if is_conditional_shape(&map) {
            let mut map = map;
            let guard = map.remove(IF).map(Guard::new).unwrap_or_default();
            let then = map.remove(THEN).map(effect_list).unwrap_or_default();
            let otherwise = map.remove(ELSE).map(effect_list);
            return Effect::Conditional(ConditionalEffect {
                guard,
                then,
                otherwise,
            });
        }

        Effect::Opaque(Value::Object(map))
    }
}

/// `run_eocs` accepts one id or a non-empty list of ids.
fn parse_targets(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::String(target) => Some(vec![target.clone()]),
        Value::Array(items) if !items.is_empty() => items
            .iter()
            .map(|item| item.as_str().map(str::to_owned))
            .collect(),
        _ => None,
    }
}

fn is_conditional_shape(map: &Map<String, Value>) -> bool {
    map.contains_key(IF)
        && map.get(THEN).is_some_and(Value::is_array)
        && map.get(ELSE).is_none_or(Value::is_array)
        && map.keys().all(|key| key == IF || key == THEN || key == ELSE)
}

fn effect_list(value: Value) -> Vec<Effect> {
    match value {
        Value::Array(items) => items.into_iter().map(Effect::from).collect(),
        _ => Vec::new(),
    }
}

fn list_value(effects: Vec<Effect>) -> Value {
    Value::Array(effects.into_iter().map(Value::from).collect())
}

impl From<Value> for Effect {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Effect::from_object(map),
            other => Effect::Opaque(other),
        }
    }
}

impl From<Effect> for Value {
    fn from(effect: Effect) -> Self {
        match effect {
            Effect::Invocation(targets) => {
                let mut map = Map::new();
                map.insert(RUN_EOCS.to_owned(), Value::from(targets));
                Value::Object(map)
            }
            Effect::Conditional(conditional) => {
                let mut map = Map::new();
                map.insert(IF.to_owned(), conditional.guard.into_value());
                map.insert(THEN.to_owned(), list_value(conditional.then));
                if let Some(otherwise) = conditional.otherwise {
                    map.insert(ELSE.to_owned(), list_value(otherwise));
                }
                Value::Object(map)
            }
            Effect::Opaque(value) => value,
        }
    }
}

impl From<ConditionalEffect> for Effect {
    fn from(conditional: ConditionalEffect) -> Self {
        Effect::Conditional(conditional)
    }
}
