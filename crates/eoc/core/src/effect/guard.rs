//! Guard expressions for conditional effects.

use serde_json::{Value, json};

/// Guard expression of a conditional effect or a record trigger.
///
/// The expression itself is opaque JSON. Two guards are structurally identical
/// when their canonical serializations match. The canonical form is compact and
/// keeps object keys in insertion order as well as array order. No semantic
/// equivalence is attempted, so `a && b` and `b && a` are different guards, and
/// so are two objects that list the same keys in a different order.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Guard(Value);

impl Guard {
    pub fn new(expression: Value) -> Self {
        Self(expression)
    }

    /// Bare condition name, e.g. `"u_is_npc"`.
    pub fn raw(condition: &str) -> Self {
        Self(Value::String(condition.to_owned()))
    }

    /// `{"math": [lhs, op, rhs]}` comparison.
    pub fn math(lhs: impl Into<String>, op: &str, rhs: impl ToString) -> Self {
        let lhs: String = lhs.into();
        Self(json!({ "math": [lhs, op, rhs.to_string()] }))
    }

    /// `{"or": [...]}` over the given guards.
    pub fn or(guards: impl IntoIterator<Item = Guard>) -> Self {
        let branches: Vec<Value> = guards.into_iter().map(Guard::into_value).collect();
        Self(json!({ "or": branches }))
    }

    /// `{"compare_string": [lhs, rhs]}` equality.
    pub fn compare_string(lhs: impl Into<Value>, rhs: impl Into<Value>) -> Self {
        let (lhs, rhs): (Value, Value) = (lhs.into(), rhs.into());
        Self(json!({ "compare_string": [lhs, rhs] }))
    }

    pub fn expression(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Canonical serialization used for structural comparison.
    ///
    /// `Value`'s own `PartialEq` ignores object key order, so equality goes
    /// through this string instead.
    pub fn canonical(&self) -> String {
        self.0.to_string()
    }
}

impl PartialEq for Guard {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for Guard {}

impl From<Value> for Guard {
    fn from(expression: Value) -> Self {
        Self(expression)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_order_matters() {
        let a: Guard = serde_json::from_str(r#"{"math":["x","<=","0"],"extra":1}"#)
            .expect("guard should parse");
        let b: Guard = serde_json::from_str(r#"{"extra":1,"math":["x","<=","0"]}"#)
            .expect("guard should parse");

        let keys = |guard: &Guard| -> Vec<String> {
            guard
                .expression()
                .as_object()
                .map(|map| map.keys().cloned().collect())
                .unwrap_or_default()
        };
        assert_eq!(keys(&a), ["math", "extra"]);
        assert_eq!(keys(&b), ["extra", "math"]);

        assert_ne!(a, b);
        assert_eq!(a.canonical(), r#"{"math":["x","<=","0"],"extra":1}"#);
    }

    #[test]
    fn identical_guards_are_equal() {
        let a: Guard = serde_json::from_str(r#"{ "math": ["x", "<=", "0"], "extra": 1 }"#)
            .expect("guard should parse");

        assert_eq!(a, Guard::new(json!({ "math": ["x", "<=", "0"], "extra": 1 })));
    }

    #[test]
    fn array_order_matters() {
        let a = Guard::or([Guard::raw("a"), Guard::raw("b")]);
        let b = Guard::or([Guard::raw("b"), Guard::raw("a")]);

        assert_ne!(a, b);
    }

    #[test]
    fn math_builds_string_operands() {
        let guard = Guard::math("u_mod_inBattle", "<=", 0);

        assert_eq!(guard.canonical(), r#"{"math":["u_mod_inBattle","<=","0"]}"#);
    }
}
