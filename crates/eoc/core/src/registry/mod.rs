//! Event registry - accumulates weighted contributions and compiles records.
//!
//! The registry is a monotonically growing accumulator. Contributions are only
//! ever appended; [`EventRegistry::compile`] is a pure view over the current
//! state and can be called any number of times.
//!
//! # Compilation
//!
//! For every hook, in hook-map order:
//! 1. Stable-sort its contributions by descending weight
//! 2. Flatten them into one effect list
//! 3. Run the conditional merge pass, then the invocation merge pass
//! 4. Emit `before_effects ++ merged ++ after_effects` under `{prefix}_{hook}_EVENT`
//!
//! Nothing is merged across the fixed effect boundaries.
//!
//! # Concurrency
//!
//! Registration takes `&mut self`; embedders that register from several
//! places must serialize those calls before compiling.

mod contribution;
mod hook_map;

pub use contribution::Contribution;
pub use hook_map::HookMap;

use std::collections::HashMap;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::config::{HookOptions, HookOptionsOverride};
use crate::effect::{Effect, merge_effects};
use crate::error::{RegistryError, Result};
use crate::hook::{Hook, HookName, Namespace, build_catalog};
use crate::record::EmittedRecord;

/// Registry of hooks and the weighted contributions registered against them.
#[derive(Clone, Debug)]
pub struct EventRegistry {
    namespace: Namespace,
    options: HookOptions,
    hooks: HookMap,
    contributions: HashMap<String, Vec<Contribution>>,
}

impl EventRegistry {
    /// Creates a registry with the default catalog options.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::with_options(prefix, &HookOptionsOverride::default())
    }

    /// Creates a registry whose catalog is built with the given overrides.
    pub fn with_options(prefix: impl Into<String>, overrides: &HookOptionsOverride) -> Self {
        let namespace = Namespace::new(prefix);
        let options = HookOptions::default().apply(overrides);
        let hooks = build_catalog(namespace.prefix(), &options)
            .into_iter()
            .map(|(name, hook)| (name.as_str().to_owned(), hook))
            .collect();

        debug!(
            target: "eoc_core::registry",
            prefix = namespace.prefix(),
            ?options,
            "Hook catalog built"
        );

        Self {
            namespace,
            options,
            hooks,
            contributions: HashMap::new(),
        }
    }

    pub fn prefix(&self) -> &str {
        self.namespace.prefix()
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// Options the catalog was built with.
    pub fn options(&self) -> &HookOptions {
        &self.options
    }

    /// Appends a weighted contribution to `hook`.
    ///
    /// Higher weights are emitted first; equal weights keep registration order.
    /// Any numeric weight is accepted, fractional ones included.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownHook`] if `hook` is not in the hook map.
    /// The registry is left untouched in that case.
    pub fn register_effects(
        &mut self,
        hook: impl AsRef<str>,
        weight: impl Into<f64>,
        effects: Vec<Effect>,
    ) -> Result<()> {
        let hook = self.verify_hook(hook.as_ref())?;
        let weight = weight.into();

        debug!(
            target: "eoc_core::registry",
            hook,
            weight,
            effects = effects.len(),
            "Contribution registered"
        );

        self.contributions
            .entry(hook.to_owned())
            .or_default()
            .push(Contribution::new(weight, effects));
        Ok(())
    }

    /// Registers a contribution that invokes the given record ids.
    ///
    /// An empty target list still validates `hook` but registers nothing.
    pub fn register_invocation<I, S>(
        &mut self,
        hook: impl AsRef<str>,
        weight: impl Into<f64>,
        targets: I,
    ) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let targets: Vec<String> = targets.into_iter().map(Into::into).collect();
        if targets.is_empty() {
            self.verify_hook(hook.as_ref())?;
            return Ok(());
        }
        self.register_effects(hook, weight, vec![Effect::Invocation(targets)])
    }

    /// Registers a contribution that invokes the given records by id.
    pub fn register_invocation_of<'a>(
        &mut self,
        hook: impl AsRef<str>,
        weight: impl Into<f64>,
        records: impl IntoIterator<Item = &'a EmittedRecord>,
    ) -> Result<()> {
        let ids: Vec<&str> = records.into_iter().map(EmittedRecord::id).collect();
        self.register_invocation(hook, weight, ids)
    }

    /// Inserts or replaces a hook under an arbitrary name.
    ///
    /// Replacing a built-in hook drops its catalog settings and fixed effects.
    /// Contributions already registered under `name` are kept.
    pub fn register_custom_hook(&mut self, name: impl Into<String>, hook: Hook) {
        let name = name.into();
        let builtin = HookName::from_str(&name).is_ok();

        match self.hooks.insert(name.clone(), hook) {
            Some(_) if builtin => warn!(
                target: "eoc_core::registry",
                hook = %name,
                "Custom hook shadows a built-in hook"
            ),
            Some(_) => debug!(
                target: "eoc_core::registry",
                hook = %name,
                "Custom hook replaced"
            ),
            None => debug!(
                target: "eoc_core::registry",
                hook = %name,
                "Custom hook added"
            ),
        }
    }

    /// Returns the hook's current settings and fixed effects.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownHook`] if `name` is not in the hook map.
    pub fn get_hook(&self, name: impl AsRef<str>) -> Result<&Hook> {
        let name = name.as_ref();
        self.hooks
            .get(name)
            .ok_or_else(|| RegistryError::UnknownHook(name.to_owned()))
    }

    pub fn contains_hook(&self, name: impl AsRef<str>) -> bool {
        self.hooks.contains(name.as_ref())
    }

    /// Returns hook names in enumeration (compile) order.
    pub fn hook_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.hooks.names()
    }

    /// Returns the number of contributions registered against `name`.
    pub fn contribution_count(&self, name: impl AsRef<str>) -> usize {
        self.contributions
            .get(name.as_ref())
            .map_or(0, Vec::len)
    }

    /// Compiles one record per hook, in hook-map order.
    pub fn compile(&self) -> Vec<EmittedRecord> {
        let records: Vec<EmittedRecord> = self
            .hooks
            .iter()
            .map(|(name, hook)| self.compile_hook(name, hook))
            .collect();

        debug!(
            target: "eoc_core::registry",
            prefix = self.prefix(),
            records = records.len(),
            "Registry compiled"
        );

        records
    }

    /// Compiles and converts every record into its JSON object.
    pub fn compile_json(&self) -> serde_json::Result<Vec<serde_json::Value>> {
        self.compile().iter().map(EmittedRecord::to_json).collect()
    }

    fn compile_hook(&self, name: &str, hook: &Hook) -> EmittedRecord {
        let contributed = self
            .contributions
            .get(name)
            .map(Vec::as_slice)
            .map(contribution::flatten_by_weight)
            .unwrap_or_default();
        let merged = merge_effects(contributed);

        let mut effect =
            Vec::with_capacity(hook.before_effects.len() + merged.len() + hook.after_effects.len());
        effect.extend(hook.before_effects.iter().cloned());
        effect.extend(merged);
        effect.extend(hook.after_effects.iter().cloned());

        EmittedRecord::new(
            self.namespace.event_id(name),
            hook.base_setting.clone(),
            effect,
        )
    }

    fn verify_hook<'a>(&self, hook: &'a str) -> Result<&'a str> {
        if self.hooks.contains(hook) {
            Ok(hook)
        } else {
            Err(RegistryError::UnknownHook(hook.to_owned()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::Guard;
    use crate::hook::BaseSettings;

    fn record<'a>(records: &'a [EmittedRecord], id: &str) -> &'a EmittedRecord {
        records
            .iter()
            .find(|r| r.id == id)
            .expect("record should be emitted")
    }

    #[test]
    fn unknown_hook_is_rejected_without_mutation() {
        let mut registry = EventRegistry::new("mod");
        let before = registry.compile();

        let err = registry
            .register_effects("Nope", 1, vec![Effect::invoke(["x"])])
            .expect_err("unknown hook should fail");
        assert_eq!(err, RegistryError::UnknownHook("Nope".into()));
        assert_eq!(err.hook_name(), "Nope");

        assert!(registry.register_invocation("Nope", 1, ["x"]).is_err());
        assert!(registry.get_hook("Nope").is_err());
        assert_eq!(registry.contribution_count("Nope"), 0);
        assert_eq!(registry.compile(), before);
    }

    #[test]
    fn empty_invocation_registers_nothing() {
        let mut registry = EventRegistry::new("mod");

        registry
            .register_invocation(HookName::Death, 1, Vec::<String>::new())
            .expect("known hook should accept");
        assert_eq!(registry.contribution_count(HookName::Death), 0);
        assert!(
            registry
                .register_invocation("Nope", 1, Vec::<String>::new())
                .is_err()
        );
    }

    #[test]
    fn weights_order_contributions() {
        let mut registry = EventRegistry::new("mod");
        registry
            .register_invocation(HookName::Death, 1, ["low"])
            .expect("register");
        registry
            .register_effects(HookName::Death, 10, vec![Effect::opaque("high")])
            .expect("register");
        registry
            .register_effects(HookName::Death, 1, vec![Effect::opaque("low_second")])
            .expect("register");

        let records = registry.compile();
        let death = record(&records, "mod_Death_EVENT");

        assert_eq!(
            death.effect,
            vec![
                Effect::opaque("high"),
                Effect::invoke(["low"]),
                Effect::opaque("low_second"),
            ]
        );
    }

    #[test]
    fn fractional_weights_are_accepted() {
        let mut registry = EventRegistry::new("mod");
        registry
            .register_effects(HookName::Death, 0.5, vec![Effect::opaque("half")])
            .expect("register");
        registry
            .register_effects(HookName::Death, 1, vec![Effect::opaque("one")])
            .expect("register");
        registry
            .register_effects(HookName::Death, 0, vec![Effect::opaque("zero")])
            .expect("register");

        let records = registry.compile();
        assert_eq!(
            record(&records, "mod_Death_EVENT").effect,
            vec![
                Effect::opaque("one"),
                Effect::opaque("half"),
                Effect::opaque("zero"),
            ]
        );
    }

    #[test]
    fn invocation_of_records_uses_their_ids() {
        let mut registry = EventRegistry::new("mod");
        let targets = vec![
            EmittedRecord::new("a", BaseSettings::activation(), vec![]),
            EmittedRecord::new("b", BaseSettings::activation(), vec![]),
        ];

        registry
            .register_invocation_of(HookName::Init, 0, &targets)
            .expect("register");

        let records = registry.compile();
        assert_eq!(
            record(&records, "mod_Init_EVENT").effect,
            vec![Effect::invoke(["a", "b"])]
        );
    }

    #[test]
    fn contributions_sit_between_fixed_effects() {
        let mut registry = EventRegistry::new("mod");
        registry
            .register_invocation(HookName::TryAttack, 0, ["mod_on_attack"])
            .expect("register");

        let records = registry.compile();
        let attack = record(&records, "mod_TryAttack_EVENT");
        let hook = registry.get_hook(HookName::TryAttack).expect("hook exists");

        assert_eq!(attack.effect.first(), hook.before_effects.first());
        assert_eq!(attack.effect[1], Effect::invoke(["mod_on_attack"]));
        assert_eq!(&attack.effect[2..], hook.after_effects.as_slice());
    }

    #[test]
    fn custom_hook_is_compiled_after_catalog() {
        let mut registry = EventRegistry::new("mod");
        let custom = Hook::new(BaseSettings::activation())
            .before(vec![Effect::opaque("pre")])
            .after(vec![Effect::opaque("post")]);
        registry.register_custom_hook("OnLevelUp", custom);
        registry
            .register_effects(
                "OnLevelUp",
                0,
                vec![Effect::when(Guard::raw("u_is_npc"), vec![Effect::opaque("x")])],
            )
            .expect("custom hook should accept contributions");

        let records = registry.compile();
        let last = records.last().expect("records emitted");

        assert_eq!(last.id, "mod_OnLevelUp_EVENT");
        assert_eq!(last.effect.len(), 3);
        assert_eq!(last.effect[0], Effect::opaque("pre"));
        assert_eq!(last.effect[2], Effect::opaque("post"));
        assert_eq!(registry.hook_names().last(), Some("OnLevelUp"));
    }

    #[test]
    fn shadowing_keeps_position_and_contributions() {
        let mut registry = EventRegistry::new("mod");
        registry
            .register_invocation(HookName::TakeDamage, 0, ["x"])
            .expect("register");
        let position = registry
            .hook_names()
            .position(|n| n == "TakeDamage")
            .expect("built-in present");

        registry.register_custom_hook("TakeDamage", Hook::default());

        let records = registry.compile();
        assert_eq!(records[position].id, "mod_TakeDamage_EVENT");
        assert_eq!(records[position].settings, BaseSettings::activation());
        assert_eq!(records[position].effect, vec![Effect::invoke(["x"])]);
    }

    #[test]
    fn compile_json_emits_every_hook() {
        let registry = EventRegistry::new("mod");
        let json = registry.compile_json().expect("records should serialize");

        assert_eq!(json.len(), registry.hook_names().count());
        assert_eq!(json[0]["id"], "mod_GameBegin_EVENT");
        assert_eq!(json[0]["type"], "effect_on_condition");
    }
}
