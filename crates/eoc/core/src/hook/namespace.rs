//! Identifier conventions derived from a namespace prefix.

use super::HookName;
use crate::effect::Effect;

/// Prefix from which every generated identifier is derived.
///
/// Callers outside the registry rely on these conventions to target the
/// records it emits.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Namespace {
    prefix: String,
}

impl Namespace {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// `{prefix}_{hook}_EVENT`
    pub fn event_id(&self, hook: impl AsRef<str>) -> String {
        format!("{}_{}_EVENT", self.prefix, hook.as_ref())
    }

    /// `u_{prefix}_{name}`
    pub fn u_var(&self, name: &str) -> String {
        format!("u_{}_{}", self.prefix, name)
    }

    /// `n_{prefix}_{name}`
    pub fn n_var(&self, name: &str) -> String {
        format!("n_{}_{}", self.prefix, name)
    }

    /// `{prefix}_{name}`
    pub fn global_var(&self, name: &str) -> String {
        format!("{}_{}", self.prefix, name)
    }

    /// Invocation of a built-in hook's record.
    pub fn invoke(&self, hook: HookName) -> Effect {
        Effect::invoke([self.event_id(hook)])
    }
}
