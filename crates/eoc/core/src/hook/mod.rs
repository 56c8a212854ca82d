//! Hook definitions and the default hook catalog.
//!
//! A hook is a named trigger point. Its trigger settings and fixed
//! before/after effects are authored once; callers only ever add weighted
//! contributions through the [`EventRegistry`](crate::registry::EventRegistry).

mod catalog;
mod name;
mod namespace;
mod settings;

pub use catalog::build_catalog;
pub use name::{HookName, HookScope};
pub use namespace::Namespace;
pub use settings::{BaseSettings, EocType};

use crate::effect::Effect;

/// Trigger settings plus the effects always emitted around contributions.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Hook {
    pub base_setting: BaseSettings,

    /// Emitted before any contributed effect.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub before_effects: Vec<Effect>,

    /// Emitted after every contributed effect.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub after_effects: Vec<Effect>,
}

impl Hook {
    /// Creates a hook with no fixed effects.
    pub fn new(base_setting: BaseSettings) -> Self {
        Self {
            base_setting,
            before_effects: Vec::new(),
            after_effects: Vec::new(),
        }
    }

    /// Builder: set the fixed before-effects.
    pub fn before(mut self, effects: Vec<Effect>) -> Self {
        self.before_effects = effects;
        self
    }

    /// Builder: set the fixed after-effects.
    pub fn after(mut self, effects: Vec<Effect>) -> Self {
        self.after_effects = effects;
        self
    }
}

impl Default for Hook {
    fn default() -> Self {
        Self::new(BaseSettings::activation())
    }
}
