//! Custom hook definition loader.

use std::fmt;
use std::path::Path;

use eoc_core::Hook;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};

use crate::loaders::{LoadResult, read_file};

/// Loader for custom hook definitions from JSON files.
pub struct HookLoader;

impl HookLoader {
    /// Load custom hooks from a JSON object keyed by hook name.
    ///
    /// Hooks are returned in file order, which is the order they will be
    /// compiled in after the built-in catalog.
    ///
    /// ```json
    /// {
    ///     "CastSpell": {
    ///         "base_setting": { "eoc_type": "EVENT", "required_event": "character_casts_spell" },
    ///         "after_effects": [{ "run_eocs": ["mod_TryAttack_EVENT"] }]
    ///     }
    /// }
    /// ```
    pub fn load(path: &Path) -> LoadResult<Vec<(String, Hook)>> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse hook definitions {}: {}", path.display(), e)
        })
    }

    pub(crate) fn parse(content: &str) -> LoadResult<Vec<(String, Hook)>> {
        let OrderedHooks(hooks) = serde_json::from_str(content)?;
        Ok(hooks)
    }
}

/// JSON object deserialized without losing key order.
struct OrderedHooks(Vec<(String, Hook)>);

impl<'de> Deserialize<'de> for OrderedHooks {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedHooksVisitor;

        impl<'de> Visitor<'de> for OrderedHooksVisitor {
            type Value = OrderedHooks;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping hook names to hook definitions")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut hooks = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, hook)) = map.next_entry::<String, Hook>()? {
                    hooks.push((name, hook));
                }
                Ok(OrderedHooks(hooks))
            }
        }

        deserializer.deserialize_map(OrderedHooksVisitor)
    }
}
