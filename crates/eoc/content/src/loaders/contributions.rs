//! Weighted contribution loader.

use std::path::Path;

use eoc_core::Effect;
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};

/// One weighted contribution as written in a contributions file.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ContributionSpec {
    pub hook: String,
    #[serde(default)]
    pub weight: f64,
    pub effects: Vec<Effect>,
}

/// Loader for contribution lists from JSON files.
pub struct ContributionLoader;

impl ContributionLoader {
    /// Load contributions from a JSON array.
    ///
    /// ```json
    /// [
    ///     { "hook": "TakeDamage", "weight": 10, "effects": [{ "run_eocs": ["mod_bleed"] }] },
    ///     { "hook": "Death", "effects": ["u_prevent_death"] }
    /// ]
    /// ```
    pub fn load(path: &Path) -> LoadResult<Vec<ContributionSpec>> {
        let content = read_file(path)?;
        serde_json::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse contributions {}: {}", path.display(), e)
        })
    }
}
