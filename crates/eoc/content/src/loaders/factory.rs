//! Content factory for building a registry from a data directory.

use std::path::{Path, PathBuf};

use eoc_core::{EventRegistry, Hook, HookOptionsOverride};
use tracing::debug;

use crate::loaders::{
    ContributionLoader, ContributionSpec, HookLoader, LoadResult, OptionsLoader,
};

/// Content factory that loads registry content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── options.toml        (optional)
/// ├── hooks.json          (optional)
/// └── contributions.json  (optional)
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const OPTIONS_FILE: &'static str = "options.toml";
    pub const HOOKS_FILE: &'static str = "hooks.json";
    pub const CONTRIBUTIONS_FILE: &'static str = "contributions.json";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load option overrides from `options.toml`.
    pub fn load_options(&self) -> LoadResult<HookOptionsOverride> {
        OptionsLoader::load(&self.data_dir.join(Self::OPTIONS_FILE))
    }

    /// Load custom hooks from `hooks.json`.
    pub fn load_hooks(&self) -> LoadResult<Vec<(String, Hook)>> {
        HookLoader::load(&self.data_dir.join(Self::HOOKS_FILE))
    }

    /// Load contributions from `contributions.json`.
    pub fn load_contributions(&self) -> LoadResult<Vec<ContributionSpec>> {
        ContributionLoader::load(&self.data_dir.join(Self::CONTRIBUTIONS_FILE))
    }

    /// Builds a registry from whatever content files are present.
    ///
    /// Options are applied first, then custom hooks, then contributions, so a
    /// contribution may target a hook defined in `hooks.json`.
    pub fn build_registry(&self, prefix: &str) -> LoadResult<EventRegistry> {
        let overrides = if self.has(Self::OPTIONS_FILE) {
            self.load_options()?
        } else {
            HookOptionsOverride::default()
        };
        let mut registry = EventRegistry::with_options(prefix, &overrides);

        if self.has(Self::HOOKS_FILE) {
            for (name, hook) in self.load_hooks()? {
                registry.register_custom_hook(name, hook);
            }
        }

        if self.has(Self::CONTRIBUTIONS_FILE) {
            let contributions = self.load_contributions()?;
            debug!(
                target: "eoc_content::loaders",
                count = contributions.len(),
                "Registering contributions"
            );
            for spec in contributions {
                registry
                    .register_effects(&spec.hook, spec.weight, spec.effects)
                    .map_err(|e| {
                        anyhow::anyhow!(
                            "Invalid contribution in {}: {}",
                            self.data_dir.join(Self::CONTRIBUTIONS_FILE).display(),
                            e
                        )
                    })?;
            }
        }

        Ok(registry)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn has(&self, file: &str) -> bool {
        self.data_dir.join(file).is_file()
    }
}
