//! Catalog options loader.

use std::path::Path;

use eoc_core::HookOptionsOverride;

use crate::loaders::{LoadResult, read_file};

/// Loader for catalog tuning options from TOML files.
pub struct OptionsLoader;

impl OptionsLoader {
    /// Load option overrides from a TOML file.
    ///
    /// Missing keys keep their defaults and unknown keys are ignored:
    ///
    /// ```toml
    /// battle_duration = 30
    /// enable_move_status = false
    /// ```
    pub fn load(path: &Path) -> LoadResult<HookOptionsOverride> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse options TOML {}: {}", path.display(), e))
    }

    pub(crate) fn parse(content: &str) -> LoadResult<HookOptionsOverride> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_partial_options() {
        let overrides = OptionsLoader::parse("battleDur = 30\nenable_move_status = false\n")
            .expect("options should parse");

        assert_eq!(overrides.battle_duration, Some(30));
        assert_eq!(overrides.enable_move_status, Some(false));
        assert_eq!(overrides.status_duration, None);
    }

    #[test]
    fn empty_file_means_defaults() {
        let overrides = OptionsLoader::parse("").expect("empty options should parse");
        assert!(overrides.is_empty());
    }

    #[test]
    fn wrong_type_is_an_error() {
        assert!(OptionsLoader::parse("battle_duration = \"long\"").is_err());
    }
}
