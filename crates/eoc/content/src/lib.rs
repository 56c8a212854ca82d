//! Data-driven hook content and loaders.
//!
//! This crate reads authored content from a data directory and feeds it into an
//! [`eoc_core::EventRegistry`]:
//! - Catalog tuning options (TOML)
//! - Custom hook definitions (JSON)
//! - Weighted contributions (JSON)
//!
//! Effect bodies are JSON in the game's own format, so hook and contribution
//! files use JSON as well.

pub mod loaders;

pub use loaders::{
    ContentFactory, ContributionLoader, ContributionSpec, HookLoader, LoadResult, OptionsLoader,
};
