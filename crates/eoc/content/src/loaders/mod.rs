//! Content loaders for reading registry data from files.

pub mod contributions;
pub mod factory;
pub mod hooks;
pub mod options;

pub use contributions::{ContributionLoader, ContributionSpec};
pub use factory::ContentFactory;
pub use hooks::HookLoader;
pub use options::OptionsLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
