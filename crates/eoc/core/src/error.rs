//! Error types for hook registration and lookup.

/// Errors surfaced by the [`EventRegistry`](crate::registry::EventRegistry).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// A registration or lookup named a hook absent from the hook map.
    #[error("hook '{0}' does not exist")]
    UnknownHook(String),
}

impl RegistryError {
    /// Returns the hook name that caused the error.
    pub fn hook_name(&self) -> &str {
        match self {
            Self::UnknownHook(name) => name,
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;
