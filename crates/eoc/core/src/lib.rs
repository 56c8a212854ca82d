//! Hook registry and effect-merge engine for effect-on-condition records.
//!
//! `eoc-core` owns the canonical hook catalog, the effect model and the
//! [`registry::EventRegistry`] that accumulates weighted contributions per hook
//! and compiles them into one [`record::EmittedRecord`] per hook. Everything in
//! this crate is pure in-memory data; serializing the records to disk is left
//! to the caller.
pub mod config;
pub mod effect;
pub mod error;
pub mod hook;
pub mod record;
pub mod registry;

pub use config::{HookOptions, HookOptionsOverride};
pub use effect::{
    ConditionalEffect, Effect, Guard, merge_conditionals, merge_effects, merge_invocations,
};
pub use error::{RegistryError, Result};
pub use hook::{BaseSettings, EocType, Hook, HookName, HookScope, Namespace, build_catalog};
pub use record::EmittedRecord;
pub use registry::{Contribution, EventRegistry, HookMap};
