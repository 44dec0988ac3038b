//! Component and command schema model for viewgen code generators.
//!
//! A schema describes native UI components and the commands they expose to
//! JavaScript. Generators consume it read-only; this crate owns its typed
//! representation and JSON loading.
//!
//! ## Modules
//!
//! - [`types`] — Schema, module, component, command and parameter types
//! - [`builder`] — Programmatic schema construction
//! - [`error`] — Schema loading errors

pub mod builder;
pub mod error;
pub mod types;

// Re-export key types for convenience
pub use builder::{ComponentBuilder, SchemaBuilder};
pub use error::SchemaError;
pub use types::{
    Command, CommandParamType, CommandTypeAnnotation, Component, ComponentModule, Module,
    NativeModule, Param, Platform, ReservedType, Schema,
};
