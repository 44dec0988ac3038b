//! Objective-C component view helper generation.
//!
//! For every native component in a schema this crate emits a view protocol
//! listing the component's commands, and a command handler that validates the
//! untyped arguments received from JavaScript and forwards them to the typed
//! protocol method. All components share a single header,
//! `RCTComponentViewHelpers.h`.
//!
//! ## Modules
//!
//! - [`ordinal`] — Ordinal position names for diagnostics
//! - [`typemap`] — Parameter type to Objective-C spellings
//! - [`template`] — Text templates for every generated fragment
//! - [`emit`] — Per-component protocol and command handler emission
//! - [`generate`] — Schema traversal and the header file entry point

pub mod emit;
pub mod generate;
pub mod ordinal;
pub mod template;
pub mod typemap;

// Re-export key types for convenience
pub use generate::{generate, FilesOutput, GenerateOptions, FILE_NAME, TARGET_PLATFORM};
pub use typemap::{type_mapping, Coercion, TypeMapping};
