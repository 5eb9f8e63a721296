//! mbindex-parse: registry index-file parsing and the compilation driver.
//!
//! This crate reads the externally maintained WHATWG-style index files
//! and compiles them into the runtime structures provided by
//! mbindex-core. Malformed registry data aborts the whole run; the
//! generated structures must be byte-exact for standards conformance, so
//! there is no partial output.

pub mod compiler;
pub mod error;
pub mod registry;

pub use compiler::CompiledSet;
pub use error::CompileError;
pub use mbindex_core;
