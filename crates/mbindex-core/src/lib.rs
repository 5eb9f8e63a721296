//! mbindex-core: Compiled lookup structures for legacy multi-byte encodings.
//!
//! This crate provides the runtime tables a transcoder queries: dense
//! forward (pointer → scalar) indexes, precomputed reverse (scalar →
//! pointer) maps with per-encoding duplicate resolution, the Big5
//! plane-packed table, and the GB18030 offset-range table. Everything is
//! built once from immutable raw index data and never mutated; all query
//! functions are total and report misses through in-band sentinels.

pub mod big5;
pub mod encoding;
pub mod error;
pub mod forward;
pub mod gb18030;
pub mod reverse;

pub use big5::Big5Table;
pub use encoding::LegacyEncoding;
pub use error::TableError;
pub use forward::ForwardTable;
pub use gb18030::RangeTable;
pub use reverse::ReverseMap;

/// Reverse-lookup miss sentinel: no pointer encodes the queried scalar.
///
/// Forward-lookup misses are reported as scalar 0 instead; no legacy
/// pointer legitimately decodes to NUL.
pub const NO_POINTER: usize = usize::MAX;
