//! The per-encoding compilation driver.
//!
//! One batch compiles the whole fixed encoding list. Compilation is pure
//! and deterministic; each encoding reads only its own registry file(s)
//! and none of the outputs depend on another encoding's result.
//!
//! The JIS X 0208 duplicate regions and the Shift_JIS re-encode windows
//! are standards corrigenda, kept here as explicit named data rather than
//! properties inferred from the index.

use std::ops::Range;
use std::path::Path;

use mbindex_core::{Big5Table, ForwardTable, LegacyEncoding, RangeTable, ReverseMap, TableError};

use crate::error::CompileError;
use crate::registry::{RawIndex, RawRanges};

/// JIS X 0208 pointer whose scalar also appears at a lower pointer and
/// must re-encode there (corrigendum).
pub const JIS0208_DUPLICATE_POINTER: usize = 8644;

/// JIS X 0208 pointer range duplicating scalars from lower pointers
/// (corrigendum); every mapped pointer here must re-encode lower.
pub const JIS0208_DUPLICATE_RANGE: Range<usize> = 1207..1220;

/// The shared-table gap Shift_JIS never re-encodes into: its legal
/// pointers are `[0, 7808)` and `[10716, len)`.
pub const SHIFT_JIS_GAP: Range<usize> = 7808..10716;

/// Compiled JIS X 0208 tables: one forward index, two reverse views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Jis0208Tables {
    /// Shared forward index.
    pub forward: ForwardTable,
    /// Reverse view used by EUC-JP and ISO-2022-JP.
    pub full: ReverseMap,
    /// Reverse view restricted to the Shift_JIS windows.
    pub shift_jis: ReverseMap,
}

/// Compiled JIS X 0212 tables (trimmed forward index).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Jis0212Tables {
    /// Forward index with its unmapped prefix trimmed into a bias.
    pub forward: ForwardTable,
    /// Default first-occurrence reverse view.
    pub reverse: ReverseMap,
}

/// Compiled EUC-KR tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EucKrTables {
    /// Forward index.
    pub forward: ForwardTable,
    /// Default first-occurrence reverse view.
    pub reverse: ReverseMap,
}

/// Compiled GB18030 tables: dense index plus the range extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gb18030Tables {
    /// Dense two-byte forward index.
    pub forward: ForwardTable,
    /// Default first-occurrence reverse view over the dense index.
    pub reverse: ReverseMap,
    /// Offset-range table for the four-byte extension.
    pub ranges: RangeTable,
}

/// Every compiled encoding from one batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledSet {
    /// Big5 packed table (forward, reverse, and plane queries in one).
    pub big5: Big5Table,
    /// JIS X 0208 tables.
    pub jis0208: Jis0208Tables,
    /// JIS X 0212 tables.
    pub jis0212: Jis0212Tables,
    /// EUC-KR tables.
    pub euc_kr: EucKrTables,
    /// GB18030 tables.
    pub gb18030: Gb18030Tables,
}

impl CompiledSet {
    /// Compile every encoding from a registry directory.
    pub fn compile(dir: &Path) -> Result<Self, CompileError> {
        let big5 = compile_big5(&RawIndex::load(dir, LegacyEncoding::Big5)?)?;
        tracing::info!(
            mapped = big5.mapped_count(),
            astral = big5.astral_count(),
            "compiled big5"
        );

        let jis0208 = compile_jis0208(&RawIndex::load(dir, LegacyEncoding::Jis0208)?)?;
        tracing::info!(
            mapped = jis0208.forward.mapped_count(),
            shift_jis = jis0208.shift_jis.len(),
            "compiled jis0208"
        );

        let jis0212 = compile_jis0212(&RawIndex::load(dir, LegacyEncoding::Jis0212)?)?;
        tracing::info!(
            mapped = jis0212.forward.mapped_count(),
            bias = jis0212.forward.bias(),
            "compiled jis0212"
        );

        let euc_kr = compile_euc_kr(&RawIndex::load(dir, LegacyEncoding::EucKr)?)?;
        tracing::info!(mapped = euc_kr.forward.mapped_count(), "compiled euc-kr");

        let gb18030 = compile_gb18030(
            &RawIndex::load(dir, LegacyEncoding::Gb18030)?,
            &RawRanges::load(dir)?,
        )?;
        tracing::info!(
            mapped = gb18030.forward.mapped_count(),
            ranges = gb18030.ranges.len(),
            "compiled gb18030"
        );

        Ok(CompiledSet {
            big5,
            jis0208,
            jis0212,
            euc_kr,
            gb18030,
        })
    }
}

/// Compile the Big5 packed table.
pub fn compile_big5(raw: &RawIndex) -> Result<Big5Table, CompileError> {
    Big5Table::compile(raw.entries()).map_err(tag("big5"))
}

/// Compile the shared JIS X 0208 forward index and both reverse views.
pub fn compile_jis0208(raw: &RawIndex) -> Result<Jis0208Tables, CompileError> {
    let forward = ForwardTable::compile(raw.entries()).map_err(tag("jis0208"))?;
    let full = ReverseMap::first_occurrence(&forward);
    check_duplicate_regions(&forward, &full)?;
    let shift_jis = ReverseMap::first_occurrence_in(
        &forward,
        &[0..SHIFT_JIS_GAP.start, SHIFT_JIS_GAP.end..forward.end()],
    );
    Ok(Jis0208Tables {
        forward,
        full,
        shift_jis,
    })
}

/// Compile the trimmed JIS X 0212 tables.
pub fn compile_jis0212(raw: &RawIndex) -> Result<Jis0212Tables, CompileError> {
    let forward = ForwardTable::compile_trimmed(raw.entries()).map_err(tag("jis0212"))?;
    let reverse = ReverseMap::first_occurrence(&forward);
    Ok(Jis0212Tables { forward, reverse })
}

/// Compile the EUC-KR tables.
pub fn compile_euc_kr(raw: &RawIndex) -> Result<EucKrTables, CompileError> {
    let forward = ForwardTable::compile(raw.entries()).map_err(tag("euc-kr"))?;
    let reverse = ReverseMap::first_occurrence(&forward);
    Ok(EucKrTables { forward, reverse })
}

/// Compile the GB18030 dense tables and the range extension.
pub fn compile_gb18030(raw: &RawIndex, ranges: &RawRanges) -> Result<Gb18030Tables, CompileError> {
    let forward = ForwardTable::compile(raw.entries()).map_err(tag("gb18030"))?;
    let reverse = ReverseMap::first_occurrence(&forward);
    let ranges = RangeTable::compile(ranges.pairs()).map_err(tag("gb18030"))?;
    Ok(Gb18030Tables {
        forward,
        reverse,
        ranges,
    })
}

/// Verify the corrigenda assumption behind the duplicate regions: every
/// mapped pointer there must carry a scalar that also occurs earlier.
fn check_duplicate_regions(
    forward: &ForwardTable,
    reverse: &ReverseMap,
) -> Result<(), CompileError> {
    for pointer in JIS0208_DUPLICATE_RANGE.chain([JIS0208_DUPLICATE_POINTER]) {
        let scalar = forward.decode(pointer);
        if scalar == 0 {
            continue;
        }
        if reverse.encode(scalar) >= pointer {
            return Err(CompileError::ImpossibleDuplicate {
                encoding: "jis0208",
                pointer,
                scalar,
            });
        }
    }
    Ok(())
}

fn tag(encoding: &'static str) -> impl Fn(TableError) -> CompileError {
    move |source| CompileError::Table { encoding, source }
}
