//! GB18030 offset-range table for the sparse four-byte extension.
//!
//! Beyond its dense two-byte index, GB18030 covers the rest of Unicode
//! through arithmetic ranges: the registry lists one representative
//! `(pointer, scalar)` pair per range and every pointer in between maps
//! linearly. Two rules live outside the table: pointers at or above
//! 189000 map straight into the supplementary planes, and pointer 7457
//! is a singleton exception for U+E7C7.

use crate::NO_POINTER;
use crate::error::TableError;

/// Total size of the four-byte pointer space; pointers at or beyond this
/// are unmapped.
pub const GB18030_POINTER_SPACE: usize = 1_237_576;

/// First pointer of the supplementary-plane arithmetic rule.
pub const GB18030_ASTRAL_START: usize = 189_000;

/// Last mapped pointer before the dead zone `(39419, 189000)`.
pub const GB18030_BMP_END: usize = 39_419;

/// Singleton exception: this pointer maps to U+E7C7 regardless of the
/// table contents, and U+E7C7 maps back to it.
pub const GB18030_SINGLETON_POINTER: usize = 7457;
const GB18030_SINGLETON_SCALAR: u32 = 0xE7C7;

/// One compiled range: every pointer from `pointer` up to the next
/// range's threshold maps to `offset + (p - pointer)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct RangeEntry {
    pointer: u16,
    offset: u16,
}

/// Sorted offset-range table with total decode/encode queries.
///
/// The final entry is its own implicit upper bound: it covers every
/// pointer up to [`GB18030_BMP_END`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeTable {
    ranges: Vec<RangeEntry>,
}

impl RangeTable {
    /// Compile the table from raw representative pairs.
    ///
    /// Pairs must be strictly increasing in both pointer and offset.
    /// The tail starting at the first offset that does not fit `u16`
    /// (the supplementary-plane threshold) is discarded in favor of the
    /// fixed arithmetic rule; a pointer overflowing `u16` before that
    /// point is a structural error.
    pub fn compile(pairs: &[(u32, u32)]) -> Result<Self, TableError> {
        let mut ranges: Vec<RangeEntry> = Vec::with_capacity(pairs.len());
        for (index, &(pointer, offset)) in pairs.iter().enumerate() {
            if offset > 0xFFFF {
                break;
            }
            if pointer > 0xFFFF {
                return Err(TableError::RangeOverflow { index, pointer });
            }
            if let Some(last) = ranges.last() {
                if pointer as u16 <= last.pointer || offset as u16 <= last.offset {
                    return Err(TableError::NonMonotonicRange { index });
                }
            }
            ranges.push(RangeEntry {
                pointer: pointer as u16,
                offset: offset as u16,
            });
        }
        Ok(RangeTable { ranges })
    }

    /// Scalar for a pointer, or 0 for the dead zone and pointers outside
    /// the four-byte space. The fixed rules are checked before the table.
    pub fn decode(&self, pointer: usize) -> u32 {
        if pointer >= GB18030_POINTER_SPACE
            || (pointer > GB18030_BMP_END && pointer < GB18030_ASTRAL_START)
        {
            return 0;
        }
        if pointer >= GB18030_ASTRAL_START {
            return (pointer - GB18030_ASTRAL_START + 0x10000) as u32;
        }
        if pointer == GB18030_SINGLETON_POINTER {
            return GB18030_SINGLETON_SCALAR;
        }
        // Interval below the first threshold exceeding the pointer.
        let idx = self
            .ranges
            .partition_point(|range| usize::from(range.pointer) <= pointer);
        if idx == 0 {
            return 0;
        }
        let range = self.ranges[idx - 1];
        (pointer - usize::from(range.pointer) + usize::from(range.offset)) as u32
    }

    /// Pointer for a scalar, or [`NO_POINTER`]. The singleton exception
    /// is checked first; supplementary-plane scalars use the arithmetic
    /// rule; BMP scalars mirror the decode search over offsets.
    pub fn encode(&self, scalar: u32) -> usize {
        if scalar == GB18030_SINGLETON_SCALAR {
            return GB18030_SINGLETON_POINTER;
        }
        if scalar > 0xFFFF {
            return scalar as usize - 0x10000 + GB18030_ASTRAL_START;
        }
        let bmp = scalar as u16;
        let idx = self.ranges.partition_point(|range| range.offset <= bmp);
        if idx == 0 {
            return NO_POINTER;
        }
        let range = self.ranges[idx - 1];
        usize::from(bmp) - usize::from(range.offset) + usize::from(range.pointer)
    }

    /// Number of compiled ranges.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Returns true if no ranges were compiled.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}
