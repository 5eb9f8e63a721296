//! Big5 plane-packed table and reverse lookup.
//!
//! Big5 (with the HKSCS extensions) is the one covered encoding that maps
//! into the supplementary planes. Every astral Big5 scalar lives in
//! Plane 2, so the table stores only the low 16 bits of each scalar plus
//! one astralness bit per pointer, packed 32 to a word. The low-bits
//! array and the bit vector share a single bias and capacity; keeping
//! them in one structure is what guarantees they can never fall out of
//! step.
//!
//! Reverse lookup carries two pieces of standards corrigenda as explicit
//! data: pointers below the Big5 level-1 start decode HKSCS extensions
//! and are excluded from re-encoding, and six box-drawing/hanzi scalars
//! must resolve to their *last* occurrence over the whole index.

use crate::NO_POINTER;
use crate::error::TableError;

/// First pointer of the standard Big5 region; everything below decodes
/// the superseded HKSCS extension rows and is never re-encoded.
pub const BIG5_HKSCS_END: usize = (0xA1 - 0x81) * 157;

/// Scalars that re-encode to their last occurrence over the whole index
/// rather than through the restricted generic scan (Big5 corrigenda).
pub const BIG5_PREFER_LAST: [u16; 6] = [0x2550, 0x255E, 0x2561, 0x256A, 0x5341, 0x5345];

/// Packed Big5 table: low 16 bits of each mapped scalar plus a bit-packed
/// Plane 2 discriminator, under one shared bias.
///
/// All queries are total; pointers outside `[bias, bias + len)` report
/// (`false`, `0`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Big5Table {
    /// Pointer of the first stored slot.
    bias: usize,
    /// Low 16 bits per pointer; 0 = unmapped.
    low_bits: Vec<u16>,
    /// One bit per pointer, 32 per word; 1 = scalar is in Plane 2.
    astral: Vec<u32>,
    /// Per [`BIG5_PREFER_LAST`] scalar, the whole-index last occurrence.
    prefer_last: Vec<(u16, usize)>,
}

impl Big5Table {
    /// Compile the packed table from raw optional scalars.
    ///
    /// The unmapped leading run is trimmed into the shared bias. Scalars
    /// must lie in the BMP or Plane 2.
    pub fn compile(raw: &[Option<u32>]) -> Result<Self, TableError> {
        let bias = raw.iter().position(Option::is_some).unwrap_or(0);
        let len = raw.len() - bias;
        let mut low_bits = Vec::with_capacity(len);
        let mut astral = vec![0u32; len.div_ceil(32)];
        for (pointer, slot) in raw.iter().enumerate().skip(bias) {
            let scalar = slot.unwrap_or(0);
            if scalar > 0xFFFF {
                if !(0x20000..=0x2FFFF).contains(&scalar) {
                    return Err(TableError::ScalarOutOfRange { pointer, scalar });
                }
                let i = pointer - bias;
                astral[i >> 5] |= 1 << (i & 0x1F);
            }
            low_bits.push((scalar & 0xFFFF) as u16);
        }

        let mut prefer_last = Vec::with_capacity(BIG5_PREFER_LAST.len());
        for &scalar in &BIG5_PREFER_LAST {
            if let Some(pointer) = raw.iter().rposition(|slot| *slot == Some(u32::from(scalar))) {
                prefer_last.push((scalar, pointer));
            }
        }

        Ok(Big5Table {
            bias,
            low_bits,
            astral,
            prefer_last,
        })
    }

    /// Whether the pointer's scalar lies in Plane 2. False for unmapped
    /// and out-of-window pointers.
    #[inline]
    pub fn is_astral(&self, pointer: usize) -> bool {
        let i = pointer.wrapping_sub(self.bias);
        if i < self.low_bits.len() {
            (self.astral[i >> 5] >> (i & 0x1F)) & 1 != 0
        } else {
            false
        }
    }

    /// Low 16 bits of the pointer's scalar. 0 for unmapped and
    /// out-of-window pointers.
    #[inline]
    pub fn low_bits(&self, pointer: usize) -> u16 {
        let i = pointer.wrapping_sub(self.bias);
        self.low_bits.get(i).copied().unwrap_or(0)
    }

    /// Full scalar for a pointer, reconstructed from the low bits and the
    /// plane bit. 0 = unmapped.
    #[inline]
    pub fn decode(&self, pointer: usize) -> u32 {
        let low = self.low_bits(pointer);
        if low == 0 {
            0
        } else if self.is_astral(pointer) {
            u32::from(low) | 0x20000
        } else {
            u32::from(low)
        }
    }

    /// Canonical pointer for the given low bits and plane.
    ///
    /// Checks the prefer-last overrides first (BMP queries only; all six
    /// override scalars are BMP), then scans backwards over the standard
    /// region so duplicates resolve to their last occurrence. Among
    /// candidates sharing low bits, only the one whose plane bit matches
    /// the query is returned.
    pub fn find_pointer(&self, low_bits: u16, is_astral: bool) -> usize {
        if low_bits == 0 {
            return NO_POINTER;
        }
        if !is_astral {
            for &(scalar, pointer) in &self.prefer_last {
                if scalar == low_bits {
                    return pointer;
                }
            }
        }
        let start = BIG5_HKSCS_END.max(self.bias);
        for pointer in (start..self.end()).rev() {
            if self.low_bits(pointer) == low_bits && self.is_astral(pointer) == is_astral {
                return pointer;
            }
        }
        NO_POINTER
    }

    /// Canonical pointer for a scalar, or [`NO_POINTER`] for scalars
    /// outside the BMP and Plane 2.
    pub fn encode(&self, scalar: u32) -> usize {
        let (low, astralness) = if scalar <= 0xFFFF {
            (scalar as u16, false)
        } else if (0x20000..=0x2FFFF).contains(&scalar) {
            ((scalar & 0xFFFF) as u16, true)
        } else {
            return NO_POINTER;
        };
        self.find_pointer(low, astralness)
    }

    /// Pointer of the first stored slot.
    pub fn bias(&self) -> usize {
        self.bias
    }

    /// Number of stored slots.
    pub fn len(&self) -> usize {
        self.low_bits.len()
    }

    /// Returns true if no slots are stored.
    pub fn is_empty(&self) -> bool {
        self.low_bits.is_empty()
    }

    /// One past the last addressable pointer.
    pub fn end(&self) -> usize {
        self.bias + self.low_bits.len()
    }

    /// Number of mapped slots.
    pub fn mapped_count(&self) -> usize {
        self.low_bits.iter().filter(|&&low| low != 0).count()
    }

    /// Number of mapped slots whose scalar lies in Plane 2.
    pub fn astral_count(&self) -> usize {
        self.astral.iter().map(|word| word.count_ones() as usize).sum()
    }
}
