//! Dense forward (pointer → scalar) index tables.
//!
//! A [`ForwardTable`] holds one BMP scalar per pointer, with 0 standing
//! for "no mapping". The JIS X 0212 index begins with a long unmapped
//! run, so it is stored trimmed: the leading run is dropped and its
//! length kept as a bias that queries subtract before indexing.

use crate::error::TableError;

/// Fixed-length pointer → scalar table with an optional leading bias.
///
/// `decode` is total: any pointer outside `[bias, bias + len)` yields the
/// unmapped sentinel 0 without wrapping.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForwardTable {
    /// Pointer of the first stored slot.
    bias: usize,
    /// Scalars for pointers `bias..bias + scalars.len()`; 0 = unmapped.
    scalars: Vec<u16>,
}

impl ForwardTable {
    /// Compile a full-length table from raw optional scalars.
    ///
    /// Absent slots become the 0 sentinel. Scalars must fit `u16`; the
    /// indexes compiled this way are BMP-only.
    pub fn compile(raw: &[Option<u32>]) -> Result<Self, TableError> {
        Self::compile_with_bias(raw, 0)
    }

    /// Compile a table with its unmapped leading run trimmed away.
    ///
    /// The bias is the pointer of the first mapped slot (0 when the raw
    /// index is empty or entirely unmapped).
    pub fn compile_trimmed(raw: &[Option<u32>]) -> Result<Self, TableError> {
        let bias = raw.iter().position(Option::is_some).unwrap_or(0);
        Self::compile_with_bias(raw, bias)
    }

    fn compile_with_bias(raw: &[Option<u32>], bias: usize) -> Result<Self, TableError> {
        let mut scalars = Vec::with_capacity(raw.len() - bias);
        for (i, slot) in raw.iter().enumerate().skip(bias) {
            let scalar = slot.unwrap_or(0);
            if scalar > 0xFFFF {
                return Err(TableError::ScalarOutOfRange { pointer: i, scalar });
            }
            scalars.push(scalar as u16);
        }
        Ok(ForwardTable { bias, scalars })
    }

    /// Look up the scalar for a pointer. Returns 0 for unmapped pointers
    /// and for any pointer outside the stored window.
    #[inline]
    pub fn decode(&self, pointer: usize) -> u16 {
        let i = pointer.wrapping_sub(self.bias);
        self.scalars.get(i).copied().unwrap_or(0)
    }

    /// Pointer of the first stored slot.
    pub fn bias(&self) -> usize {
        self.bias
    }

    /// Number of stored slots.
    pub fn len(&self) -> usize {
        self.scalars.len()
    }

    /// Returns true if no slots are stored.
    pub fn is_empty(&self) -> bool {
        self.scalars.is_empty()
    }

    /// One past the last addressable pointer.
    pub fn end(&self) -> usize {
        self.bias + self.scalars.len()
    }

    /// Iterate `(pointer, scalar)` over mapped slots in pointer order.
    pub fn iter_mapped(&self) -> impl Iterator<Item = (usize, u16)> + '_ {
        self.scalars
            .iter()
            .enumerate()
            .filter(|&(_, &s)| s != 0)
            .map(|(i, &s)| (self.bias + i, s))
    }

    /// Number of mapped (non-sentinel) slots.
    pub fn mapped_count(&self) -> usize {
        self.scalars.iter().filter(|&&s| s != 0).count()
    }
}
