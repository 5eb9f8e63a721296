//! Reverse (scalar → pointer) resolution.
//!
//! Forward indexes are sparse and many-to-one, so the reverse direction
//! is not materialized densely. Instead the selection policy (take the
//! first-occurring pointer for a scalar, optionally restricted to pointer
//! windows) is applied once at compile time and the winners kept in a
//! hash map. Ascending first-wins insertion yields exactly the pointers a
//! forward linear scan over the index would pick.

use std::collections::HashMap;
use std::ops::Range;

use crate::NO_POINTER;
use crate::forward::ForwardTable;

/// Precomputed scalar → pointer map with first-occurrence duplicate
/// resolution.
///
/// `encode` is total: a scalar no pointer maps to yields [`NO_POINTER`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReverseMap {
    pointers: HashMap<u16, usize>,
}

impl ReverseMap {
    /// Build the map over the whole table: for each scalar, the lowest
    /// pointer mapping to it wins.
    pub fn first_occurrence(table: &ForwardTable) -> Self {
        let mut pointers = HashMap::new();
        for (pointer, scalar) in table.iter_mapped() {
            pointers.entry(scalar).or_insert(pointer);
        }
        ReverseMap { pointers }
    }

    /// Build the map restricted to the given pointer windows, in window
    /// order. Pointers outside every window are never returned, even when
    /// they are the only ones mapping a scalar.
    pub fn first_occurrence_in(table: &ForwardTable, windows: &[Range<usize>]) -> Self {
        let mut pointers = HashMap::new();
        for window in windows {
            for pointer in window.clone() {
                if pointer >= table.end() {
                    break;
                }
                let scalar = table.decode(pointer);
                if scalar != 0 {
                    pointers.entry(scalar).or_insert(pointer);
                }
            }
        }
        ReverseMap { pointers }
    }

    /// Canonical pointer for a scalar, or [`NO_POINTER`].
    #[inline]
    pub fn encode(&self, scalar: u16) -> usize {
        self.pointers.get(&scalar).copied().unwrap_or(NO_POINTER)
    }

    /// Number of distinct encodable scalars.
    pub fn len(&self) -> usize {
        self.pointers.len()
    }

    /// Returns true if no scalar is encodable.
    pub fn is_empty(&self) -> bool {
        self.pointers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(raw: &[Option<u32>]) -> ForwardTable {
        ForwardTable::compile(raw).unwrap()
    }

    #[test]
    fn duplicate_scalar_resolves_to_first_pointer() {
        let t = table(&[Some(0x0041), Some(0x0042), Some(0x0041)]);
        let rev = ReverseMap::first_occurrence(&t);
        assert_eq!(rev.encode(0x0041), 0);
        assert_eq!(rev.encode(0x0042), 1);
    }

    #[test]
    fn miss_yields_no_pointer_sentinel() {
        let t = table(&[Some(0x0041)]);
        let rev = ReverseMap::first_occurrence(&t);
        assert_eq!(rev.encode(0x0043), NO_POINTER);
        assert_eq!(rev.encode(0), NO_POINTER);
    }

    #[test]
    fn unmapped_slots_are_not_encodable() {
        let t = table(&[None, Some(0x0041), None]);
        let rev = ReverseMap::first_occurrence(&t);
        assert_eq!(rev.len(), 1);
        assert_eq!(rev.encode(0x0041), 1);
    }

    #[test]
    fn windowed_map_skips_the_gap() {
        // C lives only in the gap [2, 4); B recurs inside the second window.
        let t = table(&[
            Some(0x0041), // 0: A
            Some(0x0042), // 1: B
            Some(0x0043), // 2: C (gap)
            Some(0x0043), // 3: C (gap)
            Some(0x0042), // 4: B
            Some(0x0045), // 5: E
        ]);
        let rev = ReverseMap::first_occurrence_in(&t, &[0..2, 4..6]);
        assert_eq!(rev.encode(0x0041), 0);
        assert_eq!(rev.encode(0x0042), 1);
        assert_eq!(rev.encode(0x0043), NO_POINTER);
        assert_eq!(rev.encode(0x0045), 5);
    }

    #[test]
    fn window_past_table_end_is_harmless() {
        let t = table(&[Some(0x0041), Some(0x0042)]);
        let rev = ReverseMap::first_occurrence_in(&t, &[0..1, 100..200]);
        assert_eq!(rev.encode(0x0041), 0);
        assert_eq!(rev.encode(0x0042), NO_POINTER);
    }

    #[test]
    fn trimmed_table_encodes_absolute_pointers() {
        let raw = vec![None, None, Some(0x3041), Some(0x3042)];
        let t = ForwardTable::compile_trimmed(&raw).unwrap();
        let rev = ReverseMap::first_occurrence(&t);
        assert_eq!(rev.encode(0x3041), 2);
        assert_eq!(rev.encode(0x3042), 3);
    }

    #[test]
    fn encode_is_right_inverse_of_decode() {
        let t = table(&[Some(0x00A9), Some(0x00AE), Some(0x00A9), None, Some(0x2122)]);
        let rev = ReverseMap::first_occurrence(&t);
        for (pointer, scalar) in t.iter_mapped() {
            let p = rev.encode(scalar);
            assert_ne!(p, NO_POINTER, "scalar U+{scalar:04X} at {pointer} lost");
            assert_eq!(t.decode(p), scalar);
        }
    }
}
