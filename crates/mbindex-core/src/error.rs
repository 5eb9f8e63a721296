//! Structural errors raised while compiling tables from raw index data.
//!
//! These are fatal: a raw index that violates a storage assumption must
//! abort the whole compilation rather than produce a partially-correct
//! table. Missing mappings are *not* errors; they are represented
//! in-band by the sentinels documented on each table type.

use std::fmt;

/// Fatal structural violation in raw index data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A scalar does not fit the table's storage width.
    ///
    /// BMP tables store `u16`; the Big5 table additionally accepts
    /// Plane 2 scalars (`0x20000..=0x2FFFF`) and nothing else.
    ScalarOutOfRange {
        /// Pointer carrying the offending scalar.
        pointer: usize,
        /// The scalar that does not fit.
        scalar: u32,
    },
    /// Range-table pointers or offsets are not strictly increasing.
    NonMonotonicRange {
        /// Index of the offending pair in the raw sequence.
        index: usize,
    },
    /// A non-trailing range pointer does not fit the `u16` threshold storage.
    RangeOverflow {
        /// Index of the offending pair in the raw sequence.
        index: usize,
        /// The pointer that does not fit.
        pointer: u32,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::ScalarOutOfRange { pointer, scalar } => {
                write!(
                    f,
                    "scalar U+{scalar:04X} at pointer {pointer} does not fit the table storage"
                )
            }
            TableError::NonMonotonicRange { index } => {
                write!(f, "range pair {index} is not strictly increasing")
            }
            TableError::RangeOverflow { index, pointer } => {
                write!(
                    f,
                    "range pair {index} has pointer {pointer} outside the u16 threshold storage"
                )
            }
        }
    }
}

impl std::error::Error for TableError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_out_of_range_display() {
        let err = TableError::ScalarOutOfRange {
            pointer: 42,
            scalar: 0x10000,
        };
        assert_eq!(
            err.to_string(),
            "scalar U+10000 at pointer 42 does not fit the table storage"
        );
    }

    #[test]
    fn non_monotonic_display() {
        let err = TableError::NonMonotonicRange { index: 3 };
        assert_eq!(err.to_string(), "range pair 3 is not strictly increasing");
    }

    #[test]
    fn implements_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(TableError::RangeOverflow {
            index: 7,
            pointer: 70000,
        });
        assert!(err.to_string().contains("70000"));
    }
}
