//! WHATWG-style registry index-file parsing.
//!
//! Each registry file is line-oriented: `#` comment lines, blank lines,
//! and data lines of a decimal pointer followed by a `0x`-prefixed hex
//! scalar (a trailing `# character name` comment is ignored). Pointers
//! must be strictly increasing; gaps are unmapped slots. The ranges file
//! for GB18030 uses the same record format but its scalar column is a
//! range start offset rather than a per-pointer mapping.

use std::path::Path;

use mbindex_core::LegacyEncoding;

use crate::error::CompileError;

/// Registry file carrying the GB18030 offset-range pairs.
pub const GB18030_RANGES_FILE: &str = "index-gb18030-ranges.txt";

/// A parsed dense raw index: one optional scalar per pointer.
///
/// The vector length is one past the highest listed pointer; the
/// unpopulated suffix of the address space is implicitly unmapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawIndex {
    encoding: LegacyEncoding,
    entries: Vec<Option<u32>>,
}

impl RawIndex {
    /// Read and parse an encoding's index file from the registry directory.
    pub fn load(dir: &Path, encoding: LegacyEncoding) -> Result<Self, CompileError> {
        let path = dir.join(encoding.index_file_name());
        let text = std::fs::read_to_string(&path)
            .map_err(|source| CompileError::Io { path, source })?;
        let raw = Self::parse(encoding, &text)?;
        tracing::debug!(
            encoding = encoding.name(),
            entries = raw.entries.len(),
            "loaded raw index"
        );
        Ok(raw)
    }

    /// Parse index-file text for the given encoding.
    pub fn parse(encoding: LegacyEncoding, text: &str) -> Result<Self, CompileError> {
        let file = encoding.index_file_name();
        let capacity = encoding.pointer_capacity();
        let mut entries: Vec<Option<u32>> = Vec::new();
        let mut last_pointer: Option<usize> = None;

        for (line_no, line) in text.lines().enumerate() {
            let line_no = line_no + 1;
            let Some((pointer, scalar)) = parse_record(file, line_no, line)? else {
                continue;
            };
            if pointer >= capacity {
                return Err(malformed(
                    file,
                    line_no,
                    format!("pointer {pointer} is outside the {capacity}-slot address space"),
                ));
            }
            if last_pointer.is_some_and(|last| pointer <= last) {
                return Err(malformed(
                    file,
                    line_no,
                    format!("pointer {pointer} is not strictly increasing"),
                ));
            }
            if scalar == 0 {
                return Err(malformed(
                    file,
                    line_no,
                    "scalar U+0000 collides with the unmapped sentinel".to_string(),
                ));
            }
            last_pointer = Some(pointer);
            entries.resize(pointer + 1, None);
            entries[pointer] = Some(scalar);
        }

        Ok(RawIndex { encoding, entries })
    }

    /// The encoding this index belongs to.
    pub fn encoding(&self) -> LegacyEncoding {
        self.encoding
    }

    /// Optional scalars, dense by pointer.
    pub fn entries(&self) -> &[Option<u32>] {
        &self.entries
    }
}

/// Parsed GB18030 range representatives: `(pointer, offset)` pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRanges {
    pairs: Vec<(u32, u32)>,
}

impl RawRanges {
    /// Read and parse the ranges file from the registry directory.
    pub fn load(dir: &Path) -> Result<Self, CompileError> {
        let path = dir.join(GB18030_RANGES_FILE);
        let text = std::fs::read_to_string(&path)
            .map_err(|source| CompileError::Io { path, source })?;
        let raw = Self::parse(&text)?;
        tracing::debug!(pairs = raw.pairs.len(), "loaded raw range pairs");
        Ok(raw)
    }

    /// Parse ranges-file text.
    pub fn parse(text: &str) -> Result<Self, CompileError> {
        let file = GB18030_RANGES_FILE;
        let mut pairs: Vec<(u32, u32)> = Vec::new();

        for (line_no, line) in text.lines().enumerate() {
            let line_no = line_no + 1;
            let Some((pointer, offset)) = parse_record(file, line_no, line)? else {
                continue;
            };
            if pointer >= mbindex_core::gb18030::GB18030_POINTER_SPACE {
                return Err(malformed(
                    file,
                    line_no,
                    format!("pointer {pointer} is outside the four-byte pointer space"),
                ));
            }
            if pairs.last().is_some_and(|&(last, _)| pointer as u32 <= last) {
                return Err(malformed(
                    file,
                    line_no,
                    format!("pointer {pointer} is not strictly increasing"),
                ));
            }
            pairs.push((pointer as u32, offset));
        }

        Ok(RawRanges { pairs })
    }

    /// The representative pairs, in listed order.
    pub fn pairs(&self) -> &[(u32, u32)] {
        &self.pairs
    }
}

/// Parse one registry line into `(pointer, scalar)`, or `None` for blank
/// and comment lines.
fn parse_record(
    file: &str,
    line_no: usize,
    line: &str,
) -> Result<Option<(usize, u32)>, CompileError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    let mut tokens = trimmed.split_whitespace();
    let (Some(pointer_token), Some(scalar_token)) = (tokens.next(), tokens.next()) else {
        return Err(malformed(
            file,
            line_no,
            "expected a pointer and a scalar".to_string(),
        ));
    };
    let pointer = pointer_token.parse::<usize>().map_err(|_| {
        malformed(
            file,
            line_no,
            format!("invalid pointer {pointer_token:?}"),
        )
    })?;
    let scalar = scalar_token
        .strip_prefix("0x")
        .and_then(|hex| u32::from_str_radix(hex, 16).ok())
        .ok_or_else(|| {
            malformed(
                file,
                line_no,
                format!("expected a 0x-prefixed scalar, got {scalar_token:?}"),
            )
        })?;
    Ok(Some((pointer, scalar)))
}

fn malformed(file: &str, line: usize, message: String) -> CompileError {
    CompileError::Malformed {
        file: file.to_string(),
        line,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_records_comments_and_gaps() {
        let text = "# index-euc-kr.txt\n\
                    \n\
                    0\t0xAC02\t# HANGUL SYLLABLE\n\
                    2\t0xAC04\n\
                    5\t0xAC08\n";
        let raw = RawIndex::parse(LegacyEncoding::EucKr, text).unwrap();
        assert_eq!(
            raw.entries(),
            &[
                Some(0xAC02),
                None,
                Some(0xAC04),
                None,
                None,
                Some(0xAC08)
            ]
        );
    }

    #[test]
    fn length_is_one_past_the_highest_pointer() {
        let raw = RawIndex::parse(LegacyEncoding::Big5, "10\t0x4E00\n").unwrap();
        assert_eq!(raw.entries().len(), 11);
    }

    #[test]
    fn rejects_non_increasing_pointers() {
        let err = RawIndex::parse(LegacyEncoding::EucKr, "3\t0xAC02\n3\t0xAC04\n").unwrap_err();
        assert!(matches!(err, CompileError::Malformed { line: 2, .. }));
    }

    #[test]
    fn rejects_pointer_beyond_the_address_space() {
        let err = RawIndex::parse(LegacyEncoding::Jis0212, "8836\t0x4E00\n").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("8836"), "{message}");
        assert!(message.contains("address space"), "{message}");
    }

    #[test]
    fn rejects_unparsable_scalar() {
        let err = RawIndex::parse(LegacyEncoding::Big5, "0\tAC02\n").unwrap_err();
        assert!(matches!(err, CompileError::Malformed { line: 1, .. }));
    }

    #[test]
    fn rejects_missing_scalar_column() {
        let err = RawIndex::parse(LegacyEncoding::Big5, "0\n").unwrap_err();
        assert!(err.to_string().contains("expected a pointer and a scalar"));
    }

    #[test]
    fn rejects_nul_scalar() {
        let err = RawIndex::parse(LegacyEncoding::Big5, "0\t0x0000\n").unwrap_err();
        assert!(err.to_string().contains("U+0000"));
    }

    #[test]
    fn parses_range_pairs() {
        let text = "# gb18030 ranges\n0\t0x0080\n36\t0x00A5\n";
        let raw = RawRanges::parse(text).unwrap();
        assert_eq!(raw.pairs(), &[(0, 0x0080), (36, 0x00A5)]);
    }

    #[test]
    fn range_pointers_must_increase() {
        let err = RawRanges::parse("36\t0x00A5\n36\t0x00A9\n").unwrap_err();
        assert!(matches!(err, CompileError::Malformed { line: 2, .. }));
    }
}
