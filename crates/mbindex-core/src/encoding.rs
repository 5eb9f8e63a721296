//! The fixed list of compiled legacy encodings.
//!
//! One compilation run covers exactly these five indexes; the list is
//! hard-coded because the set of legacy East-Asian encodings is closed.

/// A legacy multi-byte encoding whose index gets compiled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LegacyEncoding {
    /// Big5 + HKSCS (traditional Chinese).
    Big5,
    /// JIS X 0208, shared by EUC-JP, ISO-2022-JP, and Shift_JIS.
    Jis0208,
    /// JIS X 0212 supplement (EUC-JP decode only; stored trimmed).
    Jis0212,
    /// KS X 1001 / UHC (Korean).
    EucKr,
    /// GB18030 dense index plus its offset-range extension.
    Gb18030,
}

impl LegacyEncoding {
    /// Every compiled encoding, in compilation order.
    pub const ALL: [LegacyEncoding; 5] = [
        LegacyEncoding::Big5,
        LegacyEncoding::Jis0208,
        LegacyEncoding::Jis0212,
        LegacyEncoding::EucKr,
        LegacyEncoding::Gb18030,
    ];

    /// Canonical lower-case name.
    pub fn name(self) -> &'static str {
        match self {
            LegacyEncoding::Big5 => "big5",
            LegacyEncoding::Jis0208 => "jis0208",
            LegacyEncoding::Jis0212 => "jis0212",
            LegacyEncoding::EucKr => "euc-kr",
            LegacyEncoding::Gb18030 => "gb18030",
        }
    }

    /// Registry file carrying this encoding's pointer → scalar records.
    pub fn index_file_name(self) -> &'static str {
        match self {
            LegacyEncoding::Big5 => "index-big5.txt",
            LegacyEncoding::Jis0208 => "index-jis0208.txt",
            LegacyEncoding::Jis0212 => "index-jis0212.txt",
            LegacyEncoding::EucKr => "index-euc-kr.txt",
            LegacyEncoding::Gb18030 => "index-gb18030.txt",
        }
    }

    /// Size of the encoding's byte-pair address space; no pointer can be
    /// at or beyond this.
    ///
    /// Derived from the lead/trail byte ranges: Big5 uses leads
    /// 0x81..=0xFE with 157 trails, Shift_JIS 60 leads with 188 trails,
    /// JIS X 0212 the 94×94 ku-ten grid, EUC-KR and GB18030 leads
    /// 0x81..=0xFE with 190 trails.
    pub fn pointer_capacity(self) -> usize {
        match self {
            LegacyEncoding::Big5 => 126 * 157,
            LegacyEncoding::Jis0208 => 60 * 188,
            LegacyEncoding::Jis0212 => 94 * 94,
            LegacyEncoding::EucKr => 126 * 190,
            LegacyEncoding::Gb18030 => 126 * 190,
        }
    }

    /// Parse a canonical name, as accepted on the command line.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|e| e.name() == name)
    }
}

impl std::fmt::Display for LegacyEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for encoding in LegacyEncoding::ALL {
            assert_eq!(LegacyEncoding::from_name(encoding.name()), Some(encoding));
        }
        assert_eq!(LegacyEncoding::from_name("utf-8"), None);
    }

    #[test]
    fn capacities_match_the_byte_pair_arithmetic() {
        assert_eq!(LegacyEncoding::Big5.pointer_capacity(), 19782);
        assert_eq!(LegacyEncoding::Jis0208.pointer_capacity(), 11280);
        assert_eq!(LegacyEncoding::Jis0212.pointer_capacity(), 8836);
        assert_eq!(LegacyEncoding::EucKr.pointer_capacity(), 23940);
        assert_eq!(LegacyEncoding::Gb18030.pointer_capacity(), 23940);
    }

    #[test]
    fn index_files_follow_the_registry_naming() {
        assert_eq!(LegacyEncoding::EucKr.index_file_name(), "index-euc-kr.txt");
    }
}
