//! End-to-end compilation from an on-disk registry directory.

use std::fs;
use std::path::Path;

use mbindex_core::NO_POINTER;
use mbindex_parse::compiler::{CompiledSet, SHIFT_JIS_GAP};
use mbindex_parse::error::CompileError;
use tempfile::TempDir;

/// Write a small but structurally faithful registry: duplicates in the
/// jis0208 corrigenda regions, Big5 entries on both sides of the HKSCS
/// boundary including a Plane 2 scalar, and a ranges file with the
/// discarded supplementary tail.
fn write_registry(dir: &Path) {
    fs::write(
        dir.join("index-big5.txt"),
        "# synthetic big5\n\
         10\t0x3000\n\
         20\t0x5341\n\
         5030\t0x2550\n\
         5040\t0x2550\n\
         5050\t0x3000\n\
         5060\t0x24E00\n\
         5061\t0x4E00\n",
    )
    .unwrap();
    fs::write(
        dir.join("index-jis0208.txt"),
        "100\t0x4E01\n\
         200\t0x2170\n\
         1207\t0x4E01\n\
         8644\t0x2170\n\
         10716\t0x4E8C\n",
    )
    .unwrap();
    fs::write(
        dir.join("index-jis0212.txt"),
        "1144\t0x02D8\n\
         1145\t0x02C7\n",
    )
    .unwrap();
    fs::write(
        dir.join("index-euc-kr.txt"),
        "0\t0xAC02\n\
         1\t0xAC03\n\
         5\t0xAC0A\n",
    )
    .unwrap();
    fs::write(
        dir.join("index-gb18030.txt"),
        "0\t0x4E02\n\
         1\t0x4E04\n",
    )
    .unwrap();
    fs::write(
        dir.join("index-gb18030-ranges.txt"),
        "0\t0x0080\n\
         36\t0x00A5\n\
         39394\t0xFFE6\n\
         189000\t0x10000\n",
    )
    .unwrap();
}

#[test]
fn compiles_the_whole_registry() {
    let dir = TempDir::new().unwrap();
    write_registry(dir.path());
    let set = CompiledSet::compile(dir.path()).unwrap();

    assert_eq!(set.big5.decode(5060), 0x24E00);
    assert_eq!(set.big5.encode(0x2550), 5040);
    assert_eq!(set.big5.encode(0x5341), 20);
    assert_eq!(set.jis0208.full.encode(0x4E01), 100);
    assert_eq!(set.jis0208.full.encode(0x2170), 200);
    assert_eq!(set.jis0212.forward.bias(), 1144);
    assert_eq!(set.euc_kr.forward.decode(5), 0xAC0A);
    assert_eq!(set.gb18030.ranges.len(), 3);
    assert_eq!(set.gb18030.ranges.decode(189_000), 0x10000);
}

#[test]
fn reverse_lookup_is_a_right_inverse_of_forward_lookup() {
    let dir = TempDir::new().unwrap();
    write_registry(dir.path());
    let set = CompiledSet::compile(dir.path()).unwrap();

    let pairs = [
        (&set.jis0208.forward, &set.jis0208.full),
        (&set.jis0212.forward, &set.jis0212.reverse),
        (&set.euc_kr.forward, &set.euc_kr.reverse),
        (&set.gb18030.forward, &set.gb18030.reverse),
    ];
    for (forward, reverse) in pairs {
        for (pointer, scalar) in forward.iter_mapped() {
            let p = reverse.encode(scalar);
            assert_ne!(p, NO_POINTER, "U+{scalar:04X} at {pointer} lost");
            assert_eq!(forward.decode(p), scalar);
        }
    }

    // The Shift_JIS view upholds the same property without ever
    // resolving into the excluded gap.
    for (_, scalar) in set.jis0208.forward.iter_mapped() {
        let p = set.jis0208.shift_jis.encode(scalar);
        assert_ne!(p, NO_POINTER);
        assert!(!SHIFT_JIS_GAP.contains(&p));
        assert_eq!(set.jis0208.forward.decode(p), scalar);
    }
}

#[test]
fn recompilation_yields_identical_structures() {
    let dir = TempDir::new().unwrap();
    write_registry(dir.path());
    let first = CompiledSet::compile(dir.path()).unwrap();
    let second = CompiledSet::compile(dir.path()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn missing_index_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    write_registry(dir.path());
    fs::remove_file(dir.path().join("index-euc-kr.txt")).unwrap();
    let err = CompiledSet::compile(dir.path()).unwrap_err();
    assert!(matches!(err, CompileError::Io { .. }));
}

#[test]
fn malformed_record_aborts_the_run() {
    let dir = TempDir::new().unwrap();
    write_registry(dir.path());
    fs::write(dir.path().join("index-euc-kr.txt"), "0\tAC02\n").unwrap();
    let err = CompiledSet::compile(dir.path()).unwrap_err();
    assert!(matches!(
        err,
        CompileError::Malformed { line: 1, .. }
    ));
}
