use std::path::Path;

use mbindex_core::big5::BIG5_HKSCS_END;
use mbindex_core::gb18030::{GB18030_ASTRAL_START, GB18030_BMP_END, GB18030_SINGLETON_POINTER};
use mbindex_core::{ForwardTable, NO_POINTER, ReverseMap};
use mbindex_parse::CompiledSet;
use mbindex_parse::compiler::SHIFT_JIS_GAP;

pub fn run(registry: &Path) -> Result<(), i32> {
    let set = CompiledSet::compile(registry).map_err(|e| {
        eprintln!("Error compiling registry: {e}");
        1
    })?;

    let mut failures: Vec<String> = Vec::new();

    // Identical raw input must yield identical structures.
    let again = CompiledSet::compile(registry).map_err(|e| {
        eprintln!("Error compiling registry: {e}");
        1
    })?;
    if set != again {
        failures.push("recompilation produced different structures".to_string());
    }

    check_right_inverse("jis0208", &set.jis0208.forward, &set.jis0208.full, &mut failures);
    check_right_inverse("jis0212", &set.jis0212.forward, &set.jis0212.reverse, &mut failures);
    check_right_inverse("euc-kr", &set.euc_kr.forward, &set.euc_kr.reverse, &mut failures);
    check_right_inverse("gb18030", &set.gb18030.forward, &set.gb18030.reverse, &mut failures);
    check_shift_jis(&set, &mut failures);
    check_big5(&set, &mut failures);
    check_gb18030_ranges(&set, &mut failures);

    if failures.is_empty() {
        println!("ok: all checks passed");
        Ok(())
    } else {
        for failure in &failures {
            eprintln!("FAIL: {failure}");
        }
        eprintln!("{} check(s) failed", failures.len());
        Err(1)
    }
}

/// Reverse lookup must be a right-inverse of forward lookup over the
/// mapped scalars.
fn check_right_inverse(
    name: &str,
    forward: &ForwardTable,
    reverse: &ReverseMap,
    failures: &mut Vec<String>,
) {
    for (pointer, scalar) in forward.iter_mapped() {
        let p = reverse.encode(scalar);
        if p == NO_POINTER {
            failures.push(format!("{name}: U+{scalar:04X} at {pointer} is not encodable"));
        } else if forward.decode(p) != scalar {
            failures.push(format!(
                "{name}: U+{scalar:04X} re-encodes to pointer {p} which decodes differently"
            ));
        }
    }
}

/// The Shift_JIS view must uphold the same property for every scalar
/// reachable outside the gap, and must never resolve into the gap.
fn check_shift_jis(set: &CompiledSet, failures: &mut Vec<String>) {
    let forward = &set.jis0208.forward;
    for (pointer, scalar) in forward.iter_mapped() {
        let p = set.jis0208.shift_jis.encode(scalar);
        if p == NO_POINTER {
            if !SHIFT_JIS_GAP.contains(&pointer) {
                failures.push(format!(
                    "shift_jis: U+{scalar:04X} at {pointer} is not encodable"
                ));
            }
        } else if SHIFT_JIS_GAP.contains(&p) {
            failures.push(format!("shift_jis: U+{scalar:04X} resolved into the gap ({p})"));
        } else if forward.decode(p) != scalar {
            failures.push(format!(
                "shift_jis: U+{scalar:04X} re-encodes to pointer {p} which decodes differently"
            ));
        }
    }
}

/// Big5 round trip over the standard region, through the plane-packed
/// reverse path.
fn check_big5(set: &CompiledSet, failures: &mut Vec<String>) {
    let big5 = &set.big5;
    for pointer in BIG5_HKSCS_END..big5.end() {
        let scalar = big5.decode(pointer);
        if scalar == 0 {
            continue;
        }
        let p = big5.encode(scalar);
        if p == NO_POINTER {
            failures.push(format!("big5: U+{scalar:04X} at {pointer} is not encodable"));
        } else if big5.decode(p) != scalar {
            failures.push(format!(
                "big5: U+{scalar:04X} re-encodes to pointer {p} which decodes differently"
            ));
        }
    }
}

/// The fixed GB18030 range rules hold regardless of table contents.
fn check_gb18030_ranges(set: &CompiledSet, failures: &mut Vec<String>) {
    let ranges = &set.gb18030.ranges;
    if ranges.decode(GB18030_ASTRAL_START) != 0x10000 {
        failures.push("gb18030: pointer 189000 does not decode to U+10000".to_string());
    }
    if ranges.decode(GB18030_BMP_END + 1) != 0 {
        failures.push("gb18030: the dead zone decodes to a character".to_string());
    }
    if ranges.decode(GB18030_SINGLETON_POINTER) != 0xE7C7 {
        failures.push("gb18030: pointer 7457 does not decode to U+E7C7".to_string());
    }
    if ranges.encode(0xE7C7) != GB18030_SINGLETON_POINTER {
        failures.push("gb18030: U+E7C7 does not encode to pointer 7457".to_string());
    }
}
