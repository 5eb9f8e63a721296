use std::path::Path;

use mbindex_core::LegacyEncoding;
use mbindex_parse::CompiledSet;

use crate::cli::OutputFormat;

/// One report row. `astral` and `ranges` only apply to big5 and gb18030.
struct Row {
    name: &'static str,
    bias: usize,
    slots: usize,
    mapped: usize,
    encodable: Option<usize>,
    astral: Option<usize>,
    ranges: Option<usize>,
}

pub fn run(registry: &Path, encoding: Option<&str>, format: OutputFormat) -> Result<(), i32> {
    let filter = match encoding {
        Some(name) => match LegacyEncoding::from_name(name) {
            Some(enc) => Some(enc),
            None => {
                eprintln!("unknown encoding '{name}'");
                return Err(1);
            }
        },
        None => None,
    };

    let set = CompiledSet::compile(registry).map_err(|e| {
        eprintln!("Error compiling registry: {e}");
        1
    })?;

    let rows: Vec<Row> = collect_rows(&set)
        .into_iter()
        .filter(|row| filter.is_none_or(|enc| enc.name() == row.name))
        .collect();

    match format {
        OutputFormat::Text => write_text(&rows),
        OutputFormat::Json => write_json(&rows),
    }
    Ok(())
}

fn collect_rows(set: &CompiledSet) -> Vec<Row> {
    vec![
        Row {
            name: "big5",
            bias: set.big5.bias(),
            slots: set.big5.len(),
            mapped: set.big5.mapped_count(),
            encodable: None,
            astral: Some(set.big5.astral_count()),
            ranges: None,
        },
        Row {
            name: "jis0208",
            bias: set.jis0208.forward.bias(),
            slots: set.jis0208.forward.len(),
            mapped: set.jis0208.forward.mapped_count(),
            encodable: Some(set.jis0208.full.len()),
            astral: None,
            ranges: None,
        },
        Row {
            name: "jis0212",
            bias: set.jis0212.forward.bias(),
            slots: set.jis0212.forward.len(),
            mapped: set.jis0212.forward.mapped_count(),
            encodable: Some(set.jis0212.reverse.len()),
            astral: None,
            ranges: None,
        },
        Row {
            name: "euc-kr",
            bias: set.euc_kr.forward.bias(),
            slots: set.euc_kr.forward.len(),
            mapped: set.euc_kr.forward.mapped_count(),
            encodable: Some(set.euc_kr.reverse.len()),
            astral: None,
            ranges: None,
        },
        Row {
            name: "gb18030",
            bias: set.gb18030.forward.bias(),
            slots: set.gb18030.forward.len(),
            mapped: set.gb18030.forward.mapped_count(),
            encodable: Some(set.gb18030.reverse.len()),
            astral: None,
            ranges: Some(set.gb18030.ranges.len()),
        },
    ]
}

fn write_text(rows: &[Row]) {
    println!("encoding\tbias\tslots\tmapped\tencodable\tastral\tranges");
    for row in rows {
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            row.name,
            row.bias,
            row.slots,
            row.mapped,
            opt(row.encodable),
            opt(row.astral),
            opt(row.ranges),
        );
    }
}

fn opt(value: Option<usize>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn write_json(rows: &[Row]) {
    let values: Vec<serde_json::Value> = rows
        .iter()
        .map(|row| {
            serde_json::json!({
                "encoding": row.name,
                "bias": row.bias,
                "slots": row.slots,
                "mapped": row.mapped,
                "encodable": row.encodable,
                "astral": row.astral,
                "ranges": row.ranges,
            })
        })
        .collect();
    println!("{}", serde_json::Value::Array(values));
}
