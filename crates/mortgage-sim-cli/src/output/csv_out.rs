use serde_json::Value;
use std::io;

use super::{format_scalar, row_sets, scalar_fields};

/// Write output as CSV to stdout.
///
/// A result with a row set (`rows` for a schedule, `chart` for a
/// comparison) is written as one CSV row per month; anything else as
/// field/value pairs.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let result = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    match result {
        Value::Object(map) => {
            let sets = row_sets(map);
            let preferred = sets
                .iter()
                .find(|(name, _)| *name == "rows")
                .or_else(|| sets.first());
            if let Some((_, rows)) = preferred {
                write_rows_csv(&mut wtr, rows);
            } else {
                let _ = wtr.write_record(["field", "value"]);
                for (key, val) in scalar_fields(map) {
                    let _ = wtr.write_record([key, format_scalar(&val)]);
                }
            }
        }
        Value::Array(arr) => write_rows_csv(&mut wtr, arr),
        _ => {
            let _ = wtr.write_record([format_scalar(result)]);
        }
    }

    let _ = wtr.flush();
}

fn write_rows_csv(wtr: &mut csv::Writer<io::StdoutLock<'_>>, arr: &[Value]) {
    let Some(Value::Object(first)) = arr.first() else {
        for item in arr {
            let _ = wtr.write_record([format_scalar(item)]);
        }
        return;
    };

    let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
    let _ = wtr.write_record(&headers);

    for item in arr {
        if let Value::Object(map) = item {
            let row: Vec<String> = headers
                .iter()
                .map(|h| map.get(*h).map(format_scalar).unwrap_or_default())
                .collect();
            let _ = wtr.write_record(&row);
        }
    }
}
