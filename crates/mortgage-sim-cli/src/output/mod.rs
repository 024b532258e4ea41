pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::{Map, Value};

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Scalar fields of a result object, one level of nested objects flattened
/// as `parent.child`. Arrays are left to the row renderers.
pub fn scalar_fields(map: &Map<String, Value>) -> Vec<(String, Value)> {
    let mut fields = Vec::new();
    for (key, val) in map {
        match val {
            Value::Array(_) => {}
            Value::Object(inner) => {
                for (child, child_val) in inner {
                    if !child_val.is_array() && !child_val.is_object() {
                        fields.push((format!("{key}.{child}"), child_val.clone()));
                    }
                }
            }
            _ => fields.push((key.clone(), val.clone())),
        }
    }
    fields
}

/// Top-level arrays of objects in a result (`rows`, `chart`).
pub fn row_sets(map: &Map<String, Value>) -> Vec<(&str, &[Value])> {
    map.iter()
        .filter_map(|(key, val)| match val {
            Value::Array(arr) if arr.first().is_some_and(Value::is_object) => {
                Some((key.as_str(), arr.as_slice()))
            }
            _ => None,
        })
        .collect()
}

pub fn format_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
