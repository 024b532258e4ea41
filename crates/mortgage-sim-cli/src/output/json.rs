use serde_json::Value;

/// Pretty-printed JSON, with a trailing newline so piped output ends cleanly.
pub fn render_json(value: &Value) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value).map(|mut s| {
        s.push('\n');
        s
    })
}

pub fn print_json(value: &Value) {
    match render_json(value) {
        Ok(s) => print!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_json_keeps_schedule_fields() {
        let value = json!({"result": {"payoff_months": 360, "total_interest": 247220.13}});
        let rendered = render_json(&value).unwrap();
        assert!(rendered.ends_with("}\n"));
        assert!(rendered.contains("\"payoff_months\": 360"));
        let parsed: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, value);
    }
}
