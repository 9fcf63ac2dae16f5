//! CLI output formatting utilities.
//!
//! Colored JSON for `--json` output and column fitting for tables.

use colored::Colorize;
use serde_json::Value;

const INDENT: &str = "  ";

/// Prints `value` as indented, colored JSON.
///
/// Keys are cyan, strings green, numbers yellow, and booleans and `null`
/// magenta.
pub fn print_json(value: &Value) { println!("{}", render_json(value)); }

/// Renders `value` as indented, colored JSON.
#[must_use]
pub fn render_json(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value, 0);
    out
}

fn write_value(out: &mut String, value: &Value, depth: usize) {
    match value {
        Value::Null => out.push_str(&"null".magenta().to_string()),
        Value::Bool(flag) => out.push_str(&flag.to_string().magenta().to_string()),
        Value::Number(number) => out.push_str(&number.to_string().yellow().to_string()),
        // Display on a string value yields the quoted, escaped literal.
        Value::String(_) => out.push_str(&value.to_string().green().to_string()),
        Value::Array(items) => {
            write_nested(out, ('[', ']'), items.iter().map(|item| (None, item)), depth);
        }
        Value::Object(map) => {
            write_nested(out, ('{', '}'), map.iter().map(|(key, item)| (Some(key), item)), depth);
        }
    }
}

fn write_nested<'a>(
    out: &mut String,
    (open, close): (char, char),
    entries: impl ExactSizeIterator<Item = (Option<&'a String>, &'a Value)>,
    depth: usize,
) {
    if entries.len() == 0 {
        out.push(open);
        out.push(close);
        return;
    }

    out.push(open);
    let last = entries.len() - 1;
    for (index, (key, item)) in entries.enumerate() {
        out.push('\n');
        out.push_str(&INDENT.repeat(depth + 1));
        if let Some(key) = key {
            out.push_str(&Value::String(key.clone()).to_string().cyan().to_string());
            out.push_str(": ");
        }
        write_value(out, item, depth + 1);
        if index < last {
            out.push(',');
        }
    }
    out.push('\n');
    out.push_str(&INDENT.repeat(depth));
    out.push(close);
}

/// Fits `text` into `width` characters, ending with `…` when it is cut.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_owned();
    }

    let mut fitted: String = text.chars().take(width.saturating_sub(1)).collect();
    fitted.push('…');
    fitted
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn plain(value: &Value) -> String {
        colored::control::set_override(false);
        render_json(value)
    }

    #[test]
    fn test_render_json_matches_pretty_layout() {
        let verdict = json!({
            "decision": { "type": "capAt", "durationMs": 1000.0 },
            "gate": "cap",
            "distanceSpaces": 20.0,
            "fields": ["x", "y"],
            "conclude": false,
            "hint": null
        });

        let expected = serde_json::to_string_pretty(&verdict).unwrap();
        assert_eq!(plain(&verdict), expected);
    }

    #[test]
    fn test_render_json_empty_containers() {
        assert_eq!(plain(&json!({})), "{}");
        assert_eq!(plain(&json!({ "updates": [] })), "{\n  \"updates\": []\n}");
    }

    #[test]
    fn test_render_json_escapes_strings() {
        let name = json!("Token.\"a\".animateMovement");
        assert_eq!(plain(&name), r#""Token.\"a\".animateMovement""#);
    }

    #[test]
    fn test_truncate_short_string() {
        assert_eq!(truncate("Distance Threshold", 30), "Distance Threshold");
    }

    #[test]
    fn test_truncate_long_string() {
        assert_eq!(truncate("Duration Cap (ms)", 8), "Duratio…");
    }

    #[test]
    fn test_truncate_min_length() {
        assert_eq!(truncate("speed", 1), "…");
        assert_eq!(truncate("speed", 0), "…");
    }

    #[test]
    fn test_truncate_counts_characters() {
        let s = "drag → drop";
        assert_eq!(truncate(s, 7), "drag →…");
        assert_eq!(truncate(s, 11), s);
    }
}
