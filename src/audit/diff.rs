//! Diff generation for audit logging
//!
//! Generates human-readable summaries of what changed between two snapshots
//! of an entity. Used for expenses edited by a participant removal.

use serde_json::Value;

/// Arrays up to this many scalar items are printed inline
const INLINE_ARRAY_LIMIT: usize = 8;

/// Generate a human-readable diff between two JSON values
///
/// Only top-level fields are compared. Returns `None` when nothing changed.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            let mut changes = Vec::new();

            for (key, before_val) in before_obj {
                match after_obj.get(key) {
                    Some(after_val) if before_val != after_val => changes.push(format!(
                        "{}: {} -> {}",
                        key,
                        format_value(before_val),
                        format_value(after_val)
                    )),
                    Some(_) => {}
                    None => changes.push(format!("{}: {} -> (removed)", key, format_value(before_val))),
                }
            }

            for (key, after_val) in after_obj {
                if !before_obj.contains_key(key) {
                    changes.push(format!("{}: (added) -> {}", key, format_value(after_val)));
                }
            }

            if changes.is_empty() {
                None
            } else {
                Some(changes.join(", "))
            }
        }
        _ if before != after => Some(format!(
            "{} -> {}",
            format_value(before),
            format_value(after)
        )),
        _ => None,
    }
}

/// Format a JSON value for human-readable display
fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => {
            if s.chars().count() > 50 {
                let head: String = s.chars().take(47).collect();
                format!("\"{}...\"", head)
            } else {
                format!("\"{}\"", s)
            }
        }
        Value::Array(arr) => {
            let all_scalar = arr.iter().all(|v| !v.is_array() && !v.is_object());
            if all_scalar && arr.len() <= INLINE_ARRAY_LIMIT {
                let items: Vec<String> = arr.iter().map(format_value).collect();
                format!("[{}]", items.join(", "))
            } else {
                format!("[{} items]", arr.len())
            }
        }
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_split_member_removed() {
        let before = json!({"description": "Dinner", "split_among": ["A", "B", "C"]});
        let after = json!({"description": "Dinner", "split_among": ["A", "B"]});

        let diff = generate_diff(&before, &after).unwrap();
        assert_eq!(diff, "split_among: [\"A\", \"B\", \"C\"] -> [\"A\", \"B\"]");
    }

    #[test]
    fn test_payer_cleared() {
        let before = json!({"paid_by": "Carol", "amount": 900});
        let after = json!({"paid_by": "", "amount": 900});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("paid_by: \"Carol\" -> \"\""));
        assert!(!diff.contains("amount"));
    }

    #[test]
    fn test_field_added_and_removed() {
        let before = json!({"name": "Test", "old_field": "value"});
        let after = json!({"name": "Test", "address": "0x1"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("old_field: \"value\" -> (removed)"));
        assert!(diff.contains("address: (added) -> \"0x1\""));
    }

    #[test]
    fn test_no_changes() {
        let value = json!({"name": "Test", "value": 100});
        assert!(generate_diff(&value, &value).is_none());
    }

    #[test]
    fn test_scalar_change() {
        assert_eq!(generate_diff(&json!(1), &json!(2)).unwrap(), "1 -> 2");
    }

    #[test]
    fn test_long_values_are_summarised() {
        let long_string = "a".repeat(100);
        assert!(format_value(&json!(long_string)).ends_with("...\""));

        let many: Vec<u32> = (0..20).collect();
        assert_eq!(format_value(&json!(many)), "[20 items]");
        assert_eq!(format_value(&json!({"a": 1, "b": 2})), "{2 fields}");
        assert_eq!(format_value(&json!(null)), "null");
    }
}
