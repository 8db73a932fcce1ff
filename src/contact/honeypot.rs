use serde_json::Value;

/// A bot filled in the hidden field. Whitespace-only values count as empty.
pub fn is_spam(raw: &Value, field: Option<&str>) -> bool {
    let Some(field) = field.filter(|f| !f.is_empty()) else {
        return false;
    };

    match raw.get(field) {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(Value::Bool(b)) => *b,
        Some(_) => true,
    }
}
