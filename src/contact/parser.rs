use serde_json::{Map, Value};

use super::model::Submission;

/// Parse a request body based on Content-Type header.
pub fn parse_body(content_type: Option<&str>, body: &[u8]) -> Result<Value, String> {
    let ct = content_type.unwrap_or("application/json");

    if ct.contains("application/json") {
        serde_json::from_slice(body).map_err(|e| format!("Invalid JSON: {e}"))
    } else if ct.contains("application/x-www-form-urlencoded") {
        parse_form_urlencoded(body)
    } else {
        // Try JSON first, then form-urlencoded
        serde_json::from_slice(body)
            .or_else(|_| parse_form_urlencoded(body))
            .map_err(|e| format!("Unable to parse body: {e}"))
    }
}

/// Repeated `services` (or `services[]`) keys accumulate into an array in arrival order.
fn parse_form_urlencoded(body: &[u8]) -> Result<Value, String> {
    let body_str = std::str::from_utf8(body).map_err(|e| format!("Invalid UTF-8: {e}"))?;

    let mut map = Map::new();
    let mut services = Vec::new();
    for (k, v) in form_urlencoded::parse(body_str.as_bytes()) {
        match k.as_ref() {
            "services" | "services[]" => services.push(Value::String(v.into_owned())),
            _ => {
                map.insert(k.into_owned(), Value::String(v.into_owned()));
            }
        }
    }
    map.insert("services".to_string(), Value::Array(services));
    Ok(Value::Object(map))
}

/// Turn a decoded body into a submission. Duplicate service labels are dropped.
pub fn into_submission(raw: Value) -> Result<Submission, String> {
    if !raw.is_object() {
        return Err("Expected a JSON object".to_string());
    }

    let mut submission: Submission =
        serde_json::from_value(raw).map_err(|e| format!("Invalid submission: {e}"))?;

    let labels = std::mem::take(&mut submission.services);
    for label in &labels {
        submission.toggle_service(label, true);
    }
    Ok(submission)
}
