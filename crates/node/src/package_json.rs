use serde::de::Error as _;
use serde_json::{Map, Value};

/// Parse package.json content into its top-level object
///
/// # Errors
/// Returns error if the content is not valid JSON or its top level is not an object.
pub fn parse_package_json(content: &str) -> serde_json::Result<Map<String, Value>> {
    match serde_json::from_str::<Value>(content)? {
        Value::Object(map) => Ok(map),
        _ => Err(serde_json::Error::custom(
            "package.json must contain a JSON object",
        )),
    }
}

/// Top-level `version` field, if it is a string
#[must_use]
pub fn read_version(package_json: &Map<String, Value>) -> Option<&str> {
    package_json.get("version").and_then(Value::as_str)
}

/// Serialize with 2-space indentation and a trailing newline
///
/// # Errors
/// Returns error if serialization fails.
pub fn render_package_json(package_json: &Map<String, Value>) -> serde_json::Result<String> {
    Ok(format!("{}\n", serde_json::to_string_pretty(package_json)?))
}
