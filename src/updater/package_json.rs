use serde_json::{Value, json};

use crate::result::Result;

/// Set the `version` field of a package.json document.
///
/// The document is re-serialized with 2-space indentation and its key order
/// preserved. A trailing newline is kept when the input had one. Returns
/// None when the document is not a JSON object.
pub fn update_version(content: &str, version: &str) -> Result<Option<String>> {
    let mut doc: Value = serde_json::from_str(content)?;

    let Some(fields) = doc.as_object_mut() else {
        return Ok(None);
    };

    fields.insert("version".into(), json!(version));

    let mut formatted = serde_json::to_string_pretty(&doc)?;

    if content.ends_with('\n') {
        formatted.push('\n');
    }

    Ok(Some(formatted))
}

/// Read the `version` field of a package.json document.
pub fn read_version(content: &str) -> Result<Option<String>> {
    let doc: Value = serde_json::from_str(content)?;

    Ok(doc
        .get("version")
        .and_then(Value::as_str)
        .map(|v| v.to_string()))
}
