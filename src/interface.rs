use serde_json::Value;

/// Derives a TypeScript interface named `Data` from a JSON object's top-level
/// fields.
///
/// The inference is deliberately shallow: one level only. Nested objects are
/// typed `any`, arrays are typed `any[]` without looking at their elements.
/// Field order follows the object's key order.
///
/// Returns an empty string if the input is not valid JSON or the top-level
/// value is not an object (scalar, array, or null).
///
/// # Example
///
/// ```rust
/// let out = devsnips::synthesize_interface(r#"{"id":1,"active":true,"name":"x"}"#);
/// assert_eq!(out, "interface Data {\n  id: number;\n  active: boolean;\n  name: string;\n}");
/// ```
pub fn synthesize_interface(json: &str) -> String {
    synthesize_interface_named(json, "Data")
}

/// Same as [`synthesize_interface`] with a caller-chosen interface name.
pub fn synthesize_interface_named(json: &str, name: &str) -> String {
    let parsed: Value = match serde_json::from_str(json) {
        Ok(v) => v,
        Err(_) => return String::new(),
    };
    let obj = match parsed.as_object() {
        Some(obj) => obj,
        None => return String::new(),
    };

    let mut lines = vec![format!("interface {} {{", name)];
    for (key, value) in obj {
        lines.push(format!("  {}: {};", key, ts_type(value)));
    }
    lines.push("}".to_string());
    lines.join("\n")
}

fn ts_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Array(_) => "any[]",
        Value::String(_) => "string",
        Value::Number(_) => "number",
        Value::Bool(_) => "boolean",
        Value::Object(_) => "any",
    }
}
