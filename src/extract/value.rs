//! Native-text rendering of JSON values.

use serde_json::Value;

/// Renders a JSON value in its natural textual form.
///
/// Strings print bare, without the surrounding quotes JSON gives them.
/// Every other variant already displays as its JSON text: numbers and
/// booleans as written, null as `null`, arrays and objects compact.
pub fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
