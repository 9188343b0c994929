//! Dot-path lookups into nested JSON values.

use serde_json::Value;

/// Resolve a dot-separated `path` inside `record`.
///
/// At each step an array is indexed by parsing the segment as a
/// non-negative integer, and an object is indexed by the segment as a
/// literal key (empty segments included). Any failure, whether a bad
/// index, a missing key, or a scalar mid-path, resolves to `None`; the
/// lookup never errors.
///
/// ```
/// use fleetly_table::path::resolve;
/// use serde_json::json;
///
/// let record = json!({ "a": [{ "b": { "c": 3 } }] });
/// assert_eq!(resolve(&record, "a.0.b.c"), Some(&json!(3)));
/// assert_eq!(resolve(&record, "a.foo.b.c"), None);
/// ```
pub fn resolve<'a>(record: &'a Value, path: &str) -> Option<&'a Value> {
    let mut value = record;
    for segment in path.split('.') {
        value = match value {
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            Value::Object(map) => map.get(segment)?,
            _ => return None,
        };
    }
    Some(value)
}

/// [`resolve`] with a caller-supplied default for unresolved paths.
pub fn resolve_or<'a>(record: &'a Value, path: &str, default: &'a Value) -> &'a Value {
    resolve(record, path).unwrap_or(default)
}
