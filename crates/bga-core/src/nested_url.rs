//! Locating the real media URL inside a JSON wrapper response.
//!
//! Providers that answer with JSON usually nest the audio link somewhere in the
//! document under a `url` key. The search is depth-first and deliberately
//! narrow: objects are scanned member by member, but an array is only entered
//! through its first object/array element. A URL that sits only in a later
//! array element is not found.

use serde_json::Value;

/// Returns the first `url` string found by the search, or `None`.
///
/// A member whose key is `url` (any case) ends the search only when its value
/// is a string. A non-string `url` value is not returned: an object or array
/// there is searched like any other member, and a scalar is skipped.
/// Scalars at the top level yield `None`.
pub fn find_url(value: &Value) -> Option<String> {
    match value {
        Value::Object(map) => {
            for (key, member) in map {
                if key.eq_ignore_ascii_case("url") {
                    if let Value::String(url) = member {
                        return Some(url.clone());
                    }
                }
                if member.is_object() || member.is_array() {
                    if let Some(url) = find_url(member) {
                        return Some(url);
                    }
                }
            }
            None
        }
        Value::Array(items) => items
            .iter()
            .find(|item| item.is_object() || item.is_array())
            .and_then(find_url),
        _ => None,
    }
}

/// Parses `payload` as JSON and runs [`find_url`] on it.
pub fn find_url_in_bytes(payload: &[u8]) -> Result<Option<String>, serde_json::Error> {
    let value: Value = serde_json::from_slice(payload)?;
    Ok(find_url(&value))
}
