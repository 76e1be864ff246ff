//! URL template substitution.
//!
//! Templates carry `{field}` placeholders. Placeholder names match field names
//! case-insensitively; text outside braces is left untouched.

mod normalize;

pub use normalize::lowercase_placeholders;

use crate::source::FieldMap;

/// A template after substitution, plus the fields it actually referenced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRequest {
    pub url: String,
    /// Field names found in the template, in field-map order.
    pub used_keys: Vec<String>,
}

/// Substitutes field values into `template`.
///
/// Fields are visited in map order. When `duplicate_on_empty` is set, an empty
/// value is replaced by the value substituted just before it (or the empty
/// string if nothing was substituted yet). Placeholders with no matching field
/// stay in the output verbatim.
pub fn resolve(template: &str, fields: &FieldMap, duplicate_on_empty: bool) -> ResolvedRequest {
    let mut url = lowercase_placeholders(template);
    let mut used_keys = Vec::new();
    let mut prev_value = String::new();

    for (key, value) in fields {
        let placeholder = format!("{{{}}}", key.to_lowercase());
        if !url.contains(&placeholder) {
            continue;
        }
        let value = if value.is_empty() && duplicate_on_empty {
            prev_value.clone()
        } else {
            value.clone()
        };
        used_keys.push(key.clone());
        url = url.replace(&placeholder, &value);
        prev_value = value;
    }

    ResolvedRequest { url, used_keys }
}
