//! Source definitions and per-record field maps.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Field name -> field value for one record, in the record's own field order.
///
/// Order matters: substitution walks fields in this order (so "previous value"
/// duplication follows it) and the output file name lists used fields in it.
pub type FieldMap = IndexMap<String, String>;

/// One external audio provider: a name and a URL template with `{field}` placeholders.
///
/// Priority is positional: a source earlier in the list is tried first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub name: String,
    #[serde(rename = "url")]
    pub url_template: String,
}

impl Source {
    pub fn new(name: impl Into<String>, url_template: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url_template: url_template.into(),
        }
    }
}

/// Accepted result of a resolution run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioArtifact {
    pub file_name: String,
    pub bytes: Vec<u8>,
}
