//! Output file naming for accepted audio.

use crate::source::FieldMap;

/// Builds `<source>_<value>_<value>...<ext>` from the fields a template used.
///
/// Values are appended in `used_keys` order, skipping keys absent from
/// `fields`. Square brackets are removed from the name (not from `extension`,
/// which is appended afterwards).
pub fn create_file_name(
    source_name: &str,
    used_keys: &[String],
    fields: &FieldMap,
    extension: &str,
) -> String {
    let mut name = source_name.to_string();
    for key in used_keys {
        if let Some(value) = fields.get(key) {
            name.push('_');
            name.push_str(value);
        }
    }
    name.retain(|c| c != '[' && c != ']');
    name.push_str(extension);
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> FieldMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn keys(k: &[&str]) -> Vec<String> {
        k.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn joins_source_and_used_values() {
        let f = fields(&[("word", "猫"), ("reading", "neko")]);
        assert_eq!(
            create_file_name("jpod", &keys(&["word", "reading"]), &f, ".mp3"),
            "jpod_猫_neko.mp3"
        );
    }

    #[test]
    fn strips_square_brackets() {
        let f = fields(&[("word", "私[わたし]")]);
        assert_eq!(
            create_file_name("[forvo]", &keys(&["word"]), &f, ".ogg"),
            "forvo_私わたし.ogg"
        );
    }

    #[test]
    fn skips_keys_missing_from_fields() {
        let f = fields(&[("word", "犬")]);
        assert_eq!(
            create_file_name("src", &keys(&["gone", "word"]), &f, ".mp3"),
            "src_犬.mp3"
        );
    }

    #[test]
    fn uses_raw_field_value_even_if_empty() {
        let f = fields(&[("a", "x"), ("b", "")]);
        assert_eq!(create_file_name("s", &keys(&["a", "b"]), &f, ".aac"), "s_x_.aac");
    }

    #[test]
    fn no_used_keys_and_empty_extension() {
        assert_eq!(create_file_name("plain", &[], &FieldMap::new(), ""), "plain");
    }
}
