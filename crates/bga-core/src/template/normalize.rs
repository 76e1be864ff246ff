//! Placeholder normalization.

/// Lower-cases the text of every `{...}` span, leaving the rest of `template` as-is.
///
/// A span runs from a `{` to the next `}`. An unclosed `{` is copied through.
pub fn lowercase_placeholders(template: &str) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        match tail.find('}') {
            Some(close) => {
                out.push_str(&tail[..=close].to_lowercase());
                rest = &tail[close + 1..];
            }
            None => {
                out.push_str(tail);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_braced_text_is_lowered() {
        assert_eq!(
            lowercase_placeholders("HTTPS://Host/{Word}/Path?{KANA}"),
            "HTTPS://Host/{word}/Path?{kana}"
        );
    }

    #[test]
    fn unclosed_brace_copied_through() {
        assert_eq!(lowercase_placeholders("a/{Word"), "a/{Word");
        assert_eq!(lowercase_placeholders("{A}/{B"), "{a}/{B");
    }

    #[test]
    fn non_ascii_names() {
        assert_eq!(lowercase_placeholders("x/{ÄUDIO}"), "x/{äudio}");
    }
}
