//! Hiragana-only filter for reading fields.

/// Keeps only hiragana (U+3041..=U+309F), e.g. `私[わたし]` -> `わたし`.
pub fn filter_kana(s: &str) -> String {
    s.chars().filter(|c| ('ぁ'..='ゟ').contains(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_kanji_and_furigana_brackets() {
        assert_eq!(filter_kana("私[わたし]"), "わたし");
        assert_eq!(filter_kana("食べる[たべる]"), "べるたべる");
    }

    #[test]
    fn drops_katakana_latin_and_punctuation() {
        assert_eq!(filter_kana("ネコ neko ねこ！"), "ねこ");
        assert_eq!(filter_kana(""), "");
    }

    #[test]
    fn keeps_block_edges() {
        assert_eq!(filter_kana("ぁゟ゠"), "ぁゟ");
    }
}
