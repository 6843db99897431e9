//! Numbered-list segmentation for analysis answers.
//!
//! Answers from the analysis backend often embed a numbered list inline:
//!
//! ```text
//! Kontrak ini memuat beberapa risiko:
//! 1. Pembayaran tidak dijadwalkan.
//! 2. Tidak ada klausa force majeure.
//! ```
//!
//! [`segment`] splits such text into one item per number, reformatted as
//! `"<n>.   <text>"`. Text without a numbered list is returned verbatim.
//!
//! Two numbering styles are recognized: `1.` (dot-numbered, tried first)
//! and bare `1` followed by anything but a period. Only ASCII decimal digits
//! count as numbers.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::config::ITEM_INDENT;
use crate::types::Content;

/// A newline followed by a dot-numbered item, anywhere in the text.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static EMBEDDED_DOT_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[0-9]+\.").expect("valid regex"));

/// A newline followed by a number and a non-period character.
///
/// `[^.]` also matches digits, so "\n12." matches through "1" + "2".
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static EMBEDDED_BARE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[0-9]+[^.]").expect("valid regex"));

/// Dot-numbered item at the start of a string.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static LEADING_DOT_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.").expect("valid regex"));

/// Bare-numbered item at the start of a string.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static LEADING_BARE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+[^.]").expect("valid regex"));

/// Leading digit run and the rest of its first line.
///
/// The rest stops at any line terminator, so continuation lines of a
/// bare-numbered item are dropped.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static NUMBER_AND_REST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)([^\n\r\x{2028}\x{2029}]*)").expect("valid regex")
});

/// Split numbered-list text into formatted items.
///
/// Returns [`Content::Items`] when the text holds at least two numbered
/// segments, otherwise [`Content::Text`] with the input unchanged. Text that
/// starts with `"1."` but has no further numbered lines is not a list.
///
/// # Examples
/// ```
/// use contract_review::segment::segment;
/// use contract_review::Content;
///
/// let content = segment("Risiko:\n1. Denda\n2. Bunga");
/// assert_eq!(
///     content,
///     Content::Items(vec![
///         "Risiko:".to_string(),
///         "1.   Denda".to_string(),
///         "2.   Bunga".to_string(),
///     ])
/// );
///
/// assert_eq!(segment("Tidak ada risiko."), Content::from("Tidak ada risiko."));
/// ```
pub fn segment(text: &str) -> Content {
    if !looks_numbered(text) {
        return Content::Text(text.to_string());
    }

    let dotted = split_before_matches(text, &LEADING_DOT_NUMBER);
    if dotted.len() > 1 {
        tracing::debug!(items = dotted.len(), "Segmented dot-numbered list");
        return Content::Items(dotted.into_iter().map(format_dotted_item).collect());
    }

    let bare = split_before_matches(text, &LEADING_BARE_NUMBER);
    if bare.len() > 1 {
        tracing::debug!(items = bare.len(), "Segmented bare-numbered list");
        return Content::Items(bare.into_iter().map(format_bare_item).collect());
    }

    tracing::trace!("Numbered pattern found but fewer than two items; keeping text");
    Content::Text(text.to_string())
}

/// Segment a JSON value.
///
/// Strings go through [`segment`]; every other value is returned as
/// [`Content::Raw`] unchanged.
pub fn segment_value(value: &Value) -> Content {
    match value {
        Value::String(text) => segment(text),
        other => Content::Raw(other.clone()),
    }
}

/// Whether the text contains anything resembling a numbered list.
fn looks_numbered(text: &str) -> bool {
    EMBEDDED_DOT_NUMBER.is_match(text)
        || EMBEDDED_BARE_NUMBER.is_match(text)
        || LEADING_DOT_NUMBER.is_match(text)
}

/// Split text at every newline whose following text matches `item_start`.
///
/// The newline itself is dropped; the number stays with the segment it
/// introduces. Each newline is tested on its own, so a match that would
/// consume the next newline does not hide it.
fn split_before_matches<'a>(text: &'a str, item_start: &Regex) -> Vec<&'a str> {
    let mut segments = Vec::new();
    let mut start = 0;

    for (idx, _) in text.match_indices('\n') {
        if item_start.is_match(&text[idx + 1..]) {
            segments.push(&text[start..idx]);
            start = idx + 1;
        }
    }

    segments.push(&text[start..]);
    segments
}

/// Format one segment of a dot-numbered list.
///
/// Splits at the first period only, so "1. Rp 1.000" keeps its amount.
fn format_dotted_item(segment: &str) -> String {
    let item = segment.trim();
    if !LEADING_DOT_NUMBER.is_match(item) {
        return item.to_string();
    }

    match item.split_once('.') {
        Some((number, rest)) => format_item(number, rest),
        None => item.to_string(),
    }
}

/// Format one segment of a bare-numbered list.
fn format_bare_item(segment: &str) -> String {
    let item = segment.trim();
    if !LEADING_BARE_NUMBER.is_match(item) {
        return item.to_string();
    }

    match NUMBER_AND_REST.captures(item) {
        Some(caps) => format_item(&caps[1], &caps[2]),
        None => item.to_string(),
    }
}

fn format_item(number: &str, rest: &str) -> String {
    format!("{number}.{ITEM_INDENT}{}", rest.trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn items(values: &[&str]) -> Content {
        Content::Items(values.iter().map(|s| (*s).to_string()).collect())
    }

    #[test]
    fn test_plain_text_unchanged() {
        let text = "  Kontrak ini berlaku selama 2 tahun.  ";
        assert_eq!(segment(text), Content::from(text));
    }

    #[test]
    fn test_empty_text_unchanged() {
        assert_eq!(segment(""), Content::from(""));
    }

    #[test]
    fn test_dot_numbered_list_with_intro() {
        assert_eq!(
            segment("Intro\n1. First item\n2. Second item"),
            items(&["Intro", "1.   First item", "2.   Second item"])
        );
    }

    #[test]
    fn test_dot_numbered_list_without_intro() {
        assert_eq!(
            segment("1. First item\n2. Second item"),
            items(&["1.   First item", "2.   Second item"])
        );
    }

    #[test]
    fn test_bare_numbered_list() {
        assert_eq!(
            segment("Intro\n1 First item\n2 Second item"),
            items(&["Intro", "1.   First item", "2.   Second item"])
        );
    }

    #[test]
    fn test_bare_number_without_space() {
        assert_eq!(
            segment("Daftar:\n1)Satu\n2)Dua"),
            items(&["Daftar:", "1.   )Satu", "2.   )Dua"])
        );
    }

    #[test]
    fn test_single_leading_item_falls_through() {
        let text = "1. Only one item, no newline-numbers";
        assert_eq!(segment(text), Content::from(text));
    }

    #[test]
    fn test_leading_item_with_unnumbered_lines_falls_through() {
        let text = "1. Satu-satunya poin\n(lanjutan tanpa nomor)";
        assert_eq!(segment(text), Content::from(text));
    }

    #[test]
    fn test_intro_and_single_item_is_a_list() {
        assert_eq!(
            segment("Hanya satu:\n1. Item"),
            items(&["Hanya satu:", "1.   Item"])
        );
    }

    #[test]
    fn test_split_only_at_first_period() {
        assert_eq!(
            segment("Biaya:\n1. Denda Rp 1.000.000\n2. Bunga 2.5%"),
            items(&["Biaya:", "1.   Denda Rp 1.000.000", "2.   Bunga 2.5%"])
        );
    }

    #[test]
    fn test_items_are_trimmed() {
        assert_eq!(
            segment("  Intro  \n1.    Spasi   \n2.\tTab\t\n"),
            items(&["Intro", "1.   Spasi", "2.   Tab"])
        );
    }

    #[test]
    fn test_multi_digit_numbers() {
        assert_eq!(
            segment("9. Sembilan\n10. Sepuluh\n11. Sebelas"),
            items(&["9.   Sembilan", "10.   Sepuluh", "11.   Sebelas"])
        );
    }

    #[test]
    fn test_continuation_lines_stay_with_item() {
        assert_eq!(
            segment("1. Pertama\nlanjutan baris\n2. Kedua"),
            items(&["1.   Pertama\nlanjutan baris", "2.   Kedua"])
        );
    }

    #[test]
    fn test_bare_item_keeps_first_line_only() {
        assert_eq!(
            segment("Risiko\n1 Pertama\nlanjutan\n2 Kedua"),
            items(&["Risiko", "1.   Pertama", "2.   Kedua"])
        );
        assert_eq!(
            segment("Risiko\n1 Pertama\r\nlanjutan\n2 Kedua"),
            items(&["Risiko", "1.   Pertama", "2.   Kedua"])
        );
    }

    #[test]
    fn test_bare_fallback_backtracks_over_digits() {
        // "12." passes the bare check through "1" + "2", keeping the period
        assert_eq!(segment("12. a\n3 b"), items(&["12.   . a", "3.   b"]));
    }

    #[test]
    fn test_trailing_multi_digit_number_splits() {
        assert_eq!(segment("Intro\n12"), items(&["Intro", "12.   "]));
    }

    #[test]
    fn test_trailing_single_digit_does_not_split() {
        assert_eq!(segment("Intro\n1"), Content::from("Intro\n1"));
    }

    #[test]
    fn test_dot_numbering_takes_priority() {
        // "\n3 tahun" looks like a bare item but the dot-numbered split wins
        assert_eq!(
            segment("Ketentuan:\n1. Masa berlaku\n3 tahun\n2. Perpanjangan"),
            items(&["Ketentuan:", "1.   Masa berlaku\n3 tahun", "2.   Perpanjangan"])
        );
    }

    #[test]
    fn test_adjacent_bare_numbers_each_split() {
        assert_eq!(segment("A\n1\n2 b"), items(&["A", "1", "2.   b"]));
    }

    #[test]
    fn test_leading_newline_yields_empty_first_item() {
        assert_eq!(
            segment("\n1. a\n2. b"),
            items(&["", "1.   a", "2.   b"])
        );
    }

    #[test]
    fn test_unicode_digits_are_not_numbers() {
        let text = "Intro\n١. a\n٢. b";
        assert_eq!(segment(text), Content::from(text));
    }

    #[test]
    fn test_lettered_lists_unchanged() {
        let text = "Pilihan:\na. Satu\nb. Dua";
        assert_eq!(segment(text), Content::from(text));
    }

    #[test]
    fn test_resegmenting_output_is_stable() {
        let first = segment("Intro\n1. First item\n2.  Second item");
        let Content::Items(items) = &first else {
            panic!("expected items, got {first:?}");
        };
        assert_eq!(segment(&items.join("\n")), first);

        let bare = segment("Intro\n1 First\n2 Second");
        let Content::Items(items) = &bare else {
            panic!("expected items, got {bare:?}");
        };
        assert_eq!(segment(&items.join("\n")), bare);
    }

    #[test]
    fn test_segment_value_passes_non_strings_through() {
        for value in [
            json!(null),
            json!(7),
            json!(true),
            json!(["1. a", "2. b"]),
            json!({"k": "v"}),
        ] {
            assert_eq!(segment_value(&value), Content::Raw(value.clone()));
        }
    }

    #[test]
    fn test_segment_value_segments_strings() {
        assert_eq!(
            segment_value(&json!("x\n1. a\n2. b")),
            items(&["x", "1.   a", "2.   b"])
        );
    }

    #[test]
    fn test_split_before_matches_keeps_number() {
        assert_eq!(
            split_before_matches("a\n1. b\nc\n2. d", &LEADING_DOT_NUMBER),
            vec!["a", "1. b\nc", "2. d"]
        );
    }
}
