// src/domain/draft/text.rs
use once_cell::sync::Lazy;
use regex::Regex;

use super::value_objects::ReadTime;

static EMBEDDED_CODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>|<style\b[^>]*>.*?</style\s*>")
        .expect("valid embedded code pattern")
});

static BLOCK_BOUNDARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)<br\s*/?>|</(p|div|h[1-6]|li|ul|ol|blockquote|pre|tr|td|th|section|article|figure|figcaption)\s*>",
    )
    .expect("valid block boundary pattern")
});

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag pattern"));

/// Reduce rich-text editor output to the text a reader actually sees.
///
/// Block boundaries become whitespace so adjacent paragraphs do not merge
/// into one token; inline markup is removed without a gap.
#[must_use]
pub fn plain_text(rich: &str) -> String {
    let without_code = EMBEDDED_CODE.replace_all(rich, " ");
    let with_breaks = BLOCK_BOUNDARY.replace_all(&without_code, " ");
    let stripped = TAG.replace_all(&with_breaks, "");
    html_escape::decode_html_entities(&stripped).into_owned()
}

/// Number of whitespace-delimited, non-empty tokens.
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[must_use]
pub fn estimate_read_time(words: usize, words_per_minute: u32) -> ReadTime {
    let wpm = usize::try_from(words_per_minute.max(1)).unwrap_or(usize::MAX);
    let minutes = words.div_ceil(wpm);
    ReadTime::saturating(u32::try_from(minutes).unwrap_or(u32::MAX))
}
