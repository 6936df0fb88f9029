//! Text normalization: lowercase, punctuation translation, whitespace split.

/// Punctuation beyond the ASCII set that the source documents use:
/// curly quotes and the em-dash.
const EXTRA_SEPARATORS: [char; 5] = ['\u{201C}', '\u{201D}', '\u{2018}', '\u{2019}', '\u{2014}'];

/// True if `c` is translated to a space before splitting.
fn is_separator(c: char) -> bool {
    c.is_ascii_punctuation() || EXTRA_SEPARATORS.contains(&c)
}

/// Normalizes `text` into a sequence of lowercase words.
///
/// Separators are translated to spaces rather than deleted, so
/// punctuation without surrounding whitespace ("word,word") still
/// yields two words. Empty input yields an empty vec, not an absence.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let translated: String = lowered
        .chars()
        .map(|c| if is_separator(c) { ' ' } else { c })
        .collect();

    translated
        .split_whitespace()
        .filter(|w| !w.is_empty()) // split_whitespace never yields empties; kept as a safety net
        .map(str::to_owned)
        .collect()
}
