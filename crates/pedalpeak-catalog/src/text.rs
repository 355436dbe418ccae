//! Title cleanup and identifier helpers shared by the normalizer and the
//! collection operations.

use std::sync::LazyLock;

use regex::Regex;

/// Parenthetical annotations that sellers append to titles and that carry no
/// product information. Matched exactly (inner whitespace is flexible).
static TITLE_NOISE: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // rental-return ("freight on delivery") note
        r"\(\s*پس کرایه\s*\)",
        // "dual shock" annotation
        r"\(\s*دو کمک\s*\)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid title noise regex"))
    .collect()
});

/// Collapses every whitespace run to a single space and trims both ends.
#[must_use]
pub fn clean_text(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// [`clean_text`] plus removal of the known title annotations.
///
/// Whitespace is collapsed again after removal so the result is a fixed
/// point: `clean_title(clean_title(x)) == clean_title(x)`.
#[must_use]
pub fn clean_title(value: &str) -> String {
    let mut cleaned = clean_text(value);
    for noise in TITLE_NOISE.iter() {
        if noise.is_match(&cleaned) {
            cleaned = noise.replace_all(&cleaned, "").into_owned();
        }
    }
    clean_text(&cleaned)
}

/// Returns the first run of ASCII digits in `value` as a number, or `0` when
/// there is none. Runs too long for `u64` saturate.
#[must_use]
pub fn extract_number(value: &str) -> u64 {
    let Some(start) = value.find(|c: char| c.is_ascii_digit()) else {
        return 0;
    };
    let digits = &value[start..];
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<u64>().unwrap_or(u64::MAX)
}
