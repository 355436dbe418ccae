//! Taxonomy detection and wheel-size extraction from cleaned product titles.
//!
//! Detection is plain case-sensitive substring matching against a fixed
//! Persian vocabulary. Size extraction scans bytes by hand; word boundaries
//! are ASCII-only, so Persian letters never block a match.

use pedalpeak_core::{Category, ItemType};

/// Label that precedes an explicit wheel size ("size").
const SIZE_LABEL: &str = "سایز";

/// Common wheel sizes recognized without a label, in match-priority order.
const WHEEL_SIZES: [(&str, f64); 7] = [
    ("12", 12.0),
    ("16", 16.0),
    ("20", 20.0),
    ("24", 24.0),
    ("26", 26.0),
    ("27.5", 27.5),
    ("29", 29.0),
];

const BICYCLE: &str = "دوچرخه";
const SCOOTER: &str = "اسکوتر";
const MOTOR: &str = "موتور";
const SKATE: &str = "اسکیت";

const FOLDING: &str = "تاشو";
/// mountain, off-road, hydraulic, gear
const MOUNTAIN_HINTS: [&str; 4] = ["کوهستان", "آفرود", "هیدرولیک", "دنده"];
/// girls, boys
const KIDS_HINTS: [&str; 2] = ["دخترانه", "پسرانه"];

/// Sizes at or above this are treated as mountain bikes.
const MOUNTAIN_MIN_SIZE: f64 = 27.0;
/// Sizes at or below this are treated as kids' bikes.
const KIDS_MAX_SIZE: f64 = 20.0;

/// Infers the item type. First match wins: bicycle, scooter, ride-on
/// (motor), board (skate), otherwise other.
#[must_use]
pub fn detect_item_type(title: &str) -> ItemType {
    if title.contains(BICYCLE) {
        ItemType::Bicycle
    } else if title.contains(SCOOTER) {
        ItemType::Scooter
    } else if title.contains(MOTOR) {
        ItemType::RideOn
    } else if title.contains(SKATE) {
        ItemType::Board
    } else {
        ItemType::Other
    }
}

/// Infers a bicycle's sub-category from keywords and wheel size.
///
/// Order: folding keyword; mountain keywords or size >= 27; size <= 20 or
/// kids keywords; otherwise adult.
#[must_use]
pub fn detect_bike_category(title: &str, size: Option<f64>) -> Category {
    if title.contains(FOLDING) {
        return Category::Folding;
    }

    if MOUNTAIN_HINTS.iter().any(|hint| title.contains(hint))
        || size.is_some_and(|s| s >= MOUNTAIN_MIN_SIZE)
    {
        return Category::Mountain;
    }

    if size.is_some_and(|s| s <= KIDS_MAX_SIZE) || KIDS_HINTS.iter().any(|hint| title.contains(hint))
    {
        return Category::Kids;
    }

    Category::Adult
}

/// Extracts a wheel size from a title.
///
/// Tries `"سایز <n>"` first (decimals allowed, whitespace optional), then the
/// first bare whitelisted wheel size delimited by ASCII word boundaries.
/// A size of zero is treated as unknown.
#[must_use]
pub fn parse_size(title: &str) -> Option<f64> {
    parse_labeled_size(title)
        .or_else(|| parse_bare_wheel_size(title))
        .filter(|size| *size > 0.0)
}

/// Returns the number following the first size label that is followed by one.
fn parse_labeled_size(title: &str) -> Option<f64> {
    title.match_indices(SIZE_LABEL).find_map(|(pos, label)| {
        let rest = title[pos + label.len()..].trim_start();
        leading_decimal(rest)
    })
}

/// Parses `[0-9]+(\.[0-9]+)?` at the start of `s`.
fn leading_decimal(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let int_end = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    if int_end == 0 {
        return None;
    }

    let mut end = int_end;
    if bytes.get(int_end) == Some(&b'.') {
        let frac_len = bytes[int_end + 1..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if frac_len > 0 {
            end = int_end + 1 + frac_len;
        }
    }

    s[..end].parse::<f64>().ok()
}

fn parse_bare_wheel_size(title: &str) -> Option<f64> {
    let bytes = title.as_bytes();

    for start in 0..bytes.len() {
        if !bytes[start].is_ascii_digit() {
            continue;
        }
        if start > 0 && is_ascii_word(bytes[start - 1]) {
            continue;
        }

        let rest = &bytes[start..];
        for (token, value) in WHEEL_SIZES {
            if rest.starts_with(token.as_bytes())
                && rest.get(token.len()).is_none_or(|b| !is_ascii_word(*b))
            {
                return Some(value);
            }
        }
    }

    None
}

/// ASCII "word" bytes: letters, digits, underscore. Multi-byte (e.g. Persian)
/// characters never count, so `"دوچرخه26"` still yields 26.
fn is_ascii_word(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
