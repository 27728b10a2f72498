//! Chapter and verse numeral parsing
//!
//! Verse text is a single verse (`7`) or a bridge (`3-5`). Bridges accept a
//! hyphen, en dash or em dash and tolerate surrounding whitespace. Trailing
//! segment letters (`4a`, `4b-6`) are ignored. Chapter text is a single
//! integer.

/// Bridge separators accepted between the first and last verse
const BRIDGE_SEPARATORS: [char; 3] = ['-', '\u{2013}', '\u{2014}'];

/// Parse verse text into `(first, last)`
///
/// Returns `None` for text without a leading number or for verse 0. A
/// bridge whose last verse is before its first collapses to the first.
#[must_use]
pub fn parse_verse_bridge(text: &str) -> Option<(u16, u16)> {
    let text = text.trim();
    let (first, last) = match text.split_once(BRIDGE_SEPARATORS) {
        Some((first, last)) => (leading_number(first)?, leading_number(last)),
        None => (leading_number(text)?, None),
    };

    if first == 0 {
        return None;
    }

    let last = last.filter(|&last| last >= first).unwrap_or(first);
    Some((first, last))
}

/// Parse chapter text
///
/// Returns `None` for anything but a positive integer.
#[must_use]
pub fn parse_chapter(text: &str) -> Option<u16> {
    let text = text.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok().filter(|&chapter| chapter > 0)
}

/// Leading ASCII digits of `text` as a number
fn leading_number(text: &str) -> Option<u16> {
    let text = text.trim();
    let digits = text.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    text[..digits].parse().ok()
}
