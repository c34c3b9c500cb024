//! Locale-aware text ordering.
//!
//! Approximates root-locale collation in three strength levels:
//! base letters (accents and case ignored), then accents, then case with
//! lowercase first. Remaining ties fall back to code point order so the
//! ordering is total.

use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Compare two strings for display ordering.
///
/// ```
/// use std::cmp::Ordering;
/// use todoview_engine::collate;
///
/// assert_eq!(collate("apple", "Buy milk"), Ordering::Less);
/// assert_eq!(collate("Resume", "résumé"), Ordering::Less);
/// ```
pub fn collate(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accented(a).cmp(accented(b)))
        .then_with(|| case_order(a, b))
        .then_with(|| a.cmp(b))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn accented(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn case_order(a: &str, b: &str) -> Ordering {
    a.nfd()
        .zip(b.nfd())
        .find(|(x, y)| x != y)
        .map(|(x, y)| match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => Ordering::Equal,
        })
        .unwrap_or(Ordering::Equal)
}
