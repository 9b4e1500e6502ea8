//! Ordering helpers shared by the sort stage.

use std::cmp::Ordering;

/// Locale-style string comparison.
///
/// Primary order ignores case; strings that differ only in case put the
/// lower-case form first. No numeric collation: `"10"` sorts before `"2"`.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));

    primary.then_with(|| b.cmp(a))
}

/// Numeric comparison that never fails: NaN compares equal to everything.
pub fn numeric_cmp(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Compare optional keys with `cmp`, placing absent values after present ones.
pub fn absent_last<T, F>(a: Option<T>, b: Option<T>, cmp: F) -> Ordering
where
    F: FnOnce(T, T) -> Ordering,
{
    match (a, b) {
        (Some(a), Some(b)) => cmp(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
