//! Fuzzy label filtering for client / mandate / service pickers.
//!
//! Both sides go through the same folding: Unicode NFD, combining marks
//! dropped, lowercase. "Gétime" therefore matches "getime" and "GETIME".

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

pub fn normalize_label(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// An empty (or blank) query matches every label.
pub fn matches(query: &str, label: &str) -> bool {
    let needle = normalize_label(query.trim());
    needle.is_empty() || normalize_label(label).contains(&needle)
}

/// Labels matching `query`, in their original order.
pub fn filter_labels<'a, S>(query: &str, labels: &'a [S]) -> Vec<&'a str>
where
    S: AsRef<str>,
{
    let needle = normalize_label(query.trim());
    labels
        .iter()
        .map(|label| label.as_ref())
        .filter(|label| needle.is_empty() || normalize_label(label).contains(&needle))
        .collect()
}
