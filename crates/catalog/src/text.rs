//! Case-insensitive string matching shared by lookups and feed filters.
//!
//! Every helper lowercases one `char` at a time, so "ÉCONOMIE" matches
//! "économie" and a word-final "Σ" folds to "σ" like any other.

/// `a == b` ignoring case, without allocating.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Whether `haystack` contains `needle_lower`, ignoring case.
///
/// `needle_lower` must already be lowercased (see [`fold_case`]) so that a
/// search over many titles lowercases the query only once.
pub fn contains_folded(haystack: &str, needle_lower: &str) -> bool {
    fold_case(haystack).contains(needle_lower)
}

/// Lowercase form used as the needle for [`contains_folded`].
pub fn fold_case(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}
