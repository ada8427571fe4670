//! Matching strategies
//!
//! Platform-specific implementations:
//! - `simd`: substring search via memchr
//! - otherwise: pure Rust `str::contains`
//!
//! All functions expect already-normalized input.

use strsim::levenshtein;

/// Substring test, SIMD-accelerated when the `simd` feature is on
#[inline]
pub fn contains(haystack: &str, needle: &str) -> bool {
    #[cfg(feature = "simd")]
    {
        memchr::memmem::find(haystack.as_bytes(), needle.as_bytes()).is_some()
    }

    #[cfg(not(feature = "simd"))]
    {
        haystack.contains(needle)
    }
}

/// Either string contains the other.
///
/// Lets a short query match inside a long name ("retriever" in
/// "labrador retriever") and a long query contain a short name
/// ("pug puppy" contains "pug").
#[inline]
pub fn bidirectional_contains(a: &str, b: &str) -> bool {
    contains(a, b) || contains(b, a)
}

/// Levenshtein distance counted in chars (insert, delete, substitute).
#[inline]
pub fn edit_distance(source: &str, target: &str) -> usize {
    levenshtein(source, target)
}

/// Edit distance if it is at most `max_distance`, otherwise `None`.
///
/// The char-length difference is a lower bound on the distance, so pairs
/// that differ too much in length skip the DP table entirely.
#[inline]
pub fn bounded_edit_distance(source: &str, target: &str, max_distance: usize) -> Option<usize> {
    let len_diff = source.chars().count().abs_diff(target.chars().count());
    if len_diff > max_distance {
        return None;
    }
    let dist = edit_distance(source, target);
    (dist <= max_distance).then_some(dist)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        assert!(contains("labrador retriever", "retriever"));
        assert!(!contains("beagle", "poodle"));
        assert!(contains("pug", ""));
    }

    #[test]
    fn test_bidirectional() {
        assert!(bidirectional_contains("labrador retriever", "labrador"));
        assert!(bidirectional_contains("pug", "pug puppy"));
        assert!(!bidirectional_contains(
            "lab retriever",
            "labrador retriever"
        ));
    }

    #[test]
    fn test_edit_distance_basics() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("", "beagle"), 6);
        assert_eq!(edit_distance("beagle", ""), 6);
        assert_eq!(edit_distance("husky", "husky"), 0);
        assert_eq!(edit_distance("daschund", "dachshund"), 3);
    }

    #[test]
    fn test_edit_distance_symmetric() {
        let pairs = [
            ("corgi", "corgy"),
            ("akita", "akitas"),
            ("", "x"),
            ("boxer", "poodle"),
        ];
        for (a, b) in pairs {
            assert_eq!(edit_distance(a, b), edit_distance(b, a));
        }
    }

    #[test]
    fn test_edit_distance_counts_chars() {
        // Multi-byte chars count as one edit
        assert_eq!(edit_distance("épagneul", "epagneul"), 1);
    }

    #[test]
    fn test_bounded() {
        assert_eq!(bounded_edit_distance("daschund", "dachshund", 3), Some(3));
        assert_eq!(bounded_edit_distance("daschund", "dachshund", 2), None);
        assert_eq!(bounded_edit_distance("pug", "saint bernard", 2), None);
        assert_eq!(bounded_edit_distance("pug", "pug", 0), Some(0));
    }
}
