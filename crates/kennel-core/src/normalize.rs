//! String canonicalization shared by every text comparison

/// Trim surrounding whitespace and lowercase.
///
/// Idempotent: `normalize(&normalize(s)) == normalize(s)`.
#[inline]
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}
