//! Argument validators
//!
//! Every engine operation runs these before touching the catalog, so a bad
//! argument fails fast and never yields partial scan results.

use crate::breed::CompatibilityKey;
use crate::error::{Error, Result};

/// Require a string that is non-empty after trimming.
pub fn non_empty<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    if value.trim().is_empty() {
        return Err(Error::EmptyString {
            field: field.to_string(),
        });
    }
    Ok(value)
}

/// Require a finite number (rejects NaN and infinities).
pub fn number(field: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::InvalidType {
            field: field.to_string(),
            expected: "a finite number",
        });
    }
    Ok(value)
}

/// Order a numeric pair so the first element is the smaller one.
pub fn sorted_range(min: f64, max: f64) -> (f64, f64) {
    if min <= max {
        (min, max)
    } else {
        (max, min)
    }
}

/// Whitelist check for compatibility keys.
pub fn compatibility_key(key: &str) -> Result<CompatibilityKey> {
    non_empty("Compatibility key", key)?;
    key.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("Breed name", " pug ").unwrap(), " pug ");
        assert_eq!(
            non_empty("Breed name", "  \t"),
            Err(Error::EmptyString {
                field: "Breed name".to_string()
            })
        );
    }

    #[test]
    fn test_number() {
        assert_eq!(number("Minimum weight", 12.5).unwrap(), 12.5);
        assert!(matches!(
            number("Minimum weight", f64::NAN),
            Err(Error::InvalidType { .. })
        ));
        assert!(number("Maximum weight", f64::INFINITY).is_err());
    }

    #[test]
    fn test_sorted_range() {
        assert_eq!(sorted_range(50.0, 30.0), (30.0, 50.0));
        assert_eq!(sorted_range(30.0, 50.0), (30.0, 50.0));
        assert_eq!(sorted_range(7.0, 7.0), (7.0, 7.0));
    }

    #[test]
    fn test_compatibility_key() {
        assert_eq!(compatibility_key("cats").unwrap(), CompatibilityKey::Cats);
        assert!(matches!(
            compatibility_key(""),
            Err(Error::EmptyString { .. })
        ));
        assert!(matches!(
            compatibility_key("birds"),
            Err(Error::InvalidCompatibilityKey(_))
        ));
    }
}
