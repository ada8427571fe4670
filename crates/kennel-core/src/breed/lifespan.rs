//! Lifespan parsing

const UNIT_SUFFIXES: [&str; 4] = ["years", "year", "yrs", "yr"];

/// Parse a lifespan string into the average of its bounds.
///
/// Accepts `"10-12 years"`, `"10 - 12"`, `"10–12 years"` (en dash) and single
/// values such as `"12 years"` or `"12"`. The unit suffix is matched without
/// regard to case and may be abbreviated (`"yrs"`, `"yr"`). Returns `None`
/// when no number can be read.
pub fn parse_lifespan(lifespan: &str) -> Option<f64> {
    let text = lifespan.trim().to_lowercase();
    let text = UNIT_SUFFIXES
        .iter()
        .find_map(|suffix| text.strip_suffix(suffix))
        .unwrap_or(text.as_str())
        .trim();

    if text.is_empty() {
        return None;
    }

    match text.split_once(|c: char| c == '-' || c == '–') {
        Some((low, high)) => {
            let low: u32 = low.trim().parse().ok()?;
            let high: u32 = high.trim().parse().ok()?;
            Some((f64::from(low) + f64::from(high)) / 2.0)
        }
        None => text.parse::<u32>().ok().map(f64::from),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range() {
        assert_eq!(parse_lifespan("10-12 years"), Some(11.0));
        assert_eq!(parse_lifespan("12 - 15 years"), Some(13.5));
        assert_eq!(parse_lifespan("8–10 years"), Some(9.0));
    }

    #[test]
    fn test_single_value() {
        assert_eq!(parse_lifespan("14"), Some(14.0));
        assert_eq!(parse_lifespan("14 years"), Some(14.0));
        assert_eq!(parse_lifespan("1 year"), Some(1.0));
    }

    #[test]
    fn test_unit_suffix_case_and_abbreviation() {
        assert_eq!(parse_lifespan("10-12 Years"), Some(11.0));
        assert_eq!(parse_lifespan("10-12 yrs"), Some(11.0));
        assert_eq!(parse_lifespan("14 YEARS"), Some(14.0));
        assert_eq!(parse_lifespan("1 Yr"), Some(1.0));
    }

    #[test]
    fn test_unparseable() {
        assert_eq!(parse_lifespan(""), None);
        assert_eq!(parse_lifespan("unknown"), None);
        assert_eq!(parse_lifespan("ten-twelve years"), None);
        assert_eq!(parse_lifespan("10-"), None);
    }
}
