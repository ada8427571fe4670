//! Logging setup.
//!
//! Provides consistent logging setup across Kennel components.

use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Error, Result};

/// Initialize tracing with Kennel defaults.
///
/// Sets up tracing-subscriber with:
/// - Environment filter (RUST_LOG)
/// - Compact format suitable for terminal output
///
/// Panics if a global subscriber is already set, see [`try_init_with_filter`].
pub fn init() {
    init_with_filter("info");
}

/// Initialize tracing with a custom default filter.
pub fn init_with_filter(default_filter: &str) {
    subscriber(default_filter).init();
}

/// Like [`init_with_filter`], but errors if a subscriber is already set.
pub fn try_init_with_filter(default_filter: &str) -> Result<()> {
    subscriber(default_filter)
        .try_init()
        .map_err(|e| Error::Tracing(e.to_string()))
}

fn subscriber(default_filter: &str) -> impl SubscriberInitExt {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails_gracefully() {
        let _ = try_init_with_filter("debug");
        assert!(matches!(
            try_init_with_filter("debug"),
            Err(Error::Tracing(_))
        ));
    }
}
