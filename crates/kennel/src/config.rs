//! Engine configuration from the environment
//!
//! Environment variables:
//! - `KENNEL_CATALOG`: path to a catalog JSON file (default: bundled catalog)
//! - `KENNEL_MAX_DISTANCE`: default search edit distance (default: 2)
//! - `KENNEL_DEFAULT_UNIT`: default weight unit alias (default: lbs)
//! - `KENNEL_DEFAULT_LANG`: default lookup language (default: en)
//! - `KENNEL_PARALLEL_THRESHOLD`: catalog size for parallel search (default: 1000)

use std::path::PathBuf;
use std::str::FromStr;

use kennel_core::{EngineConfig, WeightUnit};

use crate::error::{Error, Result};

pub const CATALOG_VAR: &str = "KENNEL_CATALOG";
pub const MAX_DISTANCE_VAR: &str = "KENNEL_MAX_DISTANCE";
pub const DEFAULT_UNIT_VAR: &str = "KENNEL_DEFAULT_UNIT";
pub const DEFAULT_LANG_VAR: &str = "KENNEL_DEFAULT_LANG";
pub const PARALLEL_THRESHOLD_VAR: &str = "KENNEL_PARALLEL_THRESHOLD";

/// Build an [`EngineConfig`] from the process environment.
pub fn from_env() -> Result<EngineConfig> {
    from_lookup(|key| std::env::var(key).ok())
}

/// Catalog path from `KENNEL_CATALOG`, if set and non-blank
pub fn catalog_path_from<F>(lookup: F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(CATALOG_VAR)
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
}

/// Build an [`EngineConfig`] from an arbitrary variable source.
///
/// Unset variables keep their defaults. Values that do not parse fail with
/// [`Error::Config`] naming the variable.
pub fn from_lookup<F>(lookup: F) -> Result<EngineConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = EngineConfig::default();

    if let Some(v) = parse_var(&lookup, MAX_DISTANCE_VAR)? {
        config.default_max_distance = v;
    }
    if let Some(v) = parse_var(&lookup, PARALLEL_THRESHOLD_VAR)? {
        config.parallel_threshold = v;
    }
    if let Some(unit) = lookup(DEFAULT_UNIT_VAR) {
        WeightUnit::resolve(&unit)
            .map_err(|e| Error::Config(format!("{}: {}", DEFAULT_UNIT_VAR, e)))?;
        config.default_unit = unit;
    }
    if let Some(lang) = lookup(DEFAULT_LANG_VAR) {
        let lang = lang.trim();
        if lang.is_empty() {
            return Err(Error::Config(format!("{} is blank", DEFAULT_LANG_VAR)));
        }
        config.default_lang = lang.to_string();
    }

    Ok(config)
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| Error::Config(format!("{} has invalid value '{}'", key, raw))),
        None => Ok(None),
    }
}
