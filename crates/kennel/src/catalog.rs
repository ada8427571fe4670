//! Catalog loading from disk

use std::fs;
use std::path::Path;

use kennel_core::{BreedEngine, Catalog, EngineConfig};
use tracing::info;

use crate::config;
use crate::error::Result;

/// Read and validate a catalog JSON file.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)?;
    let catalog = Catalog::from_json(&json)?;
    info!(
        path = %path.display(),
        breeds = catalog.len(),
        fingerprint = catalog.fingerprint(),
        "catalog loaded"
    );
    Ok(catalog)
}

/// Load a catalog file and wrap it in an engine.
pub fn load_engine(path: impl AsRef<Path>, config: EngineConfig) -> Result<BreedEngine> {
    Ok(BreedEngine::with_config(load_catalog(path)?, config))
}

/// Engine configured from `KENNEL_*` variables.
///
/// Uses the catalog at `KENNEL_CATALOG` when set, the bundled one otherwise.
pub fn engine_from_env() -> Result<BreedEngine> {
    engine_from_lookup(|key| std::env::var(key).ok())
}

/// Same as [`engine_from_env`], reading variables through `lookup`.
pub fn engine_from_lookup<F>(lookup: F) -> Result<BreedEngine>
where
    F: Fn(&str) -> Option<String>,
{
    let config = config::from_lookup(&lookup)?;
    match config::catalog_path_from(&lookup) {
        Some(path) => load_engine(path, config),
        None => {
            let catalog = Catalog::bundled()?;
            info!(breeds = catalog.len(), "using bundled catalog");
            Ok(BreedEngine::with_config(catalog, config))
        }
    }
}
