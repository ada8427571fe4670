//! Engine configuration

/// Defaults applied when an operation is called without explicit arguments
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Edit-distance ceiling for [`crate::BreedEngine::search_default`]
    pub default_max_distance: usize,
    /// Unit alias for [`crate::BreedEngine::by_weight_range_default`]
    pub default_unit: String,
    /// Language tag for [`crate::BreedEngine::find`]
    pub default_lang: String,
    /// Catalog size at which the fuzzy pass goes parallel (`parallel` feature)
    pub parallel_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_max_distance: 2,
            default_unit: "lbs".to_string(),
            default_lang: "en".to_string(),
            parallel_threshold: 1000,
        }
    }
}
