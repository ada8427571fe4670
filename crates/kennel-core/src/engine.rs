//! BreedEngine - the query facade over one catalog

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::debug;

use crate::breed::Breed;
use crate::catalog::Catalog;
use crate::compare::{self, Comparison};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::filter::{self, BreedField};
use crate::fuzzy::{self, SearchHit};
use crate::matcher::{self, BREED_NAME};
use crate::recommend::{self, RecommendationCriteria};
use crate::validate;

/// Read-only query engine.
///
/// Owns a shared handle to an immutable catalog, so several engines (one per
/// test, say) can share a catalog or hold independent ones. Every method is
/// a pure read and the engine is `Send + Sync`.
#[derive(Debug, Clone)]
pub struct BreedEngine {
    catalog: Arc<Catalog>,
    config: EngineConfig,
}

impl BreedEngine {
    /// Create an engine with default configuration
    pub fn new(catalog: Catalog) -> Self {
        Self::with_config(catalog, EngineConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(catalog: Catalog, config: EngineConfig) -> Self {
        Self::shared(Arc::new(catalog), config)
    }

    /// Create over a catalog already shared with other engines
    pub fn shared(catalog: Arc<Catalog>, config: EngineConfig) -> Self {
        debug!(
            breeds = catalog.len(),
            fingerprint = catalog.fingerprint(),
            "engine ready"
        );
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn shared_catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Resolve one breed by name. See [`matcher::find_one`].
    pub fn find_one(&self, query: &str, fuzzy: bool, lang: &str) -> Result<Option<&Breed>> {
        self.find_with_label(BREED_NAME, query, fuzzy, lang)
    }

    /// Fuzzy lookup in the configured default language
    pub fn find(&self, query: &str) -> Result<Option<&Breed>> {
        self.find_one(query, true, &self.config.default_lang)
    }

    /// Like [`Self::find_one`], with a caller-supplied label for errors
    pub fn find_with_label(
        &self,
        label: &str,
        query: &str,
        fuzzy: bool,
        lang: &str,
    ) -> Result<Option<&Breed>> {
        let found = matcher::find_one(&self.catalog, query, fuzzy, lang, label)?;
        debug!(query, fuzzy, lang, found = ?found.map(|b| &b.name), "find_one");
        Ok(found)
    }

    /// Alternate name of the breed matching `query`, for `lang`
    pub fn alternate_name(&self, query: &str, lang: &str) -> Result<Option<&str>> {
        validate::non_empty("Language", lang)?;
        Ok(self
            .find(query)?
            .and_then(|b| b.alternate_names.get(lang))
            .map(String::as_str))
    }

    /// Every language tag with at least one alternate name, sorted
    pub fn languages(&self) -> Vec<&str> {
        let langs: BTreeSet<&str> = self
            .catalog
            .iter()
            .flat_map(|b| b.alternate_names.keys().map(String::as_str))
            .collect();
        langs.into_iter().collect()
    }

    pub fn by_weight_range(&self, min: f64, max: f64, unit: &str) -> Result<Vec<&Breed>> {
        let result = filter::by_weight_range(&self.catalog, min, max, unit)?;
        debug!(min, max, unit, count = result.len(), "by_weight_range");
        Ok(result)
    }

    /// Weight filter in the configured default unit
    pub fn by_weight_range_default(&self, min: f64, max: f64) -> Result<Vec<&Breed>> {
        self.by_weight_range(min, max, &self.config.default_unit)
    }

    /// Ranked search hits with their tier and distance
    pub fn search_ranked(&self, term: &str, max_distance: usize) -> Result<Vec<SearchHit<'_>>> {
        let hits = fuzzy::search(
            &self.catalog,
            term,
            max_distance,
            self.config.parallel_threshold,
        )?;
        debug!(term, max_distance, count = hits.len(), "search");
        Ok(hits)
    }

    /// Containment matches first, then edit-distance matches by distance
    pub fn search(&self, term: &str, max_distance: usize) -> Result<Vec<&Breed>> {
        Ok(self
            .search_ranked(term, max_distance)?
            .into_iter()
            .map(|hit| hit.breed)
            .collect())
    }

    /// Search with the configured default edit distance
    pub fn search_default(&self, term: &str) -> Result<Vec<&Breed>> {
        self.search(term, self.config.default_max_distance)
    }

    pub fn by_origin(&self, country: &str) -> Result<Vec<&Breed>> {
        let result = filter::by_origin(&self.catalog, country)?;
        debug!(country, count = result.len(), "by_origin");
        Ok(result)
    }

    pub fn by_size(&self, size: &str) -> Result<Vec<&Breed>> {
        self.by_field(BreedField::Size, size)
    }

    pub fn by_energy_level(&self, level: &str) -> Result<Vec<&Breed>> {
        self.by_field(BreedField::EnergyLevel, level)
    }

    pub fn by_trainability(&self, trainability: &str) -> Result<Vec<&Breed>> {
        self.by_field(BreedField::Trainability, trainability)
    }

    pub fn by_shedding(&self, shedding: &str) -> Result<Vec<&Breed>> {
        self.by_field(BreedField::Shedding, shedding)
    }

    pub fn by_grooming_needs(&self, needs: &str) -> Result<Vec<&Breed>> {
        self.by_field(BreedField::GroomingNeeds, needs)
    }

    pub fn by_field(&self, field: BreedField, value: &str) -> Result<Vec<&Breed>> {
        let result = filter::by_field(&self.catalog, field, value)?;
        debug!(field = ?field, value, count = result.len(), "by_field");
        Ok(result)
    }

    pub fn by_temperament(&self, trait_name: &str) -> Result<Vec<&Breed>> {
        let result = filter::by_temperament(&self.catalog, trait_name)?;
        debug!(trait_name, count = result.len(), "by_temperament");
        Ok(result)
    }

    /// `key` must be one of "children", "otherDogs", "cats"
    pub fn by_compatibility(&self, key: &str, value: bool) -> Result<Vec<&Breed>> {
        let key = validate::compatibility_key(key)?;
        let result = filter::by_compatibility(&self.catalog, key, value);
        debug!(%key, value, count = result.len(), "by_compatibility");
        Ok(result)
    }

    pub fn recommend(&self, criteria: &RecommendationCriteria) -> Result<Vec<&Breed>> {
        let result = recommend::recommend(&self.catalog, criteria)?;
        debug!(?criteria, count = result.len(), "recommend");
        Ok(result)
    }

    pub fn compare(&self, first: &str, second: &str) -> Result<Comparison> {
        let comparison = compare::compare(&self.catalog, first, second)?;
        debug!(
            first = %comparison.first,
            second = %comparison.second,
            "compare"
        );
        Ok(comparison)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn test_engine() -> BreedEngine {
        BreedEngine::new(Catalog::bundled().unwrap())
    }

    #[test]
    fn test_engine_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BreedEngine>();
    }

    #[test]
    fn test_find_default_language() {
        let engine = test_engine();
        let found = engine.find("Labrador").unwrap();
        assert_eq!(found.map(|b| b.name.as_str()), Some("Labrador Retriever"));
    }

    #[test]
    fn test_find_alternate_language() {
        let engine = test_engine();
        let found = engine.find_one("Caniche", false, "fr").unwrap();
        assert_eq!(found.map(|b| b.name.as_str()), Some("Poodle"));
    }

    #[test]
    fn test_alternate_name() {
        let engine = test_engine();
        assert_eq!(
            engine.alternate_name("German Shepherd", "de").unwrap(),
            Some("Deutscher Schäferhund")
        );
        assert_eq!(engine.alternate_name("Beagle", "de").unwrap(), None);
        assert!(engine.alternate_name("Beagle", " ").is_err());
    }

    #[test]
    fn test_languages() {
        let engine = test_engine();
        let langs = engine.languages();
        assert!(langs.contains(&"fr"));
        assert!(langs.contains(&"ja"));
        assert!(langs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_defaults_from_config() {
        let config = EngineConfig {
            default_unit: "kg".to_string(),
            default_max_distance: 0,
            ..Default::default()
        };
        let engine = BreedEngine::with_config(Catalog::bundled().unwrap(), config);

        let kg = engine.by_weight_range_default(1.0, 3.0).unwrap();
        assert_eq!(
            kg.iter().map(|b| b.name.as_str()).collect::<Vec<_>>(),
            vec!["Chihuahua"]
        );
        assert!(engine.search_default("beagel").unwrap().is_empty());
    }

    #[test]
    fn test_shared_catalog() {
        let engine = test_engine();
        let other = BreedEngine::shared(engine.shared_catalog(), EngineConfig::default());
        assert!(Arc::ptr_eq(
            &engine.shared_catalog(),
            &other.shared_catalog()
        ));
        assert_eq!(other.catalog().len(), engine.catalog().len());
    }

    #[test]
    fn test_by_compatibility_key_validation() {
        let engine = test_engine();
        assert!(matches!(
            engine.by_compatibility("birds", true),
            Err(Error::InvalidCompatibilityKey(_))
        ));
        assert!(!engine
            .by_compatibility("otherDogs", false)
            .unwrap()
            .is_empty());
    }
}
