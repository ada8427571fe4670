//! Breed catalog
//!
//! An ordered, immutable collection of breeds. Catalog order is the
//! tie-break for every operation, so it is preserved exactly as loaded.
//!
//! # Example
//!
//! ```rust
//! use kennel_core::catalog::Catalog;
//!
//! let catalog = Catalog::from_json(r#"["Pug", {"name": "Beagle", "size": "medium"}]"#).unwrap();
//! assert_eq!(catalog.names(), vec!["Pug", "Beagle"]);
//! ```

mod loader;

use ahash::AHasher;
use std::hash::{Hash, Hasher};

use crate::breed::Breed;
use crate::error::{Error, Result};

const BUNDLED_CATALOG: &str = include_str!("../../data/breeds.json");

/// Immutable breed collection, validated at construction
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    breeds: Vec<Breed>,
    fingerprint: String,
}

impl Catalog {
    /// Build a catalog, enforcing non-emptiness and non-blank names.
    pub fn new(breeds: Vec<Breed>) -> Result<Self> {
        if breeds.is_empty() {
            return Err(Error::InvalidCatalog("catalog is empty".to_string()));
        }
        if let Some(idx) = breeds.iter().position(|b| b.name.trim().is_empty()) {
            return Err(Error::InvalidCatalog(format!(
                "breed at index {} has a blank name",
                idx
            )));
        }

        let fingerprint = compute_fingerprint(&breeds);
        Ok(Self {
            breeds,
            fingerprint,
        })
    }

    /// Decode a JSON array of breeds (bare names or records).
    pub fn from_json(json: &str) -> Result<Self> {
        Self::new(loader::parse_breeds(json)?)
    }

    /// The catalog shipped with this crate
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_CATALOG)
    }

    pub fn breeds(&self) -> &[Breed] {
        &self.breeds
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Breed> {
        self.breeds.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Breed> {
        self.breeds.get(index)
    }

    pub fn len(&self) -> usize {
        self.breeds.len()
    }

    /// Always false for a constructed catalog
    pub fn is_empty(&self) -> bool {
        self.breeds.is_empty()
    }

    /// Canonical names in catalog order
    pub fn names(&self) -> Vec<&str> {
        self.breeds.iter().map(|b| b.name.as_str()).collect()
    }

    /// Hash of the breed names, in order. Comparable only within one build,
    /// ahash output differs across versions and platforms
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Breed;
    type IntoIter = std::slice::Iter<'a, Breed>;

    fn into_iter(self) -> Self::IntoIter {
        self.breeds.iter()
    }
}

fn compute_fingerprint(breeds: &[Breed]) -> String {
    let mut hasher = AHasher::default();
    for breed in breeds {
        breed.name.hash(&mut hasher);
    }
    format!("{:016x}", hasher.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breed::BreedBuilder;

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            Catalog::new(Vec::new()),
            Err(Error::InvalidCatalog(_))
        ));
    }

    #[test]
    fn test_rejects_blank_name() {
        let breeds = vec![
            BreedBuilder::new("Pug").build(),
            BreedBuilder::new("  ").build(),
        ];
        let err = Catalog::new(breeds).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidCatalog("breed at index 1 has a blank name".to_string())
        );
    }

    #[test]
    fn test_preserves_order() {
        let catalog = Catalog::new(vec![
            BreedBuilder::new("Whippet").build(),
            BreedBuilder::new("Akita").build(),
        ])
        .unwrap();
        assert_eq!(catalog.names(), vec!["Whippet", "Akita"]);
        assert_eq!(catalog.get(1).map(|b| b.name.as_str()), Some("Akita"));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_fingerprint_tracks_names() {
        let a = Catalog::new(vec![BreedBuilder::new("Pug").build()]).unwrap();
        let b = Catalog::new(vec![BreedBuilder::new("Pug").size("small").build()]).unwrap();
        let c = Catalog::new(vec![BreedBuilder::new("Boxer").build()]).unwrap();

        assert_eq!(a.fingerprint().len(), 16);
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_ne!(a.fingerprint(), c.fingerprint());
    }

    #[test]
    fn test_bundled_loads() {
        let catalog = Catalog::bundled().unwrap();
        assert!(catalog.len() >= 10);
        assert!(catalog.names().contains(&"Labrador Retriever"));
    }
}
