//! Single-field predicate filters

use crate::breed::{Breed, CompatibilityKey};
use crate::catalog::Catalog;
use crate::error::Result;
use crate::fuzzy::strategies::bidirectional_contains;
use crate::normalize::normalize;
use crate::validate;

/// Categorical fields filtered by normalized equality
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreedField {
    Size,
    EnergyLevel,
    Trainability,
    Shedding,
    GroomingNeeds,
}

impl BreedField {
    pub fn value<'a>(&self, breed: &'a Breed) -> &'a str {
        match self {
            BreedField::Size => &breed.size,
            BreedField::EnergyLevel => &breed.energy_level,
            BreedField::Trainability => &breed.trainability,
            BreedField::Shedding => &breed.shedding,
            BreedField::GroomingNeeds => &breed.grooming_needs,
        }
    }

    /// Display name used in validation errors
    pub fn label(&self) -> &'static str {
        match self {
            BreedField::Size => "Size",
            BreedField::EnergyLevel => "Energy level",
            BreedField::Trainability => "Trainability",
            BreedField::Shedding => "Shedding",
            BreedField::GroomingNeeds => "Grooming needs",
        }
    }
}

/// Breeds whose `field` equals `value` after normalization.
pub fn by_field<'a>(
    catalog: &'a Catalog,
    field: BreedField,
    value: &str,
) -> Result<Vec<&'a Breed>> {
    validate::non_empty(field.label(), value)?;
    let wanted = normalize(value);

    Ok(catalog
        .iter()
        .filter(|breed| normalize(field.value(breed)) == wanted)
        .collect())
}

/// Breeds whose origin and `country` contain one another.
///
/// Handles partial names ("Kingdom") and multi-country origins
/// ("Canada, United Kingdom (England)").
pub fn by_origin<'a>(catalog: &'a Catalog, country: &str) -> Result<Vec<&'a Breed>> {
    validate::non_empty("Country", country)?;
    let wanted = normalize(country);

    Ok(catalog
        .iter()
        .filter(|breed| {
            let origin = normalize(&breed.origin);
            !origin.is_empty() && bidirectional_contains(&origin, &wanted)
        })
        .collect())
}

/// Breeds listing `trait_name` among their temperament traits.
pub fn by_temperament<'a>(catalog: &'a Catalog, trait_name: &str) -> Result<Vec<&'a Breed>> {
    validate::non_empty("Temperament", trait_name)?;
    let wanted = normalize(trait_name);

    Ok(catalog
        .iter()
        .filter(|breed| breed.temperament.iter().any(|t| normalize(t) == wanted))
        .collect())
}

/// Breeds whose compatibility flag for `key` is exactly `value`.
///
/// Breeds without compatibility data, or without that flag, are excluded.
pub fn by_compatibility<'a>(
    catalog: &'a Catalog,
    key: CompatibilityKey,
    value: bool,
) -> Vec<&'a Breed> {
    catalog
        .iter()
        .filter(|breed| breed.compatibility_with(key) == Some(value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breed::{BreedBuilder, Compatibility};
    use crate::error::Error;

    fn test_catalog() -> Catalog {
        Catalog::new(vec![
            BreedBuilder::new("Labrador Retriever")
                .origin("Canada, United Kingdom (England)")
                .size("large")
                .energy_level("high")
                .temperament(["Friendly", "Outgoing"])
                .compatibility(Compatibility::new(true, true, true))
                .build(),
            BreedBuilder::new("Beagle")
                .origin("United Kingdom (England)")
                .size("Small")
                .energy_level("high")
                .temperament(["Curious", "Friendly"])
                .compatibility(Compatibility::new(true, true, false))
                .build(),
            BreedBuilder::new("Shiba Inu")
                .origin("Japan")
                .size("small")
                .temperament(["Alert"])
                .build(),
        ])
        .unwrap()
    }

    fn names(breeds: &[&Breed]) -> Vec<String> {
        breeds.iter().map(|b| b.name.clone()).collect()
    }

    #[test]
    fn test_by_field_case_insensitive() {
        let catalog = test_catalog();
        let result = by_field(&catalog, BreedField::Size, " SMALL").unwrap();
        assert_eq!(names(&result), vec!["Beagle", "Shiba Inu"]);
    }

    #[test]
    fn test_by_field_no_partial() {
        let catalog = test_catalog();
        let result = by_field(&catalog, BreedField::EnergyLevel, "hi").unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_by_origin_partial_and_multi() {
        let catalog = test_catalog();
        assert_eq!(
            names(&by_origin(&catalog, "england").unwrap()),
            vec!["Labrador Retriever", "Beagle"]
        );
        assert_eq!(
            names(&by_origin(&catalog, "Canada").unwrap()),
            vec!["Labrador Retriever"]
        );
        assert_eq!(
            names(&by_origin(&catalog, "JAPAN").unwrap()),
            vec!["Shiba Inu"]
        );
    }

    #[test]
    fn test_by_temperament() {
        let catalog = test_catalog();
        let result = by_temperament(&catalog, "friendly").unwrap();
        assert_eq!(names(&result), vec!["Labrador Retriever", "Beagle"]);
        assert!(by_temperament(&catalog, "friend").unwrap().is_empty());
    }

    #[test]
    fn test_by_compatibility_excludes_missing() {
        let catalog = test_catalog();
        assert_eq!(
            names(&by_compatibility(&catalog, CompatibilityKey::Cats, false)),
            vec!["Beagle"]
        );
        assert_eq!(
            names(&by_compatibility(&catalog, CompatibilityKey::Children, true)),
            vec!["Labrador Retriever", "Beagle"]
        );
    }

    #[test]
    fn test_blank_values_rejected() {
        let catalog = test_catalog();
        assert_eq!(
            by_field(&catalog, BreedField::Shedding, ""),
            Err(Error::EmptyString {
                field: "Shedding".to_string()
            })
        );
        assert!(by_origin(&catalog, " ").is_err());
        assert!(by_temperament(&catalog, "").is_err());
    }
}
