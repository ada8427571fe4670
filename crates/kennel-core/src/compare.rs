//! Side-by-side breed comparison

use serde::Serialize;

use crate::breed::{Breed, CompatibilityKey, Weight};
use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::matcher::find_one;
use crate::validate;

/// One tracked field from both breeds
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldComparison<T> {
    pub first: T,
    pub second: T,
    pub equal: bool,
}

impl<T: PartialEq> FieldComparison<T> {
    fn new(first: T, second: T) -> Self {
        let equal = first == second;
        Self {
            first,
            second,
            equal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityComparison {
    pub children: FieldComparison<Option<bool>>,
    pub other_dogs: FieldComparison<Option<bool>>,
    pub cats: FieldComparison<Option<bool>>,
}

/// Weights are reported raw, ranges have no meaningful equality flag
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightComparison {
    pub first: Weight,
    pub second: Weight,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub first: String,
    pub second: String,
    pub size: FieldComparison<String>,
    pub energy_level: FieldComparison<String>,
    pub trainability: FieldComparison<String>,
    pub shedding: FieldComparison<String>,
    pub lifespan: FieldComparison<String>,
    pub grooming_needs: FieldComparison<String>,
    pub origin: FieldComparison<String>,
    pub compatibility: CompatibilityComparison,
    pub weight: WeightComparison,
}

impl Comparison {
    pub fn between(a: &Breed, b: &Breed) -> Self {
        let flag = |key: CompatibilityKey| {
        FieldComparison::new(a.compatibility_with(key), b.compatibility_with(key))
    };

        Self {
            first: a.name.clone(),
            second: b.name.clone(),
            size: FieldComparison::new(a.size.clone(), b.size.clone()),
            energy_level: FieldComparison::new(a.energy_level.clone(), b.energy_level.clone()),
            trainability: FieldComparison::new(a.trainability.clone(), b.trainability.clone()),
            shedding: FieldComparison::new(a.shedding.clone(), b.shedding.clone()),
            lifespan: FieldComparison::new(a.lifespan.clone(), b.lifespan.clone()),
            grooming_needs: FieldComparison::new(
                a.grooming_needs.clone(),
                b.grooming_needs.clone(),
            ),
            origin: FieldComparison::new(a.origin.clone(), b.origin.clone()),
            compatibility: CompatibilityComparison {
                children: flag(CompatibilityKey::Children),
                other_dogs: flag(CompatibilityKey::OtherDogs),
                cats: flag(CompatibilityKey::Cats),
            },
            weight: WeightComparison {
                first: a.weight,
                second: b.weight,
            },
        }
    }

    /// Names of tracked fields whose values differ
    pub fn differences(&self) -> Vec<&'static str> {
        let fields = [
            ("size", self.size.equal),
            ("energyLevel", self.energy_level.equal),
            ("trainability", self.trainability.equal),
            ("shedding", self.shedding.equal),
            ("lifespan", self.lifespan.equal),
            ("groomingNeeds", self.grooming_needs.equal),
            ("origin", self.origin.equal),
            ("children", self.compatibility.children.equal),
            ("otherDogs", self.compatibility.other_dogs.equal),
            ("cats", self.compatibility.cats.equal),
        ];
        fields
            .into_iter()
            .filter(|(_, equal)| !equal)
            .map(|(name, _)| name)
            .collect()
    }
}

/// Resolve both queries (fuzzy, canonical names) and compare them.
///
/// Fails with [`Error::BreedNotFound`] naming the first query that does not
/// resolve. The second query is not looked up when the first fails.
pub fn compare(catalog: &Catalog, first: &str, second: &str) -> Result<Comparison> {
    validate::non_empty("Breed 1", first)?;
    validate::non_empty("Breed 2", second)?;

    let a = find_one(catalog, first, true, "en", "Breed 1")?
        .ok_or_else(|| Error::BreedNotFound(first.to_string()))?;
    let b = find_one(catalog, second, true, "en", "Breed 2")?
        .ok_or_else(|| Error::BreedNotFound(second.to_string()))?;

    Ok(Comparison::between(a, b))
}
