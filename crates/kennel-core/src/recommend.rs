//! Conjunctive recommendation filter
//!
//! Every criteria field is optional. An absent field imposes no constraint,
//! which is different from a `false` or zero constraint. A breed is
//! recommended only when it satisfies every supplied field.

use serde::{Deserialize, Serialize};

use crate::breed::{parse_lifespan, Breed, CompatibilityKey, WeightUnit};
use crate::catalog::Catalog;
use crate::error::Result;
use crate::validate;

/// Sparse recommendation criteria
///
/// Scalar fields are compared verbatim against the stored value (no case
/// folding), so callers pass canonical enum values such as `"large"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecommendationCriteria {
    pub size: Option<String>,
    pub energy_level: Option<String>,
    pub trainability: Option<String>,
    pub shedding: Option<String>,
    pub grooming_needs: Option<String>,
    pub origin: Option<String>,
    pub compatibility: Option<CompatibilityCriteria>,
    pub weight_range: Option<WeightCriteria>,
    pub min_lifespan: Option<f64>,
}

/// Per-flag compatibility constraints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompatibilityCriteria {
    pub children: Option<bool>,
    pub other_dogs: Option<bool>,
    pub cats: Option<bool>,
}

impl CompatibilityCriteria {
    fn constraints(&self) -> impl Iterator<Item = (CompatibilityKey, bool)> + '_ {
        CompatibilityKey::ALL.into_iter().filter_map(|key| {
            let wanted = match key {
                CompatibilityKey::Children => self.children,
                CompatibilityKey::OtherDogs => self.other_dogs,
                CompatibilityKey::Cats => self.cats,
            };
            wanted.map(|w| (key, w))
        })
    }
}

/// Weight window. Bounds are used as given and `unit` must be "lbs" or "kgs".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightCriteria {
    pub min: f64,
    pub max: f64,
    pub unit: String,
}

impl RecommendationCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn energy_level(mut self, level: impl Into<String>) -> Self {
        self.energy_level = Some(level.into());
        self
    }

    pub fn trainability(mut self, trainability: impl Into<String>) -> Self {
        self.trainability = Some(trainability.into());
        self
    }

    pub fn shedding(mut self, shedding: impl Into<String>) -> Self {
        self.shedding = Some(shedding.into());
        self
    }

    pub fn grooming_needs(mut self, needs: impl Into<String>) -> Self {
        self.grooming_needs = Some(needs.into());
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn compatibility(mut self, compatibility: CompatibilityCriteria) -> Self {
        self.compatibility = Some(compatibility);
        self
    }

    pub fn weight_range(mut self, min: f64, max: f64, unit: impl Into<String>) -> Self {
        self.weight_range = Some(WeightCriteria {
            min,
            max,
            unit: unit.into(),
        });
        self
    }

    pub fn min_lifespan(mut self, years: f64) -> Self {
        self.min_lifespan = Some(years);
        self
    }
}

/// Validated form of the criteria, resolved once before the scan
struct Resolved<'c> {
    criteria: &'c RecommendationCriteria,
    weight: Option<(WeightUnit, f64, f64)>,
}

/// All breeds satisfying every supplied criterion, in catalog order.
pub fn recommend<'a>(
    catalog: &'a Catalog,
    criteria: &RecommendationCriteria,
) -> Result<Vec<&'a Breed>> {
    let weight = match &criteria.weight_range {
        Some(range) => Some((
            WeightUnit::strict(&range.unit)?,
            validate::number("Minimum weight", range.min)?,
            validate::number("Maximum weight", range.max)?,
        )),
        None => None,
    };
    if let Some(years) = criteria.min_lifespan {
        validate::number("Minimum lifespan", years)?;
    }

    let resolved = Resolved { criteria, weight };
    Ok(catalog
        .iter()
        .filter(|b| matches_criteria(b, &resolved))
        .collect())
}

fn matches_criteria(breed: &Breed, resolved: &Resolved<'_>) -> bool {
    let criteria = resolved.criteria;

    let scalars = [
        (&criteria.size, &breed.size),
        (&criteria.energy_level, &breed.energy_level),
        (&criteria.trainability, &breed.trainability),
        (&criteria.shedding, &breed.shedding),
        (&criteria.grooming_needs, &breed.grooming_needs),
        (&criteria.origin, &breed.origin),
    ];
    for (wanted, actual) in scalars {
        if let Some(wanted) = wanted {
            if wanted != actual {
                return false;
            }
        }
    }

    // Check compatibility
    if let Some(compat) = &criteria.compatibility {
        for (key, wanted) in compat.constraints() {
            if breed.compatibility_with(key) != Some(wanted) {
                return false;
            }
        }
    }

    // Check weight
    if let Some((unit, lo, hi)) = resolved.weight {
        match breed.weight.for_unit(unit) {
            Some(range) if range.overlaps(lo, hi) => {}
            _ => return false,
        }
    }

    // Check lifespan
    if let Some(years) = criteria.min_lifespan {
        match parse_lifespan(&breed.lifespan) {
            Some(avg) if avg < years => return false,
            None if years > 0.0 => return false,
            _ => {}
        }
    }

    true
}
