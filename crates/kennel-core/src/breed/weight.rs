//! Weight ranges and unit resolution

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};
use crate::normalize::normalize;

/// Inclusive numeric range as stored in the catalog.
///
/// `min <= max` is a data-quality expectation, not re-checked here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightRange {
    pub min: f64,
    pub max: f64,
}

impl WeightRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Inclusive interval overlap with `[lo, hi]`. Touching endpoints count.
    pub fn overlaps(&self, lo: f64, hi: f64) -> bool {
        !(self.max < lo || self.min > hi)
    }
}

/// Per-unit weight ranges for a breed
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Weight {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pounds: Option<WeightRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kilograms: Option<WeightRange>,
}

impl Weight {
    pub fn for_unit(&self, unit: WeightUnit) -> Option<&WeightRange> {
        match unit {
            WeightUnit::Pounds => self.pounds.as_ref(),
            WeightUnit::Kilograms => self.kilograms.as_ref(),
        }
    }

    /// True when no unit carries data
    pub fn is_empty(&self) -> bool {
        self.pounds.is_none() && self.kilograms.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Pounds,
    Kilograms,
}

impl WeightUnit {
    /// Resolve a user-supplied unit through the alias table.
    ///
    /// Case-insensitive, surrounding whitespace ignored.
    pub fn resolve(unit: &str) -> Result<Self> {
        match normalize(unit).as_str() {
            "kg" | "kgs" | "kilogram" | "kilograms" | "kilo" | "kilos" => {
                Ok(WeightUnit::Kilograms)
            }
            "lb" | "lbs" | "pound" | "pounds" => Ok(WeightUnit::Pounds),
            _ => Err(Error::InvalidUnit(unit.to_string())),
        }
    }

    /// Exactly "lbs" or "kgs", no aliases and no case folding.
    pub fn strict(unit: &str) -> Result<Self> {
        match unit {
            "lbs" => Ok(WeightUnit::Pounds),
            "kgs" => Ok(WeightUnit::Kilograms),
            _ => Err(Error::InvalidUnit(unit.to_string())),
        }
    }

    /// Key under which the catalog stores this unit
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightUnit::Pounds => "pounds",
            WeightUnit::Kilograms => "kilograms",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
