//! Breed type definitions

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::weight::{Weight, WeightRange};
use crate::error::Error;

/// A single catalog record.
///
/// Categorical fields (`size`, `energy_level`, ...) are opaque strings. The
/// engine compares them case-insensitively or verbatim depending on the
/// operation and never coerces unknown values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breed {
    pub name: String,

    /// Language tag (e.g. "fr", "de") to localized name
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub alternate_names: HashMap<String, String>,

    #[serde(default)]
    pub origin: String,

    #[serde(default)]
    pub size: String,

    #[serde(default)]
    pub energy_level: String,

    #[serde(default)]
    pub trainability: String,

    #[serde(default)]
    pub shedding: String,

    #[serde(default)]
    pub grooming_needs: String,

    #[serde(default)]
    pub temperament: Vec<String>,

    /// Free-form, e.g. "10-12 years". See [`crate::breed::parse_lifespan`].
    #[serde(default, deserialize_with = "lifespan_from_string_or_number")]
    pub lifespan: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compatibility: Option<Compatibility>,

    #[serde(default)]
    pub weight: Weight,
}

impl Breed {
    /// Name used for matching in `lang`.
    ///
    /// Falls back to the canonical name for "en" or when no alternate name
    /// exists for the language.
    pub fn name_for(&self, lang: &str) -> &str {
        if lang != "en" {
            if let Some(alt) = self.alternate_names.get(lang) {
                return alt;
            }
        }
        &self.name
    }

    pub fn compatibility_with(&self, key: CompatibilityKey) -> Option<bool> {
        self.compatibility.as_ref().and_then(|c| c.get(key))
    }
}

/// Lifespan arrives as "10-12 years" or as a bare integer.
fn lifespan_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(n) => n.to_string(),
    })
}

/// Household compatibility flags. A missing flag is unknown, not `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Compatibility {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_dogs: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cats: Option<bool>,
}

impl Compatibility {
    pub fn new(children: bool, other_dogs: bool, cats: bool) -> Self {
        Self {
            children: Some(children),
            other_dogs: Some(other_dogs),
            cats: Some(cats),
        }
    }

    pub fn get(&self, key: CompatibilityKey) -> Option<bool> {
        match key {
            CompatibilityKey::Children => self.children,
            CompatibilityKey::OtherDogs => self.other_dogs,
            CompatibilityKey::Cats => self.cats,
        }
    }
}

/// Whitelisted compatibility sub-fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CompatibilityKey {
    Children,
    OtherDogs,
    Cats,
}

impl CompatibilityKey {
    pub const ALL: [CompatibilityKey; 3] = [
        CompatibilityKey::Children,
        CompatibilityKey::OtherDogs,
        CompatibilityKey::Cats,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CompatibilityKey::Children => "children",
            CompatibilityKey::OtherDogs => "otherDogs",
            CompatibilityKey::Cats => "cats",
        }
    }
}

impl fmt::Display for CompatibilityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompatibilityKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "children" => Ok(CompatibilityKey::Children),
            "otherDogs" => Ok(CompatibilityKey::OtherDogs),
            "cats" => Ok(CompatibilityKey::Cats),
            other => Err(Error::InvalidCompatibilityKey(other.to_string())),
        }
    }
}

/// Builder for creating breeds
#[derive(Debug, Default)]
pub struct BreedBuilder {
    breed: Breed,
}

impl BreedBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            breed: Breed {
                name: name.into(),
                ..Default::default()
            },
        }
    }

    pub fn alternate_name(mut self, lang: impl Into<String>, name: impl Into<String>) -> Self {
        self.breed.alternate_names.insert(lang.into(), name.into());
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.breed.origin = origin.into();
        self
    }

    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.breed.size = size.into();
        self
    }

    pub fn energy_level(mut self, level: impl Into<String>) -> Self {
        self.breed.energy_level = level.into();
        self
    }

    pub fn trainability(mut self, trainability: impl Into<String>) -> Self {
        self.breed.trainability = trainability.into();
        self
    }

    pub fn shedding(mut self, shedding: impl Into<String>) -> Self {
        self.breed.shedding = shedding.into();
        self
    }

    pub fn grooming_needs(mut self, needs: impl Into<String>) -> Self {
        self.breed.grooming_needs = needs.into();
        self
    }

    pub fn temperament(mut self, traits: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.breed
            .temperament
            .extend(traits.into_iter().map(|t| t.into()));
        self
    }

    pub fn lifespan(mut self, lifespan: impl Into<String>) -> Self {
        self.breed.lifespan = lifespan.into();
        self
    }

    pub fn compatibility(mut self, compatibility: Compatibility) -> Self {
        self.breed.compatibility = Some(compatibility);
        self
    }

    pub fn pounds(mut self, min: f64, max: f64) -> Self {
        self.breed.weight.pounds = Some(WeightRange::new(min, max));
        self
    }

    pub fn kilograms(mut self, min: f64, max: f64) -> Self {
        self.breed.weight.kilograms = Some(WeightRange::new(min, max));
        self
    }

    pub fn build(self) -> Breed {
        self.breed
    }
}
