//! Catalog JSON decoding
//!
//! Source data lists breeds either as bare names or as full records. Both
//! shapes are folded into [`Breed`] here.

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::breed::Breed;
use crate::error::{Error, Result};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBreed {
    Name(String),
    Record(Box<Breed>),
}

pub(crate) fn parse_breeds(json: &str) -> Result<Vec<Breed>> {
    let value: Value = serde_json::from_str(json)?;
    let Value::Array(items) = value else {
        return Err(Error::InvalidCatalog(
            "catalog must be a JSON array".to_string(),
        ));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| {
            let raw: RawBreed = serde_json::from_value(item).map_err(|e| {
                Error::Serialization(format!("breed at index {}: {}", idx, e))
            })?;
            Ok(match raw {
                RawBreed::Name(name) => {
                    warn!(index = idx, name = %name, "breed listed by name only");
                    Breed {
                        name,
                        ..Default::default()
                    }
                }
                RawBreed::Record(breed) => *breed,
            })
        })
        .collect()
}
