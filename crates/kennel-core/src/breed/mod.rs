//! Breed types - the catalog's data model
//!
//! A breed is an immutable record describing one dog breed: its names,
//! origin, categorical traits, temperament, lifespan, household
//! compatibility and weight ranges.
//!
//! # Example
//!
//! ```rust
//! use kennel_core::breed::{BreedBuilder, WeightUnit};
//!
//! let lab = BreedBuilder::new("Labrador Retriever")
//!     .size("large")
//!     .pounds(55.0, 80.0)
//!     .build();
//!
//! assert!(lab.weight.for_unit(WeightUnit::Pounds).is_some());
//! ```

mod lifespan;
mod types;
mod weight;

pub use lifespan::parse_lifespan;
pub use types::{Breed, BreedBuilder, Compatibility, CompatibilityKey};
pub use weight::{Weight, WeightRange, WeightUnit};
