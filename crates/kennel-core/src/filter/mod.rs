//! Bulk catalog filters
//!
//! - [`range`]: unit-aware weight range overlap
//! - [`predicate`]: single-field equality, containment and membership
//!
//! Results keep catalog order and borrow from the catalog.

pub mod predicate;
pub mod range;

pub use predicate::{by_compatibility, by_field, by_origin, by_temperament, BreedField};
pub use range::by_weight_range;
