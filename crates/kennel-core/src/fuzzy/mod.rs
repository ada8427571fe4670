//! Typo-tolerant breed search
//!
//! Two tiers, never interleaved:
//!
//! 1. Containment: normalized name and term contain one another (catalog order)
//! 2. Edit distance: remaining breeds within `max_distance` (ascending distance,
//!    catalog order on ties)
//!
//! A textual match always outranks a close misspelling of some other name.
//!
//! # Example
//!
//! ```rust
//! use kennel_core::catalog::Catalog;
//! use kennel_core::fuzzy::search;
//!
//! let catalog = Catalog::from_json(r#"["Dachshund", "Beagle"]"#).unwrap();
//! let hits = search(&catalog, "daschund", 3, usize::MAX).unwrap();
//! assert_eq!(hits[0].breed.name, "Dachshund");
//! ```

mod search;
pub mod strategies;

pub use search::{search, MatchTier, SearchHit};
