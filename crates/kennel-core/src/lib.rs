//! Kennel Core Engine
//!
//! Query engine over a static, in-memory breed catalog: exact and fuzzy
//! name resolution, typo-tolerant search, field filters, unit-aware weight
//! filtering and conjunctive recommendation.
//!
//! Every operation is a synchronous pure read over an immutable catalog.
//!
//! # Features
//!
//! - `native` - Enable all native optimizations (SIMD, parallel)
//! - `simd` - SIMD-accelerated substring search via memchr
//! - `parallel` - Parallel edit-distance pass via rayon for large catalogs
//!
//! # Example
//!
//! ```rust
//! use kennel_core::{BreedEngine, Catalog, RecommendationCriteria};
//!
//! let engine = BreedEngine::new(Catalog::bundled().unwrap());
//!
//! let lab = engine.find("labrador").unwrap().unwrap();
//! assert_eq!(lab.name, "Labrador Retriever");
//!
//! let hits = engine.search("daschund", 3).unwrap();
//! assert_eq!(hits[0].name, "Dachshund");
//!
//! let large = engine
//!     .recommend(&RecommendationCriteria::new().size("large"))
//!     .unwrap();
//! assert!(large.iter().all(|b| b.size == "large"));
//! ```

pub mod breed;
pub mod catalog;
pub mod compare;
pub mod config;
pub mod engine;
pub mod error;
pub mod filter;
pub mod fuzzy;
pub mod matcher;
pub mod normalize;
pub mod recommend;
pub mod validate;

// Re-export main types at crate root
pub use breed::{
    parse_lifespan, Breed, BreedBuilder, Compatibility, CompatibilityKey, Weight, WeightRange,
    WeightUnit,
};
pub use catalog::Catalog;
pub use compare::{Comparison, CompatibilityComparison, FieldComparison, WeightComparison};
pub use config::EngineConfig;
pub use engine::BreedEngine;
pub use error::{Error, Result};
pub use filter::BreedField;
pub use fuzzy::strategies::edit_distance;
pub use fuzzy::{MatchTier, SearchHit};
pub use normalize::normalize;
pub use recommend::{CompatibilityCriteria, RecommendationCriteria, WeightCriteria};
