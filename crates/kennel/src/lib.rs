//! # Kennel Shared Library
//!
//! Runtime plumbing around [`kennel_core`]:
//! - **catalog**: load a breed catalog from a JSON file into an engine
//! - **config**: engine configuration from `KENNEL_*` environment variables
//! - **error**: error type covering I/O, decoding and engine failures
//! - **tracing**: logging setup
//!
//! ## Usage
//!
//! ```rust,ignore
//! kennel::tracing::init();
//! let engine = kennel::engine_from_env()?;
//! let hits = engine.search("daschund", 3)?;
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod tracing;

pub use catalog::{engine_from_env, engine_from_lookup, load_catalog, load_engine};
pub use error::{Error, Result};
pub use kennel_core;
