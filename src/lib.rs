//! Streamline - Filter, map and collect pipelines over in-memory entities
//!
//! This crate re-exports all layers of the Streamline system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: streamline_domain     - Shapes, voting, books, documents, music
//! Layer 1: streamline_pipeline   - Filter, map, collect, mutate-and-log, rating
//! Layer 0: streamline_foundation - Core types (Error, Score, Container)
//! ```

pub use streamline_domain as domain;
pub use streamline_foundation as foundation;
pub use streamline_pipeline as pipeline;
