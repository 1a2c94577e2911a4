//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Error, Score, and containers.

mod containers;
mod errors;
mod scores;
