//! Integration tests for Layer 1: Pipeline
//!
//! Tests for filter/map/collect, mutate-and-log, and rating strategies.

mod stages;
