//! Filter, map, collect, mutate-and-log and rating strategies for Streamline.
//!
//! This crate provides:
//! - [`filter`], [`map`], [`collect`] and their fallible variants
//! - [`Pipeline`] - Eager composition of those stages
//! - [`mutate_and_log`] - Single-pass observe-then-mutate traversal
//! - [`normalized_rating`] and [`ScoreStrategy`] - Pluggable scoring
//! - [`PipelineConfig`] - Tracing configuration

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod mutate;
pub mod pipeline;
pub mod rating;
pub mod stage;

pub use config::{PipelineConfig, Verbosity};
pub use mutate::{for_each_mut, mutate_and_log, observe_all};
pub use pipeline::Pipeline;
pub use rating::{FixedScores, Population, ScoreStrategy, WeightShare, normalized_rating};
pub use stage::{collect, filter, map, try_filter, try_map};
