//! Core error, score and container types for Streamline.
//!
//! This crate provides:
//! - [`Error`] - Rich error types with context
//! - [`Score`] - Integers validated into `0..=100`
//! - [`Container`] - Collected output backed by persistent collections,
//!   shaped by a [`ContainerKind`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;
pub mod score;

pub use collections::{Container, ContainerKind};
pub use error::{Error, ErrorContext, ErrorKind};
pub use score::Score;

/// Result type alias using the Streamline error type.
pub type Result<T> = std::result::Result<T, Error>;
