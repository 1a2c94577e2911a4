//! Configuration for pipeline tracing.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How much detail pipelines report through `tracing`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Verbosity {
    /// One event per stage with element counts.
    #[default]
    Summary,
    /// Stage events plus one event per element a filter drops.
    Elements,
}

/// Configuration for a [`Pipeline`](crate::Pipeline).
///
/// Tracing is emitted through the `tracing` crate; installing a subscriber is
/// left to the application.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PipelineConfig {
    /// Whether stage events are emitted at all (false = zero overhead).
    pub tracing: bool,

    /// Detail level when tracing is on.
    pub verbosity: Verbosity,

    /// Label attached to every event from this pipeline.
    pub label: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            tracing: true,
            verbosity: Verbosity::Summary,
            label: "pipeline".to_string(),
        }
    }
}

impl PipelineConfig {
    /// Creates a configuration with tracing disabled.
    #[must_use]
    pub fn quiet() -> Self {
        Self {
            tracing: false,
            ..Self::default()
        }
    }

    /// Creates a configuration for development with summary verbosity.
    #[must_use]
    pub fn development() -> Self {
        Self {
            tracing: true,
            verbosity: Verbosity::Summary,
            label: "pipeline".to_string(),
        }
    }

    /// Creates a configuration that reports every element.
    #[must_use]
    pub fn debug() -> Self {
        Self {
            tracing: true,
            verbosity: Verbosity::Elements,
            ..Self::default()
        }
    }

    /// Builder method to enable/disable tracing.
    #[must_use]
    pub fn with_tracing(mut self, tracing: bool) -> Self {
        self.tracing = tracing;
        self
    }

    /// Builder method to set verbosity.
    #[must_use]
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Builder method to set the event label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Returns true if per-element events should be emitted.
    #[must_use]
    pub fn traces_elements(&self) -> bool {
        self.tracing && self.verbosity == Verbosity::Elements
    }
}
