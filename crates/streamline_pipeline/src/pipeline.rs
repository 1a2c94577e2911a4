//! Eager filter → map → collect composition.
//!
//! ```
//! use streamline_foundation::ContainerKind;
//! use streamline_pipeline::Pipeline;
//!
//! let ages = vec![24, 75, 17];
//! let adults = Pipeline::new(&ages)
//!     .filter(|age| *age >= 18)
//!     .map(|age| age.to_string())
//!     .collect(ContainerKind::OrderedList);
//! assert_eq!(adults.to_vec(), vec!["24".to_string(), "75".to_string()]);
//! ```

use std::fmt;
use std::hash::Hash;

use streamline_foundation::{Container, ContainerKind, Result};
use tracing::{debug, trace};

use crate::config::PipelineConfig;
use crate::stage::stage_failure;

/// An owned sequence flowing through pipeline stages.
///
/// Building a pipeline from a slice copies the elements, so the source is
/// never touched by later stages.
#[derive(Clone, Debug)]
pub struct Pipeline<E> {
    items: Vec<E>,
    config: PipelineConfig,
}

impl<E: Clone> Pipeline<E> {
    /// Starts a pipeline from a copy of `source`.
    #[must_use]
    pub fn new(source: &[E]) -> Self {
        Self::with_config(source, PipelineConfig::default())
    }

    /// Starts a pipeline from a copy of `source` with explicit configuration.
    #[must_use]
    pub fn with_config(source: &[E], config: PipelineConfig) -> Self {
        Self::from_vec(source.to_vec(), config)
    }
}

impl<E> Pipeline<E> {
    /// Starts a pipeline that takes ownership of `items`.
    #[must_use]
    pub fn from_vec(items: Vec<E>, config: PipelineConfig) -> Self {
        Self { items, config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Returns the number of elements currently in the pipeline.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if no elements remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the current elements.
    #[must_use]
    pub fn as_slice(&self) -> &[E] {
        &self.items
    }

    /// Returns the current elements, in order.
    #[must_use]
    pub fn into_vec(self) -> Vec<E> {
        self.items
    }

    /// Keeps the elements satisfying `predicate`.
    #[must_use]
    pub fn filter<P>(self, mut predicate: P) -> Self
    where
        P: FnMut(&E) -> bool,
    {
        let Self { items, config } = self;
        let before = items.len();
        let mut kept = Vec::with_capacity(before);
        for (index, element) in items.into_iter().enumerate() {
            if predicate(&element) {
                kept.push(element);
            } else if config.traces_elements() {
                trace!(label = %config.label, index, "filter dropped element");
            }
        }
        let next = Self {
            items: kept,
            config,
        };
        next.record("filter", before);
        next
    }

    /// Keeps the elements satisfying a fallible `predicate`.
    ///
    /// # Errors
    /// Returns a `TransformFailure` framed with the pipeline label.
    pub fn try_filter<P, X>(self, mut predicate: P) -> Result<Self>
    where
        P: FnMut(&E) -> std::result::Result<bool, X>,
        X: fmt::Display,
    {
        let Self { items, config } = self;
        let before = items.len();
        let mut kept = Vec::with_capacity(before);
        for (index, element) in items.into_iter().enumerate() {
            match predicate(&element) {
                Ok(true) => kept.push(element),
                Ok(false) => {}
                Err(e) => {
                    return Err(stage_failure("filter", index, &e).with_frame(config.label.clone()));
                }
            }
        }
        let next = Self {
            items: kept,
            config,
        };
        next.record("try_filter", before);
        Ok(next)
    }

    /// Transforms every element.
    #[must_use]
    pub fn map<R, F>(self, transform: F) -> Pipeline<R>
    where
        F: FnMut(&E) -> R,
    {
        let before = self.items.len();
        let next = Pipeline {
            items: self.items.iter().map(transform).collect(),
            config: self.config,
        };
        next.record("map", before);
        next
    }

    /// Transforms every element with a fallible function.
    ///
    /// # Errors
    /// Returns a `TransformFailure` framed with the pipeline label.
    pub fn try_map<R, F, X>(self, mut transform: F) -> Result<Pipeline<R>>
    where
        F: FnMut(&E) -> std::result::Result<R, X>,
        X: fmt::Display,
    {
        let before = self.items.len();
        let mut mapped = Vec::with_capacity(before);
        for (index, element) in self.items.iter().enumerate() {
            match transform(element) {
                Ok(value) => mapped.push(value),
                Err(e) => {
                    return Err(stage_failure("map", index, &e).with_frame(self.config.label.clone()));
                }
            }
        }
        let next = Pipeline {
            items: mapped,
            config: self.config,
        };
        next.record("try_map", before);
        Ok(next)
    }

    /// Finishes the pipeline into a container of the requested kind.
    #[must_use]
    pub fn collect(self, into: ContainerKind) -> Container<E>
    where
        E: Clone + Eq + Hash,
    {
        let before = self.items.len();
        let label = self.config.label.clone();
        let tracing = self.config.tracing;
        let container = Container::collect(into, self.items);
        if tracing {
            debug!(label = %label, kind = %into, input = before, output = container.len(), "collect");
        }
        container
    }

    fn record(&self, stage: &'static str, before: usize) {
        if self.config.tracing {
            debug!(
                label = %self.config.label,
                stage,
                input = before,
                output = self.items.len(),
                "pipeline stage"
            );
        }
    }
}
