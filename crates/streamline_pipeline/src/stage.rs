//! Filter, map and collect over borrowed sequences.
//!
//! None of these functions mutate their source. The fallible variants are
//! all-or-nothing: the first failing element aborts the operation and no
//! partial output is returned.

use std::fmt;
use std::hash::Hash;

use streamline_foundation::{Container, ContainerKind, Error, ErrorContext, Result};
use tracing::trace;

/// Returns the elements of `source` satisfying `predicate`, in source order.
pub fn filter<E, P>(source: &[E], mut predicate: P) -> Vec<E>
where
    E: Clone,
    P: FnMut(&E) -> bool,
{
    let kept: Vec<E> = source.iter().filter(|e| predicate(e)).cloned().collect();
    trace!(input = source.len(), output = kept.len(), "filter");
    kept
}

/// Like [`filter`], but the predicate may fail.
///
/// # Errors
/// A failure on element `i` becomes a `TransformFailure` for stage `filter`
/// at index `i`.
pub fn try_filter<E, P, X>(source: &[E], mut predicate: P) -> Result<Vec<E>>
where
    E: Clone,
    P: FnMut(&E) -> std::result::Result<bool, X>,
    X: fmt::Display,
{
    let mut kept = Vec::new();
    for (index, element) in source.iter().enumerate() {
        match predicate(element) {
            Ok(true) => kept.push(element.clone()),
            Ok(false) => {}
            Err(e) => return Err(stage_failure("filter", index, &e)),
        }
    }
    trace!(input = source.len(), output = kept.len(), "try_filter");
    Ok(kept)
}

/// Applies `transform` to every element of `source`, preserving order.
pub fn map<E, R, F>(source: &[E], transform: F) -> Vec<R>
where
    F: FnMut(&E) -> R,
{
    let mapped: Vec<R> = source.iter().map(transform).collect();
    trace!(input = source.len(), "map");
    mapped
}

/// Like [`map`], but the transform may fail.
///
/// # Errors
/// A failure on element `i` becomes a `TransformFailure` for stage `map`
/// at index `i`.
pub fn try_map<E, R, F, X>(source: &[E], mut transform: F) -> Result<Vec<R>>
where
    F: FnMut(&E) -> std::result::Result<R, X>,
    X: fmt::Display,
{
    let mut mapped = Vec::with_capacity(source.len());
    for (index, element) in source.iter().enumerate() {
        match transform(element) {
            Ok(value) => mapped.push(value),
            Err(e) => return Err(stage_failure("map", index, &e)),
        }
    }
    trace!(input = source.len(), "try_map");
    Ok(mapped)
}

/// Collects `items` into a container of the requested kind.
pub fn collect<E, I>(items: I, into: ContainerKind) -> Container<E>
where
    E: Clone + Eq + Hash,
    I: IntoIterator<Item = E>,
{
    let container = Container::collect(into, items);
    trace!(kind = %into, output = container.len(), "collect");
    container
}

pub(crate) fn stage_failure(stage: &'static str, index: usize, cause: &dyn fmt::Display) -> Error {
    Error::transform_failure(stage, index, cause.to_string())
        .with_context(ErrorContext::new().with_operation(stage))
}
