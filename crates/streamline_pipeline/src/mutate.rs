//! In-place traversals over mutable sequences.
//!
//! These take `&mut [E]`, so the caller must hold exclusive access to the
//! elements for the duration of the call. There is no rollback: if `apply`
//! fails on element `i`, elements before `i` stay mutated and log entries
//! already written stay written.

use std::fmt::{self, Write};

use streamline_foundation::{ErrorContext, Result};
use tracing::{debug, warn};

use crate::stage::stage_failure;

/// Observes then mutates every element in a single pass.
///
/// For each element in order, `observe` renders its current state and the
/// rendering is appended to `log`; only then is `apply` called with
/// `new_state`. The log therefore ends up with one entry per element, each
/// showing that element as it was before the mutation.
///
/// # Errors
/// Returns an error if writing to `log` fails, or a `TransformFailure` for
/// the first element `apply` rejects.
pub fn mutate_and_log<E, S, O, D, A, X, W>(
    source: &mut [E],
    new_state: &S,
    mut observe: O,
    mut apply: A,
    log: &mut W,
) -> Result<()>
where
    S: ?Sized,
    O: FnMut(&E) -> D,
    D: fmt::Display,
    A: FnMut(&mut E, &S) -> std::result::Result<(), X>,
    X: fmt::Display,
    W: Write + ?Sized,
{
    for (index, element) in source.iter_mut().enumerate() {
        write!(log, "{}", observe(element))?;
        if let Err(e) = apply(element, new_state) {
            warn!(index, error = %e, "apply failed, earlier elements keep their new state");
            return Err(stage_failure("apply", index, &e)
                .with_context(ErrorContext::new().with_operation("mutate_and_log")));
        }
    }
    debug!(elements = source.len(), "mutate_and_log");
    Ok(())
}

/// Mutates every element in order.
///
/// # Errors
/// Returns a `TransformFailure` for the first element `apply` rejects.
pub fn for_each_mut<E, S, A, X>(source: &mut [E], new_state: &S, mut apply: A) -> Result<()>
where
    S: ?Sized,
    A: FnMut(&mut E, &S) -> std::result::Result<(), X>,
    X: fmt::Display,
{
    for (index, element) in source.iter_mut().enumerate() {
        apply(element, new_state).map_err(|e| stage_failure("apply", index, &e))?;
    }
    debug!(elements = source.len(), "for_each_mut");
    Ok(())
}

/// Appends the rendering of every element to `log`, in order.
///
/// # Errors
/// Returns an error if writing to `log` fails.
pub fn observe_all<E, O, D, W>(source: &[E], mut observe: O, log: &mut W) -> Result<()>
where
    O: FnMut(&E) -> D,
    D: fmt::Display,
    W: Write + ?Sized,
{
    for element in source {
        write!(log, "{}", observe(element))?;
    }
    debug!(elements = source.len(), "observe_all");
    Ok(())
}
