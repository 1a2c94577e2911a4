//! Error types for the Streamline system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::collections::ContainerKind;

/// The main error type for Streamline operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Pushes an enclosing operation onto the context stack, creating the
    /// context if there is none yet.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        let context = self.context.take().unwrap_or_default();
        self.context = Some(context.with_frame(frame));
        self
    }

    /// Creates a validation error for a value outside `[min, max]`.
    #[must_use]
    pub fn validation(value: i64, min: i64, max: i64) -> Self {
        Self::new(ErrorKind::Validation { value, min, max })
    }

    /// Creates an error for a mutation attempted on a read-only container.
    #[must_use]
    pub fn immutable_violation(operation: &'static str, kind: ContainerKind) -> Self {
        Self::new(ErrorKind::ImmutableViolation { operation, kind })
    }

    /// Creates a division by zero error.
    #[must_use]
    pub fn division_by_zero() -> Self {
        Self::new(ErrorKind::DivisionByZero)
    }

    /// Creates an error for a caller-supplied function failing on one element.
    #[must_use]
    pub fn transform_failure(stage: &'static str, index: usize, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::TransformFailure {
            stage,
            index,
            message: message.into(),
        })
    }

    /// Creates an index out of bounds error.
    #[must_use]
    pub fn index_out_of_bounds(index: usize, length: usize) -> Self {
        Self::new(ErrorKind::IndexOutOfBounds { index, length })
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

impl From<fmt::Error> for Error {
    fn from(_: fmt::Error) -> Self {
        Self::internal("failed to append to log")
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A constructed value fell outside its declared bound.
    #[error("validation failed: {value} is outside [{min}, {max}]")]
    Validation {
        /// The offending value.
        value: i64,
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
    },

    /// Mutation attempted on a read-only container.
    #[error("cannot {operation} on {kind} container")]
    ImmutableViolation {
        /// The rejected operation (`push`, `remove`, ...).
        operation: &'static str,
        /// The kind of the container.
        kind: ContainerKind,
    },

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A supplied predicate, transform or apply function failed.
    #[error("{stage} failed at element {index}: {message}")]
    TransformFailure {
        /// The pipeline stage that was running.
        stage: &'static str,
        /// Position of the element in the source sequence.
        index: usize,
        /// Description supplied by the failing function.
        message: String,
    },

    /// Index out of bounds.
    #[error("index out of bounds: {index} (length {length})")]
    IndexOutOfBounds {
        /// The index that was accessed.
        index: usize,
        /// The actual length of the collection.
        length: usize,
    },

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone)]
pub struct ErrorContext {
    /// Name of the operation that failed.
    pub operation: Option<String>,
    /// Debug rendering of the element being processed.
    pub element: Option<String>,
    /// Chain of enclosing operations, innermost first.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self {
            operation: None,
            element: None,
            stack: Vec::new(),
        }
    }

    /// Sets the operation name.
    #[must_use]
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    /// Records the element that was being processed.
    #[must_use]
    pub fn with_element(mut self, element: impl fmt::Debug) -> Self {
        self.element = Some(format!("{element:?}"));
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(operation) = &self.operation {
            write!(f, "in {operation}")?;
        }
        if let Some(element) = &self.element {
            write!(f, " on {element}")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
