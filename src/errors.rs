//! Error types for the container and the service layer.
//!
//! ## Two-layer taxonomy
//!
//! - [`ChainError`]: raised by [`SortedChain`](crate::SortedChain) itself.
//!   The container reports errors synchronously at the point of violation and
//!   never retries, logs, or swallows them.
//! - [`ServiceError`]: raised by [`SequenceService`](crate::SequenceService)
//!   for everything that happens before a value reaches the container:
//!   element-kind selection, type dispatch, and input validation.
//!
//! A missing value on `remove`/`contains` is a boolean outcome, not an error.

use thiserror::Error;

use crate::types::ElementKind;

/// Errors produced by [`SortedChain`](crate::SortedChain) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    /// `first()` or `last()` was called on an empty chain.
    ///
    /// Carries the name of the attempted operation so the caller's message
    /// can say which boundary access failed.
    #[error("cannot read `{operation}` of an empty sequence")]
    EmptySequence {
        /// The operation that was attempted ("first" or "last")
        operation: &'static str,
    },

    /// A text value was empty or contained only whitespace.
    #[error("text values must contain at least one non-whitespace character")]
    BlankText,
}

/// Errors produced by [`SequenceService`](crate::SequenceService).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The element-kind selector was not one of the supported names.
    #[error("unknown element kind `{0}`, expected `int` or `string`")]
    UnknownElementKind(String),

    /// A value of the wrong kind was offered to a typed sequence.
    ///
    /// Values are never coerced between kinds; the mismatch is always
    /// surfaced with both descriptors.
    #[error("type mismatch: this sequence holds {expected} values, got {actual}")]
    TypeMismatch {
        /// Kind the sequence was constructed with
        expected: ElementKind,
        /// Kind of the offered value
        actual: ElementKind,
    },

    /// A text value exceeded the configured length cap.
    #[error("text value is {length} bytes, limit is {limit}")]
    TextTooLong { length: usize, limit: usize },

    /// An integer value fell outside the configured range.
    #[error("integer {value} is outside the permitted range {min}..={max}")]
    IntOutOfRange { value: i64, min: i64, max: i64 },

    /// The sequence already holds the maximum number of entries.
    #[error("sequence is full: capacity limit of {limit} entries reached")]
    CapacityExceeded { limit: usize },

    /// A container-level error, passed through unchanged.
    #[error(transparent)]
    Chain(#[from] ChainError),
}

// ============================================================================
// Unit Tests
// ============================================================================
