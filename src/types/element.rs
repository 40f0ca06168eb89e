//! Element kinds and the content contract for stored values.
//!
//! ## Design
//!
//! A chain is generic over its element type, so homogeneity is a compile-time
//! guarantee: a `SortedChain<i64>` cannot be handed a `String` in the first
//! place. The [`ElementKind`] selector exists for the boundary where untyped
//! input enters the system (the shell and the service facade), which is the
//! only place a kind can still be chosen at runtime.
//!
//! The [`Element`] trait carries the one content rule that stays a runtime
//! check: text must not be blank. Everything else about a value's validity
//! (length caps, numeric ranges) belongs to the service layer.

use std::fmt;
use std::str::FromStr;

use crate::errors::{ChainError, ServiceError};

// ============================================================================
// ElementKind
// ============================================================================

/// Value domain selector for a sequence: signed integers or text.
///
/// Parsed from the selectors `"int"` and `"string"`; anything else fails
/// construction.
///
/// # Example
///
/// ```
/// use sortchain::ElementKind;
///
/// let kind: ElementKind = "int".parse().unwrap();
/// assert_eq!(kind, ElementKind::Int);
/// assert!("float".parse::<ElementKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ElementKind {
    /// Signed 64-bit integers
    #[default]
    Int,
    /// UTF-8 text
    Text,
}

impl ElementKind {
    /// Selector name accepted by [`FromStr`] and printed by `Display`
    pub fn selector(self) -> &'static str {
        match self {
            ElementKind::Int => "int",
            ElementKind::Text => "string",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

impl FromStr for ElementKind {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "int" => Ok(ElementKind::Int),
            "string" => Ok(ElementKind::Text),
            other => Err(ServiceError::UnknownElementKind(other.to_string())),
        }
    }
}

// ============================================================================
// Element
// ============================================================================

/// Types a [`SortedChain`](crate::SortedChain) may hold.
///
/// Implementors supply `Ord` for the default comparator, `Clone` for
/// snapshots, `Display` for user-facing rendering, and the content rule
/// checked on every insert.
pub trait Element: Clone + Ord + fmt::Display + 'static {
    /// Validate the value's content before it is stored.
    fn check_content(&self) -> Result<(), ChainError>;
}

impl Element for i64 {
    /// Integers carry no content restriction at the container layer.
    #[inline]
    fn check_content(&self) -> Result<(), ChainError> {
        Ok(())
    }
}

impl Element for String {
    /// Blank or whitespace-only text is rejected.
    fn check_content(&self) -> Result<(), ChainError> {
        if self.trim().is_empty() {
            Err(ChainError::BlankText)
        } else {
            Ok(())
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
