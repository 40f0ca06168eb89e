//! Service facade over the sorted chain.
//!
//! ## Design
//!
//! [`SequenceService`] is the layer untyped input talks to. It owns exactly
//! one chain, instantiated for the element kind chosen at construction, and
//! does four jobs before delegating:
//!
//! 1. capacity enforcement (total-entry cap)
//! 2. kind dispatch: a [`RawValue`] of the wrong kind is a
//!    [`ServiceError::TypeMismatch`], never a coercion
//! 3. input validation: sanitization, length cap, numeric range
//! 4. error translation and logging for the shell
//!
//! Every ordering decision (placement, search, bounds) is delegated to
//! [`SortedChain`]; the sorted-container contract is implemented exactly
//! once, in the chain.
//!
//! ## Example
//!
//! ```
//! use sortchain::{ElementKind, RawValue, SequenceService};
//!
//! let mut service = SequenceService::new(ElementKind::Int);
//! service.insert(RawValue::parse("5")).unwrap();
//! service.insert(RawValue::parse("1")).unwrap();
//!
//! assert_eq!(service.len(), 2);
//! assert_eq!(service.snapshot(), vec!["1", "5"]);
//! ```

pub mod validate;

use std::fmt;

use log::{debug, info, warn};

use crate::chain::SortedChain;
use crate::errors::ServiceError;
use crate::types::{ElementKind, RawValue};

pub use validate::ValidationLimits;

/// The one chain a service owns, fixed to its element kind.
enum KindedChain {
    Int(SortedChain<i64>),
    Text(SortedChain<String>),
}

/// Validating facade over a single sorted sequence.
pub struct SequenceService {
    chain: KindedChain,
    limits: ValidationLimits,
}

impl SequenceService {
    /// Create a service for the given element kind with default limits.
    pub fn new(kind: ElementKind) -> Self {
        Self::with_limits(kind, ValidationLimits::default())
    }

    /// Create a service with caller-supplied limits.
    pub fn with_limits(kind: ElementKind, limits: ValidationLimits) -> Self {
        let chain = match kind {
            ElementKind::Int => KindedChain::Int(SortedChain::new()),
            ElementKind::Text => KindedChain::Text(SortedChain::new()),
        };
        Self { chain, limits }
    }

    /// Create a service from a selector string (`"int"` or `"string"`).
    ///
    /// # Errors
    ///
    /// [`ServiceError::UnknownElementKind`] for any other selector.
    pub fn from_selector(selector: &str) -> Result<Self, ServiceError> {
        Ok(Self::new(selector.parse()?))
    }

    /// The element kind this service was constructed with
    #[inline]
    pub fn kind(&self) -> ElementKind {
        match self.chain {
            KindedChain::Int(_) => ElementKind::Int,
            KindedChain::Text(_) => ElementKind::Text,
        }
    }

    /// Number of stored entries
    #[inline]
    pub fn len(&self) -> usize {
        match &self.chain {
            KindedChain::Int(chain) => chain.len(),
            KindedChain::Text(chain) => chain.len(),
        }
    }

    /// Check if the sequence holds no entries
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Validate and insert a value.
    ///
    /// # Errors
    ///
    /// - [`ServiceError::CapacityExceeded`] at the entry cap
    /// - [`ServiceError::TypeMismatch`] for a value of the wrong kind
    /// - [`ServiceError::TextTooLong`] / [`ServiceError::IntOutOfRange`]
    ///   for values outside the limits
    /// - [`ServiceError::Chain`] for blank text
    pub fn insert(&mut self, raw: RawValue) -> Result<(), ServiceError> {
        if self.len() >= self.limits.max_entries {
            warn!("insert rejected: capacity limit of {} reached", self.limits.max_entries);
            return Err(ServiceError::CapacityExceeded {
                limit: self.limits.max_entries,
            });
        }

        let expected = self.kind();
        let result = match (&mut self.chain, raw) {
            (KindedChain::Int(chain), RawValue::Int(value)) => {
                validate::check_int(value, &self.limits)
                    .and_then(|()| chain.insert(value).map_err(ServiceError::from))
            }
            (KindedChain::Text(chain), RawValue::Text(text)) => {
                let text = validate::sanitize_text(&text);
                validate::check_text(&text, &self.limits)
                    .and_then(|()| chain.insert(text).map_err(ServiceError::from))
            }
            (_, raw) => Err(ServiceError::TypeMismatch {
                expected,
                actual: raw.kind(),
            }),
        };
        match &result {
            Ok(()) => debug!("insert accepted, len now {}", self.len()),
            Err(err) => warn!("insert rejected: {err}"),
        }
        result
    }

    /// Remove the first entry equal to the value.
    ///
    /// Returns `Ok(false)` when no match exists.
    ///
    /// # Errors
    ///
    /// [`ServiceError::TypeMismatch`] for a value of the wrong kind.
    pub fn remove(&mut self, raw: RawValue) -> Result<bool, ServiceError> {
        let expected = self.kind();
        match (&mut self.chain, raw) {
            (KindedChain::Int(chain), RawValue::Int(value)) => Ok(chain.remove(&value)),
            (KindedChain::Text(chain), RawValue::Text(text)) => {
                let text = validate::sanitize_text(&text);
                Ok(chain.remove(&text))
            }
            (_, raw) => Err(ServiceError::TypeMismatch {
                expected,
                actual: raw.kind(),
            }),
        }
    }

    /// Check membership.
    ///
    /// # Errors
    ///
    /// [`ServiceError::TypeMismatch`] for a value of the wrong kind.
    pub fn contains(&self, raw: RawValue) -> Result<bool, ServiceError> {
        let expected = self.kind();
        match (&self.chain, raw) {
            (KindedChain::Int(chain), RawValue::Int(value)) => Ok(chain.contains(&value)),
            (KindedChain::Text(chain), RawValue::Text(text)) => {
                let text = validate::sanitize_text(&text);
                Ok(chain.contains(&text))
            }
            (_, raw) => Err(ServiceError::TypeMismatch {
                expected,
                actual: raw.kind(),
            }),
        }
    }

    /// Drop every entry. The element kind and limits are retained.
    pub fn clear(&mut self) {
        match &mut self.chain {
            KindedChain::Int(chain) => chain.clear(),
            KindedChain::Text(chain) => chain.clear(),
        }
        info!("sequence cleared");
    }

    /// Current state summary for the `stats` command.
    pub fn stats(&self) -> SequenceStats {
        let (len, first, last) = match &self.chain {
            KindedChain::Int(chain) => (
                chain.len(),
                chain.first().ok().map(ToString::to_string),
                chain.last().ok().map(ToString::to_string),
            ),
            KindedChain::Text(chain) => (
                chain.len(),
                chain.first().ok().map(ToString::to_string),
                chain.last().ok().map(ToString::to_string),
            ),
        };
        SequenceStats {
            kind: self.kind(),
            len,
            first,
            last,
        }
    }

    /// All entries in ascending order, rendered for display. O(len).
    pub fn snapshot(&self) -> Vec<String> {
        match &self.chain {
            KindedChain::Int(chain) => chain.iter().map(ToString::to_string).collect(),
            KindedChain::Text(chain) => chain.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Point-in-time summary of a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceStats {
    /// Element kind of the sequence
    pub kind: ElementKind,
    /// Number of entries
    pub len: usize,
    /// Smallest entry, `None` when empty
    pub first: Option<String>,
    /// Largest entry, `None` when empty
    pub last: Option<String>,
}

impl fmt::Display for SequenceStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "kind:  {}", self.kind)?;
        writeln!(f, "size:  {}", self.len)?;
        writeln!(f, "first: {}", self.first.as_deref().unwrap_or("(empty)"))?;
        write!(f, "last:  {}", self.last.as_deref().unwrap_or("(empty)"))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
