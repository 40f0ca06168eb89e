//! # sortchain
//!
//! A sorted-sequence container: values of one uniform, comparable type kept
//! continuously in sorted order, with membership testing, removal, bounds
//! access, and forward iteration.
//!
//! ## Architecture
//!
//! - **Chain**: the core container, a slab-arena doubly linked sequence
//!   ([`SortedChain`])
//! - **Types**: element kinds and the untyped boundary value ([`RawValue`])
//! - **Service**: validating facade with capacity and input limits
//!   ([`SequenceService`])
//! - **Shell**: interactive line-oriented command loop
//!
//! ## Design Principles
//!
//! 1. **One ordering implementation**: placement and search logic live in
//!    the chain; the service and shell only delegate
//! 2. **Compile-time homogeneity**: the element type is a generic
//!    parameter, so a sequence can never mix kinds
//! 3. **Synchronous and single-threaded**: every operation runs to
//!    completion without I/O or internal locking; share behind a lock if
//!    concurrent access is ever needed
//! 4. **Errors surface at the point of violation**: the container never
//!    retries, logs, or swallows
//!
//! ## Example
//!
//! ```
//! use sortchain::SortedChain;
//!
//! let mut chain: SortedChain<i64> = SortedChain::new();
//! for v in [5, 1, 3, 2, 4] {
//!     chain.insert(v).unwrap();
//! }
//!
//! assert_eq!(chain.to_vec(), vec![1, 2, 3, 4, 5]);
//! assert!(chain.contains(&3));
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Core container: slab-backed sorted chain
pub mod chain;

/// Error types for the container and service layers
pub mod errors;

/// Validating service facade
pub mod service;

/// Interactive command shell
pub mod shell;

/// Shared value types
pub mod types;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use chain::{ChainNode, Comparator, Iter, SortedChain};
pub use errors::{ChainError, ServiceError};
pub use service::{SequenceService, SequenceStats, ValidationLimits};
pub use types::{Element, ElementKind, RawValue};
