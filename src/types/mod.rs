//! Value types shared by the container, service, and shell layers.
//!
//! ## Types
//!
//! - [`ElementKind`]: runtime selector for a sequence's value domain
//! - [`Element`]: trait bounding what a chain may hold, with the content rule
//! - [`RawValue`]: classified-but-untyped input crossing the service boundary

mod element;
mod raw;

// Re-export all types at module level
pub use element::{Element, ElementKind};
pub use raw::RawValue;
