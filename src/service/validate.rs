//! Input validation for values arriving from outside the process.
//!
//! ## Overview
//!
//! The chain itself only enforces type homogeneity and the non-blank text
//! rule. Everything about *external* input hygiene lives here: length caps,
//! numeric range bounds, a total-entry cap, and byte-level sanitization.
//!
//! All limits are carried in [`ValidationLimits`] so a caller can widen or
//! narrow them per service instance; the defaults are the documented ones.

use crate::errors::ServiceError;

/// Default cap on text values, in bytes.
pub const MAX_TEXT_LEN: usize = 255;

/// Default cap on total entries held by one service.
pub const MAX_ENTRIES: usize = 10_000;

/// Substrings removed from text input during sanitization.
pub const STRIPPED_SEQUENCES: &[&str] = &["<script>", "</script>"];

/// Limits applied to external input before it reaches the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationLimits {
    /// Maximum accepted text length in bytes
    pub max_text_len: usize,
    /// Smallest accepted integer
    pub int_min: i64,
    /// Largest accepted integer
    pub int_max: i64,
    /// Maximum number of entries the sequence may hold
    pub max_entries: usize,
}

impl Default for ValidationLimits {
    /// Documented defaults: 255-byte text, signed 32-bit integer range,
    /// 10,000 entries.
    fn default() -> Self {
        Self {
            max_text_len: MAX_TEXT_LEN,
            int_min: i64::from(i32::MIN),
            int_max: i64::from(i32::MAX),
            max_entries: MAX_ENTRIES,
        }
    }
}

/// Strip control bytes (NUL included) and the disallowed substrings.
///
/// Applied to text before insert, remove, and contains so that lookups see
/// the same form insertion stored.
///
/// # Example
///
/// ```
/// use sortchain::service::validate::sanitize_text;
///
/// assert_eq!(sanitize_text("ab\u{0}c"), "abc");
/// assert_eq!(sanitize_text("say <script>hi</script>"), "say hi");
/// ```
pub fn sanitize_text(raw: &str) -> String {
    let mut clean: String = raw.chars().filter(|c| !c.is_control()).collect();
    for sequence in STRIPPED_SEQUENCES {
        if clean.contains(sequence) {
            clean = clean.replace(sequence, "");
        }
    }
    clean
}

/// Enforce the text length cap.
pub fn check_text(text: &str, limits: &ValidationLimits) -> Result<(), ServiceError> {
    if text.len() > limits.max_text_len {
        return Err(ServiceError::TextTooLong {
            length: text.len(),
            limit: limits.max_text_len,
        });
    }
    Ok(())
}

/// Enforce the integer range bounds.
pub fn check_int(value: i64, limits: &ValidationLimits) -> Result<(), ServiceError> {
    if value < limits.int_min || value > limits.int_max {
        return Err(ServiceError::IntOutOfRange {
            value,
            min: limits.int_min,
            max: limits.int_max,
        });
    }
    Ok(())
}

// ============================================================================
// Unit Tests
// ============================================================================
