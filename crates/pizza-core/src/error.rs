//! # Error Types
//!
//! Domain-specific error types for pizza-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pizza-core errors (this file)                                         │
//! │  ├── CoreError        - Unresolved ids, attributes, spelling, overflow │
//! │  └── ValidationError  - Reference data / builder input failures        │
//! │                                                                         │
//! │  pizza-store errors (separate crate)                                   │
//! │  └── StoreError       - Fetch failures, config, empty collections      │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → UI                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Propagation
//! Nothing in this crate recovers from an error or substitutes a default.
//! A pricing or display call over data that does not resolve fails, and the
//! caller decides what to show.

use thiserror::Error;

use crate::types::{EntityKind, ItemId};

// =============================================================================
// Core Error
// =============================================================================

/// Core pricing and display errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// An id did not resolve in its collection.
    ///
    /// ## When This Occurs
    /// - A selection references an ingredient the catalog no longer has
    /// - The builder still points at a size from a previous catalog fetch
    /// - Catalog not loaded yet (every collection is empty)
    #[error("{kind} item not found: {id}")]
    UnresolvedReference { kind: EntityKind, id: ItemId },

    /// A resolved item lacks the attribute a computation needs
    /// (a dough without `price`, a size without `multiplier`).
    #[error("{kind} item {id} has no {attribute}")]
    MissingAttribute {
        kind: EntityKind,
        id: ItemId,
        attribute: &'static str,
    },

    /// Dough name absent from the spelling table.
    #[error("No spelling for dough '{0}'")]
    MissingTranslation(String),

    /// A price computation left the representable kopeck range.
    #[error("Amount is out of range")]
    AmountOverflow,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
