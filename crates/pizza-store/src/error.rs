//! # Store Error Types
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Store Error Categories                            │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │    Fetching     │  │       Domain            │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidConfig  │  │  Fetch          │  │  Core (pizza-core)      │ │
//! │  │  ConfigLoad     │  │  EmptyCollection│  │                         │ │
//! │  │  FixtureLoad    │  │                 │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Fetch failures are reported as-is. This layer does not retry; that is
//! the API collaborator's business.

use pizza_core::{CoreError, EntityKind};
use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Result type alias for API collaborator calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Failure reported by an API collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Request failed: {0}")]
    Request(String),

    /// The backend answered with something we cannot use.
    #[error("Unexpected response: {0}")]
    InvalidResponse(String),

    /// The session is not allowed to read the resource.
    #[error("Not authorized")]
    Unauthorized,
}

/// Store error type.
#[derive(Debug, Error)]
pub enum StoreError {
    // =========================================================================
    // Fetch Errors
    // =========================================================================
    /// A fetch for one resource failed.
    #[error("Fetching {resource} failed: {source}")]
    Fetch {
        resource: String,
        #[source]
        source: ApiError,
    },

    /// A collection the builder seeds from came back empty.
    #[error("Collection {0} is empty; nothing to preselect")]
    EmptyCollection(EntityKind),

    // =========================================================================
    // Domain Errors
    // =========================================================================
    /// Pricing, display or validation failure from pizza-core.
    #[error(transparent)]
    Core(#[from] CoreError),

    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Failed to load config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Failed to load the catalog fixture.
    #[error("Failed to load fixture: {0}")]
    FixtureLoadFailed(String),
}

impl StoreError {
    /// Wraps an API failure for one resource.
    pub fn fetch(resource: impl Into<String>, source: ApiError) -> Self {
        StoreError::Fetch {
            resource: resource.into(),
            source,
        }
    }

    /// Returns true if this error came from the API collaborator.
    pub fn is_fetch_error(&self) -> bool {
        matches!(self, StoreError::Fetch { .. })
    }
}

impl From<toml::de::Error> for StoreError {
    fn from(err: toml::de::Error) -> Self {
        StoreError::ConfigLoadFailed(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::FixtureLoadFailed(err.to_string())
    }
}
