//! Error types for Study Assist.

/// Top-level error type for the service.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Workspace store errors.
///
/// The store has exactly two failure kinds: a top-level entity reference that
/// did not resolve, and a nested id that did not resolve within its stated
/// parent. Every other store operation is total. Both kinds are recoverable
/// at the boundary (404 or `{success: false}` payloads, never a crash).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A foreign-key reference to a top-level entity did not resolve.
    #[error("{entity} {id} not found")]
    ParentNotFound { entity: &'static str, id: u64 },

    /// A nested id did not resolve within its stated parent.
    #[error("{entity} {id} not found in {parent} {parent_id}")]
    ChildNotFound {
        entity: &'static str,
        id: u64,
        parent: &'static str,
        parent_id: u64,
    },
}

impl StoreError {
    /// Shorthand for a missing top-level entity.
    pub fn parent(entity: &'static str, id: u64) -> Self {
        Self::ParentNotFound { entity, id }
    }

    /// Shorthand for a missing nested entity.
    pub fn child(entity: &'static str, id: u64, parent: &'static str, parent_id: u64) -> Self {
        Self::ChildNotFound {
            entity,
            id,
            parent,
            parent_id,
        }
    }
}

/// Result type alias for the service.
pub type Result<T> = std::result::Result<T, Error>;
