//! Custom error types for Ether-Split
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Ether-Split operations
#[derive(Error, Debug)]
pub enum SplitError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Input rejected by a ledger or registry rule
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// The external wallet refused or could not be reached
    #[error("Wallet connection failed: {0}")]
    ExternalFailure(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl SplitError {
    /// Create a "not found" error for participants
    pub fn participant_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Participant",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Create a "duplicate" error for participants
    pub fn duplicate_participant(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Participant",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation rejection (including duplicates)
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Duplicate { .. })
    }

    /// Check if this came from the wallet collaborator
    pub fn is_external(&self) -> bool {
        matches!(self, Self::ExternalFailure(_))
    }
}

impl From<std::io::Error> for SplitError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SplitError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Ether-Split operations
pub type SplitResult<T> = Result<T, SplitError>;
