//! Custom error types for Agora Books
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::fmt;

use thiserror::Error;

/// The main error type for Agora Books operations
#[derive(Error, Debug)]
pub enum AgoraError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// The partner identifier is not one of the two company partners
    #[error("Invalid partner: '{0}' (expected 'a' or 'b')")]
    InvalidPartner(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Balance verification could not be carried out
    #[error("Verification error: {0}")]
    Verification(String),
}

impl AgoraError {
    /// Create a "not found" error for personal projects
    pub fn project_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Project",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for company projects
    pub fn company_project_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Company project",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for expenses (fixed or personal)
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for expense reports
    pub fn expense_report_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense report",
            identifier: identifier.into(),
        }
    }

    /// A total that no longer fits in a decimal amount
    pub fn amount_overflow(what: impl fmt::Display) -> Self {
        Self::Validation(format!("{} total is too large to compute", what))
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an invalid partner error
    pub fn is_invalid_partner(&self) -> bool {
        matches!(self, Self::InvalidPartner(_))
    }
}

impl From<std::io::Error> for AgoraError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AgoraError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for AgoraError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Export(err.to_string())
    }
}

impl From<csv::Error> for AgoraError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for Agora Books operations
pub type AgoraResult<T> = Result<T, AgoraError>;
