//! Error handling for the Climate Pledge backend
//!
//! This module provides idiomatic Rust error types using thiserror for
//! better error messages and proper error chain handling. The impact
//! aggregator itself never fails on data shape; these types cover the
//! catalog configuration and persistence boundaries around it.

use thiserror::Error;

/// Main error type for the pledge system
#[derive(Error, Debug)]
pub enum PledgeError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Share error: {0}")]
    Share(#[from] ShareError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors raised while loading or validating the action catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Catalog parse error: {message}")]
    Parse { message: String },

    #[error("Duplicate action id '{id}' in catalog")]
    DuplicateAction { id: String },

    #[error("Duplicate category id '{id}' in catalog")]
    DuplicateCategory { id: String },

    #[error("Action '{action}' declares category '{declared}' but is owned by category '{owner}'")]
    CategoryMismatch {
        action: String,
        declared: String,
        owner: String,
    },

    #[error("Action '{action}' has negative impact value {value}")]
    NegativeImpact { action: String, value: f64 },
}

/// Errors from the pledge store and profile persistence
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Profile '{user_id}' not found")]
    ProfileNotFound { user_id: String },

    #[error("Invalid user id '{value}': {message}")]
    InvalidUserId { value: String, message: String },
}

#[cfg(feature = "database")]
impl From<sqlx::Error> for StoreError {
    fn from(error: sqlx::Error) -> Self {
        StoreError::Database {
            message: error.to_string(),
        }
    }
}

/// Errors raised while building social share links
#[derive(Error, Debug)]
pub enum ShareError {
    #[error("Invalid base URL '{url}': {message}")]
    InvalidBaseUrl { url: String, message: String },
}

/// Result type aliases for convenience
pub type PledgeResult<T> = Result<T, PledgeError>;
pub type CatalogResult<T> = Result<T, CatalogError>;
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let catalog_err = CatalogError::DuplicateAction {
            id: "energy-1".to_string(),
        };

        let pledge_err = PledgeError::Catalog(catalog_err);
        assert!(matches!(pledge_err, PledgeError::Catalog(_)));
    }

    #[test]
    fn test_error_display() {
        let err = CatalogError::CategoryMismatch {
            action: "food-2".to_string(),
            declared: "energy".to_string(),
            owner: "food".to_string(),
        };
        let rendered = format!("{}", err);
        assert!(rendered.contains("food-2"));
        assert!(rendered.contains("energy"));
    }

    #[test]
    fn test_store_error_display() {
        let err = StoreError::ProfileNotFound {
            user_id: "abc".to_string(),
        };
        assert_eq!(format!("{}", err), "Profile 'abc' not found");
    }
}
