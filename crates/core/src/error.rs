// Central Error Type for the Application

use crate::domain::Money;
use thiserror::Error;

/// Application-level error type
///
/// Callers branch on the variant: every payment outcome other than success
/// has its own kind.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] crate::domain::DomainError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Insufficient funds: required {required}, available {available}")]
    InsufficientFunds { required: Money, available: Money },

    #[error("Deposit cap exceeded: requested {requested}, allowed {allowed}")]
    DepositCapExceeded { requested: Money, allowed: Money },

    #[error("Transaction failure: {0}")]
    TransactionFailure(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Storage errors raised inside a ledger transaction surface as
    /// `TransactionFailure`; typed outcomes pass through unchanged.
    pub fn within_transaction(self) -> Self {
        match self {
            AppError::Database(msg) | AppError::Internal(msg) => AppError::TransactionFailure(msg),
            other => other,
        }
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

// Note: sqlx::Error conversion is handled in infra-sqlite crate
// by converting to AppError::Database(String)
