// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Job {0} is already paid")]
    AlreadyPaid(i64),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Monetary overflow")]
    Overflow,

    #[error("Unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, DomainError>;
