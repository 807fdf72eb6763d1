//! RPC Error Types
//!
//! Maps application errors to JSON-RPC error codes. Every failure kind a caller
//! can branch on gets its own code.

use jsonrpsee::types::ErrorObjectOwned;
use marketplace_core::error::AppError;
use serde_json::json;

/// RPC Error Codes
pub mod code {
    pub const VALIDATION_ERROR: i32 = 4000;
    pub const NOT_FOUND: i32 = 4001;
    pub const UNAUTHORIZED: i32 = 4010;
    pub const INSUFFICIENT_FUNDS: i32 = 4020;
    pub const DEPOSIT_CAP_EXCEEDED: i32 = 4021;
    pub const INTERNAL_ERROR: i32 = 5000;
    pub const DB_ERROR: i32 = 5001;
    pub const TRANSACTION_FAILURE: i32 = 5003;
}

/// Convert AppError to JSON-RPC ErrorObject
pub fn to_rpc_error(err: AppError) -> ErrorObjectOwned {
    let message = err.to_string();
    match err {
        AppError::Validation(msg) => {
            ErrorObjectOwned::owned(code::VALIDATION_ERROR, msg, None::<()>)
        }
        AppError::Domain(e) => {
            ErrorObjectOwned::owned(code::VALIDATION_ERROR, e.to_string(), None::<()>)
        }
        AppError::NotFound(msg) => ErrorObjectOwned::owned(code::NOT_FOUND, msg, None::<()>),
        AppError::Unauthorized(msg) => {
            ErrorObjectOwned::owned(code::UNAUTHORIZED, msg, None::<()>)
        }
        // Amounts in cents, as on the wire
        AppError::InsufficientFunds {
            required,
            available,
        } => ErrorObjectOwned::owned(
            code::INSUFFICIENT_FUNDS,
            message,
            Some(json!({ "required": required, "available": available })),
        ),
        AppError::DepositCapExceeded { requested, allowed } => ErrorObjectOwned::owned(
            code::DEPOSIT_CAP_EXCEEDED,
            message,
            Some(json!({ "requested": requested, "allowed": allowed })),
        ),
        AppError::TransactionFailure(msg) => {
            ErrorObjectOwned::owned(code::TRANSACTION_FAILURE, msg, None::<()>)
        }
        AppError::Database(msg) => ErrorObjectOwned::owned(code::DB_ERROR, msg, None::<()>),
        AppError::Config(msg) | AppError::Internal(msg) => {
            ErrorObjectOwned::owned(code::INTERNAL_ERROR, msg, None::<()>)
        }
    }
}
