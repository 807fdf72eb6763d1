// sqlx::Error -> AppError mapping

use marketplace_core::error::AppError;

/// Convert sqlx::Error to AppError with the SQLite result code classified
pub(crate) fn map_sqlx_error(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) => {
            let Some(code) = db_err.code() else {
                return AppError::Database(format!("Database error: {}", db_err.message()));
            };

            // SQLite extended result codes: https://www.sqlite.org/rescode.html
            let kind = match code.as_ref() {
                "2067" | "1555" => "Unique constraint violation",
                "787" => "Foreign key constraint violation",
                "275" => "Check constraint violation",
                "1299" => "Not null constraint violation",
                "5" | "517" => "Database locked (SQLITE_BUSY)",
                "6" | "262" => "Table locked (SQLITE_LOCKED)",
                "13" => "Database full",
                _ => "Database error",
            };

            AppError::Database(format!("{} [{}]: {}", kind, code, db_err.message()))
        }
        sqlx::Error::RowNotFound => AppError::Database("Row not found".to_string()),
        sqlx::Error::ColumnNotFound(col) => AppError::Database(format!("Column not found: {}", col)),
        sqlx::Error::ColumnDecode { index, source } => {
            AppError::Database(format!("Cannot decode column {}: {}", index, source))
        }
        // Connection, pool, protocol errors
        _ => AppError::Database(err.to_string()),
    }
}
