// Marketplace Infrastructure - SQLite Adapter
// Implements: ProfileRepository, ContractRepository, JobRepository, TransactionalRepository

mod connection;
mod contract_repository;
mod error;
mod job_repository;
mod migration;
mod profile_repository;
mod repository;
mod rows;
mod transaction;

pub use connection::create_pool;
pub use migration::run_migrations;
pub use repository::SqliteMarketplaceRepository;
pub use transaction::SqliteLedgerTransaction;

// Note: sqlx::Error conversion is handled by error::map_sqlx_error
// due to Rust's orphan rules (cannot implement From<sqlx::Error> for AppError here)
