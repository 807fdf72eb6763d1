// Port Layer - Interfaces for external dependencies

pub mod contract_repository;
pub mod job_repository;
pub mod profile_directory;
pub mod profile_repository;
pub mod time_provider;
pub mod transaction;

// Re-exports
pub use contract_repository::ContractRepository;
pub use job_repository::JobRepository;
pub use profile_directory::ProfileDirectory;
pub use profile_repository::ProfileRepository;
pub use time_provider::TimeProvider;
pub use transaction::{LedgerTransaction, Transaction, TransactionalRepository};
