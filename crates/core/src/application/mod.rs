// Application Layer - Use Cases and Business Logic

pub mod contracts;
pub mod deposit_policy;
pub mod identity;
pub mod payment;
pub mod unpaid_jobs;

// Re-exports
pub use contracts::ContractQueries;
pub use deposit_policy::{DepositPolicy, DepositPolicyEnforcer};
pub use identity::RepositoryProfileDirectory;
pub use payment::PaymentTransactionCoordinator;
pub use unpaid_jobs::UnpaidJobAggregator;
