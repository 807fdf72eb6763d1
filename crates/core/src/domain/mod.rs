// Domain Layer - Pure business logic and entities

pub mod contract;
pub mod error;
pub mod job;
pub mod money;
pub mod profile;

// Re-exports
pub use contract::{Contract, ContractId, ContractStatus};
pub use error::DomainError;
pub use job::{Job, JobId};
pub use money::Money;
pub use profile::{Profile, ProfileId, ProfileRole};
