// Transaction port for atomic ledger operations

use crate::domain::{Job, JobId, Money, Profile, ProfileId};
use crate::error::Result;
use async_trait::async_trait;

/// Transaction trait for atomic multi-step operations
///
/// Dropping a transaction without committing discards its writes.
#[async_trait]
pub trait Transaction: Send {
    /// Commit the transaction
    async fn commit(self: Box<Self>) -> Result<()>;

    /// Rollback the transaction
    async fn rollback(self: Box<Self>) -> Result<()>;
}

/// Entry point for ledger transactions
#[async_trait]
pub trait TransactionalRepository: Send + Sync {
    /// Begin a new transaction.
    ///
    /// Ledger transactions are serialized against each other for their whole
    /// lifetime, so reads inside one are stable until commit.
    async fn begin_transaction(&self) -> Result<Box<dyn LedgerTransaction>>;
}

/// Reads and balance mutations within a transaction
#[async_trait]
pub trait LedgerTransaction: Transaction {
    /// Find profile by ID (within transaction)
    async fn find_profile(&mut self, id: ProfileId) -> Result<Option<Profile>>;

    /// Unpaid job whose contract has `client_id` as client (within transaction)
    async fn find_unpaid_job_for_client(
        &mut self,
        job_id: JobId,
        client_id: ProfileId,
    ) -> Result<Option<Job>>;

    /// Sum of unpaid job prices where the profile is the contractor (within transaction)
    async fn sum_unpaid_for_contractor(&mut self, contractor_id: ProfileId) -> Result<Money>;

    /// Flip `paid` and set `payment_date` if the job is still unpaid.
    ///
    /// Returns false when no unpaid row matched.
    async fn mark_job_paid(&mut self, job_id: JobId, paid_at: i64) -> Result<bool>;

    /// Add `amount` to a balance.
    ///
    /// Returns false when the profile does not exist or the sum would overflow.
    async fn credit(&mut self, profile_id: ProfileId, amount: Money) -> Result<bool>;

    /// Subtract `amount` from a balance if it covers it.
    ///
    /// Returns false when the profile does not exist or the balance is short.
    async fn debit(&mut self, profile_id: ProfileId, amount: Money) -> Result<bool>;
}
