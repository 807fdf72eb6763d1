// Payment Transaction Coordinator - job payments and balance transfers

pub mod deposit;
pub mod pay_job;

#[cfg(test)]
mod payment_test;

pub use deposit::DepositRequest;
pub use pay_job::PayJobRequest;

use crate::application::DepositPolicy;
use crate::domain::{Job, JobId, Money, Profile, ProfileId};
use crate::error::{AppError, Result};
use crate::port::{LedgerTransaction, TimeProvider, TransactionalRepository};
use std::sync::Arc;

/// Executes job payments and deposits as single ledger transactions.
///
/// No retries: every rejection is returned to the caller as a typed `AppError`.
pub struct PaymentTransactionCoordinator {
    ledger: Arc<dyn TransactionalRepository>,
    time_provider: Arc<dyn TimeProvider>,
    policy: DepositPolicy,
}

impl PaymentTransactionCoordinator {
    pub fn new(
        ledger: Arc<dyn TransactionalRepository>,
        time_provider: Arc<dyn TimeProvider>,
        policy: DepositPolicy,
    ) -> Self {
        Self {
            ledger,
            time_provider,
            policy,
        }
    }

    /// Pay an unpaid job on one of the payer's contracts
    pub async fn pay_job(&self, job_id: JobId, payer_id: ProfileId) -> Result<Job> {
        pay_job::execute(
            self.ledger.as_ref(),
            self.time_provider.as_ref(),
            PayJobRequest { job_id, payer_id },
        )
        .await
    }

    /// Move `amount` from the depositor to the receiver, subject to the deposit cap.
    ///
    /// Returns the depositor's updated profile.
    pub async fn deposit_to(
        &self,
        receiver_id: ProfileId,
        depositor_id: ProfileId,
        amount: Money,
    ) -> Result<Profile> {
        deposit::execute(
            self.ledger.as_ref(),
            &self.policy,
            DepositRequest {
                receiver_id,
                depositor_id,
                amount,
            },
        )
        .await
    }
}

/// Commit on success, roll back on any failure.
///
/// Storage errors from either path come back as `TransactionFailure`.
async fn settle<T>(tx: Box<dyn LedgerTransaction>, outcome: Result<T>) -> Result<T> {
    match outcome {
        Ok(value) => {
            tx.commit().await.map_err(AppError::within_transaction)?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                tracing::error!(error = %rollback_err, "Ledger rollback failed");
            }
            Err(err.within_transaction())
        }
    }
}
