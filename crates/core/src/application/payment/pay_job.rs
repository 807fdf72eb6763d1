// Pay Job Use Case

use super::settle;
use crate::domain::{Job, JobId, ProfileId};
use crate::error::{AppError, Result};
use crate::port::{LedgerTransaction, TimeProvider, TransactionalRepository};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayJobRequest {
    pub job_id: JobId,
    pub payer_id: ProfileId,
}

/// Execute pay-job use case (single transaction)
///
/// # Arguments
///
/// * `ledger` - Transactional repository
/// * `time_provider` - Clock for `payment_date` (injected for determinism)
/// * `req` - Job and paying client
pub async fn execute(
    ledger: &dyn TransactionalRepository,
    time_provider: &dyn TimeProvider,
    req: PayJobRequest,
) -> Result<Job> {
    let mut tx = ledger
        .begin_transaction()
        .await
        .map_err(AppError::within_transaction)?;

    let outcome = pay_within(tx.as_mut(), time_provider, &req).await;
    let result = settle(tx, outcome).await;

    match &result {
        Ok(job) => info!(
            job_id = job.id,
            payer_id = req.payer_id,
            price = %job.price,
            "Job paid"
        ),
        Err(e) => warn!(job_id = req.job_id, payer_id = req.payer_id, error = %e, "Job payment rejected"),
    }

    result
}

async fn pay_within(
    tx: &mut dyn LedgerTransaction,
    time_provider: &dyn TimeProvider,
    req: &PayJobRequest,
) -> Result<Job> {
    // Paid jobs and other clients' jobs are filtered out here, both read as NotFound
    let mut job = tx
        .find_unpaid_job_for_client(req.job_id, req.payer_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {} not found", req.job_id)))?;

    let payer = tx
        .find_profile(req.payer_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Profile {} not found", req.payer_id)))?;

    if !payer.can_afford(job.price) {
        return Err(AppError::InsufficientFunds {
            required: job.price,
            available: payer.balance,
        });
    }

    let now = time_provider.now_millis();

    if !tx.mark_job_paid(job.id, now).await? {
        return Err(AppError::NotFound(format!("Job {} not found", req.job_id)));
    }

    if !tx.debit(payer.id, job.price).await? {
        return Err(AppError::InsufficientFunds {
            required: job.price,
            available: payer.balance,
        });
    }

    job.mark_paid(now)?;
    Ok(job)
}
