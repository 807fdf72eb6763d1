// Deposit Use Case

use super::settle;
use crate::application::DepositPolicy;
use crate::domain::{Money, Profile, ProfileId};
use crate::error::{AppError, Result};
use crate::port::{LedgerTransaction, TransactionalRepository};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepositRequest {
    pub receiver_id: ProfileId,
    pub depositor_id: ProfileId,
    pub amount: Money,
}

/// Validate deposit request
fn validate_request(req: &DepositRequest) -> Result<()> {
    if !req.amount.is_positive() {
        return Err(AppError::Validation(format!(
            "Deposit amount must be positive, got {}",
            req.amount
        )));
    }

    if req.receiver_id == req.depositor_id {
        return Err(AppError::Validation(
            "Cannot deposit into your own profile".to_string(),
        ));
    }

    Ok(())
}

/// Execute deposit use case (single transaction)
///
/// The cap is computed over unpaid jobs where the depositor is the contractor,
/// inside the same transaction as the transfer.
pub async fn execute(
    ledger: &dyn TransactionalRepository,
    policy: &DepositPolicy,
    req: DepositRequest,
) -> Result<Profile> {
    validate_request(&req)?;

    let mut tx = ledger
        .begin_transaction()
        .await
        .map_err(AppError::within_transaction)?;

    let outcome = deposit_within(tx.as_mut(), policy, &req).await;
    let result = settle(tx, outcome).await;

    match &result {
        Ok(depositor) => info!(
            receiver_id = req.receiver_id,
            depositor_id = req.depositor_id,
            amount = %req.amount,
            depositor_balance = %depositor.balance,
            "Deposit transferred"
        ),
        Err(e) => warn!(
            receiver_id = req.receiver_id,
            depositor_id = req.depositor_id,
            amount = %req.amount,
            error = %e,
            "Deposit rejected"
        ),
    }

    result
}

async fn deposit_within(
    tx: &mut dyn LedgerTransaction,
    policy: &DepositPolicy,
    req: &DepositRequest,
) -> Result<Profile> {
    let mut depositor = tx
        .find_profile(req.depositor_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Profile {} not found", req.depositor_id)))?;

    let outstanding = tx.sum_unpaid_for_contractor(req.depositor_id).await?;
    if !policy.allows(outstanding, req.amount) {
        return Err(AppError::DepositCapExceeded {
            requested: req.amount,
            allowed: policy.max_allowed(outstanding),
        });
    }

    let mut receiver = tx
        .find_profile(req.receiver_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Profile {} not found", req.receiver_id)))?;

    if !depositor.can_afford(req.amount) {
        return Err(AppError::InsufficientFunds {
            required: req.amount,
            available: depositor.balance,
        });
    }

    // Receiver's new balance must stay representable
    receiver.credit(req.amount)?;

    if !tx.credit(receiver.id, req.amount).await? {
        return Err(AppError::NotFound(format!("Profile {} not found", receiver.id)));
    }

    if !tx.debit(depositor.id, req.amount).await? {
        return Err(AppError::InsufficientFunds {
            required: req.amount,
            available: depositor.balance,
        });
    }

    depositor.debit(req.amount)?;
    Ok(depositor)
}
