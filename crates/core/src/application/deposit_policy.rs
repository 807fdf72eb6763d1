// Deposit Cap Policy

use crate::domain::{Money, ProfileId};
use crate::error::Result;
use crate::port::JobRepository;
use std::sync::Arc;

/// Share of a contractor's outstanding receivables that one deposit may reach
pub const DEFAULT_CAP_PERCENT: u8 = 25;

/// Pure cap arithmetic, evaluated against a total read from storage.
///
/// Comparisons are done on widened integers so no rounding is involved:
/// `amount <= total * pct / 100` is tested as `amount * 100 <= total * pct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositPolicy {
    cap_percent: u8,
}

impl Default for DepositPolicy {
    fn default() -> Self {
        Self {
            cap_percent: DEFAULT_CAP_PERCENT,
        }
    }
}

impl DepositPolicy {
    /// Largest admissible deposit, rounded down to the cent
    pub fn max_allowed(&self, outstanding: Money) -> Money {
        let capped = i128::from(outstanding.cents().max(0)) * i128::from(self.cap_percent) / 100;
        // capped <= outstanding, which already fits in i64
        Money::from_cents(capped as i64)
    }

    pub fn allows(&self, outstanding: Money, amount: Money) -> bool {
        let lhs = i128::from(amount.cents()) * 100;
        let rhs = i128::from(outstanding.cents().max(0)) * i128::from(self.cap_percent);
        lhs <= rhs
    }
}

/// Evaluates the deposit cap for a contractor against current storage
pub struct DepositPolicyEnforcer {
    job_repo: Arc<dyn JobRepository>,
    policy: DepositPolicy,
}

impl DepositPolicyEnforcer {
    pub fn new(job_repo: Arc<dyn JobRepository>, policy: DepositPolicy) -> Self {
        Self { job_repo, policy }
    }

    /// Cap for one deposit; zero when the contractor has no unpaid work
    pub async fn max_allowed_deposit(&self, contractor_id: ProfileId) -> Result<Money> {
        let outstanding = self.job_repo.sum_unpaid_for_contractor(contractor_id).await?;
        Ok(self.policy.max_allowed(outstanding))
    }

    /// Advisory check only. Transfers re-evaluate the cap inside their own transaction.
    pub async fn is_deposit_allowed(&self, contractor_id: ProfileId, amount: Money) -> Result<bool> {
        let outstanding = self.job_repo.sum_unpaid_for_contractor(contractor_id).await?;
        Ok(self.policy.allows(outstanding, amount))
    }
}
