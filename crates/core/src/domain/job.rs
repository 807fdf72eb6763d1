// Job Domain Model

use super::contract::ContractId;
use super::error::{DomainError, Result};
use super::money::Money;
use serde::{Deserialize, Serialize};

/// Job ID (storage-assigned integer)
pub type JobId = i64;

/// Job Entity
///
/// `payment_date` is `Some` exactly when `paid` is true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub contract_id: ContractId,
    pub description: String,
    pub price: Money,
    pub paid: bool,
    pub payment_date: Option<i64>, // epoch ms
}

impl Job {
    /// Create an unpaid job
    pub fn new(
        id: JobId,
        contract_id: ContractId,
        description: impl Into<String>,
        price: Money,
    ) -> Result<Self> {
        if !price.is_positive() {
            return Err(DomainError::InvalidAmount(format!(
                "job price must be positive, got {}",
                price
            )));
        }

        Ok(Self {
            id,
            contract_id,
            description: description.into(),
            price,
            paid: false,
            payment_date: None,
        })
    }

    /// Transition to paid with explicit timestamp (once only)
    pub fn mark_paid(&mut self, now_millis: i64) -> Result<()> {
        if self.paid {
            return Err(DomainError::AlreadyPaid(self.id));
        }
        self.paid = true;
        self.payment_date = Some(now_millis);
        Ok(())
    }
}
