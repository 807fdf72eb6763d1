// Profile Domain Model

use super::error::{DomainError, Result};
use super::money::Money;
use serde::{Deserialize, Serialize};

/// Profile ID (storage-assigned integer)
pub type ProfileId = i64;

/// Which side of a contract a profile stands on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileRole {
    Client,
    Contractor,
}

impl ProfileRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileRole::Client => "client",
            ProfileRole::Contractor => "contractor",
        }
    }
}

impl std::fmt::Display for ProfileRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProfileRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "client" => Ok(ProfileRole::Client),
            "contractor" => Ok(ProfileRole::Contractor),
            other => Err(DomainError::UnknownVariant {
                kind: "profile role",
                value: other.to_string(),
            }),
        }
    }
}

/// Profile Entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub first_name: String,
    pub last_name: String,
    pub profession: String,
    pub role: ProfileRole,
    pub balance: Money,
}

impl Profile {
    pub fn new(
        id: ProfileId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        profession: impl Into<String>,
        role: ProfileRole,
        balance: Money,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            profession: profession.into(),
            role,
            balance,
        }
    }

    pub fn can_afford(&self, amount: Money) -> bool {
        self.balance >= amount
    }

    /// Apply a committed debit to this in-memory view.
    ///
    /// Persisted balances only change through `LedgerTransaction::debit`.
    pub fn debit(&mut self, amount: Money) -> Result<()> {
        if !self.can_afford(amount) {
            return Err(DomainError::InvalidAmount(format!(
                "debit of {} exceeds balance {}",
                amount, self.balance
            )));
        }
        self.balance = self.balance.checked_sub(amount)?;
        Ok(())
    }

    /// Apply a credit to this in-memory view
    pub fn credit(&mut self, amount: Money) -> Result<()> {
        self.balance = self.balance.checked_add(amount)?;
        Ok(())
    }
}
