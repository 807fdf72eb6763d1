// Contract Domain Model

use super::error::{DomainError, Result};
use super::profile::ProfileId;
use serde::{Deserialize, Serialize};

/// Contract ID (storage-assigned integer)
pub type ContractId = i64;

/// Contract lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractStatus {
    New,
    InProgress,
    Terminated,
}

impl ContractStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractStatus::New => "new",
            ContractStatus::InProgress => "in_progress",
            ContractStatus::Terminated => "terminated",
        }
    }
}

impl std::fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ContractStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "new" => Ok(ContractStatus::New),
            "in_progress" => Ok(ContractStatus::InProgress),
            "terminated" => Ok(ContractStatus::Terminated),
            other => Err(DomainError::UnknownVariant {
                kind: "contract status",
                value: other.to_string(),
            }),
        }
    }
}

/// Contract Entity (one client, one contractor)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub id: ContractId,
    pub terms: String,
    pub status: ContractStatus,
    pub client_id: ProfileId,
    pub contractor_id: ProfileId,
}

impl Contract {
    pub fn new(
        id: ContractId,
        terms: impl Into<String>,
        status: ContractStatus,
        client_id: ProfileId,
        contractor_id: ProfileId,
    ) -> Self {
        Self {
            id,
            terms: terms.into(),
            status,
            client_id,
            contractor_id,
        }
    }
}
