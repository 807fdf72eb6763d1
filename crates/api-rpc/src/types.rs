//! RPC Request/Response Types
//!
//! Every request names the calling profile in `profile_id`.
//! Amounts are integer cents.

use marketplace_core::domain::{Contract, ContractId, Job, JobId, Money, ProfileId};
use serde::{Deserialize, Serialize};

/// contracts.get.v1 - Get one of the caller's contracts
#[derive(Debug, Deserialize)]
pub struct GetContractRequest {
    pub profile_id: ProfileId,
    pub contract_id: ContractId,
}

/// contracts.list.v1 - List contracts where the caller is client
#[derive(Debug, Deserialize)]
pub struct ListContractsRequest {
    pub profile_id: ProfileId,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListContractsResponse {
    pub contracts: Vec<Contract>,
}

/// jobs.unpaid.v1 - Unpaid jobs on either side of the caller's contracts
#[derive(Debug, Deserialize)]
pub struct UnpaidJobsRequest {
    pub profile_id: ProfileId,
}

#[derive(Debug, Clone, Serialize)]
pub struct UnpaidJobsResponse {
    pub jobs: Vec<Job>,
}

/// jobs.pay.v1 - Pay a job as its client
#[derive(Debug, Deserialize)]
pub struct PayJobRequest {
    pub profile_id: ProfileId,
    pub job_id: JobId,
}

/// balances.deposit.v1 - Move funds from the caller to `user_id`
#[derive(Debug, Deserialize)]
pub struct DepositRequest {
    pub profile_id: ProfileId,
    pub user_id: ProfileId,
    pub amount: Money,
}

/// balances.max_deposit.v1 - Current deposit cap for the caller
#[derive(Debug, Deserialize)]
pub struct MaxDepositRequest {
    pub profile_id: ProfileId,
}

#[derive(Debug, Clone, Serialize)]
pub struct MaxDepositResponse {
    pub profile_id: ProfileId,
    pub max_allowed_deposit: Money,
}
