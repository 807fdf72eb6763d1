//! RPC Method Handlers
//!
//! Resolves the caller through the profile directory, then delegates to the
//! application services.

use crate::error::to_rpc_error;
use crate::types::{
    DepositRequest, GetContractRequest, ListContractsRequest, ListContractsResponse,
    MaxDepositRequest, MaxDepositResponse, PayJobRequest, UnpaidJobsRequest, UnpaidJobsResponse,
};
use jsonrpsee::types::ErrorObjectOwned;
use marketplace_core::application::{
    ContractQueries, DepositPolicyEnforcer, PaymentTransactionCoordinator, UnpaidJobAggregator,
};
use marketplace_core::domain::{Contract, Job, Profile, ProfileId};
use marketplace_core::port::ProfileDirectory;
use std::sync::Arc;

/// RPC Handler with injected dependencies
pub struct RpcHandler {
    directory: Arc<dyn ProfileDirectory>,
    contracts: ContractQueries,
    unpaid_jobs: UnpaidJobAggregator,
    deposit_policy: DepositPolicyEnforcer,
    payments: PaymentTransactionCoordinator,
}

impl RpcHandler {
    pub fn new(
        directory: Arc<dyn ProfileDirectory>,
        contracts: ContractQueries,
        unpaid_jobs: UnpaidJobAggregator,
        deposit_policy: DepositPolicyEnforcer,
        payments: PaymentTransactionCoordinator,
    ) -> Self {
        Self {
            directory,
            contracts,
            unpaid_jobs,
            deposit_policy,
            payments,
        }
    }

    async fn identify(&self, profile_id: ProfileId) -> Result<Profile, ErrorObjectOwned> {
        self.directory
            .identify(profile_id)
            .await
            .map_err(to_rpc_error)
    }

    /// contracts.get.v1
    pub async fn get_contract(
        &self,
        params: GetContractRequest,
    ) -> Result<Contract, ErrorObjectOwned> {
        let caller = self.identify(params.profile_id).await?;

        self.contracts
            .get_contract(params.contract_id, caller.id)
            .await
            .map_err(to_rpc_error)
    }

    /// contracts.list.v1
    pub async fn list_contracts(
        &self,
        params: ListContractsRequest,
    ) -> Result<ListContractsResponse, ErrorObjectOwned> {
        let caller = self.identify(params.profile_id).await?;

        let contracts = self
            .contracts
            .list_contracts(caller.id)
            .await
            .map_err(to_rpc_error)?;

        Ok(ListContractsResponse { contracts })
    }

    /// jobs.unpaid.v1
    pub async fn unpaid_jobs(
        &self,
        params: UnpaidJobsRequest,
    ) -> Result<UnpaidJobsResponse, ErrorObjectOwned> {
        let caller = self.identify(params.profile_id).await?;

        let jobs = self
            .unpaid_jobs
            .unpaid_jobs_for(caller.id)
            .await
            .map_err(to_rpc_error)?;

        Ok(UnpaidJobsResponse { jobs })
    }

    /// jobs.pay.v1
    pub async fn pay_job(&self, params: PayJobRequest) -> Result<Job, ErrorObjectOwned> {
        let caller = self.identify(params.profile_id).await?;

        self.payments
            .pay_job(params.job_id, caller.id)
            .await
            .map_err(to_rpc_error)
    }

    /// balances.deposit.v1
    pub async fn deposit(&self, params: DepositRequest) -> Result<Profile, ErrorObjectOwned> {
        let caller = self.identify(params.profile_id).await?;

        self.payments
            .deposit_to(params.user_id, caller.id, params.amount)
            .await
            .map_err(to_rpc_error)
    }

    /// balances.max_deposit.v1
    pub async fn max_deposit(
        &self,
        params: MaxDepositRequest,
    ) -> Result<MaxDepositResponse, ErrorObjectOwned> {
        let caller = self.identify(params.profile_id).await?;

        let max_allowed_deposit = self
            .deposit_policy
            .max_allowed_deposit(caller.id)
            .await
            .map_err(to_rpc_error)?;

        Ok(MaxDepositResponse {
            profile_id: caller.id,
            max_allowed_deposit,
        })
    }
}
