// Contract Queries

use crate::domain::{Contract, ContractId, ProfileId};
use crate::error::{AppError, Result};
use crate::port::ContractRepository;
use std::sync::Arc;

/// Read-only contract access scoped to the calling client
pub struct ContractQueries {
    contract_repo: Arc<dyn ContractRepository>,
}

impl ContractQueries {
    pub fn new(contract_repo: Arc<dyn ContractRepository>) -> Self {
        Self { contract_repo }
    }

    /// Contract by id if the caller is its client, otherwise `NotFound`
    pub async fn get_contract(&self, id: ContractId, caller_id: ProfileId) -> Result<Contract> {
        self.contract_repo
            .find_for_client(id, caller_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Contract {} not found", id)))
    }

    pub async fn list_contracts(&self, caller_id: ProfileId) -> Result<Vec<Contract>> {
        self.contract_repo.list_for_client(caller_id).await
    }
}
