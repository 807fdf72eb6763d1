// Contract Repository Port (Interface)

use crate::domain::{Contract, ContractId, ProfileId};
use crate::error::Result;
use async_trait::async_trait;

/// Repository interface for Contract persistence
#[async_trait]
pub trait ContractRepository: Send + Sync {
    /// Insert a new contract
    async fn insert(&self, contract: &Contract) -> Result<()>;

    /// Find contract by ID, only if `client_id` is its client
    async fn find_for_client(
        &self,
        id: ContractId,
        client_id: ProfileId,
    ) -> Result<Option<Contract>>;

    /// All contracts where `client_id` is the client, ordered by id
    async fn list_for_client(&self, client_id: ProfileId) -> Result<Vec<Contract>>;
}
