// SQLite ContractRepository Implementation

use crate::error::map_sqlx_error;
use crate::rows::ContractRow;
use crate::SqliteMarketplaceRepository;
use async_trait::async_trait;
use marketplace_core::domain::{Contract, ContractId, ProfileId};
use marketplace_core::error::Result;
use marketplace_core::port::ContractRepository;

#[async_trait]
impl ContractRepository for SqliteMarketplaceRepository {
    async fn insert(&self, contract: &Contract) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO contracts (id, terms, status, client_id, contractor_id)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(contract.id)
        .bind(&contract.terms)
        .bind(contract.status.as_str())
        .bind(contract.client_id)
        .bind(contract.contractor_id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn find_for_client(
        &self,
        id: ContractId,
        client_id: ProfileId,
    ) -> Result<Option<Contract>> {
        let row = sqlx::query_as::<_, ContractRow>(
            r#"
            SELECT id, terms, status, client_id, contractor_id
            FROM contracts
            WHERE id = ? AND client_id = ?
            "#,
        )
        .bind(id)
        .bind(client_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.map(ContractRow::into_contract).transpose()
    }

    async fn list_for_client(&self, client_id: ProfileId) -> Result<Vec<Contract>> {
        let rows: Vec<ContractRow> = sqlx::query_as(
            r#"
            SELECT id, terms, status, client_id, contractor_id
            FROM contracts
            WHERE client_id = ?
            ORDER BY id ASC
            "#,
        )
        .bind(client_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.into_iter().map(ContractRow::into_contract).collect()
    }
}
