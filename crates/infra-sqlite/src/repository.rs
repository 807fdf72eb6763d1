// SQLite Marketplace Repository

use crate::error::map_sqlx_error;
use crate::SqliteLedgerTransaction;
use async_trait::async_trait;
use marketplace_core::error::Result;
use marketplace_core::port::{LedgerTransaction, TransactionalRepository};
use sqlx::SqlitePool;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Pool-backed adapter for every marketplace repository port.
///
/// Clones share the pool and the write gate.
#[derive(Clone)]
pub struct SqliteMarketplaceRepository {
    pub(crate) pool: SqlitePool,
    write_gate: Arc<Mutex<()>>,
}

impl SqliteMarketplaceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            write_gate: Arc::new(Mutex::new(())),
        }
    }
}

#[async_trait]
impl TransactionalRepository for SqliteMarketplaceRepository {
    async fn begin_transaction(&self) -> Result<Box<dyn LedgerTransaction>> {
        // Held until commit/rollback/drop: ledger transactions never interleave
        let guard = Arc::clone(&self.write_gate).lock_owned().await;
        let tx = self.pool.begin().await.map_err(map_sqlx_error)?;
        Ok(Box::new(SqliteLedgerTransaction::new(tx, guard)))
    }
}
