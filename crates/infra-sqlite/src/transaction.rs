// SQLite Ledger Transaction Implementation

use crate::error::map_sqlx_error;
use crate::rows::{sql, JobRow, ProfileRow};
use async_trait::async_trait;
use marketplace_core::domain::{Job, JobId, Money, Profile, ProfileId};
use marketplace_core::error::Result;
use marketplace_core::port::{LedgerTransaction, Transaction};
use sqlx::{Sqlite, Transaction as SqlxTransaction};
use tokio::sync::OwnedMutexGuard;

pub struct SqliteLedgerTransaction {
    // Declared before the guard so an uncommitted tx is rolled back before the gate opens
    tx: SqlxTransaction<'static, Sqlite>,
    _write_guard: OwnedMutexGuard<()>,
}

impl SqliteLedgerTransaction {
    pub fn new(tx: SqlxTransaction<'static, Sqlite>, write_guard: OwnedMutexGuard<()>) -> Self {
        Self {
            tx,
            _write_guard: write_guard,
        }
    }
}

#[async_trait]
impl Transaction for SqliteLedgerTransaction {
    async fn commit(self: Box<Self>) -> Result<()> {
        let SqliteLedgerTransaction { tx, _write_guard } = *self;
        tx.commit().await.map_err(map_sqlx_error)?;
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<()> {
        let SqliteLedgerTransaction { tx, _write_guard } = *self;
        tx.rollback().await.map_err(map_sqlx_error)?;
        Ok(())
    }
}

#[async_trait]
impl LedgerTransaction for SqliteLedgerTransaction {
    async fn find_profile(&mut self, id: ProfileId) -> Result<Option<Profile>> {
        let row = sqlx::query_as::<_, ProfileRow>(sql::FIND_PROFILE)
            .bind(id)
            .fetch_optional(&mut *self.tx)
            .await
            .map_err(map_sqlx_error)?;

        row.map(ProfileRow::into_profile).transpose()
    }

    async fn find_unpaid_job_for_client(
        &mut self,
        job_id: JobId,
        client_id: ProfileId,
    ) -> Result<Option<Job>> {
        let row = sqlx::query_as::<_, JobRow>(sql::FIND_UNPAID_JOB_FOR_CLIENT)
            .bind(job_id)
            .bind(client_id)
            .fetch_optional(&mut *self.tx)
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.map(JobRow::into_job))
    }

    async fn sum_unpaid_for_contractor(&mut self, contractor_id: ProfileId) -> Result<Money> {
        let total: i64 = sqlx::query_scalar(sql::SUM_UNPAID_FOR_CONTRACTOR)
            .bind(contractor_id)
            .fetch_one(&mut *self.tx)
            .await
            .map_err(map_sqlx_error)?;

        Ok(Money::from_cents(total))
    }

    async fn mark_job_paid(&mut self, job_id: JobId, paid_at: i64) -> Result<bool> {
        // Conditional update: a paid job never matches again
        let result = sqlx::query(
            r#"
            UPDATE jobs
            SET paid = 1, payment_date = ?
            WHERE id = ? AND paid = 0
            "#,
        )
        .bind(paid_at)
        .bind(job_id)
        .execute(&mut *self.tx)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() == 1)
    }

    async fn credit(&mut self, profile_id: ProfileId, amount: Money) -> Result<bool> {
        // Guarded increment: SQLite would otherwise widen an overflowing sum to REAL
        let result = sqlx::query(
            r#"
            UPDATE profiles
            SET balance = balance + ?1
            WHERE id = ?2 AND balance <= 9223372036854775807 - ?1
            "#,
        )
        .bind(amount.cents())
        .bind(profile_id)
        .execute(&mut *self.tx)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() == 1)
    }

    async fn debit(&mut self, profile_id: ProfileId, amount: Money) -> Result<bool> {
        // Guarded decrement: the balance check and the write are one statement
        let result = sqlx::query(
            r#"
            UPDATE profiles
            SET balance = balance - ?1
            WHERE id = ?2 AND balance >= ?1
            "#,
        )
        .bind(amount.cents())
        .bind(profile_id)
        .execute(&mut *self.tx)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() == 1)
    }
}
