// SQLite JobRepository Implementation

use crate::error::map_sqlx_error;
use crate::rows::{sql, JobRow};
use crate::SqliteMarketplaceRepository;
use async_trait::async_trait;
use marketplace_core::domain::{Job, JobId, Money, ProfileId};
use marketplace_core::error::Result;
use marketplace_core::port::JobRepository;

#[async_trait]
impl JobRepository for SqliteMarketplaceRepository {
    async fn insert(&self, job: &Job) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO jobs (id, contract_id, description, price, paid, payment_date)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(job.id)
        .bind(job.contract_id)
        .bind(&job.description)
        .bind(job.price.cents())
        .bind(job.paid)
        .bind(job.payment_date)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn find_by_id(&self, id: JobId) -> Result<Option<Job>> {
        let row = sqlx::query_as::<_, JobRow>(
            r#"
            SELECT j.id, j.contract_id, j.description, j.price, j.paid, j.payment_date
            FROM jobs j
            WHERE j.id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(JobRow::into_job))
    }

    async fn list_unpaid_for_profile(&self, profile_id: ProfileId) -> Result<Vec<Job>> {
        let rows: Vec<JobRow> = sqlx::query_as(sql::LIST_UNPAID_FOR_PROFILE)
            .bind(profile_id)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(JobRow::into_job).collect())
    }

    async fn sum_unpaid_for_contractor(&self, contractor_id: ProfileId) -> Result<Money> {
        let total: i64 = sqlx::query_scalar(sql::SUM_UNPAID_FOR_CONTRACTOR)
            .bind(contractor_id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(Money::from_cents(total))
    }
}
