// SQLite ProfileRepository Implementation

use crate::error::map_sqlx_error;
use crate::rows::{sql, ProfileRow};
use crate::SqliteMarketplaceRepository;
use async_trait::async_trait;
use marketplace_core::domain::{Profile, ProfileId};
use marketplace_core::error::Result;
use marketplace_core::port::ProfileRepository;

#[async_trait]
impl ProfileRepository for SqliteMarketplaceRepository {
    async fn insert(&self, profile: &Profile) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO profiles (id, first_name, last_name, profession, role, balance)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(profile.id)
        .bind(&profile.first_name)
        .bind(&profile.last_name)
        .bind(&profile.profession)
        .bind(profile.role.as_str())
        .bind(profile.balance.cents())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn find_by_id(&self, id: ProfileId) -> Result<Option<Profile>> {
        let row = sqlx::query_as::<_, ProfileRow>(sql::FIND_PROFILE)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.map(ProfileRow::into_profile).transpose()
    }
}
