// Repository-backed ProfileDirectory

use crate::domain::{Profile, ProfileId};
use crate::error::{AppError, Result};
use crate::port::{ProfileDirectory, ProfileRepository};
use async_trait::async_trait;
use std::sync::Arc;

pub struct RepositoryProfileDirectory {
    profile_repo: Arc<dyn ProfileRepository>,
}

impl RepositoryProfileDirectory {
    pub fn new(profile_repo: Arc<dyn ProfileRepository>) -> Self {
        Self { profile_repo }
    }
}

#[async_trait]
impl ProfileDirectory for RepositoryProfileDirectory {
    async fn identify(&self, profile_id: ProfileId) -> Result<Profile> {
        self.profile_repo
            .find_by_id(profile_id)
            .await?
            .ok_or_else(|| AppError::Unauthorized(format!("Unknown profile {}", profile_id)))
    }
}
