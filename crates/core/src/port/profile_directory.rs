// Profile Directory Port (caller identification)

use crate::domain::{Profile, ProfileId};
use crate::error::Result;
use async_trait::async_trait;

/// Resolves the profile a request claims to act as.
///
/// Fails with `AppError::Unauthorized` for unknown profiles.
#[async_trait]
pub trait ProfileDirectory: Send + Sync {
    async fn identify(&self, profile_id: ProfileId) -> Result<Profile>;
}
