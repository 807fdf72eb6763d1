// Profile Repository Port (Interface)

use crate::domain::{Profile, ProfileId};
use crate::error::Result;
use async_trait::async_trait;

/// Repository interface for Profile persistence
///
/// Balances are never written through this trait; see `LedgerTransaction`.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Insert a new profile
    async fn insert(&self, profile: &Profile) -> Result<()>;

    /// Find profile by ID
    async fn find_by_id(&self, id: ProfileId) -> Result<Option<Profile>>;
}
