// Job Repository Port (Interface)

use crate::domain::{Job, JobId, Money, ProfileId};
use crate::error::Result;
use async_trait::async_trait;

/// Repository interface for Job persistence
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Insert a new job
    async fn insert(&self, job: &Job) -> Result<()>;

    /// Find job by ID
    async fn find_by_id(&self, id: JobId) -> Result<Option<Job>>;

    /// Unpaid jobs on contracts where the profile is client OR contractor, ordered by id
    async fn list_unpaid_for_profile(&self, profile_id: ProfileId) -> Result<Vec<Job>>;

    /// Sum of unpaid job prices on contracts where the profile is the contractor
    async fn sum_unpaid_for_contractor(&self, contractor_id: ProfileId) -> Result<Money>;
}
