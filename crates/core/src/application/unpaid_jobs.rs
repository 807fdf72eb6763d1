// Unpaid Job Aggregation

use crate::domain::{Job, ProfileId};
use crate::error::Result;
use crate::port::JobRepository;
use std::sync::Arc;

/// Outstanding jobs for a profile on either side of its contracts
pub struct UnpaidJobAggregator {
    job_repo: Arc<dyn JobRepository>,
}

impl UnpaidJobAggregator {
    pub fn new(job_repo: Arc<dyn JobRepository>) -> Self {
        Self { job_repo }
    }

    /// Unpaid jobs where the profile is client or contractor.
    ///
    /// Empty when nothing is outstanding. Ordered by job id.
    pub async fn unpaid_jobs_for(&self, profile_id: ProfileId) -> Result<Vec<Job>> {
        let jobs = self.job_repo.list_unpaid_for_profile(profile_id).await?;
        tracing::debug!(profile_id, count = jobs.len(), "Listed unpaid jobs");
        Ok(jobs)
    }
}
