use async_trait::async_trait;

use crate::models::{Contractor, Job};
use crate::services::postgres::PostgresError;

/// Read-only data access the match pipeline depends on
///
/// `PostgresClient` is the production implementation; tests substitute
/// in-memory fixtures so the handlers can be exercised without a database.
#[async_trait]
pub trait MatchStore: Send + Sync {
    /// Fetch a job by id, or None if it does not exist
    async fn get_job(&self, job_id: i64) -> Result<Option<Job>, PostgresError>;

    /// Fetch the full contractor pool with specialties materialized
    async fn list_contractors(&self) -> Result<Vec<Contractor>, PostgresError>;

    /// Check backing-store connectivity
    async fn health_check(&self) -> Result<bool, PostgresError>;
}
