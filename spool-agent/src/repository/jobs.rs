//! Jobs repository
//!
//! Handles communication with the print server for job-related operations:
//! - Fetching pending jobs
//! - Reporting completed jobs

use async_trait::async_trait;
use spool_client::{LookupResponse, PrintServerClient, Result, StatusAck};
use spool_core::domain::job::Job;

/// Repository trait for job-related operations with the print server
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Fetches the jobs waiting to be printed
    async fn fetch_pending_jobs(&self) -> Result<LookupResponse>;

    /// Reports a job as printed
    ///
    /// # Arguments
    /// * `job` - The job that was handled
    async fn report_completed(&self, job: &Job) -> Result<StatusAck>;
}

#[async_trait]
impl JobRepository for PrintServerClient {
    async fn fetch_pending_jobs(&self) -> Result<LookupResponse> {
        self.lookup_jobs().await
    }

    async fn report_completed(&self, job: &Job) -> Result<StatusAck> {
        self.report_status(job).await
    }
}
