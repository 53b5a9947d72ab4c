//! Job handler service
//!
//! The real device hands jobs to a print driver. This agent has no driver:
//! [`LoggingJobHandler`] logs the job and declares it printed.

use anyhow::Result;
use async_trait::async_trait;
use spool_core::domain::job::Job;
use tracing::info;

/// Service trait for processing a fetched job
#[async_trait]
pub trait JobHandler: Send + Sync {
    /// Processes one job
    ///
    /// Returning an error leaves the job unreported, so the print server
    /// hands it out again on a later poll.
    async fn handle(&self, job: &Job) -> Result<()>;
}

/// Handler that only logs the job
#[derive(Debug, Default)]
pub struct LoggingJobHandler;

impl LoggingJobHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl JobHandler for LoggingJobHandler {
    async fn handle(&self, job: &Job) -> Result<()> {
        info!("Printing job {}. data: {}", job.id, job.data);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_logging_handler_always_succeeds() {
        let handler = LoggingJobHandler::new();
        assert!(handler.handle(&Job::new("1", "")).await.is_ok());
        assert!(handler.handle(&Job::new("2", "line\nbreak")).await.is_ok());
    }
}
