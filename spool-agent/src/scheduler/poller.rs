//! Job poller
//!
//! Sleeps for the configured interval, fetches the pending jobs, hands each
//! one to the job handler and reports it back as completed. One network call
//! is in flight at a time.

use spool_client::ClientError;
use spool_core::domain::job::Job;
use std::sync::Arc;
use tokio::time;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::repository::JobRepository;
use crate::service::JobHandler;

/// Outcome of one poll cycle
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CycleSummary {
    /// Jobs paired from the lookup response
    pub fetched: usize,
    /// Jobs handled and acknowledged by the status endpoint
    pub reported: usize,
    /// Jobs whose handling or report failed
    pub failed: usize,
}

/// Job poller that continuously polls for and reports jobs
pub struct JobPoller {
    config: Config,
    repository: Arc<dyn JobRepository>,
    handler: Arc<dyn JobHandler>,
}

impl JobPoller {
    /// Creates a new job poller
    pub fn new(
        config: Config,
        repository: Arc<dyn JobRepository>,
        handler: Arc<dyn JobHandler>,
    ) -> Self {
        Self {
            config,
            repository,
            handler,
        }
    }

    /// Runs the polling loop until the process is terminated
    pub async fn run(&self) {
        info!(
            "Starting job poller (interval: {:?})",
            self.config.poll_interval
        );

        loop {
            time::sleep(self.config.poll_interval).await;

            debug!("Polling for print jobs");

            match self.poll_once().await {
                Ok(summary) => {
                    if summary.fetched > 0 {
                        info!(
                            "Cycle finished: {} reported, {} failed",
                            summary.reported, summary.failed
                        );
                    }
                }
                Err(e) => {
                    error!("Failed to poll for print jobs: {}", e);
                }
            }
        }
    }

    /// Performs a single poll cycle
    ///
    /// Only a failed lookup fails the cycle. Each job is handled and
    /// reported on its own, so one bad report does not stop the rest.
    pub async fn poll_once(&self) -> Result<CycleSummary, ClientError> {
        let response = self.repository.fetch_pending_jobs().await?;

        debug!(
            "Lookup answered (pass: {:?}, version: {:?})",
            response.pass, response.version
        );

        if !response.is_paired() {
            warn!(
                "Lookup returned {} id(s) but {} payload(s), ignoring unpaired entries",
                response.id_count(),
                response.data_count()
            );
        }

        let mut summary = CycleSummary {
            fetched: response.job_count(),
            ..CycleSummary::default()
        };

        if summary.fetched == 0 {
            debug!("No jobs available");
            return Ok(summary);
        }

        info!("Found {} job(s) to print", summary.fetched);

        for job in response.into_jobs() {
            if self.process_job(&job).await {
                summary.reported += 1;
            } else {
                summary.failed += 1;
            }
        }

        Ok(summary)
    }

    /// Handles and reports one job, returning whether both succeeded
    async fn process_job(&self, job: &Job) -> bool {
        if let Err(e) = self.handler.handle(job).await {
            error!("Failed to handle job {}: {:#}", job.id, e);
            return false;
        }

        info!("Reporting success for job {}", job.id);

        match self.repository.report_completed(job).await {
            Ok(ack) => {
                info!(
                    "Status response for job {}: {}, body: {}",
                    job.id, ack.status, ack.body
                );
                true
            }
            Err(e) => {
                warn!("Failed to report job {}: {}", job.id, e);
                false
            }
        }
    }
}
