//! Spool Agent
//!
//! A polling agent that stands in for a receipt printer's job consumer.
//!
//! Architecture:
//! - Configuration: Load settings from `PrintOSconfig.ini` or defaults
//! - Repositories: HTTP communication with the print server (lookup, status)
//! - Services: What happens to a job once fetched (here: logging it)
//! - Scheduler: The sleep, poll, report loop
//!
//! The agent never exits on its own. Failed cycles are logged and the next
//! one runs after the configured pause.

mod config;
mod repository;
mod scheduler;
mod service;

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::repository::JobRepository;
use crate::scheduler::JobPoller;
use crate::service::{JobHandler, LoggingJobHandler};
use spool_client::PrintServerClient;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spool_agent=info,spool_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Spool agent");

    // Load configuration
    let config = Config::load();
    info!(
        "Loaded configuration: lookup_url={}, status_url={}, poll_interval={:?}, username={}",
        config.lookup_url, config.status_url, config.poll_interval, config.credentials.username
    );

    // Initialize print server client
    let client = PrintServerClient::new(
        config.lookup_url.clone(),
        config.status_url.clone(),
        config.credentials.clone(),
    )
    .context("Failed to build print server client")?;

    let repository: Arc<dyn JobRepository> = Arc::new(client);
    let handler: Arc<dyn JobHandler> = Arc::new(LoggingJobHandler::new());

    let poller = JobPoller::new(config, repository, handler);

    info!("Starting job polling loop");
    poller.run().await;

    Ok(())
}
