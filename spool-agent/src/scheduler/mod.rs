//! Scheduler layer for the agent
//!
//! This layer drives the sleep, poll, report loop. A failing cycle is
//! logged and the next one starts after the usual pause.

pub mod poller;

pub use poller::JobPoller;
