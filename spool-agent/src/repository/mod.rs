//! Repository layer
//!
//! Repositories abstract communication with the print server behind a
//! trait so the scheduler can be exercised without a network.

mod jobs;

pub use jobs::JobRepository;
