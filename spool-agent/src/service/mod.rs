//! Service layer
//!
//! Services contain what the agent does with a job once it has been
//! fetched. They are trait-based so the scheduler can be tested with
//! recording fakes.

mod handler;

pub use handler::JobHandler;
pub use handler::LoggingJobHandler;
