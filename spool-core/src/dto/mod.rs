//! Data Transfer Objects for the print server endpoints
//!
//! The lookup endpoint hands out pending jobs, the status endpoint receives
//! completion reports. Both requests are form-encoded; only the lookup
//! response is JSON.

pub mod lookup;
pub mod status;
