//! Core domain types
//!
//! This module contains the entities the agent works with. They carry no
//! I/O and are shared between the HTTP client and the agent.

pub mod credentials;
pub mod job;
