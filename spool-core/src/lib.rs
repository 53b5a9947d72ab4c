//! Spool Core
//!
//! Core types shared by the Spool print agent.
//!
//! This crate contains:
//! - Domain types: Core business entities (Job, Credentials, ReportStatus)
//! - DTOs: Wire shapes for the print server lookup and status endpoints

pub mod domain;
pub mod dto;
