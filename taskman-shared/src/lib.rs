//! # Taskman Shared Library
//!
//! This crate contains the types and database access shared between the
//! taskman API server and the taskman client.
//!
//! ## Module Organization
//!
//! - `models`: the Task record, request payloads, and their store operations
//! - `db`: connection pool management and migrations
//! - `dates`: calendar-date parsing for form values and store timestamps

pub mod dates;
pub mod db;
pub mod models;

/// Current version of the taskman shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
