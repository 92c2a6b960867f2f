//! # Taskman Client Library
//!
//! The consumer side of the task API: an HTTP transport plus explicit
//! per-view state containers that mirror the store and drive the four
//! CRUD operations.
//!
//! The containers hold no network machinery themselves — the transport
//! is injected into every operation, so a caller (the CLI binary, a UI
//! layer, a test) owns both and wires them together.
//!
//! ## Modules
//!
//! - `http`: the reqwest-based API transport
//! - `state`: list, create-draft, and edit-draft containers
//! - `error`: client error types

pub mod error;
pub mod http;
pub mod state;
