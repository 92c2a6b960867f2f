/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: liveness and health endpoints
/// - `tasks`: task CRUD endpoints

pub mod health;
pub mod tasks;
