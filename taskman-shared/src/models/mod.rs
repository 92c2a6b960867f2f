/// Database models for taskman
///
/// This module contains the persisted models and their CRUD operations.
///
/// # Models
///
/// - `task`: the single to-do item entity backing the whole system

pub mod task;
