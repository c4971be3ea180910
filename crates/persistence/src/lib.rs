//! Persistence layer for the alarm manager seeder.
//!
//! This crate contains:
//! - Database connection management
//! - Entity definitions (database row mappings)
//! - Repository implementations, including schema introspection

pub mod db;
pub mod entities;
pub mod repositories;
