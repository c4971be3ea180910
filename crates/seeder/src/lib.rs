//! Seeder binary internals, exposed as a library for integration tests.

pub mod config;
pub mod error;
pub mod logging;
pub mod runner;
pub mod steps;
pub mod summary;
