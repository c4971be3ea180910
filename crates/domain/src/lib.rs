//! Domain layer for the alarm manager seeder.
//!
//! This crate contains:
//! - Domain models (accounts, groups, devices, installation records)
//! - The seedable sample-data generator used by the seed steps

pub mod models;
pub mod services;
