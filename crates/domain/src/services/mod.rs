//! Domain services.

pub mod samples;
