//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod account;
pub mod device;
pub mod group;
pub mod summary;

pub use account::AccountEntity;
pub use device::DeviceEntity;
pub use group::GroupEntity;
pub use summary::SeedSummary;
