//! Repository implementations.
//!
//! Repositories own a pool for reads and count gates. Insert operations take
//! a `&mut PgConnection` instead, so one seed step can batch all of its
//! writes into a single transaction held by the caller.

pub mod account;
pub mod device;
pub mod group;
pub mod installation;
pub mod schema;
pub mod summary;

pub use account::AccountRepository;
pub use device::DeviceRepository;
pub use group::GroupRepository;
pub use installation::InstallationRepository;
pub use schema::SchemaRepository;
pub use summary::SummaryRepository;
