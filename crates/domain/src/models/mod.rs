//! Domain model definitions.

pub mod account;
pub mod device;
pub mod group;
pub mod installation;

pub use account::{NewAccount, CHILD_ACCOUNTS, PARENT_ACCOUNT_NAME, SAMPLE_ACCOUNTS};
pub use device::{DeviceState, NewDevice, NewDeviceStatus};
pub use group::{group_names_for, NewGroup, GROUP_LABELS};
pub use installation::{InstallationStatus, NewInstallation};
