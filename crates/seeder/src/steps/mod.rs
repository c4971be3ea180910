//! The seed steps, in execution order.

pub mod accounts;
pub mod devices;
pub mod groups;
pub mod installations_table;

use crate::runner::SeedStep;

/// All steps in the order the seeder runs them.
pub fn all() -> Vec<Box<dyn SeedStep>> {
    vec![
        Box::new(installations_table::InstallationsTableStep),
        Box::new(accounts::AccountsStep),
        Box::new(groups::GroupsStep),
        Box::new(devices::DevicesStep),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_run_in_documented_order() {
        let names: Vec<&str> = all().iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            vec!["installations table", "accounts", "groups", "devices"]
        );
    }
}
