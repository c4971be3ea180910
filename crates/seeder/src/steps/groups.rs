//! Sample group seeding.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{info, warn};

use crate::error::SeedError;
use crate::runner::{SeedContext, SeedStep};
use domain::models::{group_names_for, NewGroup};
use persistence::repositories::{AccountRepository, GroupRepository};

/// Creator id recorded on seeded groups and assignments.
pub const SEED_USER_ID: i32 = 1;

/// Inserts four derived groups for each of the first few accounts.
///
/// The gate is per account: an account that already owns any group is left
/// untouched, so re-runs never pile up extra groups.
pub struct GroupsStep;

#[async_trait]
impl SeedStep for GroupsStep {
    fn name(&self) -> &'static str {
        "groups"
    }

    async fn run(&self, pool: &PgPool, ctx: &mut SeedContext) -> Result<(), SeedError> {
        let accounts = AccountRepository::new(pool.clone());
        let groups = GroupRepository::new(pool.clone());

        let scanned = accounts.list_named(ctx.account_scan_limit).await?;
        if scanned.is_empty() {
            warn!("no accounts found to create groups");
            return Ok(());
        }

        let mut tx = pool.begin().await?;
        let mut created = 0usize;

        for account in &scanned {
            if groups.count_for_account(account.id).await? > 0 {
                continue;
            }

            for name in group_names_for(&account.name) {
                groups
                    .insert(&mut *tx, &NewGroup::new(account.id, name, SEED_USER_ID))
                    .await?;
                created += 1;
            }
        }

        tx.commit().await?;
        info!(created, accounts = scanned.len(), "sample groups created");
        Ok(())
    }
}
