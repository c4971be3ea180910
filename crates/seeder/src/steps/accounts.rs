//! Sample account seeding.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;

use crate::error::SeedError;
use crate::runner::{SeedContext, SeedStep};
use domain::models::{NewAccount, CHILD_ACCOUNTS, PARENT_ACCOUNT_NAME, SAMPLE_ACCOUNTS};
use persistence::repositories::AccountRepository;

/// Inserts the fixed sample account hierarchy when the table is empty.
///
/// The zero-count gate is the idempotence mechanism: any existing account
/// row, seeded or not, disables this step. All inserts share one
/// transaction, so a failure leaves the table empty and the gate intact.
pub struct AccountsStep;

#[async_trait]
impl SeedStep for AccountsStep {
    fn name(&self) -> &'static str {
        "accounts"
    }

    async fn run(&self, pool: &PgPool, _ctx: &mut SeedContext) -> Result<(), SeedError> {
        let accounts = AccountRepository::new(pool.clone());

        let existing = accounts.count().await?;
        if existing > 0 {
            info!(existing, "accounts already exist, skipping");
            return Ok(());
        }

        let mut tx = pool.begin().await?;

        for (name, domain_name) in SAMPLE_ACCOUNTS {
            accounts
                .insert(&mut *tx, &NewAccount::top_level(name, domain_name))
                .await?;
        }

        // Parent rows are not committed yet, so the lookup must run inside
        // the same transaction.
        let parent_id = accounts
            .find_id_by_name(&mut *tx, PARENT_ACCOUNT_NAME)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;

        for (name, domain_name) in CHILD_ACCOUNTS {
            accounts
                .insert(&mut *tx, &NewAccount::child_of(parent_id, name, domain_name))
                .await?;
        }

        tx.commit().await?;
        info!(
            top_level = SAMPLE_ACCOUNTS.len(),
            children = CHILD_ACCOUNTS.len(),
            "sample accounts created"
        );
        Ok(())
    }
}
