//! Sample device seeding.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{info, warn};

use crate::error::SeedError;
use crate::runner::{SeedContext, SeedStep};
use crate::steps::groups::SEED_USER_ID;
use persistence::repositories::{
    AccountRepository, DeviceRepository, GroupRepository, InstallationRepository,
};

/// Tops the device table up to the configured floor.
///
/// For each new device: one status row, then a probabilistic account
/// assignment, group assignment, and installation record. The whole batch
/// commits as one transaction, so an interrupted run leaves the device count
/// where it was and the floor check fires again next time.
pub struct DevicesStep;

#[async_trait]
impl SeedStep for DevicesStep {
    fn name(&self) -> &'static str {
        "devices"
    }

    async fn run(&self, pool: &PgPool, ctx: &mut SeedContext) -> Result<(), SeedError> {
        let devices = DeviceRepository::new(pool.clone());
        let installations = InstallationRepository::new(pool.clone());

        let existing = devices.count().await?;
        if existing >= ctx.device_floor {
            info!(existing, "sufficient devices already exist, skipping");
            return Ok(());
        }

        let account_ids = AccountRepository::new(pool.clone()).list_ids().await?;
        let group_rows = GroupRepository::new(pool.clone()).list_all().await?;
        if account_ids.is_empty() {
            warn!("no accounts found; devices will be created unassigned");
        }

        let to_create = (ctx.device_floor - existing) as usize;
        info!(existing, to_create, "creating sample devices");

        let mut tx = pool.begin().await?;

        for index in 0..to_create {
            let sample = ctx.samples.device(index, existing);
            let device_id = devices.insert(&mut *tx, &sample.device).await?;

            let status = ctx.samples.status();
            devices.insert_status(&mut *tx, device_id, &status).await?;

            if !account_ids.is_empty() && ctx.samples.assigns_account() {
                let account_id = *ctx.samples.pick(&account_ids).unwrap_or(&account_ids[0]);
                devices
                    .assign_account(&mut *tx, device_id, account_id, SEED_USER_ID)
                    .await?;
            }

            if !group_rows.is_empty() && ctx.samples.assigns_group() {
                let group = ctx.samples.pick(&group_rows).unwrap_or(&group_rows[0]);
                devices
                    .assign_group(&mut *tx, group.id, device_id, SEED_USER_ID)
                    .await?;
            }

            if ctx.samples.has_installation() {
                let record = ctx.samples.installation(sample.city, sample.device.zone);
                installations.insert(&mut *tx, device_id, &record).await?;
            }
        }

        tx.commit().await?;
        info!(created = to_create, "sample devices created");
        Ok(())
    }
}
