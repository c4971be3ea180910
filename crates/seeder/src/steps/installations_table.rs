//! Provisioning of the device_installations table.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;

use crate::error::SeedError;
use crate::runner::{SeedContext, SeedStep};
use persistence::repositories::SchemaRepository;

/// Creates the device_installations table and its indexes when absent.
///
/// The existence check short-circuits on later runs; the table is never
/// recreated or altered once it exists.
pub struct InstallationsTableStep;

#[async_trait]
impl SeedStep for InstallationsTableStep {
    fn name(&self) -> &'static str {
        "installations table"
    }

    async fn run(&self, pool: &PgPool, _ctx: &mut SeedContext) -> Result<(), SeedError> {
        let schema = SchemaRepository::new(pool.clone());

        if schema.table_exists("device_installations").await? {
            info!("device_installations table already exists");
            return Ok(());
        }

        schema.create_installations_table().await?;
        info!("device_installations table created");
        Ok(())
    }
}
