//! End-of-run summary reporting.

use sqlx::PgPool;
use tracing::info;

use crate::error::SeedError;
use persistence::entities::SeedSummary;
use persistence::repositories::SummaryRepository;

/// Fetch the aggregate counts and log them.
pub async fn report(pool: &PgPool) -> Result<SeedSummary, SeedError> {
    let summary = SummaryRepository::new(pool.clone()).fetch().await?;
    info!(
        accounts = summary.accounts,
        groups = summary.groups,
        devices = summary.devices,
        online_devices = summary.online_devices,
        installations = summary.installations,
        "database summary"
    );
    Ok(summary)
}
