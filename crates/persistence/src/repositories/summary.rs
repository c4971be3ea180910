//! Final summary query.

use sqlx::PgPool;

use crate::entities::SeedSummary;

/// Repository for the read-only end-of-run summary.
#[derive(Clone)]
pub struct SummaryRepository {
    pool: PgPool,
}

impl SummaryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Aggregate counts over everything the seeding run may have touched.
    pub async fn fetch(&self) -> Result<SeedSummary, sqlx::Error> {
        sqlx::query_as::<_, SeedSummary>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM auth_accounts) as accounts,
                (SELECT COUNT(*) FROM group_definitions) as groups,
                (SELECT COUNT(*) FROM device) as devices,
                (SELECT COUNT(*) FROM device WHERE id IN (
                    SELECT device_id FROM device_status WHERE is_online = true
                )) as online_devices,
                (SELECT COUNT(*) FROM device_installations) as installations
            "#,
        )
        .fetch_one(&self.pool)
        .await
    }
}
