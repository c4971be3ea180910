//! Installation record repository.

use sqlx::{PgConnection, PgPool};

use domain::models::NewInstallation;

/// Repository for the device_installations table.
#[derive(Clone)]
pub struct InstallationRepository {
    pool: PgPool,
}

impl InstallationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Total number of installation records.
    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) as count FROM device_installations")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.0)
    }

    /// Insert an installation record inside the caller's transaction.
    ///
    /// `device_id` is UNIQUE in the table; conflicting inserts are dropped so
    /// a re-run can never attach a second record to the same device.
    pub async fn insert(
        &self,
        conn: &mut PgConnection,
        device_id: i32,
        record: &NewInstallation,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO device_installations (
                device_id, installation_date, technician_name,
                work_order, client_location, panel_model,
                configured_zones, connected_sensors,
                last_maintenance, next_maintenance,
                warranty_expiry, installation_status,
                technician_notes
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            ON CONFLICT (device_id) DO NOTHING
            "#,
        )
        .bind(device_id)
        .bind(record.installation_date)
        .bind(&record.technician_name)
        .bind(&record.work_order)
        .bind(&record.client_location)
        .bind(&record.panel_model)
        .bind(&record.configured_zones)
        .bind(&record.connected_sensors)
        .bind(record.last_maintenance)
        .bind(record.next_maintenance)
        .bind(record.warranty_expiry)
        .bind(record.installation_status.as_str())
        .bind(&record.technician_notes)
        .execute(conn)
        .await?;
        Ok(())
    }
}
