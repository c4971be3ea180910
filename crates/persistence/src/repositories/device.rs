//! Device repository for database operations.
//!
//! Covers the device table itself plus its dependent status and assignment
//! tables, which are only ever written in the same transaction as the device
//! row they reference.

use chrono::Utc;
use sqlx::{PgConnection, PgPool};

use crate::entities::DeviceEntity;
use domain::models::{NewDevice, NewDeviceStatus};

/// Repository for device-related database operations.
#[derive(Clone)]
pub struct DeviceRepository {
    pool: PgPool,
}

impl DeviceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Total number of device rows. Compared against the device floor.
    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) as count FROM device")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.0)
    }

    /// All devices in insertion order.
    pub async fn list_all(&self) -> Result<Vec<DeviceEntity>, sqlx::Error> {
        sqlx::query_as::<_, DeviceEntity>(
            r#"
            SELECT id, mac_address, hostname, country, zone,
                   latitude, longitude, location_desc,
                   installation_date, notes, active
            FROM device
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    /// Insert a device inside the caller's transaction, returning its id.
    pub async fn insert(
        &self,
        conn: &mut PgConnection,
        device: &NewDevice,
    ) -> Result<i32, sqlx::Error> {
        sqlx::query_scalar(
            r#"
            INSERT INTO device (
                mac_address, hostname, country, zone,
                latitude, longitude, location_desc,
                installation_date, notes, active, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, NOW(), NOW())
            RETURNING id
            "#,
        )
        .bind(&device.mac_address)
        .bind(&device.hostname)
        .bind(&device.country)
        .bind(device.zone)
        .bind(device.latitude)
        .bind(device.longitude)
        .bind(&device.location_desc)
        .bind(device.installation_date)
        .bind(&device.notes)
        .bind(device.active)
        .fetch_one(conn)
        .await
    }

    /// Insert the one-to-one status row for a device.
    pub async fn insert_status(
        &self,
        conn: &mut PgConnection,
        device_id: i32,
        status: &NewDeviceStatus,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO device_status (
                device_id, is_online, last_seen, firmware_version,
                uptime, boot_count, device_state,
                ip_address, rssi, mqtt_connected,
                temperature, humidity, fan_pwm_duty,
                panic1, panic2, box_sw, siren, turret,
                panic1_count, panic2_count, tamper_count,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                      $11, $12, $13, $14, $15, $16, $17, $18, $19, $20, $21, $22)
            "#,
        )
        .bind(device_id)
        .bind(status.is_online)
        .bind(status.last_seen)
        .bind(&status.firmware_version)
        .bind(status.uptime)
        .bind(status.boot_count)
        .bind(status.device_state.as_str())
        .bind(&status.ip_address)
        .bind(status.rssi)
        .bind(status.mqtt_connected)
        .bind(status.temperature)
        .bind(status.humidity)
        .bind(status.fan_pwm_duty)
        .bind(status.panic1)
        .bind(status.panic2)
        .bind(status.box_sw)
        .bind(status.siren)
        .bind(status.turret)
        .bind(status.panic1_count)
        .bind(status.panic2_count)
        .bind(status.tamper_count)
        .bind(Utc::now())
        .execute(conn)
        .await?;
        Ok(())
    }

    /// Link a device to an account.
    pub async fn assign_account(
        &self,
        conn: &mut PgConnection,
        device_id: i32,
        account_id: i32,
        assigned_by: i32,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO device_account_assignments (
                device_id, account_id, assigned_by, is_active
            ) VALUES ($1, $2, $3, true)
            "#,
        )
        .bind(device_id)
        .bind(account_id)
        .bind(assigned_by)
        .execute(conn)
        .await?;
        Ok(())
    }

    /// Link a device to a group.
    pub async fn assign_group(
        &self,
        conn: &mut PgConnection,
        group_id: i32,
        device_id: i32,
        assigned_by: i32,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO group_device_assignments (
                group_id, device_id, assigned_by
            ) VALUES ($1, $2, $3)
            "#,
        )
        .bind(group_id)
        .bind(device_id)
        .bind(assigned_by)
        .execute(conn)
        .await?;
        Ok(())
    }
}
