//! Schema introspection and provisioning.
//!
//! The seeder owns exactly one table, device_installations. Every other
//! table is expected to exist already, created by the application's own
//! migration system.

use sqlx::PgPool;

/// Tables the seeder reads from or writes to but never creates.
pub const BASE_TABLES: [&str; 5] = [
    "auth_accounts",
    "group_definitions",
    "device",
    "device_status",
    "device_account_assignments",
];

/// Repository for catalog introspection and the one owned table.
#[derive(Clone)]
pub struct SchemaRepository {
    pool: PgPool,
}

impl SchemaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Whether a table exists in the public schema.
    pub async fn table_exists(&self, table_name: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT FROM information_schema.tables
                WHERE table_schema = 'public'
                AND table_name = $1
            )
            "#,
        )
        .bind(table_name)
        .fetch_one(&self.pool)
        .await
    }

    /// Base tables that are missing from the schema.
    pub async fn missing_base_tables(&self) -> Result<Vec<String>, sqlx::Error> {
        let mut missing = Vec::new();
        for table in BASE_TABLES {
            if !self.table_exists(table).await? {
                missing.push(table.to_string());
            }
        }
        Ok(missing)
    }

    /// Create the device_installations table and its secondary indexes.
    ///
    /// Runs in a single transaction; on failure nothing is left behind. The
    /// caller is responsible for the existence gate.
    pub async fn create_installations_table(&self) -> Result<(), sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            CREATE TABLE device_installations (
                id SERIAL PRIMARY KEY,
                device_id INTEGER UNIQUE REFERENCES device(id) ON DELETE CASCADE,
                installation_date TIMESTAMPTZ,
                technician_name VARCHAR(255),
                work_order VARCHAR(100),
                client_location TEXT,
                panel_model VARCHAR(100),
                configured_zones TEXT,
                connected_sensors TEXT,
                connection_diagram_url TEXT,
                last_maintenance TIMESTAMPTZ,
                next_maintenance TIMESTAMPTZ,
                maintenance_history JSONB,
                technician_notes TEXT,
                warranty_expiry DATE,
                installation_status VARCHAR(50),
                created_at TIMESTAMPTZ DEFAULT NOW(),
                updated_at TIMESTAMPTZ DEFAULT NOW()
            )
            "#,
        )
        .execute(&mut *tx)
        .await?;

        for statement in [
            "CREATE INDEX idx_device_installations_device_id ON device_installations(device_id)",
            "CREATE INDEX idx_device_installations_installation_date ON device_installations(installation_date)",
            "CREATE INDEX idx_device_installations_next_maintenance ON device_installations(next_maintenance)",
        ] {
            sqlx::query(statement).execute(&mut *tx).await?;
        }

        tx.commit().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_tables_do_not_include_owned_table() {
        assert!(!BASE_TABLES.contains(&"device_installations"));
    }
}
