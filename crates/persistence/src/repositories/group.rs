//! Group repository for database operations.

use sqlx::{PgConnection, PgPool};

use crate::entities::GroupEntity;
use domain::models::NewGroup;

/// Repository for the group_definitions table.
#[derive(Clone)]
pub struct GroupRepository {
    pool: PgPool,
}

impl GroupRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Number of groups owned by one account. Used as the per-account gate.
    pub async fn count_for_account(&self, account_id: i32) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) as count
            FROM group_definitions
            WHERE account_id = $1
            "#,
        )
        .bind(account_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count.0)
    }

    /// Insert a group inside the caller's transaction.
    pub async fn insert(
        &self,
        conn: &mut PgConnection,
        group: &NewGroup,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO group_definitions (account_id, name, description, created_by)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(group.account_id)
        .bind(&group.name)
        .bind(&group.description)
        .bind(group.created_by)
        .execute(conn)
        .await?;
        Ok(())
    }

    /// All groups with their owning account, for random assignment picks.
    pub async fn list_all(&self) -> Result<Vec<GroupEntity>, sqlx::Error> {
        sqlx::query_as::<_, GroupEntity>(
            "SELECT id, account_id FROM group_definitions ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
    }
}
