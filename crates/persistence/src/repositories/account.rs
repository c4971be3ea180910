//! Account repository for database operations.

use sqlx::{PgConnection, PgPool};

use crate::entities::AccountEntity;
use domain::models::NewAccount;

/// Repository for the auth_accounts table.
#[derive(Clone)]
pub struct AccountRepository {
    pool: PgPool,
}

impl AccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Total number of account rows. Used as the idempotence gate.
    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) as count FROM auth_accounts")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.0)
    }

    /// Insert an account inside the caller's transaction, returning its id.
    pub async fn insert(
        &self,
        conn: &mut PgConnection,
        account: &NewAccount,
    ) -> Result<i32, sqlx::Error> {
        sqlx::query_scalar(
            r#"
            INSERT INTO auth_accounts (name, email_domain, parent_account_id, is_active)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&account.name)
        .bind(&account.email_domain)
        .bind(account.parent_account_id)
        .bind(account.is_active)
        .fetch_one(conn)
        .await
    }

    /// Resolve an account id by exact name within the caller's transaction.
    pub async fn find_id_by_name(
        &self,
        conn: &mut PgConnection,
        name: &str,
    ) -> Result<Option<i32>, sqlx::Error> {
        sqlx::query_scalar("SELECT id FROM auth_accounts WHERE name = $1")
            .bind(name)
            .fetch_optional(conn)
            .await
    }

    /// First `limit` accounts in insertion order, with names.
    pub async fn list_named(&self, limit: i64) -> Result<Vec<AccountEntity>, sqlx::Error> {
        sqlx::query_as::<_, AccountEntity>(
            r#"
            SELECT id, name
            FROM auth_accounts
            ORDER BY id ASC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
    }

    /// All account ids, for random assignment picks.
    pub async fn list_ids(&self) -> Result<Vec<i32>, sqlx::Error> {
        sqlx::query_scalar("SELECT id FROM auth_accounts ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
    }
}
