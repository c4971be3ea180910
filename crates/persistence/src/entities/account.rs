//! Account entity (database row mapping).

use sqlx::FromRow;

/// Database row mapping for the auth_accounts table, reduced to the columns
/// the seeder reads back.
#[derive(Debug, Clone, FromRow)]
pub struct AccountEntity {
    pub id: i32,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_entity_debug() {
        let entity = AccountEntity {
            id: 1,
            name: "Empresa Matriz".to_string(),
        };
        let debug_str = format!("{:?}", entity);
        assert!(debug_str.contains("AccountEntity"));
        assert!(debug_str.contains("Empresa Matriz"));
    }
}
