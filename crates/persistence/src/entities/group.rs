//! Group entity (database row mapping).

use sqlx::FromRow;

/// Database row mapping for the group_definitions table, reduced to the
/// columns the device seeder needs for assignment picks.
#[derive(Debug, Clone, FromRow)]
pub struct GroupEntity {
    pub id: i32,
    pub account_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_entity_clone() {
        let entity = GroupEntity {
            id: 4,
            account_id: 2,
        };
        let cloned = entity.clone();
        assert_eq!(cloned.id, entity.id);
        assert_eq!(cloned.account_id, entity.account_id);
    }
}
