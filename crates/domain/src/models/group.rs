//! Group domain models.
//!
//! Groups are scoped per account. The seeder derives four group names from
//! the owning account's name; uniqueness per account is enforced by a count
//! gate in the seed step, not by a database constraint.

use serde::{Deserialize, Serialize};

/// Fixed label set for the derived sample groups.
pub const GROUP_LABELS: [&str; 4] = ["Zona A", "Zona B", "Críticos", "Mantenimiento"];

/// Payload for inserting a group row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NewGroup {
    pub account_id: i32,
    pub name: String,
    pub description: String,
    pub created_by: i32,
}

impl NewGroup {
    pub fn new(account_id: i32, name: String, created_by: i32) -> Self {
        let description = format!("Grupo {} para gestión de dispositivos", name);
        Self {
            account_id,
            name,
            description,
            created_by,
        }
    }
}

/// Derive the four sample group names for an account.
///
/// The account name is truncated to 10 characters (not bytes; sample names
/// contain accented characters) before being appended to each label.
pub fn group_names_for(account_name: &str) -> Vec<String> {
    let short: String = account_name.chars().take(10).collect();
    GROUP_LABELS
        .iter()
        .map(|label| format!("{} - {}", label, short))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::company::en::CompanyName;
    use fake::Fake;

    #[test]
    fn test_group_names_use_truncated_account_name() {
        let names = group_names_for("Empresa Matriz");
        assert_eq!(
            names,
            vec![
                "Zona A - Empresa Ma",
                "Zona B - Empresa Ma",
                "Críticos - Empresa Ma",
                "Mantenimiento - Empresa Ma",
            ]
        );
    }

    #[test]
    fn test_short_account_name_is_kept_whole() {
        let names = group_names_for("Sur");
        assert_eq!(names[0], "Zona A - Sur");
        assert_eq!(names.len(), 4);
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        // "Área Técnica" holds multi-byte characters inside the cut range.
        let names = group_names_for("Área Técnica");
        assert!(names[0].ends_with("Área Técni"));
    }

    #[test]
    fn test_arbitrary_names_never_exceed_ten_characters() {
        for _ in 0..50 {
            let company: String = CompanyName().fake();
            for name in group_names_for(&company) {
                let suffix = name.split(" - ").last().unwrap();
                assert!(suffix.chars().count() <= 10, "suffix too long: {}", name);
            }
        }
    }

    #[test]
    fn test_description_mentions_group_name() {
        let group = NewGroup::new(3, "Zona A - Sur".to_string(), 1);
        assert_eq!(group.account_id, 3);
        assert_eq!(group.created_by, 1);
        assert!(group.description.contains("Zona A - Sur"));
    }
}
