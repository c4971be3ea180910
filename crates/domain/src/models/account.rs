//! Account domain models.
//!
//! Accounts form a one-level hierarchy: child accounts reference a parent
//! through `parent_account_id`. The parent row must exist before any child
//! row is inserted.

use serde::{Deserialize, Serialize};

/// Payload for inserting an account row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NewAccount {
    pub name: String,
    pub email_domain: String,
    pub parent_account_id: Option<i32>,
    pub is_active: bool,
}

impl NewAccount {
    /// Top-level account with no parent.
    pub fn top_level(name: &str, email_domain: &str) -> Self {
        Self {
            name: name.to_string(),
            email_domain: email_domain.to_string(),
            parent_account_id: None,
            is_active: true,
        }
    }

    /// Child account referencing an existing parent.
    pub fn child_of(parent_id: i32, name: &str, email_domain: &str) -> Self {
        Self {
            name: name.to_string(),
            email_domain: email_domain.to_string(),
            parent_account_id: Some(parent_id),
            is_active: true,
        }
    }
}

/// The fixed top-level sample accounts, inserted in this order.
pub const SAMPLE_ACCOUNTS: [(&str, &str); 5] = [
    ("Empresa Matriz", "matriz.com"),
    ("Sucursal Norte", "norte.com"),
    ("Sucursal Sur", "sur.com"),
    ("Cliente Premium", "premium.com"),
    ("Cliente Standard", "standard.com"),
];

/// Name of the account that parents the sample child accounts.
pub const PARENT_ACCOUNT_NAME: &str = "Empresa Matriz";

/// The fixed child accounts, all parented to [`PARENT_ACCOUNT_NAME`].
pub const CHILD_ACCOUNTS: [(&str, &str); 3] = [
    ("Oficina Central", "oficina.matriz.com"),
    ("Almacén Principal", "almacen.matriz.com"),
    ("Área Técnica", "tecnica.matriz.com"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_level_has_no_parent() {
        let account = NewAccount::top_level("Empresa Matriz", "matriz.com");
        assert_eq!(account.parent_account_id, None);
        assert!(account.is_active);
    }

    #[test]
    fn test_child_references_parent() {
        let account = NewAccount::child_of(7, "Oficina Central", "oficina.matriz.com");
        assert_eq!(account.parent_account_id, Some(7));
    }

    #[test]
    fn test_parent_name_is_a_sample_account() {
        assert!(SAMPLE_ACCOUNTS
            .iter()
            .any(|(name, _)| *name == PARENT_ACCOUNT_NAME));
    }

    #[test]
    fn test_sample_domains_are_unique() {
        let mut domains: Vec<&str> = SAMPLE_ACCOUNTS
            .iter()
            .chain(CHILD_ACCOUNTS.iter())
            .map(|(_, domain)| *domain)
            .collect();
        domains.sort_unstable();
        domains.dedup();
        assert_eq!(domains.len(), SAMPLE_ACCOUNTS.len() + CHILD_ACCOUNTS.len());
    }
}
