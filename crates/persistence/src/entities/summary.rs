//! Seed summary entity.

use sqlx::FromRow;

/// Aggregate counts reported at the end of a seeding run.
#[derive(Debug, Clone, Copy, FromRow, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SeedSummary {
    pub accounts: i64,
    pub groups: i64,
    pub devices: i64,
    pub online_devices: i64,
    pub installations: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_serializes_all_counts() {
        let summary = SeedSummary {
            accounts: 8,
            groups: 32,
            devices: 20,
            online_devices: 15,
            installations: 13,
        };
        let json = serde_json::to_value(summary).unwrap();
        assert_eq!(json["accounts"], 8);
        assert_eq!(json["online_devices"], 15);
    }
}
