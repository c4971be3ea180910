//! Installation record domain models.
//!
//! An installation record captures the field installation and maintenance
//! metadata of a physical device. At most one record exists per device.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Installation status labels as stored by the live application (Spanish).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstallationStatus {
    Operational,
    MaintenanceDue,
    NeedsReview,
}

impl InstallationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InstallationStatus::Operational => "Operativo",
            InstallationStatus::MaintenanceDue => "Mantenimiento Pendiente",
            InstallationStatus::NeedsReview => "Requiere Revisión",
        }
    }

    /// All statuses the sample generator may draw from.
    pub const ALL: [InstallationStatus; 3] = [
        InstallationStatus::Operational,
        InstallationStatus::MaintenanceDue,
        InstallationStatus::NeedsReview,
    ];
}

impl FromStr for InstallationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Operativo" => Ok(InstallationStatus::Operational),
            "Mantenimiento Pendiente" => Ok(InstallationStatus::MaintenanceDue),
            "Requiere Revisión" => Ok(InstallationStatus::NeedsReview),
            _ => Err(format!("Invalid installation status: {}", s)),
        }
    }
}

impl fmt::Display for InstallationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Payload for inserting an installation record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NewInstallation {
    pub installation_date: DateTime<Utc>,
    pub technician_name: String,
    pub work_order: String,
    pub client_location: String,
    pub panel_model: String,
    pub configured_zones: String,
    pub connected_sensors: String,
    pub last_maintenance: DateTime<Utc>,
    pub next_maintenance: DateTime<Utc>,
    pub warranty_expiry: NaiveDate,
    pub installation_status: InstallationStatus,
    pub technician_notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in InstallationStatus::ALL {
            assert_eq!(
                InstallationStatus::from_str(status.as_str()).unwrap(),
                status
            );
        }
    }

    #[test]
    fn test_status_rejects_unknown_label() {
        assert!(InstallationStatus::from_str("Fuera de Servicio").is_err());
    }

    #[test]
    fn test_status_display_uses_spanish_label() {
        assert_eq!(
            format!("{}", InstallationStatus::MaintenanceDue),
            "Mantenimiento Pendiente"
        );
    }
}
