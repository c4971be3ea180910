//! Device and device-status domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operational state reported by an alarm panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DeviceState {
    Normal,
    Alarm,
    Maintenance,
    Init,
}

impl DeviceState {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceState::Normal => "NORMAL",
            DeviceState::Alarm => "ALARM",
            DeviceState::Maintenance => "MAINTENANCE",
            DeviceState::Init => "INIT",
        }
    }
}

impl FromStr for DeviceState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "NORMAL" => Ok(DeviceState::Normal),
            "ALARM" => Ok(DeviceState::Alarm),
            "MAINTENANCE" => Ok(DeviceState::Maintenance),
            "INIT" => Ok(DeviceState::Init),
            _ => Err(format!("Invalid device state: {}", s)),
        }
    }
}

impl fmt::Display for DeviceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Payload for inserting a device row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NewDevice {
    pub mac_address: String,
    pub hostname: String,
    pub country: String,
    pub zone: i32,
    pub latitude: f64,
    pub longitude: f64,
    pub location_desc: String,
    pub installation_date: DateTime<Utc>,
    pub notes: String,
    pub active: bool,
}

/// Payload for inserting the one-to-one status row of a device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NewDeviceStatus {
    pub is_online: bool,
    pub last_seen: Option<DateTime<Utc>>,
    pub firmware_version: String,
    pub uptime: i64,
    pub boot_count: i32,
    pub device_state: DeviceState,
    pub ip_address: Option<String>,
    pub rssi: Option<i32>,
    pub mqtt_connected: bool,
    pub temperature: f64,
    pub humidity: f64,
    pub fan_pwm_duty: i32,
    pub panic1: bool,
    pub panic2: bool,
    pub box_sw: bool,
    pub siren: bool,
    pub turret: bool,
    pub panic1_count: i32,
    pub panic2_count: i32,
    pub tamper_count: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_state_as_str() {
        assert_eq!(DeviceState::Normal.as_str(), "NORMAL");
        assert_eq!(DeviceState::Alarm.as_str(), "ALARM");
        assert_eq!(DeviceState::Maintenance.as_str(), "MAINTENANCE");
        assert_eq!(DeviceState::Init.as_str(), "INIT");
    }

    #[test]
    fn test_device_state_from_str() {
        assert_eq!(DeviceState::from_str("NORMAL").unwrap(), DeviceState::Normal);
        assert_eq!(DeviceState::from_str("alarm").unwrap(), DeviceState::Alarm);
        assert_eq!(
            DeviceState::from_str("Maintenance").unwrap(),
            DeviceState::Maintenance
        );
        assert!(DeviceState::from_str("OFFLINE").is_err());
    }

    #[test]
    fn test_device_state_display() {
        assert_eq!(format!("{}", DeviceState::Init), "INIT");
    }
}
