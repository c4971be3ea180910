//! Device entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row mapping for the device table.
#[derive(Debug, Clone, FromRow)]
pub struct DeviceEntity {
    pub id: i32,
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

impl From<DeviceEntity> for domain::models::NewDevice {
    fn from(entity: DeviceEntity) -> Self {
        Self {
            mac_address: entity.mac_address,
            hostname: entity.hostname,
            country: entity.country,
            zone: entity.zone,
            latitude: entity.latitude,
            longitude: entity.longitude,
            location_desc: entity.location_desc,
            installation_date: entity.installation_date,
            notes: entity.notes,
            active: entity.active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_device_entity() -> DeviceEntity {
        DeviceEntity {
            id: 1,
            mac_address: "AA:BB:CC:DD:00:1F".to_string(),
            hostname: "ESP32-ALARM-001".to_string(),
            country: "MEX".to_string(),
            zone: 3,
            latitude: 19.41,
            longitude: -99.12,
            location_desc: "Ubicación CDMX - Zona 3".to_string(),
            installation_date: Utc::now(),
            notes: "Dispositivo de prueba #1".to_string(),
            active: true,
        }
    }

    #[test]
    fn test_device_entity_to_domain() {
        let entity = create_test_device_entity();
        let device: domain::models::NewDevice = entity.clone().into();

        assert_eq!(device.mac_address, entity.mac_address);
        assert_eq!(device.hostname, entity.hostname);
        assert_eq!(device.zone, entity.zone);
        assert_eq!(device.active, entity.active);
    }

    #[test]
    fn test_device_entity_debug() {
        let entity = create_test_device_entity();
        let debug_str = format!("{:?}", entity);
        assert!(debug_str.contains("DeviceEntity"));
        assert!(debug_str.contains("ESP32-ALARM-001"));
    }
}
