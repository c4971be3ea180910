//! Seedable sample-data generator.
//!
//! All randomness in a seeding run flows through [`SampleGenerator`], so a
//! fixed seed makes the generated rows fully deterministic. Probabilities and
//! value ranges mirror what the live application expects to see in the field.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{
    DeviceState, InstallationStatus, NewDevice, NewDeviceStatus, NewInstallation,
};

/// Reference point for generated coordinates (Mexico City).
pub const REFERENCE_LAT: f64 = 19.4326;
pub const REFERENCE_LON: f64 = -99.1332;

/// City labels paired with generated devices.
pub const CITIES: [&str; 5] = ["CDMX", "GDL", "MTY", "PUE", "QRO"];

const TECHNICIANS: [&str; 4] = [
    "Juan Pérez",
    "María García",
    "Carlos López",
    "Ana Martínez",
];

const PANEL_MODELS: [&str; 5] = [
    "DSC PowerSeries",
    "Honeywell Vista",
    "Paradox EVO",
    "Bosch B Series",
    "DMP XR150",
];

const CONNECTED_SENSORS: &str = "PIR, Magnético, Sirena, Botón de pánico";

const TECHNICIAN_NOTES: &str =
    "Instalación completada según especificaciones. Sistema probado y funcionando.";

/// A generated device together with the city label used for its location
/// description, which the installation record reuses.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceSample {
    pub device: NewDevice,
    pub city: &'static str,
}

/// Random sample generator backed by a seedable RNG.
///
/// The wall clock is captured once at construction so that a fixed seed
/// plus a fixed reference time reproduce a run exactly.
pub struct SampleGenerator {
    rng: StdRng,
    now: DateTime<Utc>,
}

impl SampleGenerator {
    /// Deterministic generator for a given seed.
    pub fn from_seed(seed: u64) -> Self {
        Self::from_seed_at(seed, Utc::now())
    }

    /// Deterministic generator with an explicit reference time.
    pub fn from_seed_at(seed: u64, now: DateTime<Utc>) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            now,
        }
    }

    /// Entropy-seeded generator for normal runs.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            now: Utc::now(),
        }
    }

    /// Generate a device. `index` is the position within the current batch,
    /// `existing` the device count already in the table; together they keep
    /// MAC addresses and hostnames unique across runs.
    pub fn device(&mut self, index: usize, existing: i64) -> DeviceSample {
        let city = CITIES[self.rng.gen_range(0..CITIES.len())];
        let zone = self.rng.gen_range(1..=5);
        let device = NewDevice {
            mac_address: format!(
                "AA:BB:CC:DD:{:02X}:{:02X}",
                index,
                self.rng.gen_range(0..=255u32)
            ),
            hostname: format!("ESP32-ALARM-{:03}", existing + index as i64 + 1),
            country: "MEX".to_string(),
            zone,
            latitude: REFERENCE_LAT + self.rng.gen_range(-0.5..0.5),
            longitude: REFERENCE_LON + self.rng.gen_range(-0.5..0.5),
            location_desc: format!("Ubicación {} - Zona {}", city, zone),
            installation_date: self.now - Duration::days(self.rng.gen_range(30..=365)),
            notes: format!("Dispositivo de prueba #{}", index + 1),
            active: self.rng.gen_ratio(3, 4),
        };
        DeviceSample { device, city }
    }

    /// Generate the status row for a device. Offline devices carry no
    /// last-seen timestamp, network fields, or uptime and sit in INIT state.
    pub fn status(&mut self) -> NewDeviceStatus {
        let is_online = self.rng.gen_ratio(3, 4);
        let device_state = if is_online {
            match self.rng.gen_range(0..4) {
                0 | 1 => DeviceState::Normal,
                2 => DeviceState::Alarm,
                _ => DeviceState::Maintenance,
            }
        } else {
            DeviceState::Init
        };

        NewDeviceStatus {
            is_online,
            last_seen: is_online
                .then(|| self.now - Duration::minutes(self.rng.gen_range(0..=1440))),
            firmware_version: format!(
                "1.{}.{}",
                self.rng.gen_range(0..=5),
                self.rng.gen_range(0..=10)
            ),
            uptime: if is_online {
                self.rng.gen_range(3600..=864_000)
            } else {
                0
            },
            boot_count: self.rng.gen_range(1..=100),
            device_state,
            ip_address: is_online.then(|| {
                format!(
                    "192.168.{}.{}",
                    self.rng.gen_range(1..=254),
                    self.rng.gen_range(1..=254)
                )
            }),
            rssi: is_online.then(|| self.rng.gen_range(-90..=-40)),
            mqtt_connected: is_online,
            temperature: self.rng.gen_range(15.0..35.0),
            humidity: self.rng.gen_range(30.0..70.0),
            fan_pwm_duty: self.rng.gen_range(0..=100),
            panic1: self.rng.gen_ratio(1, 4),
            panic2: self.rng.gen_ratio(1, 4),
            box_sw: self.rng.gen_ratio(1, 5),
            siren: false,
            turret: false,
            panic1_count: self.rng.gen_range(0..=10),
            panic2_count: self.rng.gen_range(0..=10),
            tamper_count: self.rng.gen_range(0..=5),
        }
    }

    /// Generate an installation record for a device located in `city`/`zone`.
    pub fn installation(&mut self, city: &str, zone: i32) -> NewInstallation {
        let installation_date = self.now - Duration::days(self.rng.gen_range(30..=365));
        NewInstallation {
            installation_date,
            technician_name: TECHNICIANS[self.rng.gen_range(0..TECHNICIANS.len())].to_string(),
            work_order: format!("WO-2024-{}", self.rng.gen_range(1000..=9999)),
            client_location: format!("Cliente en {}, Zona {}", city, zone),
            panel_model: PANEL_MODELS[self.rng.gen_range(0..PANEL_MODELS.len())].to_string(),
            configured_zones: format!("Zonas 1-{} configuradas", self.rng.gen_range(4..=16)),
            connected_sensors: CONNECTED_SENSORS.to_string(),
            last_maintenance: installation_date + Duration::days(self.rng.gen_range(30..=180)),
            next_maintenance: self.now + Duration::days(self.rng.gen_range(30..=180)),
            warranty_expiry: warranty_expiry_for(installation_date),
            installation_status: InstallationStatus::ALL
                [self.rng.gen_range(0..InstallationStatus::ALL.len())],
            technician_notes: TECHNICIAN_NOTES.to_string(),
        }
    }

    /// Whether a device gets assigned to an account (2 in 3).
    pub fn assigns_account(&mut self) -> bool {
        self.rng.gen_ratio(2, 3)
    }

    /// Whether a device gets assigned to a group (1 in 2).
    pub fn assigns_group(&mut self) -> bool {
        self.rng.gen_ratio(1, 2)
    }

    /// Whether a device gets an installation record (2 in 3).
    pub fn has_installation(&mut self) -> bool {
        self.rng.gen_ratio(2, 3)
    }

    /// Uniform pick from a slice. Empty slices yield `None`.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            Some(&items[self.rng.gen_range(0..items.len())])
        }
    }
}

fn warranty_expiry_for(installation_date: DateTime<Utc>) -> NaiveDate {
    (installation_date + Duration::days(365)).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_yields_identical_samples() {
        let now = Utc::now();
        let mut a = SampleGenerator::from_seed_at(42, now);
        let mut b = SampleGenerator::from_seed_at(42, now);

        for i in 0..10 {
            assert_eq!(a.device(i, 3), b.device(i, 3));
            assert_eq!(a.status(), b.status());
            assert_eq!(a.installation("GDL", 2), b.installation("GDL", 2));
            assert_eq!(a.assigns_account(), b.assigns_account());
        }
    }

    #[test]
    fn test_device_fields_within_bounds() {
        let mut gen = SampleGenerator::from_seed(7);
        for i in 0..50 {
            let sample = gen.device(i, 0);
            let device = sample.device;
            assert!((REFERENCE_LAT - 0.5..REFERENCE_LAT + 0.5).contains(&device.latitude));
            assert!((REFERENCE_LON - 0.5..REFERENCE_LON + 0.5).contains(&device.longitude));
            assert!((1..=5).contains(&device.zone));
            assert_eq!(device.country, "MEX");
            assert!(device.location_desc.contains(sample.city));
            assert!(device.installation_date < Utc::now());
        }
    }

    #[test]
    fn test_mac_address_and_hostname_formats() {
        let mut gen = SampleGenerator::from_seed(1);
        let sample = gen.device(2, 5);
        assert!(sample.device.mac_address.starts_with("AA:BB:CC:DD:02:"));
        assert_eq!(sample.device.mac_address.len(), 17);
        assert_eq!(sample.device.hostname, "ESP32-ALARM-008");
    }

    #[test]
    fn test_offline_status_has_no_network_fields() {
        let mut gen = SampleGenerator::from_seed(3);
        for _ in 0..200 {
            let status = gen.status();
            if status.is_online {
                assert!(status.last_seen.is_some());
                assert!(status.ip_address.is_some());
                assert!(status.rssi.is_some());
                assert!(status.uptime >= 3600);
                assert_ne!(status.device_state, DeviceState::Init);
            } else {
                assert!(status.last_seen.is_none());
                assert!(status.ip_address.is_none());
                assert!(status.rssi.is_none());
                assert_eq!(status.uptime, 0);
                assert_eq!(status.device_state, DeviceState::Init);
            }
            assert!(!status.siren);
            assert!(!status.turret);
            assert!((15.0..35.0).contains(&status.temperature));
            assert!((30.0..70.0).contains(&status.humidity));
        }
    }

    #[test]
    fn test_online_rate_is_roughly_three_quarters() {
        let mut gen = SampleGenerator::from_seed(11);
        let online = (0..2000).filter(|_| gen.status().is_online).count();
        let rate = online as f64 / 2000.0;
        assert!((0.70..0.80).contains(&rate), "online rate {}", rate);
    }

    #[test]
    fn test_installation_dates_are_ordered() {
        let mut gen = SampleGenerator::from_seed(9);
        for _ in 0..50 {
            let record = gen.installation("CDMX", 4);
            assert!(record.last_maintenance > record.installation_date);
            assert!(record.next_maintenance > Utc::now());
            assert_eq!(
                record.warranty_expiry,
                (record.installation_date + Duration::days(365)).date_naive()
            );
            assert!(record.work_order.starts_with("WO-2024-"));
        }
    }

    #[test]
    fn test_pick_handles_empty_slice() {
        let mut gen = SampleGenerator::from_seed(5);
        let empty: [i32; 0] = [];
        assert!(gen.pick(&empty).is_none());
        assert_eq!(gen.pick(&[10]), Some(&10));
    }
}
