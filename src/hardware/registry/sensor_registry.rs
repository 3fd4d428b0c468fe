//! In-Memory Sensor Registry
//!
//! Keeps every registered sensor with its latest timestamped reading, in
//! registration order, and broadcasts registry events to subscribers.

use crate::domain::ports::{SensorDefinition, SensorId, SensorRegistry};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use parking_lot::RwLock;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::broadcast;
use tracing::{debug, warn};

use super::RegistryEvent;

/// Capacity of the event channel; slow subscribers lag past this
const EVENT_CHANNEL_CAPACITY: usize = 1024;

// =============================================================================
// Sensor Entry
// =============================================================================

/// A registered sensor and its latest reading
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorEntry {
    pub definition: SensorDefinition,
    /// Latest value, `None` until the first update
    pub value: Option<f64>,
    /// When the latest value arrived
    pub updated_at: Option<DateTime<Utc>>,
    /// Number of values received
    pub update_count: u64,
}

impl SensorEntry {
    fn new(definition: SensorDefinition) -> Self {
        Self {
            definition,
            value: None,
            updated_at: None,
            update_count: 0,
        }
    }

    /// Whether the reading is older than `max_age_secs` (or missing)
    pub fn is_stale(&self, max_age_secs: i64) -> bool {
        match self.updated_at {
            Some(at) => (Utc::now() - at).num_seconds() > max_age_secs,
            None => true,
        }
    }
}

// =============================================================================
// Registry Statistics
// =============================================================================

#[derive(Debug, Default)]
struct RegistryStats {
    registrations: AtomicU64,
    updates: AtomicU64,
    unknown_updates: AtomicU64,
}

/// Point-in-time copy of the registry counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegistryStatsSnapshot {
    pub sensors: usize,
    pub registrations: u64,
    pub updates: u64,
    pub unknown_updates: u64,
}

// =============================================================================
// In-Memory Sensor Registry
// =============================================================================

/// Sensor registry backed by an insertion-ordered map
pub struct InMemorySensorRegistry {
    sensors: RwLock<IndexMap<SensorId, SensorEntry>>,
    stats: RegistryStats,
    event_sender: broadcast::Sender<RegistryEvent>,
}

impl InMemorySensorRegistry {
    pub fn new() -> Self {
        let (event_sender, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            sensors: RwLock::new(IndexMap::new()),
            stats: RegistryStats::default(),
            event_sender,
        }
    }

    /// Subscribe to registry events
    pub fn subscribe(&self) -> broadcast::Receiver<RegistryEvent> {
        self.event_sender.subscribe()
    }

    pub fn get(&self, id: &SensorId) -> Option<SensorEntry> {
        self.sensors.read().get(id).cloned()
    }

    /// Latest value of a sensor
    pub fn value(&self, id: &SensorId) -> Option<f64> {
        self.sensors.read().get(id).and_then(|e| e.value)
    }

    pub fn contains(&self, id: &SensorId) -> bool {
        self.sensors.read().contains_key(id)
    }

    /// All sensors in registration order
    pub fn snapshot(&self) -> Vec<SensorEntry> {
        self.sensors.read().values().cloned().collect()
    }

    /// Sensors of one drive, in registration order
    pub fn drive_sensors(&self, drive_index: u32) -> Vec<SensorEntry> {
        let prefix = format!("/hdd/{}/", drive_index);
        self.sensors
            .read()
            .values()
            .filter(|e| e.definition.id.as_str().starts_with(&prefix))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.sensors.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sensors.read().is_empty()
    }

    pub fn stats(&self) -> RegistryStatsSnapshot {
        RegistryStatsSnapshot {
            sensors: self.len(),
            registrations: self.stats.registrations.load(Ordering::Relaxed),
            updates: self.stats.updates.load(Ordering::Relaxed),
            unknown_updates: self.stats.unknown_updates.load(Ordering::Relaxed),
        }
    }
}

impl Default for InMemorySensorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InMemorySensorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemorySensorRegistry")
            .field("sensors", &self.len())
            .finish_non_exhaustive()
    }
}

impl SensorRegistry for InMemorySensorRegistry {
    fn register(&self, definition: &SensorDefinition) {
        {
            let mut sensors = self.sensors.write();
            if sensors.contains_key(&definition.id) {
                warn!(sensor = %definition.id, "Sensor registered twice, keeping the first definition");
                return;
            }
            sensors.insert(definition.id.clone(), SensorEntry::new(definition.clone()));
        }

        self.stats.registrations.fetch_add(1, Ordering::Relaxed);
        debug!(sensor = %definition.id, name = %definition.name, "Sensor registered");

        // No subscribers is fine
        let _ = self.event_sender.send(RegistryEvent::SensorRegistered {
            id: definition.id.clone(),
            name: definition.name.clone(),
            sensor_type: definition.sensor_type,
            hidden: definition.default_hidden,
        });
    }

    fn update(&self, id: &SensorId, value: f64) {
        let known = {
            let mut sensors = self.sensors.write();
            match sensors.get_mut(id) {
                Some(entry) => {
                    entry.value = Some(value);
                    entry.updated_at = Some(Utc::now());
                    entry.update_count += 1;
                    true
                }
                None => false,
            }
        };

        let event = if known {
            self.stats.updates.fetch_add(1, Ordering::Relaxed);
            RegistryEvent::SensorUpdated {
                id: id.clone(),
                value,
            }
        } else {
            self.stats.unknown_updates.fetch_add(1, Ordering::Relaxed);
            warn!(sensor = %id, "Value for unregistered sensor dropped");
            RegistryEvent::UnknownSensor { id: id.clone() }
        };
        let _ = self.event_sender.send(event);
    }
}
