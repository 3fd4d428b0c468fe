//! Drive Monitor
//!
//! Opens the configured drives and refreshes their sensors on a fixed
//! period. Devices are updated one after another on every tick; each update
//! is a short synchronous read of an already open source. Drives that could
//! not be opened because of a transient error stay pending and are opened
//! again at the start of each tick.

use crate::config::{MonitorConfig, ParameterOverrides};
use crate::domain::ports::{DriveIdentity, SensorRegistryRef};
use crate::error::{ErrorAction, Result};
use crate::hardware::classification::ProfileRegistry;
use crate::hardware::device::StorageDevice;
use crate::hardware::discovery::{CaptureSource, ConfiguredVolumes};
use crate::hardware::registry::InMemorySensorRegistry;
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

/// Configured drive that has not been opened yet
#[derive(Debug, Clone)]
struct PendingDrive {
    identity: DriveIdentity,
    capture: PathBuf,
    attempts: u32,
}

/// Collaborators shared by every open attempt
struct DriveOpener {
    profiles: ProfileRegistry,
    volumes: ConfiguredVolumes,
    sensors: SensorRegistryRef,
    overrides: ParameterOverrides,
}

impl DriveOpener {
    fn open(&self, drive: &PendingDrive) -> Result<StorageDevice> {
        let source = CaptureSource::from_file(&drive.capture)?;
        StorageDevice::open(
            &drive.identity,
            Box::new(source),
            &self.volumes,
            &self.profiles,
            self.sensors.clone(),
            &self.overrides,
        )
    }
}

/// Set of open drives refreshed on a schedule
pub struct Monitor {
    devices: Vec<StorageDevice>,
    pending: Vec<PendingDrive>,
    opener: Option<DriveOpener>,
    registry: Arc<InMemorySensorRegistry>,
    interval: Duration,
    ticks: u64,
}

impl Monitor {
    pub fn new(devices: Vec<StorageDevice>, registry: Arc<InMemorySensorRegistry>, interval: Duration) -> Self {
        Self {
            devices,
            pending: Vec::new(),
            opener: None,
            registry,
            interval,
            ticks: 0,
        }
    }

    /// Open every configured drive.
    ///
    /// Unsupported drives are left out with a log line. Drives failing with
    /// a transient error (missing or unreadable capture) stay pending and
    /// are retried on every tick. Broken configuration or capture files
    /// abort with the error.
    pub fn open_all(
        config: &MonitorConfig,
        profiles: &ProfileRegistry,
        registry: Arc<InMemorySensorRegistry>,
    ) -> Result<Self> {
        config.validate()?;

        let opener = DriveOpener {
            profiles: profiles.clone(),
            volumes: ConfiguredVolumes::from_config(config),
            sensors: registry.clone(),
            overrides: config.sensor_parameters.clone(),
        };
        let mut monitor = Self::new(Vec::with_capacity(config.devices.len()), registry, config.poll_interval());

        for (position, device) in config.devices.iter().enumerate() {
            let drive = PendingDrive {
                identity: DriveIdentity {
                    index: config.device_index(position),
                    name: device.name.clone().unwrap_or_default(),
                    revision: device.revision.clone().unwrap_or_default(),
                },
                capture: device.capture.clone(),
                attempts: 0,
            };

            match opener.open(&drive) {
                Ok(storage) => {
                    info!(
                        drive = drive.identity.index,
                        device = %storage.name(),
                        profile = storage.profile(),
                        "Monitoring drive"
                    );
                    monitor.devices.push(storage);
                }
                Err(e) => match e.action() {
                    ErrorAction::Exclude => {
                        info!(drive = drive.identity.index, capture = ?drive.capture, "Drive excluded: {}", e);
                    }
                    ErrorAction::SkipCycle => {
                        warn!(
                            drive = drive.identity.index,
                            capture = ?drive.capture,
                            "Drive not ready, retrying on the next tick: {}",
                            e
                        );
                        monitor.pending.push(drive);
                    }
                    ErrorAction::Fatal => return Err(e),
                },
            }
        }

        monitor.opener = Some(opener);
        info!(
            pending = monitor.pending.len(),
            "Opened {} of {} configured drives",
            monitor.devices.len(),
            config.devices.len()
        );
        Ok(monitor)
    }

    /// Try to open every pending drive once more
    fn retry_pending(&mut self) {
        let Some(opener) = &self.opener else {
            return;
        };
        if self.pending.is_empty() {
            return;
        }

        let mut still_pending = Vec::with_capacity(self.pending.len());
        for mut drive in std::mem::take(&mut self.pending) {
            drive.attempts += 1;
            match opener.open(&drive) {
                Ok(storage) => {
                    info!(
                        drive = drive.identity.index,
                        device = %storage.name(),
                        profile = storage.profile(),
                        attempts = drive.attempts,
                        "Drive became available"
                    );
                    self.devices.push(storage);
                }
                Err(e) if e.is_transient() => {
                    debug!(drive = drive.identity.index, attempts = drive.attempts, "Drive still not ready: {}", e);
                    still_pending.push(drive);
                }
                Err(e) => {
                    warn!(drive = drive.identity.index, capture = ?drive.capture, "Drive dropped: {}", e);
                }
            }
        }
        self.pending = still_pending;
    }

    /// Open pending drives, then refresh every drive once; returns the
    /// number of sensors updated
    pub fn tick(&mut self) -> usize {
        self.retry_pending();
        let updated = self.devices.iter_mut().map(|d| d.update_sensors()).sum();
        self.ticks += 1;
        debug!(tick = self.ticks, updated, pending = self.pending.len(), "Monitor tick");
        updated
    }

    /// Tick on the configured period until `max_ticks` ticks have run or
    /// `shutdown` resolves. Returns the number of ticks run.
    pub async fn run<F>(&mut self, max_ticks: Option<u64>, shutdown: F) -> u64
    where
        F: Future<Output = ()>,
    {
        let mut interval = tokio::time::interval(self.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        let mut ticks = 0;
        info!(
            drives = self.devices.len(),
            pending = self.pending.len(),
            interval_ms = self.interval.as_millis() as u64,
            "Monitor started"
        );

        while max_ticks.map_or(true, |max| ticks < max) {
            tokio::select! {
                biased;
                _ = &mut shutdown => {
                    info!("Shutdown requested");
                    break;
                }
                _ = interval.tick() => {
                    self.tick();
                    ticks += 1;
                }
            }
        }

        ticks
    }

    /// Full report of every drive, in the order the drives were opened
    pub fn reports(&self) -> Vec<String> {
        self.devices.iter().map(|d| d.full_report()).collect()
    }

    /// Dispose every drive
    pub fn shutdown(&mut self) {
        for device in &mut self.devices {
            device.dispose();
        }
        if !self.pending.is_empty() {
            info!("{} drives never became available", self.pending.len());
        }
        info!("Monitor stopped after {} ticks", self.ticks);
    }

    pub fn devices(&self) -> &[StorageDevice] {
        &self.devices
    }

    /// Number of drives waiting to be opened
    pub fn pending_drives(&self) -> usize {
        self.pending.len()
    }

    pub fn registry(&self) -> &Arc<InMemorySensorRegistry> {
        &self.registry
    }

    /// Ticks run so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl std::fmt::Debug for Monitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Monitor")
            .field("devices", &self.devices)
            .field("pending", &self.pending)
            .field("interval", &self.interval)
            .field("ticks", &self.ticks)
            .finish_non_exhaustive()
    }
}
