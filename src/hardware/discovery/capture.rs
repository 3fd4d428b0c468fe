//! Captured SMART Source
//!
//! Diagnostic source backed by a JSON capture of a drive's SMART tables, as
//! dumped once from the live device.
//!
//! ```json
//! {
//!   "valid": true,
//!   "name": "INTEL SSDSA2CW120G3",
//!   "firmware": "4PC10302",
//!   "smart_enabled": true,
//!   "attributes": [{ "id": 194, "raw": "230012002D00", "value": 112, "worst": 98 }],
//!   "thresholds": [{ "id": 194, "threshold": 0 }]
//! }
//! ```
//!
//! Raw values are the six raw bytes in wire order, as 12 hex digits.

use crate::domain::ports::{DiagnosticSource, RawAttributeRecord, RawThresholdRecord, RAW_VALUE_LEN};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::debug;

// =============================================================================
// Capture Document
// =============================================================================

fn enabled() -> bool {
    true
}

/// On-disk capture format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureDocument {
    /// Whether the drive answered the SMART capability probe
    #[serde(default = "enabled")]
    pub valid: bool,
    /// Model name as returned by IDENTIFY, absent if the read failed
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub firmware: Option<String>,
    /// Whether SMART ENABLE OPERATIONS succeeded
    #[serde(default = "enabled")]
    pub smart_enabled: bool,
    #[serde(default)]
    pub attributes: Vec<CapturedAttribute>,
    #[serde(default)]
    pub thresholds: Vec<CapturedThreshold>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedAttribute {
    pub id: u8,
    /// Raw bytes as 12 hex digits
    pub raw: String,
    pub value: u8,
    pub worst: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedThreshold {
    pub id: u8,
    pub threshold: u8,
}

/// Parse a raw value written as 12 hex digits
pub fn parse_raw_value(raw: &str) -> Result<[u8; RAW_VALUE_LEN]> {
    let raw = raw.trim();
    if raw.len() != RAW_VALUE_LEN * 2 || !raw.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::CaptureFormat(format!(
            "raw value '{}' must be {} hex digits",
            raw,
            RAW_VALUE_LEN * 2
        )));
    }

    let mut bytes = [0u8; RAW_VALUE_LEN];
    for (i, byte) in bytes.iter_mut().enumerate() {
        *byte = u8::from_str_radix(&raw[i * 2..i * 2 + 2], 16)
            .map_err(|e| Error::CaptureFormat(format!("raw value '{}': {}", raw, e)))?;
    }
    Ok(bytes)
}

// =============================================================================
// Capture Source
// =============================================================================

/// Diagnostic source replaying a captured SMART table
#[derive(Debug)]
pub struct CaptureSource {
    origin: String,
    valid: bool,
    identity: Option<(String, String)>,
    smart_enabled: bool,
    attributes: Vec<RawAttributeRecord>,
    thresholds: Vec<RawThresholdRecord>,
    closed: bool,
    closes: Arc<AtomicUsize>,
}

impl CaptureSource {
    /// Load a capture file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let document: CaptureDocument = serde_json::from_str(&contents)?;
        Self::from_document(path.display().to_string(), document)
    }

    /// Parse a capture held in memory
    pub fn from_json_str(origin: impl Into<String>, json: &str) -> Result<Self> {
        let document: CaptureDocument = serde_json::from_str(json)?;
        Self::from_document(origin, document)
    }

    pub fn from_document(origin: impl Into<String>, document: CaptureDocument) -> Result<Self> {
        let attributes = document
            .attributes
            .iter()
            .map(|a| Ok(RawAttributeRecord::new(a.id, parse_raw_value(&a.raw)?, a.value, a.worst)))
            .collect::<Result<Vec<_>>>()?;

        let thresholds = document
            .thresholds
            .iter()
            .map(|t| RawThresholdRecord {
                identifier: t.id,
                threshold: t.threshold,
            })
            .collect();

        let identity = document
            .name
            .map(|name| (name, document.firmware.unwrap_or_default()));

        let origin = origin.into();
        debug!(
            capture = %origin,
            attributes = attributes.len(),
            valid = document.valid,
            "Capture loaded"
        );

        Ok(Self {
            origin,
            valid: document.valid,
            identity,
            smart_enabled: document.smart_enabled,
            attributes,
            thresholds,
            closed: false,
            closes: Arc::new(AtomicUsize::new(0)),
        })
    }

    /// Where the capture was loaded from
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Shared counter of `close()` calls that reached the source
    pub fn close_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.closes)
    }

    fn readable(&self) -> bool {
        self.valid && !self.closed
    }
}

impl DiagnosticSource for CaptureSource {
    fn is_valid(&self) -> bool {
        self.readable()
    }

    fn read_name_and_firmware(&self) -> Option<(String, String)> {
        if !self.readable() {
            return None;
        }
        self.identity.clone()
    }

    fn enable_diagnostics(&self) -> bool {
        self.readable() && self.smart_enabled
    }

    fn read_attribute_records(&self) -> Vec<RawAttributeRecord> {
        if !self.readable() || !self.smart_enabled {
            return Vec::new();
        }
        self.attributes.clone()
    }

    fn read_threshold_records(&self) -> Vec<RawThresholdRecord> {
        if !self.readable() || !self.smart_enabled {
            return Vec::new();
        }
        self.thresholds.clone()
    }

    fn close(&mut self) {
        if !self.closed {
            self.closed = true;
            debug!(capture = %self.origin, "Capture source closed");
        }
        self.closes.fetch_add(1, Ordering::SeqCst);
    }
}
