//! Error types for the SMART drive monitor
//!
//! Provides structured error types for device access, classification,
//! capture loading and configuration. Decoder precondition violations are
//! not represented here: they panic, because they indicate a malformed
//! attribute catalog rather than bad device data.

use thiserror::Error;

/// Unified error type for the monitor
#[derive(Error, Debug)]
pub enum Error {
    // =========================================================================
    // Internal Errors
    // =========================================================================
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid device state: expected {expected}, found {found}")]
    InvalidState { expected: String, found: String },

    // =========================================================================
    // Device Access Errors
    // =========================================================================
    #[error("Volume access failed: {volume} - {reason}")]
    VolumeAccess { volume: String, reason: String },

    // =========================================================================
    // Classification Errors
    // =========================================================================
    #[error("Unsupported device: {name} ({reason})")]
    UnsupportedDevice { name: String, reason: String },

    // =========================================================================
    // Parse Errors
    // =========================================================================
    #[error("Capture format error: {0}")]
    CaptureFormat(String),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    // =========================================================================
    // IO Errors
    // =========================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// What the caller should do with a device after an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorAction {
    /// Leave the device out of monitoring
    Exclude,
    /// Keep the device pending, try to open it again on the next tick
    SkipCycle,
    /// Stop: the configuration or the crate itself is broken
    Fatal,
}

impl Error {
    /// Determine what action to take for this error
    pub fn action(&self) -> ErrorAction {
        match self {
            // Expected for many drives - drop them quietly
            Error::UnsupportedDevice { .. } => ErrorAction::Exclude,

            // A capture not written yet or a volume not mounted yet
            Error::VolumeAccess { .. } | Error::Io(_) => ErrorAction::SkipCycle,

            Error::Internal(_)
            | Error::Configuration(_)
            | Error::InvalidState { .. }
            | Error::CaptureFormat(_)
            | Error::JsonParse(_)
            | Error::YamlParse(_) => ErrorAction::Fatal,
        }
    }

    /// Check if this error only affects the current cycle
    pub fn is_transient(&self) -> bool {
        matches!(self.action(), ErrorAction::SkipCycle)
    }

    /// Check if this error must stop the monitor
    pub fn is_fatal(&self) -> bool {
        matches!(self.action(), ErrorAction::Fatal)
    }

    pub(crate) fn unsupported(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::UnsupportedDevice {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for the monitor
pub type Result<T> = std::result::Result<T, Error>;
