//! Diagnostic source ownership
//!
//! A storage device holds its source through a [`SourceGuard`], which closes
//! the source exactly once, either on an explicit release or on drop.

use crate::domain::ports::{DiagnosticSource, RawAttributeRecord, RawThresholdRecord};
use tracing::debug;

/// Exclusive owner of one diagnostic source
pub struct SourceGuard {
    inner: Box<dyn DiagnosticSource>,
    closed: bool,
}

impl SourceGuard {
    pub fn new(source: Box<dyn DiagnosticSource>) -> Self {
        Self {
            inner: source,
            closed: false,
        }
    }

    /// Valid and not yet released
    pub fn is_valid(&self) -> bool {
        !self.closed && self.inner.is_valid()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn read_name_and_firmware(&self) -> Option<(String, String)> {
        if self.closed {
            return None;
        }
        self.inner.read_name_and_firmware()
    }

    pub fn enable_diagnostics(&self) -> bool {
        !self.closed && self.inner.enable_diagnostics()
    }

    pub fn read_attribute_records(&self) -> Vec<RawAttributeRecord> {
        if self.closed {
            return Vec::new();
        }
        self.inner.read_attribute_records()
    }

    pub fn read_threshold_records(&self) -> Vec<RawThresholdRecord> {
        if self.closed {
            return Vec::new();
        }
        self.inner.read_threshold_records()
    }

    /// Release the source; later calls do nothing
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.inner.close();
        debug!("Diagnostic source released");
    }
}

impl Drop for SourceGuard {
    fn drop(&mut self) {
        self.close();
    }
}

impl std::fmt::Debug for SourceGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceGuard")
            .field("closed", &self.closed)
            .finish_non_exhaustive()
    }
}
