//! Selection-watch lifecycle.
//!
//! A UI surface keeps one [`SelectionMonitor`] alive for the duration of
//! the plugin session. The host pushes selection-changed events into it;
//! hosts without a reliable event stream can additionally drive the timer
//! path. Either way the monitor reports a [`Classification`] the status
//! area can render.

use crate::config::FlagConfig;
use crate::host::Host;
use crate::resolver::{classify_selection, Classification};

/// Watches the selection and reports classification changes.
#[derive(Debug, Clone)]
pub struct SelectionMonitor {
    config: FlagConfig,
    last: Option<Classification>,
    disposed: bool,
}

impl SelectionMonitor {
    pub fn new(config: FlagConfig) -> Self {
        Self { config, last: None, disposed: false }
    }

    /// Event path: the host reported a selection change.
    ///
    /// Returns the classification to display, or `None` after disposal.
    pub fn on_selection_changed(&mut self, host: &impl Host) -> Option<Classification> {
        if self.disposed {
            return None;
        }
        let classification = classify_selection(host, &self.config);
        self.last = Some(classification);
        Some(classification)
    }

    /// Timer path: re-check the selection between events.
    ///
    /// Only active when the config enables polling, and only reports when
    /// the classification actually changed since the last report.
    pub fn poll(&mut self, host: &impl Host) -> Option<Classification> {
        if self.disposed || !self.config.selection_polling_enabled {
            return None;
        }
        let classification = classify_selection(host, &self.config);
        if self.last == Some(classification) {
            return None;
        }
        self.last = Some(classification);
        Some(classification)
    }

    /// The last classification reported on either path.
    pub fn last_reported(&self) -> Option<Classification> {
        self.last
    }

    /// Tear the monitor down. Safe to call more than once; the plugin
    /// destroy hook may fire after the host already invalidated the
    /// listener.
    pub fn dispose(&mut self) {
        self.disposed = true;
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

impl Default for SelectionMonitor {
    fn default() -> Self {
        Self::new(FlagConfig::default())
    }
}
