//! Captured warning and error events

use jdlgen_core::LogLevel;
use once_cell::sync::OnceCell;
use parking_lot::RwLock;

/// Global collector used by [`crate::init_logging`]
static COLLECTOR: OnceCell<DiagnosticsCollector> = OnceCell::new();

/// One captured event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: LogLevel,
    pub target: String,
    pub message: String,
}

/// Store of warnings and errors emitted during a run
pub struct DiagnosticsCollector {
    entries: RwLock<Vec<Diagnostic>>,
}

impl DiagnosticsCollector {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Get the global collector instance
    pub fn global() -> &'static DiagnosticsCollector {
        COLLECTOR.get_or_init(DiagnosticsCollector::new)
    }

    /// Record an event; anything below WARN is ignored
    pub fn record(&self, level: LogLevel, target: &str, message: impl Into<String>) {
        if level < LogLevel::Warn || level == LogLevel::Off {
            return;
        }
        self.entries.write().push(Diagnostic {
            level,
            target: target.to_string(),
            message: message.into(),
        });
    }

    pub fn warning_count(&self) -> usize {
        self.count(LogLevel::Warn)
    }

    pub fn error_count(&self) -> usize {
        self.count(LogLevel::Error)
    }

    /// Snapshot of everything recorded so far, in emission order
    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries.read().clone()
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }

    fn count(&self, level: LogLevel) -> usize {
        self.entries.read().iter().filter(|d| d.level == level).count()
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "collector/collector_tests.rs"]
mod collector_tests;
