//! Runtime log level changes

use jdlgen_core::{CodegenError, CodegenResult, LogLevel};
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU8, Ordering};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{Registry, reload};

type FilterHandle = reload::Handle<LevelFilter, Registry>;

/// Handle to the reloadable level filter installed by [`crate::init_logging`]
///
/// The CLI starts logging before the configuration file is read, then
/// switches to the configured level through this handle.
pub struct ReloadHandle {
    handle: Mutex<Option<FilterHandle>>,
    level: AtomicU8,
}

impl ReloadHandle {
    pub fn new() -> Self {
        Self {
            handle: Mutex::new(None),
            level: AtomicU8::new(LogLevel::Info as u8),
        }
    }

    /// Get the global reload handle
    pub fn global() -> &'static ReloadHandle {
        static INSTANCE: OnceCell<ReloadHandle> = OnceCell::new();
        INSTANCE.get_or_init(ReloadHandle::new)
    }

    pub(crate) fn set_handle(&self, handle: FilterHandle, level: LogLevel) {
        *self.handle.lock() = Some(handle);
        self.level.store(level as u8, Ordering::SeqCst);
    }

    pub fn is_initialized(&self) -> bool {
        self.handle.lock().is_some()
    }

    /// Level currently applied
    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.level.load(Ordering::SeqCst))
    }

    /// Switch the active filter to `level`
    pub fn reload_level(&self, level: LogLevel) -> CodegenResult<()> {
        let guard = self.handle.lock();
        let handle = guard
            .as_ref()
            .ok_or_else(|| CodegenError::ConfigError("logging is not initialised".to_string()))?;

        handle
            .reload(Self::level_filter(level))
            .map_err(|e| CodegenError::ConfigError(format!("failed to reload log level: {e}")))?;
        self.level.store(level as u8, Ordering::SeqCst);
        Ok(())
    }

    pub(crate) fn level_filter(level: LogLevel) -> LevelFilter {
        match level {
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Off => LevelFilter::OFF,
        }
    }
}

impl Default for ReloadHandle {
    fn default() -> Self {
        Self::new()
    }
}
