//! jdlgen-logging - Tracing setup for the generator
//!
//! This crate provides:
//! - [`init_logging`] installing the global subscriber
//! - [`ReloadHandle`] for switching the level once configuration is loaded
//! - [`DiagnosticsLayer`] and [`DiagnosticsCollector`] capturing warnings and
//!   errors for run summaries

mod collector;
mod layer;
mod reload;

pub use collector::{Diagnostic, DiagnosticsCollector};
pub use jdlgen_core::LogLevel;
pub use layer::{DiagnosticsLayer, LOG_ENV, init_logging};
pub use reload::ReloadHandle;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{DiagnosticsCollector, LogLevel, ReloadHandle, init_logging};
}
