//! Tracing layer capturing diagnostics, and subscriber initialisation

use crate::collector::DiagnosticsCollector;
use crate::reload::ReloadHandle;
use jdlgen_core::LogLevel;
use std::fmt::Write;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer};

/// Environment variable holding per-target directives for console output,
/// e.g. `JDLGEN_LOG=jdlgen_model=trace`
pub const LOG_ENV: &str = "JDLGEN_LOG";

/// Tracing layer that copies WARN and ERROR events into a [`DiagnosticsCollector`]
pub struct DiagnosticsLayer {
    collector: &'static DiagnosticsCollector,
}

impl DiagnosticsLayer {
    /// Create a layer feeding the global collector
    pub fn new() -> Self {
        Self {
            collector: DiagnosticsCollector::global(),
        }
    }

    pub fn with_collector(collector: &'static DiagnosticsCollector) -> Self {
        Self { collector }
    }

    fn convert_level(level: &Level) -> LogLevel {
        match *level {
            Level::TRACE => LogLevel::Trace,
            Level::DEBUG => LogLevel::Debug,
            Level::INFO => LogLevel::Info,
            Level::WARN => LogLevel::Warn,
            Level::ERROR => LogLevel::Error,
        }
    }
}

impl Default for DiagnosticsLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Layer<S> for DiagnosticsLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = Self::convert_level(metadata.level());
        if level < LogLevel::Warn {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        self.collector
            .record(level, metadata.target(), visitor.into_message());
    }
}

/// Collects the `message` field followed by every other field as `key=value`
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn push_field(&mut self, name: &str, value: std::fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{name}={value}");
    }

    fn into_message(self) -> String {
        match (self.message.is_empty(), self.fields.is_empty()) {
            (_, true) => self.message,
            (true, false) => self.fields,
            (false, false) => format!("{} {}", self.message, self.fields),
        }
    }
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.push_field(field.name(), format_args!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.push_field(field.name(), format_args!("{value}"));
        }
    }
}

/// Install the global subscriber
///
/// Layers: a reloadable level filter, human-readable output on stderr
/// (narrowed further by [`LOG_ENV`] when set) and the diagnostics layer.
/// Returns `false` when a global subscriber was already installed.
pub fn init_logging(level: LogLevel) -> bool {
    use tracing_subscriber::prelude::*;

    let (filter, handle) = tracing_subscriber::reload::Layer::new(ReloadHandle::level_filter(level));

    let console_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("trace"));
    let console = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(console_filter);

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(DiagnosticsLayer::new());

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        return false;
    }

    ReloadHandle::global().set_handle(handle, level);
    true
}
