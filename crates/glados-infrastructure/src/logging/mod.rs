//! Logging setup
//!
//! - Human-readable console output, always on (colored when stdout is a TTY)
//! - Optional one-line JSON file output with daily rotation
//! - `log` macros from this crate are bridged into `tracing`
//!
//! Filtering follows `RUST_LOG`, defaulting to `info`.

use std::io::IsTerminal;
use std::path::Path;
use std::sync::OnceLock;
use tracing::Level;
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_log::LogTracer;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Layer, Registry};

pub const LOG_FILE_NAME: &str = "glados-checkin.log";

static LOGGER_READY: OnceLock<()> = OnceLock::new();
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Initialize logging
///
/// Safe to call more than once; only the first call installs the subscriber.
pub fn init_logger(log_dir: Option<&Path>) -> anyhow::Result<()> {
    if LOGGER_READY.get().is_some() {
        return Ok(());
    }

    // Forward `log` records into tracing
    let _ = LogTracer::builder()
        .with_max_level(log::LevelFilter::Trace)
        .init();

    let json_layer = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;

            let file_appender = rolling::daily(dir, LOG_FILE_NAME);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let _ = FILE_GUARD.set(guard);

            Some(
                fmt::layer()
                    .with_writer(non_blocking)
                    .event_format(JsonFormatter::new())
                    .with_filter(default_filter()),
            )
        }
        None => None,
    };

    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .event_format(ConsoleFormatter::new(std::io::stdout().is_terminal()))
        .with_filter(default_filter());

    let subscriber = Registry::default().with(json_layer).with(stdout_layer);

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    let _ = LOGGER_READY.set(());

    tracing::debug!(
        target: "glados::logging",
        log_dir = ?log_dir,
        version = env!("CARGO_PKG_VERSION"),
        "Logger initialized"
    );

    Ok(())
}

const DEFAULT_DIRECTIVES: &str = "info";

fn default_filter() -> EnvFilter {
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    EnvFilter::try_new(filter_directives(from_env.as_deref()))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// `RUST_LOG` unset or blank means the default level
fn filter_directives(from_env: Option<&str>) -> &str {
    match from_env.map(str::trim) {
        Some(directives) if !directives.is_empty() => directives,
        _ => DEFAULT_DIRECTIVES,
    }
}

// ============================================================
// Formatters
// ============================================================

use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::{format::Writer, FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// One-line JSON formatter for the log file
struct JsonFormatter {
    pid: u32,
    version: &'static str,
}

impl JsonFormatter {
    fn new() -> Self {
        Self {
            pid: std::process::id(),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

impl<S, N> FormatEvent<S, N> for JsonFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();
        let timestamp = chrono::Local::now()
            .format("%Y-%m-%dT%H:%M:%S%.3f%:z")
            .to_string();

        let mut json = serde_json::json!({
            "timestamp": timestamp,
            "level": metadata.level().to_string(),
            "pid": self.pid,
            "target": metadata.target(),
            "version": self.version,
        });

        if let Some(file) = metadata.file() {
            json["file"] = serde_json::json!(file);
        }
        if let Some(line) = metadata.line() {
            json["line"] = serde_json::json!(line);
        }

        let mut visitor = FieldVisitor::new();
        event.record(&mut visitor);

        if let Some(message) = visitor.fields.remove("message") {
            json["message"] = message;
        }
        if !visitor.fields.is_empty() {
            json["fields"] = serde_json::Value::Object(visitor.fields);
        }

        writeln!(
            writer,
            "{}",
            serde_json::to_string(&json).unwrap_or_default()
        )
    }
}

/// Console formatter
/// Format: 2025-01-01 08:00:00 INFO message key=value
struct ConsoleFormatter {
    ansi: bool,
}

impl ConsoleFormatter {
    fn new(ansi: bool) -> Self {
        Self { ansi }
    }
}

fn level_label(level: &Level, ansi: bool) -> &'static str {
    match (*level, ansi) {
        (Level::ERROR, true) => "\x1b[31mERROR\x1b[0m",
        (Level::WARN, true) => "\x1b[33mWARN\x1b[0m",
        (Level::INFO, true) => "\x1b[32mINFO\x1b[0m",
        (Level::DEBUG, true) => "\x1b[36mDEBUG\x1b[0m",
        (Level::TRACE, true) => "\x1b[35mTRACE\x1b[0m",
        (Level::ERROR, false) => "ERROR",
        (Level::WARN, false) => "WARN",
        (Level::INFO, false) => "INFO",
        (Level::DEBUG, false) => "DEBUG",
        (Level::TRACE, false) => "TRACE",
    }
}

impl<S, N> FormatEvent<S, N> for ConsoleFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");

        let mut visitor = FieldVisitor::new();
        event.record(&mut visitor);

        let message = visitor
            .fields
            .remove("message")
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_default();

        let mut line = format!(
            "{} {} {}",
            timestamp,
            level_label(event.metadata().level(), self.ansi),
            message
        );
        for (key, value) in visitor.fields.iter() {
            // `log` bridge metadata is noise on the console
            if key.starts_with("log.") {
                continue;
            }
            line.push_str(&format!(" {}={}", key, value));
        }

        writeln!(writer, "{}", line)
    }
}

/// Collects event fields into a JSON map
struct FieldVisitor {
    fields: serde_json::Map<String, serde_json::Value>,
}

impl FieldVisitor {
    fn new() -> Self {
        Self {
            fields: serde_json::Map::new(),
        }
    }
}

impl tracing::field::Visit for FieldVisitor {
    fn record_f64(&mut self, field: &tracing::field::Field, value: f64) {
        self.fields
            .insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_i64(&mut self, field: &tracing::field::Field, value: i64) {
        self.fields
            .insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.fields
            .insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_bool(&mut self, field: &tracing::field::Field, value: bool) {
        self.fields
            .insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.fields
            .insert(field.name().to_string(), serde_json::json!(value));
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.fields.insert(
            field.name().to_string(),
            serde_json::json!(format!("{:?}", value)),
        );
    }
}
