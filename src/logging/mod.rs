// Logging module - forwards tracing events to the browser console
//
// A custom tracing layer formats each event and hands it to a `LogSink`
// (the web console in the wasm build, stderr natively). Entries are also kept
// in a bounded in-memory buffer so a page can dump recent diagnostics.

use crate::config::LoggingConfig;
use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::fmt::Write as _;
use std::sync::{Arc, Mutex};
use tracing::{Level, Metadata, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// A single log entry captured from tracing
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    /// The tracing target (module path)
    pub target: String,
    pub message: String,
    /// Structured fields other than `message`, as `key=value`
    pub fields: Vec<(String, String)>,
}

impl LogEntry {
    /// One-line rendering: `12:00:01.250 INFO folio::nav message key=value`
    pub fn format_line(&self) -> String {
        let mut line = format!(
            "{} {} {} {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level.as_str(),
            self.target,
            self.message
        );
        for (key, value) in &self.fields {
            let _ = write!(line, " {}={}", key, value);
        }
        line
    }
}

/// Log level for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<&Level> for LogLevel {
    fn from(level: &Level) -> Self {
        match *level {
            Level::ERROR => LogLevel::Error,
            Level::WARN => LogLevel::Warn,
            Level::INFO => LogLevel::Info,
            Level::DEBUG => LogLevel::Debug,
            Level::TRACE => LogLevel::Trace,
        }
    }
}

impl LogLevel {
    /// Get the display string for this log level
    pub fn as_str(&self) -> &str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }
}

/// Destination for formatted log entries
pub trait LogSink: Send + Sync + 'static {
    fn write(&self, entry: &LogEntry);
}

/// Browser console in the wasm build, stderr elsewhere
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    #[cfg(target_arch = "wasm32")]
    fn write(&self, entry: &LogEntry) {
        use web_sys::console;
        let line = wasm_bindgen::JsValue::from_str(&entry.format_line());
        match entry.level {
            LogLevel::Error => console::error_1(&line),
            LogLevel::Warn => console::warn_1(&line),
            LogLevel::Info => console::info_1(&line),
            LogLevel::Debug | LogLevel::Trace => console::debug_1(&line),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn write(&self, entry: &LogEntry) {
        eprintln!("{}", entry.format_line());
    }
}

/// In-memory log buffer with bounded size (ring buffer)
#[derive(Clone)]
pub struct LogBuffer {
    entries: Arc<Mutex<VecDeque<LogEntry>>>,
    capacity: usize,
}

impl LogBuffer {
    /// Create a buffer holding at most `capacity` entries
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    /// Add a log entry to the buffer
    /// If the buffer is full, removes the oldest entry
    pub fn add(&self, entry: LogEntry) {
        if let Ok(mut entries) = self.entries.lock() {
            if entries.len() >= self.capacity {
                entries.pop_front();
            }
            entries.push_back(entry);
        }
    }

    /// Get all log entries (most recent last)
    pub fn get_all(&self) -> Vec<LogEntry> {
        self.entries
            .lock()
            .map(|entries| entries.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Buffered entries as newline-separated lines
    pub fn dump(&self) -> String {
        self.get_all()
            .iter()
            .map(LogEntry::format_line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new(LoggingConfig::default().buffer_size)
    }
}

/// Tracing layer that records events to a buffer and a sink
pub struct ConsoleLayer {
    buffer: LogBuffer,
    sink: Box<dyn LogSink>,
}

impl ConsoleLayer {
    pub fn new(buffer: LogBuffer, sink: impl LogSink) -> Self {
        Self {
            buffer,
            sink: Box::new(sink),
        }
    }
}

impl<S> Layer<S> for ConsoleLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let entry = LogEntry {
            timestamp: Utc::now(),
            level: LogLevel::from(metadata.level()),
            target: metadata.target().to_string(),
            message: visitor.message,
            fields: visitor.fields,
        };

        self.sink.write(&entry);
        self.buffer.add(entry);
    }

    fn enabled(&self, _metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        // Filtering happens at the EnvFilter layer
        true
    }
}

/// Visitor splitting the message from the other fields of an event
#[derive(Default)]
struct FieldVisitor {
    message: String,
    fields: Vec<(String, String)>,
}

impl tracing::field::Visit for FieldVisitor {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields
                .push((field.name().to_string(), value.to_string()));
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.fields
                .push((field.name().to_string(), format!("{:?}", value)));
        }
    }
}

/// Build the filter from config, falling back to `info` on a bad directive
fn build_filter(config: &LoggingConfig) -> (EnvFilter, Option<String>) {
    match EnvFilter::try_new(&config.filter) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new("info"), Some(e.to_string())),
    }
}

/// Install the global subscriber
///
/// Returns the shared buffer. Calling this twice keeps the first subscriber;
/// the second call's buffer simply stays empty.
pub fn init(config: &LoggingConfig) -> LogBuffer {
    let buffer = LogBuffer::new(config.buffer_size);
    let (filter, filter_error) = build_filter(config);

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(ConsoleLayer::new(buffer.clone(), ConsoleSink))
        .try_init()
        .is_ok();

    if !installed {
        tracing::debug!("Logging already initialized");
    }
    if let Some(e) = filter_error {
        tracing::warn!(directive = %config.filter, "Invalid log filter, using info: {}", e);
    }
    buffer
}
