//! Rolling Logger
//!
//! A `tracing` layer that keeps the most recent log lines in a circular
//! buffer and mirrors each line to the browser console (stderr on the host).
//! `log` records are bridged in, so crates using the `log` macros show up too.

use std::collections::VecDeque;
use std::fmt::{self, Write as _};
use std::sync::{Mutex, OnceLock};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
pub use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::Layer;

/// Lines kept in memory
pub const DEFAULT_CAPACITY: usize = 500;

static BUFFER: OnceLock<Mutex<RingBuffer>> = OnceLock::new();

/// Fixed-capacity line buffer; the oldest line is dropped when full
#[derive(Debug, Clone)]
pub struct RingBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { lines: VecDeque::with_capacity(capacity), capacity }
    }

    pub fn push(&mut self, line: String) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// ========================
// Layer
// ========================

#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.record_debug(field, &value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        match field.name() {
            "message" => self.message = format!("{:?}", value),
            // Metadata added by the `log` bridge
            name if name.starts_with("log.") => {}
            name => {
                let _ = write!(self.fields, " {}={:?}", name, value);
            }
        }
    }
}

/// Format one event as `HH:MM:SS.mmm LEVEL target: message key=value`
fn format_line(level: &Level, target: &str, visitor: &LineVisitor) -> String {
    format!(
        "{} {:<5} {}: {}{}",
        chrono::Utc::now().format("%H:%M:%S%.3f"),
        level,
        target,
        visitor.message,
        visitor.fields
    )
}

#[cfg(target_arch = "wasm32")]
fn mirror(level: &Level, line: &str) {
    use wasm_bindgen::JsValue;

    let value = JsValue::from_str(line);
    match *level {
        Level::ERROR => web_sys::console::error_1(&value),
        Level::WARN => web_sys::console::warn_1(&value),
        Level::INFO => web_sys::console::info_1(&value),
        _ => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn mirror(_level: &Level, line: &str) {
    eprintln!("{}", line);
}

/// Layer writing every event into the shared buffer
pub struct RollingLayer {
    app_name: String,
}

impl<S: Subscriber> Layer<S> for RollingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);

        let metadata = event.metadata();
        let line = format_line(metadata.level(), metadata.target(), &visitor);
        mirror(metadata.level(), &format!("[{}] {}", self.app_name, line));

        if let Ok(mut buffer) = buffer().lock() {
            buffer.push(line);
        }
    }
}

fn buffer() -> &'static Mutex<RingBuffer> {
    BUFFER.get_or_init(|| Mutex::new(RingBuffer::new(DEFAULT_CAPACITY)))
}

/// Install the rolling layer as the global subscriber
///
/// Fails if a global subscriber or `log` logger is already set.
pub fn init_logger(app_name: &str, level: LevelFilter) -> Result<(), TryInitError> {
    let layer = RollingLayer { app_name: app_name.to_string() };
    tracing_subscriber::registry().with(layer.with_filter(level)).try_init()?;
    tracing::info!(target: "rolling_logger", "{} logger started (level {})", app_name, level);
    Ok(())
}

/// Most recent lines, oldest first
pub fn recent_lines() -> Vec<String> {
    buffer().lock().map(|b| b.lines()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_buffer_drops_oldest() {
        let mut buffer = RingBuffer::new(3);
        for i in 0..5 {
            buffer.push(format!("line {i}"));
        }
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.lines(), vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_zero_capacity_keeps_one_line() {
        let mut buffer = RingBuffer::new(0);
        buffer.push("a".into());
        buffer.push("b".into());
        assert_eq!(buffer.lines(), vec!["b"]);
    }

    #[test]
    fn test_layer_records_events() {
        let layer = RollingLayer { app_name: "test".into() };
        let subscriber = tracing_subscriber::registry().with(layer);
        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(target: "inventory", count = 3, "low stock items");
        });

        let lines = recent_lines();
        let line = lines.iter().find(|l| l.contains("low stock items")).expect("event captured");
        assert!(line.contains("WARN"));
        assert!(line.contains("inventory: low stock items count=3"));
    }
}
