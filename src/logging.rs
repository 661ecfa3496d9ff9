// Logging module - in-memory log capture for TUI display
//
// While the TUI owns the terminal, anything printed to stdout would tear
// through the alternate screen buffer. This module provides a tracing layer
// that captures log events into a bounded in-memory buffer instead; warnings
// collected there are replayed to stderr once the terminal is restored.

use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tracing::{Level, Metadata, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;

/// Maximum number of log entries to keep in memory
const MAX_LOG_ENTRIES: usize = 1000;

/// A single log event captured from tracing
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    /// The tracing target (module path)
    pub target: String,
    pub message: String,
}

/// Bounded in-memory log buffer (ring buffer, oldest entries dropped)
#[derive(Clone)]
pub struct LogBuffer {
    entries: Arc<Mutex<VecDeque<LogEntry>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(VecDeque::with_capacity(MAX_LOG_ENTRIES))),
        }
    }

    /// Add a log entry, evicting the oldest one when full
    pub fn add(&self, entry: LogEntry) {
        let mut entries = self.entries.lock().unwrap();
        if entries.len() >= MAX_LOG_ENTRIES {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    /// All captured entries, oldest first
    #[allow(dead_code)]
    pub fn get_all(&self) -> Vec<LogEntry> {
        self.entries.lock().unwrap().iter().cloned().collect()
    }

    /// Entries at WARN or above, for the post-exit replay
    pub fn warnings(&self) -> Vec<LogEntry> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.level <= Level::WARN)
            .cloned()
            .collect()
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Tracing layer that captures events into a [`LogBuffer`]
pub struct TuiLogLayer {
    buffer: LogBuffer,
}

impl TuiLogLayer {
    pub fn new(buffer: LogBuffer) -> Self {
        Self { buffer }
    }
}

impl<S> Layer<S> for TuiLogLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        // Extract the message using a visitor
        let mut message = String::new();
        let mut visitor = MessageVisitor(&mut message);
        event.record(&mut visitor);

        self.buffer.add(LogEntry {
            timestamp: Utc::now(),
            level: *metadata.level(),
            target: metadata.target().to_string(),
            message,
        });
    }

    fn enabled(&self, _metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        // Level filtering happens at the subscriber level
        true
    }
}

/// Visitor that pulls the `message` field out of a tracing event
struct MessageVisitor<'a>(&'a mut String);

impl tracing::field::Visit for MessageVisitor<'_> {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            *self.0 = format!("{:?}", value);
            // Strip the quotes that Debug adds around strings
            if self.0.starts_with('"') && self.0.ends_with('"') {
                *self.0 = self.0[1..self.0.len() - 1].to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(level: Level, message: &str) -> LogEntry {
        LogEntry {
            timestamp: Utc::now(),
            level,
            target: "runbook::test".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn buffer_keeps_insertion_order() {
        let buffer = LogBuffer::new();
        buffer.add(entry(Level::INFO, "first"));
        buffer.add(entry(Level::INFO, "second"));
        let all = buffer.get_all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].message, "first");
        assert_eq!(all[1].message, "second");
    }

    #[test]
    fn buffer_evicts_oldest_when_full() {
        let buffer = LogBuffer::new();
        for i in 0..MAX_LOG_ENTRIES + 5 {
            buffer.add(entry(Level::INFO, &format!("msg {i}")));
        }
        let all = buffer.get_all();
        assert_eq!(all.len(), MAX_LOG_ENTRIES);
        assert_eq!(all[0].message, "msg 5");
    }

    #[test]
    fn warnings_filters_out_info_and_below() {
        let buffer = LogBuffer::new();
        buffer.add(entry(Level::INFO, "fine"));
        buffer.add(entry(Level::WARN, "copy failed"));
        buffer.add(entry(Level::ERROR, "boom"));
        buffer.add(entry(Level::DEBUG, "noise"));
        let warnings = buffer.warnings();
        assert_eq!(warnings.len(), 2);
        assert!(warnings.iter().all(|e| e.level <= Level::WARN));
    }
}
