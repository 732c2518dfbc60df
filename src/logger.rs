//! Application event log, injected through `AppState`.

use std::sync::Mutex;
use tracing::Level;

/// Fire-and-forget message sink.
pub trait Logger: Send + Sync {
    fn record(&self, level: Level, message: &str);
}

/// Forwards to `tracing` events under the `bookmarks` target.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn record(&self, level: Level, message: &str) {
        match level {
            Level::ERROR => tracing::error!(target: "bookmarks", "{}", message),
            Level::WARN => tracing::warn!(target: "bookmarks", "{}", message),
            Level::INFO => tracing::info!(target: "bookmarks", "{}", message),
            Level::DEBUG => tracing::debug!(target: "bookmarks", "{}", message),
            _ => tracing::trace!(target: "bookmarks", "{}", message),
        }
    }
}

/// Keeps every entry in memory.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    entries: Mutex<Vec<(Level, String)>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(Level, String)> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }
}

impl Logger for MemoryLogger {
    fn record(&self, level: Level, message: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push((level, message.to_string()));
        }
    }
}
