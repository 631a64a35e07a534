//! Log capture for tests that check what gets reported through `tracing`.

use std::io;
use std::sync::{Arc, Mutex};

use tracing::Level;

/// Shared buffer that a test subscriber writes formatted events into.
#[derive(Clone, Default)]
pub(crate) struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Run `f` with a subscriber that records every event at DEBUG or above
    /// into this buffer.
    pub(crate) fn capture<R>(&self, f: impl FnOnce() -> R) -> R {
        let logs = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || logs.clone())
            .with_ansi(false)
            .without_time()
            .with_max_level(Level::DEBUG)
            .finish();
        tracing::subscriber::with_default(subscriber, f)
    }

    pub(crate) fn contents(&self) -> String {
        let buf = self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Number of lines at `level` whose text contains `needle`.
    pub(crate) fn count(&self, level: Level, needle: &str) -> usize {
        let level = level.as_str();
        self.contents()
            .lines()
            .filter(|line| line.contains(level) && line.contains(needle))
            .count()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
