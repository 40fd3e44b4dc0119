//! Run events and the sink they are reported through.
//!
//! The fetcher and mirror emit `RunEvent`s; the CLI renders them. The core has
//! no rendering dependency. Sinks are called on the transfer thread, so they
//! must return quickly (hand off to a draw thread or rate-limit drawing).

use crate::extract::AssetCategory;
use std::path::PathBuf;
use std::sync::Mutex;
use url::Url;

/// Bytes transferred for one in-flight download.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferStats {
    /// Body bytes written so far.
    pub bytes_done: u64,
    /// Content-Length of the response, when the server sent one.
    pub total_bytes: Option<u64>,
    /// Seconds since the transfer started.
    pub elapsed_secs: f64,
}

impl TransferStats {
    /// Download rate in bytes per second (0 if elapsed is 0).
    pub fn bytes_per_sec(&self) -> f64 {
        if self.elapsed_secs <= 0.0 {
            return 0.0;
        }
        self.bytes_done as f64 / self.elapsed_secs
    }

    /// Fraction complete in [0.0, 1.0], or `None` without a Content-Length.
    pub fn fraction(&self) -> Option<f64> {
        match self.total_bytes {
            Some(0) => Some(1.0),
            Some(total) => Some((self.bytes_done as f64 / total as f64).min(1.0)),
            None => None,
        }
    }
}

/// Final tally of a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub root: PathBuf,
    pub assets_found: usize,
    pub assets_saved: usize,
    pub assets_failed: usize,
}

/// Observable milestones of a run.
#[derive(Debug, Clone)]
pub enum RunEvent {
    PageStarted { url: Url },
    PageSaved { path: PathBuf, bytes: u64 },
    AssetsDiscovered { stylesheets: usize, scripts: usize, images: usize },
    AssetStarted { category: AssetCategory, url: Url },
    /// Emitted once the response headers are in and the status is 200.
    AssetResponse { url: Url, total_bytes: Option<u64> },
    AssetProgress { url: Url, stats: TransferStats },
    AssetSaved { category: AssetCategory, url: Url, path: PathBuf, bytes: u64 },
    AssetFailed { category: AssetCategory, url: Url, reason: String },
    Finished(RunSummary),
}

/// Receiver of run events (console renderer, test recorder, ...).
pub trait EventSink {
    fn emit(&self, event: RunEvent);
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&self, _event: RunEvent) {}
}

/// Keeps every event; used by tests and for post-run inspection.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<RunEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<RunEvent> {
        self.events
            .lock()
            .map(|e| e.clone())
            .unwrap_or_default()
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: RunEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl EventSink for std::sync::mpsc::Sender<RunEvent> {
    fn emit(&self, event: RunEvent) {
        // Receiver gone means nobody is rendering; the run goes on.
        let _ = self.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_with_and_without_length() {
        let mut s = TransferStats {
            bytes_done: 50,
            total_bytes: Some(200),
            elapsed_secs: 2.0,
        };
        assert_eq!(s.fraction(), Some(0.25));
        assert_eq!(s.bytes_per_sec(), 25.0);
        s.total_bytes = None;
        assert_eq!(s.fraction(), None);
        s.total_bytes = Some(0);
        assert_eq!(s.fraction(), Some(1.0));
    }

    #[test]
    fn zero_elapsed_has_zero_rate() {
        let s = TransferStats {
            bytes_done: 10,
            total_bytes: None,
            elapsed_secs: 0.0,
        };
        assert_eq!(s.bytes_per_sec(), 0.0);
    }

    #[test]
    fn channel_sink_forwards_and_tolerates_closed_receiver() {
        let (tx, rx) = std::sync::mpsc::channel();
        tx.emit(RunEvent::Finished(RunSummary::default()));
        assert!(matches!(rx.recv().unwrap(), RunEvent::Finished(_)));
        drop(rx);
        tx.emit(RunEvent::Finished(RunSummary::default()));
    }
}
