//! Destinations for progress snapshots.

use crate::snapshot::ProgressSnapshot;
use std::sync::{Arc, Mutex};

/// Receives every snapshot a reporter takes.
pub trait ProgressSink: Send + Sync {
    fn emit(&self, snapshot: &ProgressSnapshot);
}

/// Writes snapshots as `info` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl ProgressSink for TracingSink {
    fn emit(&self, snapshot: &ProgressSnapshot) {
        tracing::info!("{}", snapshot);
    }
}

/// Keeps rendered snapshot lines in memory.
///
/// Useful when embedding a workload and inspecting its progress output
/// afterwards.
#[derive(Debug, Default, Clone)]
pub struct CollectingSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines emitted so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    /// Number of lines emitted so far.
    pub fn len(&self) -> usize {
        self.lines.lock().map(|lines| lines.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ProgressSink for CollectingSink {
    fn emit(&self, snapshot: &ProgressSnapshot) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(snapshot.to_string());
        }
    }
}
