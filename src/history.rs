//! Bounded snapshot history with a linear undo/redo cursor.
//!
//! The store never touches a canvas. The session serializes the canvas,
//! pushes the state here, and applies whatever snapshot undo/redo return.

use std::collections::VecDeque;
use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use tracing::debug;
use crate::element::CanvasState;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryConfig {
    /// Maximum number of retained snapshots.
    pub depth: usize,
    /// Quiet period that closes a burst of edits into one snapshot.
    pub debounce_ms: u64,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        HistoryConfig { depth: 50, debounce_ms: 300 }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistorySnapshot {
    pub sequence_id: u64,
    pub full_canvas_state: CanvasState,
    pub label: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryPosition {
    Empty,
    At(usize),
}

#[derive(Debug, Clone)]
pub struct HistoryStore {
    snapshots: VecDeque<HistorySnapshot>,
    cursor: Option<usize>,
    depth: usize,
    next_sequence: u64,
}

impl HistoryStore {
    pub fn new(depth: usize) -> Self {
        HistoryStore {
            snapshots: VecDeque::new(),
            cursor: None,
            depth: depth.max(1),
            next_sequence: 1,
        }
    }

    /// Appends a snapshot after the cursor, discarding the redo branch and
    /// evicting the oldest entry once the depth bound is exceeded.
    pub fn push(&mut self, state: CanvasState, label: &str, timestamp: DateTime<Utc>) -> &HistorySnapshot {
        if let Some(i) = self.cursor {
            let discarded = self.snapshots.len() - (i + 1);
            if discarded > 0 {
                debug!("discarding {} redo snapshots", discarded);
                self.snapshots.truncate(i + 1);
            }
        }

        let sequence_id = self.snapshots.back().map(|s| s.sequence_id + 1).unwrap_or(self.next_sequence);
        self.next_sequence = sequence_id + 1;
        self.snapshots.push_back(HistorySnapshot {
            sequence_id,
            full_canvas_state: state,
            label: label.to_string(),
            timestamp,
        });

        while self.snapshots.len() > self.depth {
            if let Some(evicted) = self.snapshots.pop_front() {
                debug!("history full, evicting snapshot {} ({})", evicted.sequence_id, evicted.label);
            }
        }

        let last = self.snapshots.len() - 1;
        self.cursor = Some(last);
        &self.snapshots[last]
    }

    /// Steps back one snapshot; a no-op on an empty store or at the oldest entry.
    pub fn undo(&mut self) -> Option<&HistorySnapshot> {
        match self.cursor {
            Some(i) if i > 0 => {
                self.cursor = Some(i - 1);
                self.snapshots.get(i - 1)
            }
            _ => None,
        }
    }

    /// Steps forward one snapshot; a no-op at the newest entry.
    pub fn redo(&mut self) -> Option<&HistorySnapshot> {
        match self.cursor {
            Some(i) if i + 1 < self.snapshots.len() => {
                self.cursor = Some(i + 1);
                self.snapshots.get(i + 1)
            }
            _ => None,
        }
    }

    pub fn current(&self) -> Option<&HistorySnapshot> {
        self.cursor.and_then(|i| self.snapshots.get(i))
    }

    pub fn position(&self) -> HistoryPosition {
        match self.cursor {
            Some(i) => HistoryPosition::At(i),
            None => HistoryPosition::Empty,
        }
    }

    pub fn can_undo(&self) -> bool {
        matches!(self.cursor, Some(i) if i > 0)
    }

    pub fn can_redo(&self) -> bool {
        matches!(self.cursor, Some(i) if i + 1 < self.snapshots.len())
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn snapshots(&self) -> impl Iterator<Item = &HistorySnapshot> {
        self.snapshots.iter()
    }

    pub fn labels(&self) -> Vec<String> {
        self.snapshots.iter().map(|s| s.label.clone()).collect()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.cursor = None;
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        HistoryStore::new(HistoryConfig::default().depth)
    }
}
