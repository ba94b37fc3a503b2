//! Editing session over one live canvas.
//!
//! The session is the only place that touches the canvas. It captures the
//! canvas through the codec, feeds snapshots to the history store, and puts
//! restored snapshots back. Time is always supplied by the caller as epoch
//! milliseconds, so the debounce timer can be driven deterministically.

use std::collections::HashMap;
use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use tracing::{debug, trace};
use crate::codec::{self, Captured, Materialized, SkippedElement};
use crate::element::{Background, CanvasState, DesignDocument, DesignElement};
use crate::error::{DesignError, Result};
use crate::history::{HistoryConfig, HistoryStore};
use crate::image_source;
use crate::objects::{LiveObject, LiveObjectDescriptor};
use crate::types::{ConvertOptions, Frame};

/// The canvas owner. The session reads its size and objects and hands it
/// descriptors; it never manages the canvas lifecycle.
pub trait CanvasChrome {
    fn frame(&self) -> Frame;
    /// Every object in z-order, chrome included.
    fn objects(&self) -> Vec<LiveObject>;
    fn background(&self) -> Option<Background> {
        None
    }
    /// Replaces the design objects, leaving chrome in place.
    fn replace_design_objects(&mut self, descriptors: Vec<LiveObjectDescriptor>);
    /// Swaps the design object at `slot`. Returns false if there is none.
    fn patch_object(&mut self, slot: usize, descriptor: LiveObjectDescriptor) -> bool;
}

#[derive(Clone, Debug, Default)]
pub struct MemoryCanvas {
    pub frame: Frame,
    pub background: Option<Background>,
    chrome: Vec<LiveObject>,
    design: Vec<LiveObjectDescriptor>,
}

impl MemoryCanvas {
    pub fn new(frame: Frame) -> Self {
        MemoryCanvas { frame, ..Default::default() }
    }

    /// Loads objects as the editor reports them, sorting out chrome.
    pub fn set_objects(&mut self, objects: Vec<LiveObject>) {
        let (chrome, design): (Vec<_>, Vec<_>) = objects.into_iter().partition(|o| o.is_chrome());
        self.chrome = chrome;
        self.design = design.into_iter().map(LiveObjectDescriptor::new).collect();
    }

    pub fn add_object(&mut self, object: LiveObject) {
        if object.is_chrome() {
            self.chrome.push(object);
        } else {
            self.design.push(LiveObjectDescriptor::new(object));
        }
    }

    pub fn object_mut(&mut self, slot: usize) -> Option<&mut LiveObject> {
        self.design.get_mut(slot).map(|d| &mut d.object)
    }

    pub fn chrome(&self) -> &[LiveObject] {
        &self.chrome
    }

    pub fn descriptors(&self) -> &[LiveObjectDescriptor] {
        &self.design
    }
}

impl CanvasChrome for MemoryCanvas {
    fn frame(&self) -> Frame {
        self.frame
    }

    fn objects(&self) -> Vec<LiveObject> {
        self.chrome.iter().cloned().chain(self.design.iter().map(|d| d.object.clone())).collect()
    }

    fn background(&self) -> Option<Background> {
        self.background.clone()
    }

    fn replace_design_objects(&mut self, descriptors: Vec<LiveObjectDescriptor>) {
        self.design = descriptors;
    }

    fn patch_object(&mut self, slot: usize, descriptor: LiveObjectDescriptor) -> bool {
        match self.design.get_mut(slot) {
            Some(existing) => {
                *existing = descriptor;
                true
            }
            None => false,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionConfig {
    #[serde(default)]
    pub history: HistoryConfig,
    /// Registration used in both codec directions.
    #[serde(default)]
    pub registration: ConvertOptions,
}

#[derive(Clone, Debug, PartialEq)]
struct PendingEdit {
    label: String,
    last_edit_ms: u64,
    due_ms: u64,
}

#[derive(Clone, Debug)]
struct PendingImage {
    generation: u64,
    slot: usize,
    descriptor: LiveObjectDescriptor,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recorded {
    pub sequence_id: u64,
    pub skipped: Vec<SkippedElement>,
}

pub struct CanvasSession<C: CanvasChrome> {
    canvas: C,
    config: SessionConfig,
    history: HistoryStore,
    pending_edit: Option<PendingEdit>,
    pending_images: HashMap<u64, PendingImage>,
    generation: u64,
    next_ticket: u64,
    torn_down: bool,
}

fn timestamp(now_ms: u64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(now_ms as i64).unwrap_or_default()
}

impl<C: CanvasChrome> CanvasSession<C> {
    pub fn new(canvas: C) -> Self {
        Self::with_config(canvas, SessionConfig::default())
    }

    pub fn with_config(canvas: C, config: SessionConfig) -> Self {
        CanvasSession {
            canvas,
            config,
            history: HistoryStore::new(config.history.depth),
            pending_edit: None,
            pending_images: HashMap::new(),
            generation: 0,
            next_ticket: 1,
            torn_down: false,
        }
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn has_pending_edit(&self) -> bool {
        self.pending_edit.is_some()
    }

    pub fn pending_image_count(&self) -> usize {
        self.pending_images.len()
    }

    /// Serializes the design objects currently on the canvas.
    pub fn capture(&self) -> Captured {
        codec::to_records(&self.canvas.objects(), self.canvas.frame(), &self.config.registration)
    }

    pub fn capture_state(&self) -> (CanvasState, Vec<SkippedElement>) {
        let captured = self.capture();
        let state = CanvasState { elements: captured.elements, background: self.canvas.background() };
        (state, captured.skipped)
    }

    pub fn export_document(&self, design_id: &str) -> (DesignDocument, Vec<SkippedElement>) {
        let (state, skipped) = self.capture_state();
        (DesignDocument::from_state(design_id, state), skipped)
    }

    /// Puts a saved design on the canvas and starts a fresh history with it.
    pub fn load(&mut self, records: &[DesignElement], now_ms: u64) -> Materialized {
        let entries: Vec<Result<DesignElement>> = records.iter().cloned().map(Ok).collect();
        self.load_decoded(&entries, now_ms)
    }

    /// Like [`Self::load`] for records decoded one at a time; decode failures
    /// show up as skipped entries.
    pub fn load_decoded(&mut self, entries: &[Result<DesignElement>], now_ms: u64) -> Materialized {
        if self.torn_down {
            return Materialized::default();
        }
        let materialized = self.begin_materialize(|frame, opts, ticket| codec::to_live_objects_decoded(entries, frame, opts, ticket));
        self.pending_edit = None;
        self.history.clear();
        self.record_now("Load design", now_ms);
        materialized
    }

    /// Signals an edit. The snapshot is taken once edits stop for the
    /// debounce window.
    pub fn notify_edit(&mut self, label: &str, now_ms: u64) {
        if self.torn_down {
            return;
        }
        trace!("edit '{}' at {}", label, now_ms);
        self.pending_edit = Some(PendingEdit {
            label: label.to_string(),
            last_edit_ms: now_ms,
            due_ms: now_ms + self.config.history.debounce_ms,
        });
    }

    /// Records the pending edit if its window has elapsed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let due = self.pending_edit.as_ref().map(|p| p.due_ms);
        match due {
            Some(due_ms) if now_ms >= due_ms => self.flush_pending().is_some(),
            _ => false,
        }
    }

    /// Records the pending edit immediately, stamped with its last edit time.
    pub fn flush_pending(&mut self) -> Option<Recorded> {
        let pending = self.pending_edit.take()?;
        debug!("flushing pending edit '{}'", pending.label);
        self.record_now(&pending.label, pending.last_edit_ms)
    }

    /// Captures the canvas into a new snapshot right away.
    pub fn record_now(&mut self, label: &str, now_ms: u64) -> Option<Recorded> {
        if self.torn_down {
            return None;
        }
        let (state, skipped) = self.capture_state();
        let snapshot = self.history.push(state, label, timestamp(now_ms));
        Some(Recorded { sequence_id: snapshot.sequence_id, skipped })
    }

    /// Restores the previous snapshot. Pending edits are recorded first so
    /// undo always steps back over them.
    pub fn undo(&mut self) -> Option<Materialized> {
        if self.torn_down {
            return None;
        }
        self.flush_pending();
        let state = self.history.undo()?.full_canvas_state.clone();
        Some(self.apply_state(&state))
    }

    pub fn redo(&mut self) -> Option<Materialized> {
        if self.torn_down {
            return None;
        }
        self.flush_pending();
        let state = self.history.redo()?.full_canvas_state.clone();
        Some(self.apply_state(&state))
    }

    fn apply_state(&mut self, state: &CanvasState) -> Materialized {
        self.begin_materialize(|frame, opts, ticket| codec::to_live_objects(&state.elements, frame, opts, ticket))
    }

    /// Starts a new materialization generation, so that image results for
    /// the objects being replaced are ignored.
    fn begin_materialize<F>(&mut self, convert: F) -> Materialized
    where
        F: FnOnce(Frame, &ConvertOptions, &mut u64) -> Materialized,
    {
        self.generation += 1;
        self.pending_images.clear();

        let materialized = convert(self.canvas.frame(), &self.config.registration, &mut self.next_ticket);
        for request in &materialized.pending_images {
            if let Some(descriptor) = materialized.descriptors.get(request.slot) {
                self.pending_images.insert(request.ticket, PendingImage {
                    generation: self.generation,
                    slot: request.slot,
                    descriptor: descriptor.clone(),
                });
            }
        }
        self.canvas.replace_design_objects(materialized.descriptors.clone());
        materialized
    }

    /// Host finished fetching an image source.
    pub fn complete_image(&mut self, ticket: u64, bytes: &[u8]) -> bool {
        self.settle(ticket, image_source::probe(bytes))
    }

    /// Host could not fetch an image source.
    pub fn fail_image(&mut self, ticket: u64, reason: &str) -> bool {
        self.settle(ticket, Err(DesignError::ImageResolutionFailed(reason.to_string())))
    }

    fn settle(&mut self, ticket: u64, outcome: Result<(u32, u32)>) -> bool {
        let pending = match self.pending_images.remove(&ticket) {
            Some(p) if !self.torn_down && p.generation == self.generation => p,
            _ => {
                debug!("discarding late image result for ticket {}", ticket);
                return false;
            }
        };
        let descriptor = codec::settle_image(&pending.descriptor, outcome);
        self.canvas.patch_object(pending.slot, descriptor)
    }

    /// Detaches from the canvas. Pending timers and image loads are dropped.
    pub fn teardown(&mut self) {
        debug!("tearing down session with {} pending images", self.pending_images.len());
        self.torn_down = true;
        self.generation += 1;
        self.pending_images.clear();
        self.pending_edit = None;
    }
}
