//! Ordered page event queue with optional file persistence.
//!
//! Every UI source pushes here; `process` is the only consumer and feeds
//! events one at a time, in sequence order, through `apply_event`.

use crate::error::CoreError;
use crate::ids::EventId;
use crate::models::PageEvent;
use crate::state_builder::{self, PageState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QueuedEvent {
    pub seq: u64,
    pub id: EventId,
    pub recorded_at: DateTime<Utc>,
    pub event: PageEvent,
}

#[derive(Debug, Default)]
pub struct EventQueue {
    next_seq: u64,
    pending: VecDeque<QueuedEvent>,
    processed: Vec<QueuedEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue holding a previously saved log as pending events, oldest first.
    pub fn from_log(mut log: Vec<QueuedEvent>) -> Self {
        log.sort_by_key(|e| e.seq);
        let next_seq = log.last().map(|e| e.seq.saturating_add(1)).unwrap_or(0);
        Self {
            next_seq,
            pending: log.into(),
            processed: Vec::new(),
        }
    }

    /// Append an event; returns its sequence number.
    pub fn push(&mut self, event: PageEvent) -> u64 {
        let seq = self.next_seq;
        self.next_seq = seq.saturating_add(1);
        self.pending.push_back(QueuedEvent {
            seq,
            id: EventId::new(),
            recorded_at: Utc::now(),
            event,
        });
        seq
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drain all pending events in FIFO order into `current`.
    pub fn process(&mut self, current: &PageState) -> PageState {
        let mut state = current.clone();
        while let Some(queued) = self.pending.pop_front() {
            log::trace!("processing event #{} ({})", queued.seq, queued.id);
            state = state_builder::apply_event(&state, &queued.event);
            self.processed.push(queued);
        }
        state
    }

    /// Events already consumed by `process`, in processing order.
    pub fn processed(&self) -> &[QueuedEvent] {
        &self.processed
    }

    /// Hand over the processed log, leaving it empty. Callers that never
    /// save the log drain it after each `process`.
    pub fn take_processed(&mut self) -> Vec<QueuedEvent> {
        std::mem::take(&mut self.processed)
    }

    pub fn clear(&mut self) {
        self.pending.clear();
        self.processed.clear();
    }

    /// Write the processed log as pretty JSON.
    pub fn save_json(&self, path: &Path) -> Result<(), CoreError> {
        let json = serde_json::to_string_pretty(&self.processed)?;
        fs::write(path, json)?;
        log::debug!("saved {} events to {}", self.processed.len(), path.display());
        Ok(())
    }

    /// Read a log written by `save_json`.
    pub fn load_json(path: &Path) -> Result<Vec<QueuedEvent>, CoreError> {
        let raw = fs::read_to_string(path)?;
        let log: Vec<QueuedEvent> = serde_json::from_str(&raw)?;
        log::debug!("loaded {} events from {}", log.len(), path.display());
        Ok(log)
    }
}
