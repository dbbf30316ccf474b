//! Abstract input events and the bounded per-tick queue
//!
//! Hosts translate their device events (key codes, mouse, touch) into these
//! before pushing them; the simulation never sees raw device data.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Default number of events buffered between two ticks
pub const INPUT_QUEUE_CAPACITY: usize = 32;

/// Where a primary action came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputSource {
    /// Edge-triggered: one flap per key-down until the key is released
    Keyboard,
    /// Level-triggered: every press flaps (mouse, touch)
    Pointer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Primary action (flap / start / restart)
    Press(InputSource),
    /// Key-up or pointer-up; only re-arms keyboard flaps
    Release(InputSource),
}

impl InputEvent {
    pub fn key_down() -> Self {
        InputEvent::Press(InputSource::Keyboard)
    }

    pub fn key_up() -> Self {
        InputEvent::Release(InputSource::Keyboard)
    }

    pub fn tap() -> Self {
        InputEvent::Press(InputSource::Pointer)
    }
}

/// FIFO of events waiting for the next tick
#[derive(Debug, Clone)]
pub struct InputQueue {
    events: VecDeque<InputEvent>,
    capacity: usize,
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::with_capacity(INPUT_QUEUE_CAPACITY)
    }
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Queue an event. Returns false (and drops it) when the queue is full.
    ///
    /// Releases are never dropped: a full queue evicts its oldest press (or
    /// oldest event) instead, so a held key always gets its key-up.
    pub fn push(&mut self, event: InputEvent) -> bool {
        if self.events.len() >= self.capacity {
            let InputEvent::Release(_) = event else {
                log::warn!("Input queue full ({}), dropping {:?}", self.capacity, event);
                return false;
            };
            let victim = self
                .events
                .iter()
                .position(|e| matches!(e, InputEvent::Press(_)))
                .unwrap_or(0);
            let Some(evicted) = self.events.remove(victim) else {
                return false;
            };
            log::warn!("Input queue full ({}), evicting {:?}", self.capacity, evicted);
        }
        self.events.push_back(event);
        true
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Remove every queued event in arrival order
    pub fn drain(&mut self) -> Vec<InputEvent> {
        self.events.drain(..).collect()
    }
}
