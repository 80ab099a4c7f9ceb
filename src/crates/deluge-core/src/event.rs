//! Track events as handed over by a MIDI parser, before and after time normalization.

use serde::{Deserialize, Serialize};

/// The part of a MIDI track event the converter cares about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    /// Key pressed. A velocity of 0 releases the key instead.
    NoteOn { pitch: u8, velocity: u8 },

    /// Key released
    NoteOff { pitch: u8 },

    /// Track name meta event
    TrackName(String),
}

impl EventKind {
    /// Pitch opened by this event, with its velocity
    pub fn opened_note(&self) -> Option<(u8, u8)> {
        match *self {
            EventKind::NoteOn { pitch, velocity } if velocity > 0 => Some((pitch, velocity)),
            _ => None,
        }
    }

    /// Pitch closed by this event (note-off, or note-on with velocity 0)
    pub fn released_pitch(&self) -> Option<u8> {
        match *self {
            EventKind::NoteOff { pitch } => Some(pitch),
            EventKind::NoteOn { pitch, velocity: 0 } => Some(pitch),
            _ => None,
        }
    }
}

/// An event with its delta time in source ticks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEvent {
    pub delta: u32,
    pub kind: EventKind,
}

impl RawEvent {
    pub fn new(delta: u32, kind: EventKind) -> Self {
        RawEvent { delta, kind }
    }

    pub fn note_on(delta: u32, pitch: u8, velocity: u8) -> Self {
        Self::new(delta, EventKind::NoteOn { pitch, velocity })
    }

    pub fn note_off(delta: u32, pitch: u8) -> Self {
        Self::new(delta, EventKind::NoteOff { pitch })
    }

    pub fn track_name(delta: u32, name: impl Into<String>) -> Self {
        Self::new(delta, EventKind::TrackName(name.into()))
    }
}

/// An event placed at an absolute time, in 96ths of a beat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimedEvent {
    pub time: f64,
    pub kind: EventKind,
}
