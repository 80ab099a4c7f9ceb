use serde::{Deserialize, Serialize};

/// A sounding note, in 96ths of a beat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub pitch: u8,
    pub start: f64,
    /// `None` until the matching note-off has been seen
    pub duration: Option<f64>,
    pub velocity: u8,
}

impl Note {
    /// Create an open note (no duration yet)
    pub fn new(pitch: u8, start: f64, velocity: u8) -> Self {
        Note {
            pitch,
            start,
            duration: None,
            velocity,
        }
    }

    pub fn is_open(&self) -> bool {
        self.duration.is_none()
    }

    /// End time, treating an open note as zero length
    pub fn end(&self) -> f64 {
        self.start + self.duration.unwrap_or(0.0)
    }
}
