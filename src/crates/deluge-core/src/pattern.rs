//! Pattern geometry: note rows, lowest pitch and screen width.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::note::Note;

/// Narrowest display grid; wider grids are doublings of it
pub const BASE_SCREEN_WIDTH: u32 = 48;

/// Bottom row of a pattern without notes (middle C)
pub const FALLBACK_LOWEST_PITCH: u8 = 60;

/// All notes of one pitch, drawn as one lane
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteRow {
    pub pitch: u8,
    /// Row position relative to the lowest pitch of the pattern
    pub y_display: i32,
    /// Notes in the order they were opened
    pub notes: Vec<Note>,
}

/// One track, ready to be written as a pattern file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    pub name: String,
    pub screen_width: u32,
    pub lowest_pitch: u8,
    /// Ascending by pitch
    pub rows: Vec<NoteRow>,
}

impl Pattern {
    /// Group notes by pitch and compute the display geometry
    pub fn from_notes(name: impl Into<String>, notes: Vec<Note>) -> Self {
        let lowest_pitch = lowest_pitch(&notes);
        let screen_width = screen_width(last_note_end(&notes));

        let mut by_pitch: BTreeMap<u8, Vec<Note>> = BTreeMap::new();
        for note in notes {
            by_pitch.entry(note.pitch).or_default().push(note);
        }

        let rows = by_pitch
            .into_iter()
            .map(|(pitch, notes)| NoteRow {
                pitch,
                y_display: pitch as i32 - lowest_pitch as i32,
                notes,
            })
            .collect();

        Pattern {
            name: name.into(),
            screen_width,
            lowest_pitch,
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn note_count(&self) -> usize {
        self.rows.iter().map(|row| row.notes.len()).sum()
    }
}

/// Lowest pitch of the notes, or [`FALLBACK_LOWEST_PITCH`] when there are none
pub fn lowest_pitch(notes: &[Note]) -> u8 {
    notes
        .iter()
        .map(|note| note.pitch)
        .min()
        .unwrap_or(FALLBACK_LOWEST_PITCH)
}

/// Latest end time over all notes; open notes count as zero length
pub fn last_note_end(notes: &[Note]) -> f64 {
    notes.iter().map(Note::end).fold(0.0, f64::max)
}

/// Smallest doubling of [`BASE_SCREEN_WIDTH`] that covers `last_note_end`
pub fn screen_width(last_note_end: f64) -> u32 {
    let mut width = BASE_SCREEN_WIDTH;
    while (width as f64) < last_note_end {
        match width.checked_mul(2) {
            Some(doubled) => width = doubled,
            None => break,
        }
    }
    width
}
