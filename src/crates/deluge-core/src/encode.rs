//! Serialize a [`Pattern`] into the Deluge pattern XML.
//!
//! Each note is a fixed-width hex record: start (8 digits), length (8 digits),
//! velocity (2 digits) and [`NOTE_DATA_SUFFIX`]. A row stores its records back
//! to back in the `noteDataWithSplitProb` attribute.

use crate::note::Note;
use crate::pattern::{NoteRow, Pattern};

pub const PATTERN_VERSION: &str = "0.0.1";

pub const SCALE_TYPE: u8 = 1;

/// Trailing bytes of every note record. Their meaning is not known; the
/// Deluge writes this value for plain notes.
pub const NOTE_DATA_SUFFIX: &str = "4014000000";

/// Length written for notes that were never closed
pub const UNSET_DURATION: u32 = 1;

/// Hex characters per encoded note
pub const NOTE_RECORD_LEN: usize = 8 + 8 + 2 + NOTE_DATA_SUFFIX.len();

/// Encode one note as a hex record. Times are truncated to whole ticks.
pub fn encode_note(note: &Note) -> String {
    let start = note.start as u32;
    let duration = note.duration.map_or(UNSET_DURATION, |d| d as u32);
    format!(
        "{:08X}{:08X}{:02X}{}",
        start, duration, note.velocity, NOTE_DATA_SUFFIX
    )
}

/// All notes of a row, concatenated
pub fn encode_row(row: &NoteRow) -> String {
    row.notes.iter().map(encode_note).collect()
}

impl Pattern {
    /// Render the pattern file contents
    pub fn to_xml(&self) -> String {
        let mut output = Vec::new();

        output.push(r#"<?xml version="1.0" encoding="UTF-8"?>"#.to_string());
        output.push("<pattern>".to_string());
        output.push(format!(
            r#"  <attributes patternVersion="{}" screenWidth="{}" scaleType="{}" yNoteOfBottomRow="{}"/>"#,
            PATTERN_VERSION, self.screen_width, SCALE_TYPE, self.lowest_pitch
        ));
        output.push("  <noteRows>".to_string());

        for row in &self.rows {
            output.push(format!(
                r#"    <noteRow numNotes="{}" yNote="{}" yDisplay="{}" noteDataWithSplitProb="0x{}" />"#,
                row.notes.len(),
                row.pitch,
                row.y_display,
                encode_row(row)
            ));
        }

        output.push("  </noteRows>".to_string());
        output.push("</pattern>".to_string());

        output.join("\n")
    }
}
