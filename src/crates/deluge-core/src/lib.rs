//! Conversion core for Deluge pattern files
//!
//! Turns the note events of one MIDI track into a [`Pattern`] in three steps:
//!
//! - **normalize**: delta ticks to absolute time at 96 ticks per beat
//! - **matcher**: note-on/note-off pairs to [`Note`]s
//! - **pattern** / **encode**: notes grouped by pitch and rendered as XML
//!
//! # Examples
//!
//! ```
//! use deluge_core::{convert_track, RawEvent};
//!
//! let events = vec![
//!     RawEvent::track_name(0, "Lead"),
//!     RawEvent::note_on(0, 60, 100),
//!     RawEvent::note_off(24, 60),
//! ];
//! let pattern = convert_track(96, 0, &events);
//!
//! assert_eq!(pattern.name, "Lead");
//! assert_eq!(pattern.screen_width, 48);
//! assert!(pattern.to_xml().contains(r#"yNote="60""#));
//! ```

pub mod encode;
pub mod event;
pub mod matcher;
pub mod normalize;
pub mod note;
pub mod pattern;

pub use encode::{encode_note, NOTE_DATA_SUFFIX};
pub use event::{EventKind, RawEvent, TimedEvent};
pub use matcher::match_notes;
pub use normalize::{normalize, track_name};
pub use note::Note;
pub use pattern::{NoteRow, Pattern};

/// Convert the events of one track into a pattern.
///
/// `track_index` is 0-based and only used to name unnamed tracks.
pub fn convert_track(ticks_per_beat: u16, track_index: usize, events: &[RawEvent]) -> Pattern {
    let timed = normalize(ticks_per_beat, events);
    let name = track_name(track_index, &timed);
    let notes = match_notes(&timed);

    log::debug!("track {} ({}): {} notes", track_index + 1, name, notes.len());

    Pattern::from_notes(name, notes)
}
