//! Pair note-on and note-off events into notes.
//!
//! A note-off closes the most recently opened note of the same pitch that is
//! still open. Retriggered notes therefore nest: two overlapping note-ons
//! followed by two note-offs close the second note first.

use std::collections::HashMap;

use crate::event::TimedEvent;
use crate::note::Note;

/// Build the note list of a track from its normalized events.
///
/// Notes are returned in the order their note-on was seen. Note-offs without
/// an open note are dropped, and notes never closed keep `duration == None`.
pub fn match_notes(events: &[TimedEvent]) -> Vec<Note> {
    let mut notes: Vec<Note> = Vec::new();
    // Indices into `notes` of the open notes, per pitch
    let mut open: HashMap<u8, Vec<usize>> = HashMap::new();

    for event in events {
        if let Some((pitch, velocity)) = event.kind.opened_note() {
            open.entry(pitch).or_default().push(notes.len());
            notes.push(Note::new(pitch, event.time, velocity));
        } else if let Some(pitch) = event.kind.released_pitch() {
            match open.get_mut(&pitch).and_then(|stack| stack.pop()) {
                Some(idx) => {
                    let note = &mut notes[idx];
                    note.duration = Some(event.time - note.start);
                }
                None => {
                    log::trace!("dropping unmatched note-off for pitch {} at {}", pitch, event.time);
                }
            }
        }
    }

    notes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::RawEvent;
    use crate::normalize::normalize;

    fn matched(events: &[RawEvent]) -> Vec<Note> {
        match_notes(&normalize(96, events))
    }

    #[test]
    fn test_single_note() {
        let notes = matched(&[RawEvent::note_on(0, 60, 100), RawEvent::note_off(24, 60)]);
        assert_eq!(
            notes,
            vec![Note {
                pitch: 60,
                start: 0.0,
                duration: Some(24.0),
                velocity: 100,
            }]
        );
    }

    #[test]
    fn test_overlapping_same_pitch_closes_latest_first() {
        let notes = matched(&[
            RawEvent::note_on(0, 60, 100),
            RawEvent::note_on(10, 60, 80),
            RawEvent::note_off(10, 60),
            RawEvent::note_off(10, 60),
        ]);

        assert_eq!(notes.len(), 2);
        // First note-on (t=0) closed by the second note-off (t=30)
        assert_eq!(notes[0].start, 0.0);
        assert_eq!(notes[0].duration, Some(30.0));
        // Second note-on (t=10) closed by the first note-off (t=20)
        assert_eq!(notes[1].start, 10.0);
        assert_eq!(notes[1].duration, Some(10.0));
    }

    #[test]
    fn test_zero_velocity_note_on_closes() {
        let notes = matched(&[RawEvent::note_on(0, 64, 90), RawEvent::note_on(48, 64, 0)]);
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].duration, Some(48.0));
    }

    #[test]
    fn test_unmatched_note_off_is_dropped() {
        let notes = matched(&[
            RawEvent::note_off(0, 60),
            RawEvent::note_on(12, 62, 100),
            RawEvent::note_off(12, 60),
            RawEvent::note_off(12, 62),
        ]);
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].pitch, 62);
        assert_eq!(notes[0].duration, Some(24.0));
    }

    #[test]
    fn test_unclosed_note_stays_open() {
        let notes = matched(&[
            RawEvent::note_on(0, 60, 100),
            RawEvent::note_on(12, 67, 100),
            RawEvent::note_off(12, 67),
        ]);
        assert!(notes[0].is_open());
        assert_eq!(notes[1].duration, Some(12.0));
    }

    #[test]
    fn test_pitches_do_not_interfere() {
        let notes = matched(&[
            RawEvent::note_on(0, 60, 100),
            RawEvent::note_on(0, 64, 100),
            RawEvent::note_off(24, 60),
            RawEvent::note_off(24, 64),
        ]);
        assert_eq!(notes[0].duration, Some(24.0));
        assert_eq!(notes[1].duration, Some(48.0));
    }

    #[test]
    fn test_closed_note_is_not_reopened() {
        let notes = matched(&[
            RawEvent::note_on(0, 60, 100),
            RawEvent::note_off(12, 60),
            RawEvent::note_off(12, 60),
        ]);
        assert_eq!(notes[0].duration, Some(12.0));
    }
}
