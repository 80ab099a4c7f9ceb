use anyhow::{Context, Result};
use deluge_core::{EventKind, RawEvent};
use midly::{MetaMessage, MidiMessage, Smf, Timing, TrackEvent, TrackEventKind};
use std::path::Path;

use crate::error::ConvertError;

/// Note events of every track in a MIDI file, in file order
#[derive(Debug, Clone)]
pub struct MidiData {
    pub ticks_per_beat: u16,
    pub tracks: Vec<Vec<RawEvent>>,
}

impl MidiData {
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)
            .with_context(|| format!("Failed to read MIDI file: {}", path.display()))?;

        Self::from_bytes(&data)
            .with_context(|| format!("Failed to load MIDI file: {}", path.display()))
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let smf = Smf::parse(data).context("Failed to parse MIDI file")?;

        let ticks_per_beat = match smf.header.timing {
            Timing::Metrical(tpb) => tpb.as_int(),
            Timing::Timecode(fps, subframe) => {
                return Err(ConvertError::UnsupportedTiming {
                    fps: fps.as_f32(),
                    subframe,
                }
                .into());
            }
        };
        if ticks_per_beat == 0 {
            return Err(ConvertError::ZeroTicksPerBeat.into());
        }

        let tracks: Vec<Vec<RawEvent>> = smf.tracks.iter().map(|track| collect_events(track)).collect();

        log::debug!(
            "parsed {} tracks at {} ticks per beat",
            tracks.len(),
            ticks_per_beat
        );

        Ok(MidiData {
            ticks_per_beat,
            tracks,
        })
    }
}

/// Keep note on/off and track-name events. The delta of every skipped event
/// is carried into the next kept one so absolute times are unchanged.
fn collect_events(track: &[TrackEvent]) -> Vec<RawEvent> {
    let mut events = Vec::new();
    let mut delta: u32 = 0;

    for event in track {
        delta = delta.saturating_add(event.delta.as_int());

        let kind = match event.kind {
            TrackEventKind::Midi { message, .. } => match message {
                MidiMessage::NoteOn { key, vel } => EventKind::NoteOn {
                    pitch: key.as_int(),
                    velocity: vel.as_int(),
                },
                MidiMessage::NoteOff { key, .. } => EventKind::NoteOff { pitch: key.as_int() },
                _ => continue,
            },
            TrackEventKind::Meta(MetaMessage::TrackName(name)) => {
                EventKind::TrackName(clean_track_name(name))
            }
            _ => continue,
        };

        events.push(RawEvent::new(delta, kind));
        delta = 0;
    }

    events
}

/// Decode a track name, trimming NUL padding and surrounding whitespace.
/// Names that are not UTF-8 are read as Latin-1, like most older files use.
fn clean_track_name(raw: &[u8]) -> String {
    let decoded = match std::str::from_utf8(raw) {
        Ok(text) => text.to_string(),
        Err(_) => raw.iter().map(|&b| b as char).collect(),
    };

    decoded.trim_end_matches('\0').trim().to_string()
}
