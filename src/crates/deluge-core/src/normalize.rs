//! Rescale delta-timed events onto the Deluge time base (96 ticks per beat).

use crate::event::{EventKind, RawEvent, TimedEvent};

/// Ticks per beat of the pattern format
pub const TARGET_TICKS_PER_BEAT: u32 = 96;

/// Multiplier from source ticks to target ticks
pub fn scale_factor(ticks_per_beat: u16) -> f64 {
    TARGET_TICKS_PER_BEAT as f64 / ticks_per_beat as f64
}

/// Accumulate delta times into absolute times expressed in 96ths of a beat.
///
/// `ticks_per_beat` must be positive.
pub fn normalize(ticks_per_beat: u16, events: &[RawEvent]) -> Vec<TimedEvent> {
    let scale = scale_factor(ticks_per_beat);
    let mut time = 0.0;

    events
        .iter()
        .map(|event| {
            time += event.delta as f64 * scale;
            TimedEvent {
                time,
                kind: event.kind.clone(),
            }
        })
        .collect()
}

/// Name of the track: the first non-empty track-name event, or `Track<N>`
/// with a 1-based index.
pub fn track_name(track_index: usize, events: &[TimedEvent]) -> String {
    events
        .iter()
        .find_map(|event| match &event.kind {
            EventKind::TrackName(name) if !name.is_empty() => Some(name.clone()),
            _ => None,
        })
        .unwrap_or_else(|| format!("Track{}", track_index + 1))
}
