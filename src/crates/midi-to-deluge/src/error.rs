use thiserror::Error;

/// MIDI files the converter cannot place on a beat grid
#[derive(Debug, Error, PartialEq)]
pub enum ConvertError {
    #[error("SMPTE timecode timing ({fps} fps, {subframe} ticks per frame) has no beat grid")]
    UnsupportedTiming { fps: f32, subframe: u8 },

    #[error("MIDI header declares 0 ticks per beat")]
    ZeroTicksPerBeat,
}
