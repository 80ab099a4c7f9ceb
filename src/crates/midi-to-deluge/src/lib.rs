//! MIDI to Deluge pattern converter library
//!
//! Reads a Standard MIDI File and writes one Deluge pattern XML file per track.

pub mod error;
pub mod midi;
pub mod output;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use error::ConvertError;
pub use midi::MidiData;
pub use output::{output_file_name, write_pattern};

/// Convert every track of `midi_path` and write the patterns into `out_dir`.
///
/// Returns the written files in track order. The first failure aborts the
/// batch; files written before it are left in place.
pub fn convert_file(midi_path: &Path, out_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    convert_file_with(midi_path, out_dir, |path| written.push(path.to_path_buf()))?;
    Ok(written)
}

/// Like [`convert_file`], calling `on_written` right after each file is written
pub fn convert_file_with<F>(midi_path: &Path, out_dir: &Path, mut on_written: F) -> Result<()>
where
    F: FnMut(&Path),
{
    let midi_data = MidiData::from_file(midi_path)?;
    let stem = midi_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());

    for (idx, events) in midi_data.tracks.iter().enumerate() {
        let pattern = deluge_core::convert_track(midi_data.ticks_per_beat, idx, events);
        let path = write_pattern(out_dir, &stem, &pattern)?;
        on_written(&path);
    }

    Ok(())
}
