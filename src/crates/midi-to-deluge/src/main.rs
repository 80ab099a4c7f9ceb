use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

use midi_to_deluge::convert_file_with;

const USAGE: &str = "Usage: midi-to-deluge <midi_file>";

#[derive(Parser, Debug)]
#[command(name = "midi-to-deluge")]
#[command(version, about = "Convert MIDI files to Deluge pattern files", long_about = None)]
struct Args {
    /// Path to the MIDI file. One `<name>_<track>.xml` is written per track
    /// into the current directory.
    midi_file: Option<PathBuf>,
}

/// Line printed once a pattern file has been written
fn generated_line(path: &Path) -> String {
    let name = path.file_name().unwrap_or(path.as_os_str());
    format!("Generated {}", Path::new(name).display())
}

fn main() -> Result<()> {
    env_logger::init(); // RUST_LOG=debug for per-track details on stderr

    let args = Args::parse();

    let Some(midi_path) = args.midi_file else {
        println!("{}", USAGE);
        return Ok(());
    };

    log::info!("Processing MIDI file: {}", midi_path.display());

    convert_file_with(&midi_path, Path::new("."), |path| {
        println!("{}", generated_line(path))
    })
}
