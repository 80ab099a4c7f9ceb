use anyhow::{Context, Result};
use deluge_core::Pattern;
use std::fs;
use std::path::{Path, PathBuf};

/// `<stem>_<track name>.xml`, with path separators in the name replaced
pub fn output_file_name(stem: &str, track_name: &str) -> String {
    let safe_name: String = track_name
        .chars()
        .map(|c| match c {
            '/' | '\\' | '\0' => '_',
            c => c,
        })
        .collect();

    format!("{}_{}.xml", stem, safe_name)
}

/// Write the pattern XML into `dir` and return the path written
pub fn write_pattern(dir: &Path, stem: &str, pattern: &Pattern) -> Result<PathBuf> {
    let path = dir.join(output_file_name(stem, &pattern.name));

    fs::write(&path, pattern.to_xml())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    log::debug!(
        "wrote {} ({} rows, {} notes)",
        path.display(),
        pattern.rows.len(),
        pattern.note_count()
    );

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_file_name() {
        assert_eq!(output_file_name("song", "Bass"), "song_Bass.xml");
        assert_eq!(output_file_name("song", "Track3"), "song_Track3.xml");
    }

    #[test]
    fn test_separators_are_replaced() {
        assert_eq!(output_file_name("song", "Lead/Pad"), "song_Lead_Pad.xml");
        assert_eq!(output_file_name("song", r"a\b"), "song_a_b.xml");
    }

    #[test]
    fn test_spaces_are_kept() {
        assert_eq!(output_file_name("my song", "Grand Piano"), "my song_Grand Piano.xml");
    }

    #[test]
    fn test_write_into_missing_dir_fails() {
        let dir = std::env::temp_dir().join(format!("midi-to-deluge-missing-{}", std::process::id()));
        let pattern = Pattern::from_notes("Track1", Vec::new());

        let err = write_pattern(&dir.join("nope"), "song", &pattern).unwrap_err();
        assert!(err.to_string().starts_with("Failed to write"));
    }
}
