//! Transcript file save/load.

use crate::transcript::Transcript;
use std::path::Path;

/// Load a transcript from a JSON file.
///
/// `is_busy` is optional in the file and defaults to false.
pub fn load_transcript(path: &Path) -> Result<Transcript, String> {
    let json = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    serde_json::from_str(&json).map_err(|e| e.to_string())
}

/// Save a transcript as pretty-printed JSON.
pub fn save_transcript(path: &Path, transcript: &Transcript) -> Result<(), String> {
    let json = serde_json::to_string_pretty(transcript).map_err(|e| e.to_string())?;
    std::fs::write(path, json).map_err(|e| e.to_string())?;
    Ok(())
}
