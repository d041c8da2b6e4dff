//! Artifact sink - persists export artifacts to disk.

use crate::export::ExportArtifact;
use log::debug;
use std::path::{Path, PathBuf};

/// Write `artifact` into `dir` under its suggested filename.
///
/// Creates `dir` if it does not exist. Returns the path written.
pub fn save_artifact(dir: &Path, artifact: &ExportArtifact) -> Result<PathBuf, String> {
    std::fs::create_dir_all(dir).map_err(|e| e.to_string())?;
    let path = dir.join(artifact.suggested_filename);
    std::fs::write(&path, &artifact.content).map_err(|e| e.to_string())?;
    debug!(
        "[export] wrote {} ({} bytes, {})",
        path.to_string_lossy(),
        artifact.content.len(),
        artifact.mime_type
    );
    Ok(path)
}
