//! Plain-text export.

use super::ExportArtifact;
use crate::transcript::Transcript;

/// Concatenate every segment's text in order, then trim the result.
///
/// Segments are joined with no separator; only the final concatenation is
/// trimmed, so whitespace between segments survives.
pub fn export_txt(transcript: Option<&Transcript>) -> ExportArtifact {
    let text: String = super::chunks(transcript)
        .iter()
        .map(|chunk| chunk.text.as_str())
        .collect();

    ExportArtifact {
        content: text.trim().to_string(),
        mime_type: "text/plain",
        suggested_filename: "transcript.txt",
    }
}
