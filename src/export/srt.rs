//! SRT (SubRip) subtitle export.

use super::ExportArtifact;
use crate::timestamp::format_timestamp;
use crate::transcript::Transcript;

/// Render numbered subtitle cues, one per segment.
///
/// Timecodes are whole-second `HH:MM:SS` values (no milliseconds field);
/// unresolved bounds fall back to `00:00:00`. Each block is an index line,
/// an arrow line and a text line with trailing newline; blocks are
/// separated by exactly one blank line.
pub fn export_srt(transcript: Option<&Transcript>) -> ExportArtifact {
    let content = super::chunks(transcript)
        .iter()
        .enumerate()
        .map(|(i, chunk)| {
            let start = format_timestamp(chunk.timestamp.0);
            let end = format_timestamp(chunk.timestamp.1);
            format!("{}\n{} --> {}\n{}\n", i + 1, start, end, chunk.text)
        })
        .collect::<Vec<_>>()
        .join("\n");

    ExportArtifact {
        content,
        mime_type: "text/plain",
        suggested_filename: "transcript.srt",
    }
}
