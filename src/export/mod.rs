//! Export transcript to TXT, JSON and SRT artifacts.

mod json;
mod srt;
mod txt;

pub use json::export_json;
pub use srt::export_srt;
pub use txt::export_txt;

use crate::transcript::{Segment, Transcript};

/// Content and metadata of one exported file, ready for persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub content: String,
    pub mime_type: &'static str,
    pub suggested_filename: &'static str,
}

/// Target export format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Txt,
    Json,
    Srt,
}

impl ExportFormat {
    /// Parse a format name ("txt", "json", "srt").
    pub fn from_name(name: &str) -> Option<ExportFormat> {
        match name {
            "txt" => Some(ExportFormat::Txt),
            "json" => Some(ExportFormat::Json),
            "srt" => Some(ExportFormat::Srt),
            _ => None,
        }
    }
}

/// Produce the artifact for `format`. An absent transcript exports the same
/// as an empty one.
pub fn export(format: ExportFormat, transcript: Option<&Transcript>) -> ExportArtifact {
    match format {
        ExportFormat::Txt => export_txt(transcript),
        ExportFormat::Json => export_json(transcript),
        ExportFormat::Srt => export_srt(transcript),
    }
}

fn chunks(transcript: Option<&Transcript>) -> &[Segment] {
    transcript.map(|t| t.chunks.as_slice()).unwrap_or(&[])
}
