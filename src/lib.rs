//! Transcript export core and host adapter.
//!
//! The core (`transcript`, `timestamp`, `export`) turns an ordered list of
//! timestamped speech segments into TXT, JSON or SRT artifacts as pure
//! functions with no failure modes. The adapter modules (`project`, `sink`)
//! move transcripts and artifacts to and from disk for the CLI host.

pub mod export;
pub mod project;
pub mod sink;
pub mod timestamp;
pub mod transcript;

pub use export::{export, export_json, export_srt, export_txt, ExportArtifact, ExportFormat};
pub use project::{load_transcript, save_transcript};
pub use sink::save_artifact;
pub use timestamp::format_timestamp;
pub use transcript::{Segment, Transcript};
