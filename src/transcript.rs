//! Transcript data model.

use serde::{Deserialize, Serialize};

/// One recognized utterance.
///
/// `timestamp` holds the start/end offsets in seconds from the beginning of
/// the audio. Either bound may be `None` while the segment is still being
/// resolved; it serializes as a two-element array with `null` for absent
/// bounds. `start <= end` is expected but not enforced - violations are
/// rendered as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub timestamp: (Option<f64>, Option<f64>),
}

/// Ordered transcript for one recording.
///
/// `is_busy` is true while the transcriber may still append segments. The
/// export serializers do not gate on it; offering export only on finished
/// transcripts is the caller's concern.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub chunks: Vec<Segment>,
    #[serde(default)]
    pub is_busy: bool,
}
