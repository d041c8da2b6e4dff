//! Annotated JSON export.

use super::ExportArtifact;
use crate::transcript::Transcript;

/// Serialize the segments as a 2-space indented JSON array of
/// `{ "text", "timestamp" }` objects.
///
/// The timestamp pair stays on a single line as `[<start> <end>]` while the
/// rest of the document keeps full multi-line indentation. The document is
/// built by walking the segments directly rather than patching
/// pretty-printed output, so the compaction holds for null and fractional
/// bounds alike.
pub fn export_json(transcript: Option<&Transcript>) -> ExportArtifact {
    let chunks = super::chunks(transcript);

    let mut out = String::new();
    if chunks.is_empty() {
        out.push_str("[]");
    } else {
        out.push_str("[\n");
        for (i, chunk) in chunks.iter().enumerate() {
            out.push_str("  {\n");
            out.push_str(&format!("    \"text\": {},\n", json_string(&chunk.text)));
            out.push_str(&format!(
                "    \"timestamp\": [{} {}]\n",
                json_bound(chunk.timestamp.0),
                json_bound(chunk.timestamp.1),
            ));
            out.push_str(if i + 1 < chunks.len() { "  },\n" } else { "  }\n" });
        }
        out.push(']');
    }

    ExportArtifact {
        content: out,
        mime_type: "application/json",
        suggested_filename: "transcript.json",
    }
}

/// JSON string literal for `text`. Escaping is delegated to serde_json.
fn json_string(text: &str) -> String {
    serde_json::Value::String(text.to_string()).to_string()
}

/// JSON token for one timestamp bound. Integral seconds print without a
/// fractional part; unresolved and non-finite bounds print as `null`.
fn json_bound(bound: Option<f64>) -> String {
    match bound {
        Some(v) if v.is_finite() && v.fract() == 0.0 && v.abs() < 9.0e15 => {
            format!("{}", v as i64)
        }
        Some(v) => serde_json::Number::from_f64(v)
            .map(|n| n.to_string())
            .unwrap_or_else(|| "null".to_string()),
        None => "null".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::{Segment, Transcript};

    fn transcript(chunks: Vec<Segment>) -> Transcript {
        Transcript {
            chunks,
            is_busy: false,
        }
    }

    #[test]
    fn empty_transcript_serializes_to_empty_array() {
        assert_eq!(export_json(None).content, "[]");
        assert_eq!(export_json(Some(&transcript(vec![]))).content, "[]");
    }

    #[test]
    fn timestamp_pairs_stay_on_one_line() {
        let t = transcript(vec![
            Segment {
                text: "Hello ".into(),
                timestamp: (Some(0.0), Some(1.0)),
            },
            Segment {
                text: "world".into(),
                timestamp: (Some(1.0), Some(2.0)),
            },
        ]);
        let expected = r#"[
  {
    "text": "Hello ",
    "timestamp": [0 1]
  },
  {
    "text": "world",
    "timestamp": [1 2]
  }
]"#;
        assert_eq!(export_json(Some(&t)).content, expected);
    }

    #[test]
    fn null_bounds_are_preserved() {
        let t = transcript(vec![Segment {
            text: "Hi".into(),
            timestamp: (None, None),
        }]);
        let expected = r#"[
  {
    "text": "Hi",
    "timestamp": [null null]
  }
]"#;
        assert_eq!(export_json(Some(&t)).content, expected);
    }

    #[test]
    fn fractional_bounds_keep_their_precision() {
        let t = transcript(vec![Segment {
            text: "Hi".into(),
            timestamp: (Some(1.38), Some(2.5)),
        }]);
        assert!(export_json(Some(&t))
            .content
            .contains(r#""timestamp": [1.38 2.5]"#));
    }

    #[test]
    fn mixed_bounds_render_in_place() {
        let t = transcript(vec![Segment {
            text: "Hi".into(),
            timestamp: (Some(0.0), None),
        }]);
        assert!(export_json(Some(&t))
            .content
            .contains(r#""timestamp": [0 null]"#));
    }

    #[test]
    fn text_is_json_escaped() {
        let t = transcript(vec![Segment {
            text: "he said \"hi\"\n".into(),
            timestamp: (Some(0.0), Some(1.0)),
        }]);
        assert!(export_json(Some(&t))
            .content
            .contains(r#""text": "he said \"hi\"\n""#));
    }

    #[test]
    fn artifact_metadata() {
        let artifact = export_json(None);
        assert_eq!(artifact.mime_type, "application/json");
        assert_eq!(artifact.suggested_filename, "transcript.json");
    }
}
