use std::path::Path;

use tracing::debug;

use crate::error::{AnalysisError, Result};
use crate::models::{RawExport, Transcript};
use crate::text::{Normalizer, StopwordSet};

/// Parse a chat export JSON file into a validated Transcript
pub fn parse_export_file(path: &Path) -> Result<Transcript> {
    let content =
        std::fs::read_to_string(path).map_err(|e| AnalysisError::io("reading chat export", e))?;
    parse_export_json(&content)
}

/// Parse a chat export JSON string into a validated Transcript
pub fn parse_export_json(json: &str) -> Result<Transcript> {
    let raw: RawExport =
        serde_json::from_str(json).map_err(|e| AnalysisError::json("parsing chat export", e))?;
    debug!("Export contains {} raw messages", raw.messages.len());
    Transcript::from_raw(raw)
}

/// Read a newline-delimited stopword list
pub fn load_stopwords_file(path: &Path, normalizer: &Normalizer) -> Result<StopwordSet> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| AnalysisError::missing("stopword list", path, e))?;
    Ok(StopwordSet::from_lines(&content, normalizer))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_parse_export_json() {
        let json = r#"{
            "name": "Friends",
            "type": "private_group",
            "messages": [
                {"id": 1, "type": "message", "date": "2021-05-01T10:00:00", "from": "A", "from_id": "user1", "text": "Are you coming?"},
                {"id": 2, "type": "message", "date": "2021-05-01T10:01:00", "from": "B", "from_id": "user2", "text": "Yes", "reply_to_message_id": 1}
            ]
        }"#;

        let transcript = parse_export_json(json).unwrap();

        assert_eq!(transcript.name.as_deref(), Some("Friends"));
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.messages[1].from, "B");
        assert_eq!(transcript.messages[1].reply_to_message_id, Some(1));
        assert_eq!(transcript.messages[0].reply_to_message_id, None);
    }

    #[test]
    fn test_missing_messages_field() {
        let err = parse_export_json(r#"{"name": "x"}"#).unwrap_err();
        assert!(matches!(err, AnalysisError::Json { .. }));
    }

    #[test]
    fn test_parse_export_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"messages": [{{"id": 1, "from": "A", "text": "hi"}}]}}"#).unwrap();

        let transcript = parse_export_file(file.path()).unwrap();
        assert_eq!(transcript.len(), 1);
    }

    #[test]
    fn test_load_stopwords_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "the\n  and  \nكه").unwrap();

        let stopwords = load_stopwords_file(file.path(), &Normalizer::default()).unwrap();

        assert_eq!(stopwords.len(), 3);
        assert!(stopwords.contains("and"));
        assert!(stopwords.contains("که"));
    }

    #[test]
    fn test_missing_stopwords_is_missing_resource() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");

        let err = load_stopwords_file(&path, &Normalizer::default()).unwrap_err();
        assert!(matches!(err, AnalysisError::MissingResource { kind: "stopword list", .. }));
    }
}
