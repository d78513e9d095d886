use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{self, AnalysisError};

/// Top-level chat export document as written by the messenger's JSON export
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawExport {
    #[serde(default)]
    pub name: Option<String>,
    pub messages: Vec<RawMessage>,
}

/// A message as it appears in the export, before required fields are checked
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawMessage {
    pub id: Option<i64>,
    pub text: Option<MessageText>,
    pub from: Option<String>,
    pub reply_to_message_id: Option<i64>,
}

/// The `text` field: either a flat string or a sequence of fragments
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum MessageText {
    Plain(String),
    Composite(Vec<TextPart>),
}

impl MessageText {
    /// Whether the export stored this text as a flat string
    pub fn is_plain(&self) -> bool {
        matches!(self, MessageText::Plain(_))
    }
}

impl From<&str> for MessageText {
    fn from(text: &str) -> Self {
        MessageText::Plain(text.to_string())
    }
}

/// One element of a composite text field
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TextPart {
    Plain(String),
    /// JSON object; only objects count as annotated spans
    Span(TextSpan),
    /// Anything else the exporter emitted (numbers, nested arrays, ...)
    Other(serde_json::Value),
}

impl<'de> Deserialize<'de> for TextPart {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value {
            serde_json::Value::String(s) => TextPart::Plain(s),
            serde_json::Value::Object(_) => match serde_json::from_value::<TextSpan>(value.clone()) {
                Ok(span) => TextPart::Span(span),
                Err(_) => TextPart::Other(value),
            },
            other => TextPart::Other(other),
        })
    }
}

/// Annotated span (bold, link, mention, ...); only `text` is consumed
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TextSpan {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// A validated, immutable chat message
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub id: i64,
    pub text: MessageText,
    pub from: String,
    pub reply_to_message_id: Option<i64>,
}

impl Message {
    pub fn new(id: i64, from: &str, text: impl Into<MessageText>) -> Self {
        Self {
            id,
            text: text.into(),
            from: from.to_string(),
            reply_to_message_id: None,
        }
    }

    pub fn replying_to(mut self, id: i64) -> Self {
        self.reply_to_message_id = Some(id);
        self
    }
}

/// Validated transcript: messages in export order
#[derive(Debug, Clone, Default, Serialize)]
pub struct Transcript {
    pub name: Option<String>,
    pub messages: Vec<Message>,
}

impl Transcript {
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            name: None,
            messages,
        }
    }

    /// Check required fields on every message, failing on the first gap
    pub fn from_raw(raw: RawExport) -> error::Result<Self> {
        let messages = raw
            .messages
            .into_iter()
            .enumerate()
            .map(|(index, msg)| {
                Ok(Message {
                    id: msg.id.ok_or_else(|| AnalysisError::malformed(index, "id"))?,
                    text: msg.text.ok_or_else(|| AnalysisError::malformed(index, "text"))?,
                    from: msg.from.ok_or_else(|| AnalysisError::malformed(index, "from"))?,
                    reply_to_message_id: msg.reply_to_message_id,
                })
            })
            .collect::<error::Result<Vec<_>>>()?;

        Ok(Self {
            name: raw.name,
            messages,
        })
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_composite_text() {
        let json = r#"{
            "name": "group",
            "messages": [
                {"id": 1, "from": "A", "text": "plain"},
                {"id": 2, "from": "B", "text": [{"type": "bold", "text": "Hello "}, "world", {"type": "custom_emoji"}, 7]}
            ]
        }"#;

        let raw: RawExport = serde_json::from_str(json).unwrap();
        let transcript = Transcript::from_raw(raw).unwrap();

        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.messages[0].text, MessageText::Plain("plain".to_string()));

        let MessageText::Composite(parts) = &transcript.messages[1].text else {
            panic!("expected composite text");
        };
        assert_eq!(parts.len(), 4);
        assert!(matches!(&parts[0], TextPart::Span(span) if span.text.as_deref() == Some("Hello ")));
        assert_eq!(parts[1], TextPart::Plain("world".to_string()));
        assert!(matches!(&parts[2], TextPart::Span(span) if span.text.is_none()));
        assert!(matches!(&parts[3], TextPart::Other(_)));
    }

    #[test]
    fn test_nested_array_is_not_a_span() {
        let json = r#"{"messages": [
            {"id": 1, "from": "A", "text": ["a", ["x", "y"], {"type": "link", "text": 3}, "b"]}
        ]}"#;

        let raw: RawExport = serde_json::from_str(json).unwrap();
        let transcript = Transcript::from_raw(raw).unwrap();

        let MessageText::Composite(parts) = &transcript.messages[0].text else {
            panic!("expected composite text");
        };
        assert!(matches!(&parts[1], TextPart::Other(serde_json::Value::Array(_))));
        assert!(matches!(&parts[2], TextPart::Other(serde_json::Value::Object(_))));
    }

    #[test]
    fn test_missing_id_is_malformed() {
        let json = r#"{"messages": [{"from": "A", "text": "hi"}]}"#;

        let raw: RawExport = serde_json::from_str(json).unwrap();
        let err = Transcript::from_raw(raw).unwrap_err();

        assert!(matches!(
            err,
            AnalysisError::MalformedMessage { index: 0, field: "id" }
        ));
    }

    #[test]
    fn test_missing_from_is_malformed() {
        let json = r#"{"messages": [
            {"id": 1, "from": "A", "text": "hi"},
            {"id": 2, "text": "no author"}
        ]}"#;

        let raw: RawExport = serde_json::from_str(json).unwrap();
        let err = Transcript::from_raw(raw).unwrap_err();

        assert!(matches!(
            err,
            AnalysisError::MalformedMessage { index: 1, field: "from" }
        ));
    }

    #[test]
    fn test_null_text_is_malformed() {
        let json = r#"{"messages": [{"id": 5, "from": "A", "text": null}]}"#;

        let raw: RawExport = serde_json::from_str(json).unwrap();
        let err = Transcript::from_raw(raw).unwrap_err();

        assert!(matches!(
            err,
            AnalysisError::MalformedMessage { index: 0, field: "text" }
        ));
    }
}
