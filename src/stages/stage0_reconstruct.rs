use std::collections::HashMap;

use tracing::debug;

use crate::models::{MessageText, TextPart, Transcript};

/// What a single composite fragment contributes to the flattened text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentOutcome<'a> {
    /// Bare string element, appended verbatim
    Plain(&'a str),
    /// Annotated span with a `text` member
    Span(&'a str),
    /// Span without usable `text`, or a non-object element; contributes nothing
    Unusable,
}

impl<'a> FragmentOutcome<'a> {
    pub fn classify(part: &'a TextPart) -> Self {
        match part {
            TextPart::Plain(s) => FragmentOutcome::Plain(s),
            TextPart::Span(span) => span
                .text
                .as_deref()
                .map_or(FragmentOutcome::Unusable, FragmentOutcome::Span),
            TextPart::Other(_) => FragmentOutcome::Unusable,
        }
    }

    pub fn text(&self) -> &'a str {
        match *self {
            FragmentOutcome::Plain(s) | FragmentOutcome::Span(s) => s,
            FragmentOutcome::Unusable => "",
        }
    }
}

/// Flattened message text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconstruction {
    pub text: String,
    /// Fragments skipped because they carried no usable text
    pub unusable_fragments: usize,
}

/// Flatten a text field into one string.
///
/// Plain strings come back unchanged; composite fragments are concatenated in
/// order with no separator.
pub fn reconstruct(text: &MessageText) -> Reconstruction {
    match text {
        MessageText::Plain(s) => Reconstruction {
            text: s.clone(),
            unusable_fragments: 0,
        },
        MessageText::Composite(parts) => {
            let mut out = String::new();
            let mut unusable_fragments = 0;
            for part in parts {
                let outcome = FragmentOutcome::classify(part);
                if outcome == FragmentOutcome::Unusable {
                    unusable_fragments += 1;
                }
                out.push_str(outcome.text());
            }
            Reconstruction {
                text: out,
                unusable_fragments,
            }
        }
    }
}

/// Reconstructed text per message id, derived once from an immutable transcript
#[derive(Debug, Clone, Default)]
pub struct ReconstructedTexts {
    /// Flattened text per message, in transcript order
    texts: Vec<String>,
    /// First message index for each id
    by_id: HashMap<i64, usize>,
    /// Messages whose text needed flattening
    pub composite_messages: usize,
    pub unusable_fragments: usize,
}

impl ReconstructedTexts {
    /// Text of the first message carrying `id`
    pub fn get(&self, id: i64) -> Option<&str> {
        self.by_id.get(&id).map(|&i| self.texts[i].as_str())
    }

    /// Text of the message at `index` in the transcript
    pub fn at(&self, index: usize) -> Option<&str> {
        self.texts.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

/// Reconstruct every message. Lookup by id resolves duplicates to the first.
pub fn reconstruct_transcript(transcript: &Transcript) -> ReconstructedTexts {
    let mut result = ReconstructedTexts::default();

    for (index, msg) in transcript.messages.iter().enumerate() {
        let reconstruction = reconstruct(&msg.text);
        if !msg.text.is_plain() {
            result.composite_messages += 1;
        }
        result.unusable_fragments += reconstruction.unusable_fragments;
        result.texts.push(reconstruction.text);
        result.by_id.entry(msg.id).or_insert(index);
    }

    debug!(
        "Reconstructed {} messages ({} composite, {} unusable fragments)",
        result.texts.len(),
        result.composite_messages,
        result.unusable_fragments
    );

    result
}
