use tracing::{debug, info};

use crate::context::AnalysisContext;
use crate::models::{MessageText, Transcript};

/// Result of building the word-cloud corpus
#[derive(Debug, Clone)]
pub struct CorpusResult {
    /// Stopword-filtered tokens, normalized as a whole
    pub corpus: String,
    /// Messages whose plain text contributed
    pub messages_used: usize,
    /// Messages left out because their text was composite
    pub messages_skipped: usize,
    pub tokens_kept: usize,
    pub stopwords_removed: usize,
}

/// Tokenize plain-text messages, drop stopwords, and normalize the result.
///
/// Only messages whose text was exported as a flat string contribute;
/// composite (formatted) messages are left out. Each contribution is preceded
/// by a space, and normalization runs once over the accumulated text.
pub fn build_corpus(transcript: &Transcript, context: &AnalysisContext) -> CorpusResult {
    let mut raw = String::new();
    let mut messages_used = 0;
    let mut messages_skipped = 0;
    let mut tokens_kept = 0;
    let mut stopwords_removed = 0;

    for msg in &transcript.messages {
        let MessageText::Plain(text) = &msg.text else {
            messages_skipped += 1;
            continue;
        };
        messages_used += 1;

        let tokens: Vec<String> = context
            .segmenter
            .tokenize_words(text)
            .into_iter()
            .filter(|token| {
                let is_stopword = context.stopwords.matches(token, &context.normalizer);
                if is_stopword {
                    stopwords_removed += 1;
                }
                !is_stopword
            })
            .collect();
        tokens_kept += tokens.len();

        raw.push(' ');
        raw.push_str(&tokens.join(" "));
    }

    debug!("Accumulated {} bytes of raw corpus", raw.len());
    let corpus = context.normalizer.normalize(&raw);

    info!(
        "Corpus built from {} messages ({} composite skipped): {} tokens kept, {} stopwords removed",
        messages_used, messages_skipped, tokens_kept, stopwords_removed
    );

    CorpusResult {
        corpus,
        messages_used,
        messages_skipped,
        tokens_kept,
        stopwords_removed,
    }
}
