use unicode_segmentation::UnicodeSegmentation;

/// Language-aware sentence and word splitting
pub trait Segmenter {
    /// Split text into sentences, dropping whitespace-only pieces
    fn segment_sentences(&self, text: &str) -> Vec<String>;

    /// Split text into word units (punctuation and emoji stay as tokens)
    fn tokenize_words(&self, text: &str) -> Vec<String>;
}

/// UAX #29 segmentation; script-agnostic, so it handles Persian, Arabic and
/// Latin text alike. ZWNJ is an extender, so `می‌روم` stays one token.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSegmenter;

impl Segmenter for UnicodeSegmenter {
    fn segment_sentences(&self, text: &str) -> Vec<String> {
        text.split_sentence_bounds()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn tokenize_words(&self, text: &str) -> Vec<String> {
        text.split_word_bounds()
            .filter(|w| !w.trim().is_empty())
            .map(str::to_string)
            .collect()
    }
}
