use std::collections::HashMap;

use tracing::debug;

use crate::models::Transcript;
use crate::text::Segmenter;

use super::ReconstructedTexts;

/// ASCII question mark and the Arabic/Persian question mark
pub const QUESTION_MARKS: [char; 2] = ['?', '\u{061f}'];

/// Question flag per message id; ids never flagged read as false
#[derive(Debug, Clone, Default)]
pub struct QuestionFlags {
    flags: HashMap<i64, bool>,
}

impl QuestionFlags {
    /// `Some(flag)` for ids seen during detection, `None` otherwise
    pub fn lookup(&self, id: i64) -> Option<bool> {
        self.flags.get(&id).copied()
    }

    pub fn is_question(&self, id: i64) -> bool {
        self.lookup(id).unwrap_or(false)
    }

    pub fn question_count(&self) -> usize {
        self.flags.values().filter(|&&f| f).count()
    }

    fn record(&mut self, id: i64, is_question: bool) {
        let flag = self.flags.entry(id).or_insert(false);
        *flag |= is_question;
    }
}

/// Whether any sentence of `text` carries a question mark; stops at the first
pub fn has_question(text: &str, segmenter: &dyn Segmenter) -> bool {
    segmenter
        .segment_sentences(text)
        .iter()
        .any(|sentence| sentence.contains(QUESTION_MARKS))
}

/// Flag every message in transcript order, each from its own text
pub fn detect_questions(
    transcript: &Transcript,
    texts: &ReconstructedTexts,
    segmenter: &dyn Segmenter,
) -> QuestionFlags {
    let mut flags = QuestionFlags::default();

    for (index, msg) in transcript.messages.iter().enumerate() {
        let text = texts.at(index).unwrap_or_default();
        flags.record(msg.id, has_question(text, segmenter));
    }

    debug!(
        "Flagged {} of {} messages as questions",
        flags.question_count(),
        transcript.len()
    );

    flags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Message;
    use crate::stages::reconstruct_transcript;
    use crate::text::UnicodeSegmenter;

    #[test]
    fn test_persian_question_mark() {
        assert!(has_question("چطوری؟", &UnicodeSegmenter));
        assert!(!has_question("سلام", &UnicodeSegmenter));
    }

    #[test]
    fn test_ascii_question_mark_mid_message() {
        assert!(has_question("Hello. Are you there? I'm waiting.", &UnicodeSegmenter));
    }

    #[test]
    fn test_empty_text_is_not_question() {
        assert!(!has_question("", &UnicodeSegmenter));
    }

    /// Splits on `|` and reports a sentence only when it ends in `!`
    struct BangSegmenter;

    impl Segmenter for BangSegmenter {
        fn segment_sentences(&self, text: &str) -> Vec<String> {
            text.split('|')
                .filter(|s| s.ends_with('!'))
                .map(str::to_string)
                .collect()
        }

        fn tokenize_words(&self, text: &str) -> Vec<String> {
            text.split('|').map(str::to_string).collect()
        }
    }

    #[test]
    fn test_detection_goes_through_segmenter() {
        assert!(has_question("why?!|ok", &BangSegmenter));
        // the marker sits in a piece the segmenter does not report
        assert!(!has_question("why?|ok!", &BangSegmenter));
    }

    #[test]
    fn test_duplicate_id_flagged_from_each_message() {
        let transcript = Transcript::new(vec![
            Message::new(1, "A", "hello"),
            Message::new(1, "A", "why?"),
        ]);
        let texts = reconstruct_transcript(&transcript);

        let flags = detect_questions(&transcript, &texts, &UnicodeSegmenter);
        assert!(flags.is_question(1));
    }

    #[test]
    fn test_detect_questions_over_transcript() {
        let transcript = Transcript::new(vec![
            Message::new(1, "A", "چطوری؟"),
            Message::new(2, "B", "سلام"),
            Message::new(3, "C", ""),
        ]);
        let texts = reconstruct_transcript(&transcript);

        let flags = detect_questions(&transcript, &texts, &UnicodeSegmenter);

        assert_eq!(flags.lookup(1), Some(true));
        assert_eq!(flags.lookup(2), Some(false));
        assert_eq!(flags.lookup(3), Some(false));
        assert_eq!(flags.lookup(99), None);
        assert!(!flags.is_question(99));
        assert_eq!(flags.question_count(), 1);
    }
}
