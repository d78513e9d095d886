use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, info};

use crate::context::AnalysisContext;
use crate::models::{Message, Ranking, ResponderCount, Transcript};

use super::{QuestionFlags, detect_questions, reconstruct_transcript};

/// Configuration for the responder ranking
#[derive(Debug, Clone)]
pub struct RankConfig {
    /// Number of authors to keep; 0 yields an empty ranking
    pub top_n: usize,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self { top_n: 10 }
    }
}

/// How a reply was treated by the ranker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyDisposition {
    /// Replies to a question; the author gets a vote
    Counted,
    /// Replies to a message that carries no question
    NotAQuestion,
    /// Replies to an id absent from the transcript
    Unresolved,
}

impl ReplyDisposition {
    /// `None` when the message is not a reply at all
    pub fn classify(msg: &Message, flags: &QuestionFlags) -> Option<Self> {
        let target = msg.reply_to_message_id?;
        Some(match flags.lookup(target) {
            Some(true) => ReplyDisposition::Counted,
            Some(false) => ReplyDisposition::NotAQuestion,
            None => ReplyDisposition::Unresolved,
        })
    }
}

/// Reply totals by disposition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReplyStats {
    pub counted: usize,
    pub not_a_question: usize,
    pub unresolved: usize,
}

/// Result of ranking responders
#[derive(Debug, Clone, Serialize)]
pub struct RankResult {
    pub responders: Ranking,
    pub replies: ReplyStats,
    #[serde(skip)]
    pub questions: usize,
}

/// Rank the authors who most often reply to question-bearing messages.
///
/// Counts sort descending; ties keep the order in which authors first
/// received a vote.
pub fn rank_responders(
    transcript: &Transcript,
    context: &AnalysisContext,
    config: &RankConfig,
) -> RankResult {
    let texts = reconstruct_transcript(transcript);
    let flags = detect_questions(transcript, &texts, context.segmenter.as_ref());

    let mut replies = ReplyStats::default();
    let mut order: Vec<&str> = Vec::new();
    let mut votes: HashMap<&str, usize> = HashMap::new();

    for msg in &transcript.messages {
        match ReplyDisposition::classify(msg, &flags) {
            Some(ReplyDisposition::Counted) => {
                replies.counted += 1;
                let count = votes.entry(msg.from.as_str()).or_insert_with(|| {
                    order.push(msg.from.as_str());
                    0
                });
                *count += 1;
            }
            Some(ReplyDisposition::NotAQuestion) => replies.not_a_question += 1,
            Some(ReplyDisposition::Unresolved) => {
                debug!(
                    "Message {} replies to unknown message {:?}",
                    msg.id, msg.reply_to_message_id
                );
                replies.unresolved += 1;
            }
            None => {}
        }
    }

    let mut entries: Vec<ResponderCount> = order
        .into_iter()
        .map(|author| ResponderCount {
            author: author.to_string(),
            count: votes[author],
        })
        .collect();
    // stable: equal counts stay in first-vote order
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(config.top_n);

    info!(
        "Ranked {} responders ({} counted replies, {} to non-questions, {} unresolved)",
        entries.len(),
        replies.counted,
        replies.not_a_question,
        replies.unresolved
    );

    RankResult {
        responders: Ranking { entries },
        replies,
        questions: flags.question_count(),
    }
}
