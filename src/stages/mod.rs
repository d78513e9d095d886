pub mod stage0_reconstruct;
pub mod stage1_questions;
pub mod stage2_rank;
pub mod stage3_corpus;
pub mod stage4_reshape;

pub use stage0_reconstruct::*;
pub use stage1_questions::*;
pub use stage2_rank::*;
pub use stage3_corpus::*;
pub use stage4_reshape::*;

use crate::context::AnalysisContext;
use crate::models::{Ranking, Transcript};

/// Top `top_n` authors replying to question-bearing messages
pub fn top_responders(transcript: &Transcript, context: &AnalysisContext, top_n: usize) -> Ranking {
    rank_responders(transcript, context, &RankConfig { top_n }).responders
}

/// Stopword-filtered, normalized and display-reshaped corpus for the renderer
pub fn word_cloud_text(transcript: &Transcript, context: &AnalysisContext) -> String {
    let corpus = build_corpus(transcript, context);
    reshape_for_display(&corpus.corpus, &ReshapeConfig::default())
}
