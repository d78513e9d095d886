pub mod context;
pub mod error;
pub mod io;
pub mod models;
pub mod stages;
pub mod text;

pub use context::AnalysisContext;
pub use error::{AnalysisError, Result};
pub use io::{
    CloudLayout, CloudRenderer, FrequencyCloudRenderer, format_ranking, load_stopwords_file,
    parse_export_file, parse_export_json, write_corpus_text, write_ranking_json,
};
pub use models::{Message, MessageText, Ranking, ResponderCount, TextPart, Transcript};
pub use stages::{
    RankConfig, RankResult, ReplyDisposition, ReshapeConfig, build_corpus, rank_responders,
    reshape_for_display, top_responders, word_cloud_text,
};
pub use text::{Normalizer, NormalizerConfig, Segmenter, StopwordSet, UnicodeSegmenter};
