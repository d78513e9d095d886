pub mod input;
pub mod output;
pub mod render;

pub use input::{load_stopwords_file, parse_export_file, parse_export_json};
pub use output::{format_ranking, write_corpus_text, write_ranking_json};
pub use render::{CloudLayout, CloudRenderer, FrequencyCloudRenderer, WeightedToken, word_frequencies};
