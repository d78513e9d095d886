use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::io::load_stopwords_file;
use crate::text::{Normalizer, NormalizerConfig, Segmenter, StopwordSet, UnicodeSegmenter};

/// Per-analysis resources, built once and passed to every stage
pub struct AnalysisContext {
    pub segmenter: Box<dyn Segmenter>,
    pub normalizer: Normalizer,
    pub stopwords: StopwordSet,
}

impl AnalysisContext {
    /// Context with the default segmenter and normalizer and no stopwords
    pub fn new() -> Self {
        Self {
            segmenter: Box::new(UnicodeSegmenter),
            normalizer: Normalizer::default(),
            stopwords: StopwordSet::default(),
        }
    }

    /// Load and normalize the stopword list; fails before any analysis runs
    pub fn with_stopwords_file(path: &Path, config: NormalizerConfig) -> Result<Self> {
        let normalizer = Normalizer::new(config);
        let stopwords = load_stopwords_file(path, &normalizer)?;
        info!("Loaded {} stopwords from {:?}", stopwords.len(), path);

        Ok(Self {
            segmenter: Box::new(UnicodeSegmenter),
            normalizer,
            stopwords,
        })
    }

    /// Replace the stopwords, normalizing them with this context's normalizer
    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stopwords = StopwordSet::from_words(words, &self.normalizer);
        self
    }

    pub fn with_segmenter(mut self, segmenter: impl Segmenter + 'static) -> Self {
        self.segmenter = Box::new(segmenter);
        self
    }
}

impl Default for AnalysisContext {
    fn default() -> Self {
        Self::new()
    }
}
