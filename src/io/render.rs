use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::error::{AnalysisError, Result};

/// Layout parameters handed to the word-cloud renderer
#[derive(Debug, Clone, Serialize)]
pub struct CloudLayout {
    pub width: u32,
    pub height: u32,
    pub max_font_size: u32,
    pub background_color: String,
    /// Font with the presentation-form glyphs the reshaped text uses
    pub font_path: Option<PathBuf>,
}

impl Default for CloudLayout {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            max_font_size: 250,
            background_color: "white".to_string(),
            font_path: None,
        }
    }
}

impl CloudLayout {
    /// Fail fast if the configured font cannot be read
    pub fn check_resources(&self) -> Result<()> {
        if let Some(path) = &self.font_path {
            std::fs::metadata(path).map_err(|e| AnalysisError::missing("font", path, e))?;
        }
        Ok(())
    }
}

/// Turns a reshaped corpus into a word-cloud artifact
pub trait CloudRenderer {
    /// Render into `output_dir`, returning the path of the artifact written
    fn render(&self, corpus: &str, layout: &CloudLayout, output_dir: &Path) -> Result<PathBuf>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeightedToken {
    pub token: String,
    pub count: usize,
}

#[derive(Serialize)]
struct CloudDocument<'a> {
    layout: &'a CloudLayout,
    tokens: Vec<WeightedToken>,
}

/// Count whitespace-separated tokens; counts descending, ties by first appearance
pub fn word_frequencies(corpus: &str) -> Vec<WeightedToken> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for token in corpus.split_whitespace() {
        *counts.entry(token).or_insert_with(|| {
            order.push(token);
            0
        }) += 1;
    }

    let mut tokens: Vec<WeightedToken> = order
        .into_iter()
        .map(|token| WeightedToken {
            token: token.to_string(),
            count: counts[token],
        })
        .collect();
    tokens.sort_by(|a, b| b.count.cmp(&a.count));
    tokens
}

/// Writes `wordcloud.json`: the layout plus the weighted token stream, for an
/// external glyph-layout engine to rasterize
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyCloudRenderer;

impl FrequencyCloudRenderer {
    pub const FILE_NAME: &'static str = "wordcloud.json";
}

impl CloudRenderer for FrequencyCloudRenderer {
    fn render(&self, corpus: &str, layout: &CloudLayout, output_dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(output_dir)
            .map_err(|e| AnalysisError::io("creating output directory", e))?;

        let path = output_dir.join(Self::FILE_NAME);
        let document = CloudDocument {
            layout,
            tokens: word_frequencies(corpus),
        };
        let json = serde_json::to_vec_pretty(&document)
            .map_err(|e| AnalysisError::json("serializing word cloud", e))?;
        std::fs::write(&path, json).map_err(|e| AnalysisError::io("writing word cloud", e))?;

        info!("Saved word cloud ({} distinct tokens) to {:?}", document.tokens.len(), path);
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_frequencies_order() {
        let tokens = word_frequencies("b a b c a b");
        let pairs: Vec<(&str, usize)> = tokens.iter().map(|t| (t.token.as_str(), t.count)).collect();
        assert_eq!(pairs, vec![("b", 3), ("a", 2), ("c", 1)]);
    }

    #[test]
    fn test_layout_defaults() {
        let layout = CloudLayout::default();
        assert_eq!((layout.width, layout.height), (1200, 800));
        assert_eq!(layout.max_font_size, 250);
        assert_eq!(layout.background_color, "white");
    }

    #[test]
    fn test_missing_font_fails_fast() {
        let dir = tempfile::tempdir().unwrap();
        let layout = CloudLayout {
            font_path: Some(dir.path().join("missing.ttf")),
            ..Default::default()
        };

        let err = layout.check_resources().unwrap_err();
        assert!(matches!(err, AnalysisError::MissingResource { kind: "font", .. }));
        assert!(CloudLayout::default().check_resources().is_ok());
    }

    #[test]
    fn test_frequency_renderer_writes_json() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("out");

        let path = FrequencyCloudRenderer
            .render("cat sat cat", &CloudLayout::default(), &out_dir)
            .unwrap();

        assert_eq!(path, out_dir.join("wordcloud.json"));
        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["layout"]["width"], 1200);
        assert_eq!(value["tokens"][0]["token"], "cat");
        assert_eq!(value["tokens"][0]["count"], 2);
        assert_eq!(value["tokens"][1]["token"], "sat");
    }
}
