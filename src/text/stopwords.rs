use std::collections::HashSet;

use super::Normalizer;

/// Normalized stopwords; immutable once built
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Build from a newline-delimited list, trimming and normalizing each line
    pub fn from_lines(content: &str, normalizer: &Normalizer) -> Self {
        let words = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| normalizer.normalize(line))
            .collect();
        Self { words }
    }

    pub fn from_words<I, S>(words: I, normalizer: &Normalizer) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| normalizer.normalize(w.as_ref()))
                .collect(),
        }
    }

    /// Whether `token`, once normalized, equals a stopword
    pub fn matches(&self, token: &str, normalizer: &Normalizer) -> bool {
        self.words.contains(&normalizer.normalize(token))
    }

    pub fn contains(&self, normalized: &str) -> bool {
        self.words.contains(normalized)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_lines_trims_and_normalizes() {
        let normalizer = Normalizer::default();
        let set = StopwordSet::from_lines("  the \nكه\n\n", &normalizer);

        assert_eq!(set.len(), 2);
        assert!(set.contains("the"));
        assert!(set.contains("که"));
    }

    #[test]
    fn test_matches_normalizes_token() {
        let normalizer = Normalizer::default();
        let set = StopwordSet::from_words(["که"], &normalizer);

        assert!(set.matches("كه", &normalizer));
        assert!(!set.matches("cat", &normalizer));
    }
}
