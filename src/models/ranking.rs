use serde::Serialize;

/// One row of a responder ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponderCount {
    pub author: String,
    pub count: usize,
}

/// Authors ordered by count descending, ties in first-vote order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Ranking {
    pub entries: Vec<ResponderCount>,
}

impl Ranking {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ranking as `(author, count)` pairs
    pub fn pairs(&self) -> Vec<(&str, usize)> {
        self.entries
            .iter()
            .map(|e| (e.author.as_str(), e.count))
            .collect()
    }
}
