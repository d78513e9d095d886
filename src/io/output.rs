use std::io::Write;
use std::path::Path;

use crate::error::{AnalysisError, Result};
use crate::models::Ranking;
use crate::stages::RankResult;

/// Write the ranking and reply totals as pretty JSON
pub fn write_ranking_json(path: &Path, result: &RankResult) -> Result<()> {
    let file = std::fs::File::create(path)
        .map_err(|e| AnalysisError::io("creating ranking file", e))?;
    serde_json::to_writer_pretty(file, result)
        .map_err(|e| AnalysisError::json("writing ranking", e))?;
    Ok(())
}

/// Write the reshaped corpus verbatim
pub fn write_corpus_text(path: &Path, corpus: &str) -> Result<()> {
    let mut file = std::fs::File::create(path)
        .map_err(|e| AnalysisError::io("creating corpus file", e))?;
    file.write_all(corpus.as_bytes())
        .map_err(|e| AnalysisError::io("writing corpus", e))?;
    Ok(())
}

/// Numbered table of responders, one per line
pub fn format_ranking(ranking: &Ranking) -> String {
    if ranking.is_empty() {
        return "No replies to questions found.\n".to_string();
    }

    let width = ranking
        .entries
        .iter()
        .map(|e| e.author.chars().count())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for (rank, entry) in ranking.entries.iter().enumerate() {
        output.push_str(&format!(
            "{:>3}. {:<width$}  {}\n",
            rank + 1,
            entry.author,
            entry.count,
            width = width
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ResponderCount;
    use crate::stages::ReplyStats;

    fn sample() -> Ranking {
        Ranking {
            entries: vec![
                ResponderCount {
                    author: "Sara".to_string(),
                    count: 4,
                },
                ResponderCount {
                    author: "Al".to_string(),
                    count: 2,
                },
            ],
        }
    }

    #[test]
    fn test_format_ranking() {
        assert_eq!(format_ranking(&sample()), "  1. Sara  4\n  2. Al    2\n");
        assert_eq!(
            format_ranking(&Ranking::default()),
            "No replies to questions found.\n"
        );
    }

    #[test]
    fn test_write_ranking_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ranking.json");
        let result = RankResult {
            responders: sample(),
            replies: ReplyStats {
                counted: 6,
                not_a_question: 1,
                unresolved: 0,
            },
            questions: 3,
        };

        write_ranking_json(&path, &result).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["responders"][0]["author"], "Sara");
        assert_eq!(value["responders"][1]["count"], 2);
        assert_eq!(value["replies"]["counted"], 6);
        assert!(value.get("questions").is_none());
    }

    #[test]
    fn test_write_corpus_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corpus.txt");

        write_corpus_text(&path, "ﻡﻼﺳ cat").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "ﻡﻼﺳ cat");
    }
}
