//! Matching engine — pluggable, trait-based ranker behind `AppState`.
//!
//! Default: `TfidfRanker`, the two-stage pipeline (cosine shortlist,
//! Euclidean re-selection, stage-1 score attachment). The trait seam
//! exists so a semantic/embedding backend can be swapped in later without
//! touching handlers.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::matching::ranker::{rank_jobs, DEFAULT_SHORTLIST_SIZE};
use crate::matching::reranker::{reselect, DEFAULT_TOP_K};
use crate::models::job::{Corpus, MatchReport, ScoredJob};
use crate::models::profile::QueryProfile;

/// The ranking backend seam. Carried in `AppState` as `Arc<dyn JobRanker>`.
#[async_trait]
pub trait JobRanker: Send + Sync {
    async fn rank(&self, corpus: &Corpus, profile: &QueryProfile)
        -> Result<MatchReport, AppError>;
}

/// Default ranker: TF-IDF + cosine shortlist, Euclidean k-nearest
/// re-selection. Stateless; the vector space is rebuilt on every call.
pub struct TfidfRanker {
    pub shortlist_size: usize,
    pub top_k: usize,
}

impl TfidfRanker {
    pub fn new(shortlist_size: usize, top_k: usize) -> Self {
        Self {
            shortlist_size,
            top_k,
        }
    }
}

impl Default for TfidfRanker {
    fn default() -> Self {
        Self::new(DEFAULT_SHORTLIST_SIZE, DEFAULT_TOP_K)
    }
}

#[async_trait]
impl JobRanker for TfidfRanker {
    async fn rank(
        &self,
        corpus: &Corpus,
        profile: &QueryProfile,
    ) -> Result<MatchReport, AppError> {
        Ok(match_jobs(corpus, profile, self.shortlist_size, self.top_k))
    }
}

/// Runs the full pipeline: stage-1 ranking, stage-2 re-selection, score
/// attachment by corpus row index, and the final descending sort by the
/// stage-1 score (selection used the stage-2 metric; the displayed order
/// deliberately does not).
pub fn match_jobs(
    corpus: &Corpus,
    profile: &QueryProfile,
    shortlist_size: usize,
    top_k: usize,
) -> MatchReport {
    let outcome = rank_jobs(corpus, profile, shortlist_size);
    let selected = reselect(&outcome.shortlist, &outcome.query_vector, top_k);

    let mut matches: Vec<ScoredJob> = selected
        .into_iter()
        .map(|index| ScoredJob {
            title: corpus.jobs()[index].title.clone(),
            score: round_percent(outcome.scores[index]),
        })
        .collect();

    matches.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    tracing::debug!(
        matches = matches.len(),
        low_confidence = outcome.low_confidence,
        "matching pipeline complete"
    );

    MatchReport {
        matches,
        low_confidence: outcome.low_confidence,
    }
}

/// Rounds a 0–100 score to 2 decimal places for display.
fn round_percent(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::JobRecord;

    fn make_corpus(rows: &[(&str, &str)]) -> Corpus {
        Corpus::new(
            rows.iter()
                .map(|(title, skills)| JobRecord {
                    title: title.to_string(),
                    key_skills: skills.to_string(),
                })
                .collect(),
        )
    }

    fn profile(skills: &[&str]) -> QueryProfile {
        QueryProfile::new(skills.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_exact_match_tops_the_report_at_100() {
        let corpus = make_corpus(&[
            ("Python Developer", "python sql"),
            ("Welder", "metal fabrication"),
        ]);
        let report = match_jobs(&corpus, &profile(&["python", "sql"]), 20, 5);

        assert_eq!(report.matches[0].title, "Python Developer");
        assert_eq!(report.matches[0].score, 100.0);
        assert!(!report.low_confidence);
    }

    #[test]
    fn test_pipeline_is_deterministic() {
        let corpus = make_corpus(&[
            ("A", "python sql django flask"),
            ("B", "python machine learning"),
            ("C", "sql data analysis"),
            ("D", "rust systems programming"),
            ("E", "python sql"),
        ]);
        let p = profile(&["python", "sql", "data analysis"]);

        let first = match_jobs(&corpus, &p, 20, 5);
        for _ in 0..5 {
            let again = match_jobs(&corpus, &p, 20, 5);
            let titles: Vec<&str> = again.matches.iter().map(|m| m.title.as_str()).collect();
            let expected: Vec<&str> = first.matches.iter().map(|m| m.title.as_str()).collect();
            assert_eq!(titles, expected);
            for (a, b) in again.matches.iter().zip(first.matches.iter()) {
                assert_eq!(a.score, b.score);
            }
        }
    }

    #[test]
    fn test_report_length_is_min_of_k_shortlist_and_corpus() {
        let corpus = make_corpus(&[("A", "python"), ("B", "sql"), ("C", "rust")]);
        let p = profile(&["python"]);

        assert_eq!(match_jobs(&corpus, &p, 20, 5).matches.len(), 3);
        assert_eq!(match_jobs(&corpus, &p, 20, 2).matches.len(), 2);
        assert_eq!(match_jobs(&corpus, &p, 1, 5).matches.len(), 1);
    }

    #[test]
    fn test_empty_corpus_yields_empty_report() {
        let report = match_jobs(&Corpus::new(vec![]), &profile(&["python"]), 20, 5);
        assert!(report.matches.is_empty());
    }

    #[test]
    fn test_empty_query_flags_low_confidence() {
        let corpus = make_corpus(&[("A", "python"), ("B", "sql")]);
        let report = match_jobs(&corpus, &profile(&[]), 20, 5);
        assert!(report.low_confidence);
        assert!(report.matches.iter().all(|m| m.score == 0.0));
    }

    #[test]
    fn test_scores_are_bounded_and_sorted_descending() {
        let corpus = make_corpus(&[
            ("A", "python sql django"),
            ("B", "python"),
            ("C", "sql"),
            ("D", "welding"),
        ]);
        let report = match_jobs(&corpus, &profile(&["python", "sql"]), 20, 5);

        for pair in report.matches.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        for m in &report.matches {
            assert!((0.0..=100.0).contains(&m.score), "score {} out of bounds", m.score);
        }
    }

    #[test]
    fn test_duplicate_titles_resolve_by_row_index() {
        // Two rows share a title but differ in skills; score attachment by
        // index keeps both distinguishable instead of first-match-by-title.
        let corpus = make_corpus(&[
            ("Developer", "python sql"),
            ("Developer", "welding"),
        ]);
        let report = match_jobs(&corpus, &profile(&["python", "sql"]), 20, 5);

        assert_eq!(report.matches.len(), 2);
        assert_eq!(report.matches[0].score, 100.0);
        assert_eq!(report.matches[1].score, 0.0);
    }

    #[tokio::test]
    async fn test_tfidf_ranker_trait_object() {
        let ranker: std::sync::Arc<dyn JobRanker> = std::sync::Arc::new(TfidfRanker::default());
        let corpus = make_corpus(&[("Python Developer", "python sql")]);
        let report = ranker
            .rank(&corpus, &profile(&["python", "sql"]))
            .await
            .unwrap();
        assert_eq!(report.matches[0].score, 100.0);
    }
}
