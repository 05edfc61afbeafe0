//! Stage 1 of the matching pipeline: TF-IDF + cosine similarity ranking.
//!
//! Produces a per-job score (cosine similarity scaled to 0–100) and a
//! shortlist of the top N jobs. The shortlist carries corpus row indices
//! and the jobs' TF-IDF vectors forward so stage 2 can re-select by
//! Euclidean distance and scores can be attached by index, never by title.

use std::cmp::Ordering;

use crate::matching::similarity::cosine_similarity;
use crate::matching::vectorizer::{normalize_key_skills, VectorSpace};
use crate::models::job::Corpus;
use crate::models::profile::QueryProfile;

/// Shortlist cap for stage 1 (the original pipeline's n_neighbors pool).
pub const DEFAULT_SHORTLIST_SIZE: usize = 20;

/// One shortlisted candidate: its corpus row and the TF-IDF vector stage 2
/// measures distance against. Scores stay in `RankOutcome::scores`, keyed
/// by row index.
#[derive(Debug, Clone)]
pub struct ShortlistEntry {
    pub index: usize,
    pub vector: Vec<f64>,
}

/// Everything stage 1 hands to stage 2.
#[derive(Debug, Clone, Default)]
pub struct RankOutcome {
    /// Score per corpus row, same order as the corpus. Percentage in [0, 100].
    pub scores: Vec<f64>,
    /// Top N rows by score, descending; ties keep corpus order.
    pub shortlist: Vec<ShortlistEntry>,
    /// Query vector in the same fitted space as the shortlist vectors.
    pub query_vector: Vec<f64>,
    /// True when the query contributed no weighted terms (all scores 0).
    pub low_confidence: bool,
}

/// Ranks every corpus row against the profile and shortlists the top
/// `shortlist_size`. An empty corpus yields an empty outcome, not an error.
pub fn rank_jobs(corpus: &Corpus, profile: &QueryProfile, shortlist_size: usize) -> RankOutcome {
    if corpus.is_empty() {
        return RankOutcome::default();
    }

    let job_documents: Vec<String> = corpus
        .jobs()
        .iter()
        .map(|job| normalize_key_skills(&job.key_skills))
        .collect();
    let query_document = profile.query_document();

    // Fit jointly over the query and all job texts, as the reference
    // pipeline does, so both sides land in one vocabulary.
    let mut fit_documents = Vec::with_capacity(job_documents.len() + 1);
    fit_documents.push(query_document.clone());
    fit_documents.extend(job_documents.iter().cloned());
    let space = VectorSpace::fit(&fit_documents);
    tracing::debug!(
        dimensions = space.dimensions(),
        jobs = corpus.len(),
        "fitted vector space"
    );

    let query_vector = space.transform(&query_document);
    let job_vectors: Vec<Vec<f64>> = job_documents.iter().map(|d| space.transform(d)).collect();

    let scores: Vec<f64> = job_vectors
        .iter()
        .map(|v| cosine_similarity(&query_vector, v) * 100.0)
        .collect();

    let low_confidence = query_vector.iter().all(|w| *w == 0.0);
    if low_confidence {
        tracing::warn!("query produced no weighted terms; ranking is low-confidence");
    }

    // Stable descending sort: ties keep original corpus order.
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].partial_cmp(&scores[a]).unwrap_or(Ordering::Equal));

    let shortlist = order
        .into_iter()
        .take(shortlist_size)
        .map(|index| ShortlistEntry {
            index,
            vector: job_vectors[index].clone(),
        })
        .collect();

    RankOutcome {
        scores,
        shortlist,
        query_vector,
        low_confidence,
    }
}
