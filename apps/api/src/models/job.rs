use serde::{Deserialize, Serialize};

/// One row of the static job dataset. Immutable after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    pub title: String,
    /// Raw key-skills text as exported from the dataset, pipe-separated
    /// (e.g. "python| sql| django").
    pub key_skills: String,
}

/// Immutable job corpus, loaded once at startup and shared via `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    jobs: Vec<JobRecord>,
}

impl Corpus {
    pub fn new(jobs: Vec<JobRecord>) -> Self {
        Self { jobs }
    }

    pub fn jobs(&self) -> &[JobRecord] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

/// One ranked result: job title plus its stage-1 cosine score as a
/// percentage in [0, 100], rounded to 2 decimals at the output boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredJob {
    pub title: String,
    pub score: f64,
}

/// Final output of the matching pipeline: the re-selected jobs sorted
/// descending by stage-1 score. `low_confidence` is set when the query
/// produced no usable skill tokens (every score is 0 in that case).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub matches: Vec<ScoredJob>,
    pub low_confidence: bool,
}
