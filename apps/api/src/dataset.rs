use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::models::job::{Corpus, JobRecord};

/// Loads the job corpus from a JSON dataset file (an array of
/// `{"title", "key_skills"}` objects). Called once at startup; the
/// resulting corpus is immutable for the lifetime of the process.
pub fn load_corpus(path: &Path) -> Result<Corpus> {
    info!("Loading job dataset from {}", path.display());

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("could not read dataset file {}", path.display()))?;
    let corpus = parse_corpus(&raw)
        .with_context(|| format!("could not parse dataset file {}", path.display()))?;

    info!("Loaded {} job records", corpus.len());
    Ok(corpus)
}

fn parse_corpus(raw: &str) -> Result<Corpus> {
    let jobs: Vec<JobRecord> = serde_json::from_str(raw)?;
    Ok(Corpus::new(jobs))
}
