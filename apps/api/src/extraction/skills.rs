//! Skill extraction — deterministic lexicon scan over résumé text.
//!
//! Replaces the upstream resume-parser dependency with a fixed lexicon of
//! technical skills matched against the tokenized résumé text. Multi-word
//! entries match on the joined token stream, so "machine learning" is found
//! across line breaks and punctuation.

use crate::matching::vectorizer::tokenize;
use crate::models::profile::QueryProfile;

/// Lexicon of recognizable skills, lowercase. Order here determines the
/// order of extracted skills (each term is checked once, so the result is
/// naturally deduplicated).
const SKILL_LEXICON: &[&str] = &[
    "python",
    "java",
    "javascript",
    "typescript",
    "rust",
    "go",
    "c",
    "c++",
    "c#",
    "ruby",
    "php",
    "scala",
    "kotlin",
    "swift",
    "r",
    "sql",
    "mysql",
    "postgresql",
    "mongodb",
    "redis",
    "elasticsearch",
    "django",
    "flask",
    "fastapi",
    "spring",
    "react",
    "angular",
    "vue",
    "node",
    "express",
    "html",
    "css",
    "machine learning",
    "deep learning",
    "data analysis",
    "data science",
    "data engineering",
    "natural language processing",
    "computer vision",
    "pandas",
    "numpy",
    "scikit learn",
    "tensorflow",
    "pytorch",
    "keras",
    "excel",
    "tableau",
    "power bi",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "terraform",
    "jenkins",
    "git",
    "linux",
    "bash",
    "ci cd",
    "rest",
    "graphql",
    "microservices",
    "agile",
    "scrum",
    "testing",
    "selenium",
    "spark",
    "hadoop",
    "kafka",
    "airflow",
    "etl",
];

/// Scans résumé text for lexicon skills and returns them as a profile.
/// An empty result is valid; the caller decides how to signal low
/// confidence downstream.
pub fn extract_skills(text: &str) -> QueryProfile {
    // Single token stream with sentinel spaces so containment checks are
    // word-bounded: " machine learning " never matches inside other words.
    let stream = format!(" {} ", tokenize(text).join(" "));

    let skills = SKILL_LEXICON
        .iter()
        .filter(|term| {
            let needle = format!(" {} ", tokenize(term).join(" "));
            stream.contains(&needle)
        })
        .map(|term| term.to_string())
        .collect();

    QueryProfile::new(skills)
}
