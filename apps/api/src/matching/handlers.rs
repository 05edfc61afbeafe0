//! Axum route handlers for the Matching API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extraction::resume::extract_text;
use crate::extraction::skills::extract_skills;
use crate::models::job::MatchReport;
use crate::models::profile::QueryProfile;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SkillsMatchRequest {
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub skills: Vec<String>,
    pub report: MatchReport,
}

#[derive(Debug, Serialize)]
pub struct JobsSummaryResponse {
    pub total: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match
///
/// Accepts a multipart upload with a `resume` PDF field, extracts text and
/// skills, and returns the ranked matches. An upload from which no skills
/// can be extracted still ranks (degenerate zero-vector behavior) but is
/// flagged low-confidence in the report.
pub async fn handle_match_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<MatchResponse>, AppError> {
    let mut resume_bytes = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        if field.name() == Some("resume") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("could not read upload: {e}")))?;
            resume_bytes = Some(bytes);
        }
    }

    let resume_bytes = resume_bytes
        .ok_or_else(|| AppError::Validation("multipart field 'resume' is required".to_string()))?;
    if resume_bytes.is_empty() {
        return Err(AppError::Validation("uploaded resume is empty".to_string()));
    }

    let text = extract_text(&resume_bytes)?;
    let profile = extract_skills(&text);

    let report = state.ranker.rank(&state.corpus, &profile).await?;

    Ok(Json(MatchResponse {
        skills: profile.skills().to_vec(),
        report,
    }))
}

/// POST /api/v1/match/skills
///
/// Ranks directly from an already-known skill list, skipping extraction.
/// An empty list is allowed and produces a low-confidence report.
pub async fn handle_match_skills(
    State(state): State<AppState>,
    Json(request): Json<SkillsMatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    let profile = QueryProfile::new(request.skills);

    let report = state.ranker.rank(&state.corpus, &profile).await?;

    Ok(Json(MatchResponse {
        skills: profile.skills().to_vec(),
        report,
    }))
}

/// GET /api/v1/jobs
///
/// Corpus summary, mostly useful as a smoke check that the dataset loaded.
pub async fn handle_jobs_summary(
    State(state): State<AppState>,
) -> Result<Json<JobsSummaryResponse>, AppError> {
    Ok(Json(JobsSummaryResponse {
        total: state.corpus.len(),
    }))
}
