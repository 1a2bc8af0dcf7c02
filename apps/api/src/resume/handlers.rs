//! Axum route handlers for resume skill extraction.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::resume::extraction::{analyze_resume, ExtractionReport};
use crate::state::AppState;
use crate::store;

#[derive(Debug, Deserialize)]
pub struct ExtractSkillsRequest {
    pub user_id: Uuid,
    pub resume_text: String,
}

/// POST /api/resume/skills
///
/// Extracts vocabulary skills from resume text and stores them as the user's
/// declared skills, replacing any previous list.
pub async fn handle_extract_skills(
    State(state): State<AppState>,
    Json(request): Json<ExtractSkillsRequest>,
) -> Result<Json<ExtractionReport>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }

    let report = analyze_resume(&state.vocabulary, &request.resume_text);

    let updated =
        store::update_user_skills(&state.db, request.user_id, &report.extracted_skills).await?;
    if !updated {
        return Err(AppError::NotFound(format!(
            "User {} not found",
            request.user_id
        )));
    }

    info!(
        "Extracted {} skills (score {}) for user {}",
        report.extracted_skills.len(),
        report.resume_score,
        request.user_id
    );

    Ok(Json(report))
}
