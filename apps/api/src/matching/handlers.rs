//! Axum route handlers for the candidate-side match API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::stats::MatchStats;
use crate::matching::views::{
    job_matches, match_stats, pair_match, recommendations, JobMatch, PairMatch,
};
use crate::models::job::SkillDemandRow;
use crate::models::user::UserRow;
use crate::state::AppState;
use crate::store;

/// Skills listed by the skill demand report.
const SKILL_DEMAND_LIMIT: i64 = 10;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub job_id: Uuid,
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    pub user_id: Uuid,
    pub limit: Option<usize>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/match
///
/// Matches one user against one job.
pub async fn handle_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<PairMatch>, AppError> {
    let job = store::find_job(&state.db, request.job_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Job not found".to_string()))?;
    let user = load_user(&state, request.user_id).await?;

    Ok(Json(pair_match(&state.matcher, &user, &job)))
}

/// GET /api/match/jobs
///
/// Every approved job scored against the user, highest match first.
pub async fn handle_job_matches(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<JobMatch>>, AppError> {
    let user = load_user(&state, params.user_id).await?;
    let jobs = store::list_approved_jobs(&state.db).await?;
    debug!("Matching user {} against {} jobs", user.id, jobs.len());

    Ok(Json(job_matches(&state.matcher, &user, &jobs)))
}

/// GET /api/match/stats
pub async fn handle_match_stats(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<MatchStats>, AppError> {
    let user = load_user(&state, params.user_id).await?;
    let jobs = store::list_approved_jobs(&state.db).await?;

    Ok(Json(match_stats(&state.matcher, &user, &jobs)))
}

/// GET /api/dashboard/recommendations
///
/// Best-matching jobs with any skill overlap. `limit` defaults to the
/// configured recommendation limit.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Query(params): Query<RecommendationQuery>,
) -> Result<Json<Vec<JobMatch>>, AppError> {
    let limit = params.limit.unwrap_or(state.config.recommendation_limit);
    if limit == 0 {
        return Err(AppError::Validation(
            "limit must be a positive integer".to_string(),
        ));
    }

    let user = load_user(&state, params.user_id).await?;
    if user.skills_count() == 0 {
        return Ok(Json(vec![]));
    }
    let jobs = store::list_approved_jobs(&state.db).await?;

    Ok(Json(recommendations(&state.matcher, &user, &jobs, limit)))
}

/// GET /api/admin/skill-demand
///
/// Most-required skills across approved jobs.
pub async fn handle_skill_demand(
    State(state): State<AppState>,
) -> Result<Json<Vec<SkillDemandRow>>, AppError> {
    let rows = store::skill_demand(&state.db, SKILL_DEMAND_LIMIT).await?;
    Ok(Json(rows))
}

async fn load_user(state: &AppState, user_id: Uuid) -> Result<UserRow, AppError> {
    store::find_user(&state.db, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))
}
