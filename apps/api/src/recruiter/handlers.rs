//! Axum route handlers for the recruiter API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::handlers::UserIdQuery;
use crate::models::job::JobRow;
use crate::recruiter::analytics::{compute_recruiter_analytics, RecruiterAnalytics};
use crate::recruiter::applicants::{
    applicant_match_score, rank_applicants, ApplicantMatchScore, JobApplicants,
};
use crate::state::AppState;
use crate::store;

/// GET /api/recruiter/jobs/:id/applicants
///
/// Applicants of a job the caller posted, ranked by skill match.
pub async fn handle_job_applicants(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<JobApplicants>, AppError> {
    let job = store::find_job(&state.db, job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;
    ensure_owner(&job, params.user_id)?;

    let applicants = store::list_job_applicants(&state.db, job_id).await?;
    debug!("Ranking {} applicants for job {job_id}", applicants.len());

    Ok(Json(rank_applicants(&state.matcher, &job, applicants)))
}

/// GET /api/recruiter/match-score/:job_id/:applicant_id
pub async fn handle_match_score(
    State(state): State<AppState>,
    Path((job_id, applicant_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ApplicantMatchScore>, AppError> {
    let job = store::find_job(&state.db, job_id).await?;
    let applicant = store::find_user(&state.db, applicant_id).await?;

    let (Some(job), Some(applicant)) = (job, applicant) else {
        return Err(AppError::NotFound(
            "Job or applicant not found".to_string(),
        ));
    };

    Ok(Json(applicant_match_score(&state.matcher, &job, &applicant)))
}

/// GET /api/recruiter/analytics
pub async fn handle_analytics(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<RecruiterAnalytics>, AppError> {
    let jobs = store::list_jobs_posted_by(&state.db, params.user_id).await?;
    let applications = store::list_recruiter_applications(&state.db, params.user_id).await?;
    Ok(Json(compute_recruiter_analytics(&jobs, &applications)))
}

fn ensure_owner(job: &JobRow, user_id: Uuid) -> Result<(), AppError> {
    if job.posted_by != user_id {
        return Err(AppError::Forbidden(
            "Not authorized to view these applicants".to_string(),
        ));
    }
    Ok(())
}
