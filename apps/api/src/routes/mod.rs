pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers as matching;
use crate::recruiter::handlers as recruiter;
use crate::resume::handlers as resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Candidate-side matching
        .route("/api/match", post(matching::handle_match))
        .route("/api/match/jobs", get(matching::handle_job_matches))
        .route("/api/match/stats", get(matching::handle_match_stats))
        .route(
            "/api/dashboard/recommendations",
            get(matching::handle_recommendations),
        )
        // Recruiter
        .route(
            "/api/recruiter/jobs/:id/applicants",
            get(recruiter::handle_job_applicants),
        )
        .route(
            "/api/recruiter/match-score/:job_id/:applicant_id",
            get(recruiter::handle_match_score),
        )
        .route("/api/recruiter/analytics", get(recruiter::handle_analytics))
        // Resume
        .route("/api/resume/skills", post(resume::handle_extract_skills))
        // Admin
        .route("/api/admin/skill-demand", get(matching::handle_skill_demand))
        .with_state(state)
}
