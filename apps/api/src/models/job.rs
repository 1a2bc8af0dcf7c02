use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct JobRow {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub skills_required: Vec<String>,
    /// "approved" | "pending" | "rejected"
    pub approval_status: String,
    pub posted_by: Uuid,
    pub created_at: DateTime<Utc>,
}

/// One application to a job, joined with the applicant's profile.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantRow {
    pub application_id: Uuid,
    pub job_id: Uuid,
    pub job_title: String,
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    pub skills: Option<Vec<String>>,
    /// "pending" | "reviewed" | "shortlisted" | "rejected" | "accepted"
    pub status: String,
    pub applied_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SkillDemandRow {
    pub skill: String,
    pub count: i64,
}
