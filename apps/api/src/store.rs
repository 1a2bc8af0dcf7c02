//! Row loaders for the job board tables. Matching never touches the pool
//! directly; handlers load rows here and pass plain slices to the matcher.

use sqlx::{PgPool, Result};
use tracing::info;
use uuid::Uuid;

use crate::models::job::{ApplicantRow, JobRow, SkillDemandRow};
use crate::models::user::UserRow;

const APPLICANT_SELECT: &str = r#"
    SELECT a.id AS application_id, a.job_id, j.title AS job_title,
           u.id AS user_id, u.name, u.email, u.skills,
           a.status, a.applied_at
    FROM applications a
    JOIN users u ON u.id = a.user_id
    JOIN jobs j ON j.id = a.job_id
"#;

pub async fn find_user(pool: &PgPool, user_id: Uuid) -> Result<Option<UserRow>> {
    Ok(
        sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await?,
    )
}

pub async fn find_job(pool: &PgPool, job_id: Uuid) -> Result<Option<JobRow>> {
    Ok(
        sqlx::query_as::<_, JobRow>("SELECT * FROM jobs WHERE id = $1")
            .bind(job_id)
            .fetch_optional(pool)
            .await?,
    )
}

/// Every approved job, newest first. This is the job set the candidate-side
/// match views rank over.
pub async fn list_approved_jobs(pool: &PgPool) -> Result<Vec<JobRow>> {
    Ok(sqlx::query_as::<_, JobRow>(
        "SELECT * FROM jobs WHERE approval_status = 'approved' ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await?)
}

pub async fn list_jobs_posted_by(pool: &PgPool, recruiter_id: Uuid) -> Result<Vec<JobRow>> {
    Ok(sqlx::query_as::<_, JobRow>(
        "SELECT * FROM jobs WHERE posted_by = $1 ORDER BY created_at DESC",
    )
    .bind(recruiter_id)
    .fetch_all(pool)
    .await?)
}

/// Applicants for one job in application order.
pub async fn list_job_applicants(pool: &PgPool, job_id: Uuid) -> Result<Vec<ApplicantRow>> {
    let query = format!("{APPLICANT_SELECT} WHERE a.job_id = $1 ORDER BY a.applied_at ASC");
    Ok(sqlx::query_as::<_, ApplicantRow>(&query)
        .bind(job_id)
        .fetch_all(pool)
        .await?)
}

/// Applications across every job a recruiter posted.
pub async fn list_recruiter_applications(
    pool: &PgPool,
    recruiter_id: Uuid,
) -> Result<Vec<ApplicantRow>> {
    let query = format!("{APPLICANT_SELECT} WHERE j.posted_by = $1 ORDER BY a.applied_at ASC");
    Ok(sqlx::query_as::<_, ApplicantRow>(&query)
        .bind(recruiter_id)
        .fetch_all(pool)
        .await?)
}

/// Replaces a user's declared skills. Returns false when the user does not exist.
pub async fn update_user_skills(pool: &PgPool, user_id: Uuid, skills: &[String]) -> Result<bool> {
    let result = sqlx::query("UPDATE users SET skills = $1 WHERE id = $2")
        .bind(skills)
        .bind(user_id)
        .execute(pool)
        .await?;

    let updated = result.rows_affected() > 0;
    if updated {
        info!("Stored {} extracted skills for user {user_id}", skills.len());
    }
    Ok(updated)
}

/// Most-required skills across approved jobs.
pub async fn skill_demand(pool: &PgPool, limit: i64) -> Result<Vec<SkillDemandRow>> {
    Ok(sqlx::query_as::<_, SkillDemandRow>(
        r#"
        SELECT skill, COUNT(*) AS count
        FROM jobs, unnest(skills_required) AS skill
        WHERE approval_status = 'approved'
        GROUP BY skill
        ORDER BY count DESC, skill ASC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await?)
}
