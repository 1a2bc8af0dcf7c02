//! Recruiter-side match views: applicants for one job ranked by skill match.
//!
//! These views publish the missing skills twice, as `missingSkills` and as
//! `skillGap`. Both carry the same computed list.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::matching::ranking::rank_candidates;
use crate::matching::skill_matcher::{MatchResult, SkillMatcher};
use crate::matching::views::JobSummary;
use crate::models::job::{ApplicantRow, JobRow};
use crate::models::user::UserRow;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MatchScore {
    pub percentage: u32,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub skill_gap: Vec<String>,
}

impl From<MatchResult> for MatchScore {
    fn from(result: MatchResult) -> Self {
        MatchScore {
            percentage: result.match_percentage,
            matched_skills: result.matched_skills,
            skill_gap: result.missing_skills.clone(),
            missing_skills: result.missing_skills,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedApplicant {
    pub application_id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    pub skills: Vec<String>,
    pub status: String,
    pub applied_at: DateTime<Utc>,
    pub skill_gap: Vec<String>,
    pub match_score: MatchScore,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobApplicants {
    pub job: JobSummary,
    pub applicants: Vec<RankedApplicant>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantSummary {
    pub id: Uuid,
    pub name: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantMatchScore {
    pub job: JobSummary,
    pub applicant: ApplicantSummary,
    pub match_score: MatchScore,
}

/// Applicants of `job` ordered by descending match; equal scores keep
/// application order.
pub fn rank_applicants(
    matcher: &SkillMatcher,
    job: &JobRow,
    applicants: Vec<ApplicantRow>,
) -> JobApplicants {
    let applicants = rank_candidates(matcher, &job.skills_required, applicants, |a| {
        a.skills.as_deref()
    })
    .into_iter()
    .map(|ranked| {
        let applicant = ranked.item;
        let match_score = MatchScore::from(ranked.result);
        RankedApplicant {
            application_id: applicant.application_id,
            user_id: applicant.user_id,
            name: applicant.name,
            email: applicant.email,
            skills: applicant.skills.unwrap_or_default(),
            status: applicant.status,
            applied_at: applicant.applied_at,
            skill_gap: match_score.skill_gap.clone(),
            match_score,
        }
    })
    .collect();

    JobApplicants {
        job: JobSummary::from(job),
        applicants,
    }
}

pub fn applicant_match_score(
    matcher: &SkillMatcher,
    job: &JobRow,
    applicant: &UserRow,
) -> ApplicantMatchScore {
    ApplicantMatchScore {
        job: JobSummary::from(job),
        applicant: ApplicantSummary {
            id: applicant.id,
            name: applicant.name.clone(),
            skills: applicant.skills.clone().unwrap_or_default(),
        },
        match_score: matcher
            .evaluate(applicant.skills(), &job.skills_required)
            .into(),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    use crate::models::job::{ApplicantRow, JobRow};

    pub fn applicant(job: &JobRow, name: &str, skills: &[&str], minutes_ago: i64) -> ApplicantRow {
        ApplicantRow {
            application_id: Uuid::new_v4(),
            job_id: job.id,
            job_title: job.title.clone(),
            user_id: Uuid::new_v4(),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            skills: Some(skills.iter().map(|s| s.to_string()).collect()),
            status: "pending".to_string(),
            applied_at: Utc::now() - Duration::minutes(minutes_ago),
        }
    }
}
