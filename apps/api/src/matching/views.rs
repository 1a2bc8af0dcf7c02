//! Response shapes for the candidate-side match views, built from loaded rows.

use serde::Serialize;
use uuid::Uuid;

use crate::matching::ranking::rank_jobs;
use crate::matching::skill_matcher::{MatchResult, SkillMatcher};
use crate::matching::stats::{compute_match_stats, MatchStats};
use crate::models::job::JobRow;
use crate::models::user::UserRow;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JobSummary {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub skills_required: Vec<String>,
}

impl From<&JobRow> for JobSummary {
    fn from(job: &JobRow) -> Self {
        JobSummary {
            id: job.id,
            title: job.title.clone(),
            company: job.company.clone(),
            skills_required: job.skills_required.clone(),
        }
    }
}

/// One user against one job.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairMatch {
    #[serde(flatten)]
    pub result: MatchResult,
    pub job_id: Uuid,
    pub job_title: String,
    pub user_id: Uuid,
    pub user_name: String,
    pub total_job_skills: usize,
    pub total_user_skills: usize,
}

/// One entry of a ranked job list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatch {
    pub job: JobSummary,
    #[serde(flatten)]
    pub result: MatchResult,
}

pub fn pair_match(matcher: &SkillMatcher, user: &UserRow, job: &JobRow) -> PairMatch {
    PairMatch {
        result: matcher.evaluate(user.skills(), &job.skills_required),
        job_id: job.id,
        job_title: job.title.clone(),
        user_id: user.id,
        user_name: user.name.clone(),
        total_job_skills: job.skills_required.len(),
        total_user_skills: user.skills_count(),
    }
}

/// Every job scored for `user`, highest match first.
pub fn job_matches(matcher: &SkillMatcher, user: &UserRow, jobs: &[JobRow]) -> Vec<JobMatch> {
    rank_jobs(matcher, user.skills(), jobs.iter().collect(), |job| {
        job.skills_required.as_slice()
    })
    .into_iter()
    .map(|ranked| JobMatch {
        job: JobSummary::from(ranked.item),
        result: ranked.result,
    })
    .collect()
}

pub fn match_stats(matcher: &SkillMatcher, user: &UserRow, jobs: &[JobRow]) -> MatchStats {
    let results: Vec<MatchResult> = jobs
        .iter()
        .map(|job| matcher.evaluate(user.skills(), &job.skills_required))
        .collect();
    compute_match_stats(&results, user.skills_count())
}

/// Top `limit` jobs with any overlap. A user without declared skills gets
/// nothing rather than a list of zero-percent jobs.
pub fn recommendations(
    matcher: &SkillMatcher,
    user: &UserRow,
    jobs: &[JobRow],
    limit: usize,
) -> Vec<JobMatch> {
    if user.skills_count() == 0 {
        return vec![];
    }
    job_matches(matcher, user, jobs)
        .into_iter()
        .filter(|m| m.result.match_percentage > 0)
        .take(limit)
        .collect()
}


#[cfg(test)]
mod tests {
    use super::fixtures::{job, user, user_without_skills};
    use super::*;

    #[test]
    fn test_pair_match_wire_shape() {
        let u = user(&["JavaScript", "React", "Node.js"]);
        let j = job("Frontend", &["JavaScript", "React", "CSS", "HTML"]);

        let value = serde_json::to_value(pair_match(&SkillMatcher::default(), &u, &j)).unwrap();

        assert_eq!(value["matchPercentage"], 50);
        assert_eq!(value["matchedSkills"], serde_json::json!(["JavaScript", "React"]));
        assert_eq!(value["missingSkills"], serde_json::json!(["CSS", "HTML"]));
        assert_eq!(value["jobTitle"], "Frontend");
        assert_eq!(value["userName"], "Ada");
        assert_eq!(value["totalJobSkills"], 4);
        assert_eq!(value["totalUserSkills"], 3);
        assert_eq!(value["jobId"], j.id.to_string());
    }

    #[test]
    fn test_pair_match_user_without_skills() {
        let u = user_without_skills();
        let j = job("Backend", &["Rust"]);
        let m = pair_match(&SkillMatcher::default(), &u, &j);
        assert_eq!(m.result.match_percentage, 0);
        assert_eq!(m.result.missing_skills, vec!["Rust".to_string()]);
        assert_eq!(m.total_user_skills, 0);
    }

    #[test]
    fn test_job_matches_sorted_and_shaped() {
        let u = user(&["Rust", "SQL"]);
        let jobs = vec![
            job("zero", &["Cobol"]),
            job("half", &["Rust", "Kafka"]),
            job("full", &["Rust", "SQL"]),
        ];

        let matches = job_matches(&SkillMatcher::default(), &u, &jobs);
        let titles: Vec<&str> = matches.iter().map(|m| m.job.title.as_str()).collect();
        assert_eq!(titles, vec!["full", "half", "zero"]);

        let value = serde_json::to_value(&matches[1]).unwrap();
        assert_eq!(value["job"]["skillsRequired"], serde_json::json!(["Rust", "Kafka"]));
        assert_eq!(value["job"]["company"], "Acme");
        assert_eq!(value["matchPercentage"], 50);
        assert_eq!(value["missingSkills"], serde_json::json!(["Kafka"]));
    }

    #[test]
    fn test_match_stats_over_jobs() {
        let u = user(&["Rust", "SQL", "Docker"]);
        let jobs = vec![
            job("a", &["Rust"]),
            job("b", &["Rust", "SQL", "Docker"]),
            job("c", &["Rust", "SQL", "Docker", "Kafka"]),
            job("d", &["Cobol"]),
        ];

        let stats = match_stats(&SkillMatcher::default(), &u, &jobs);
        assert_eq!(stats.total_jobs, 4);
        assert_eq!(stats.perfect_matches, 2);
        assert_eq!(stats.high_matches, 1); // 75%
        assert_eq!(stats.total_matches, 3);
        assert_eq!(stats.user_skills_count, 3);
    }

    #[test]
    fn test_recommendations_drop_zero_and_respect_limit() {
        let u = user(&["Go"]);
        let jobs = vec![
            job("none", &["Ruby"]),
            job("half", &["Go", "C"]),
            job("full", &["Go"]),
            job("third", &["Go", "C", "Zig"]),
        ];

        let recs = recommendations(&SkillMatcher::default(), &u, &jobs, 2);
        let titles: Vec<&str> = recs.iter().map(|m| m.job.title.as_str()).collect();
        assert_eq!(titles, vec!["full", "half"]);
    }

    #[test]
    fn test_recommendations_empty_without_skills() {
        let u = user(&[]);
        let jobs = vec![job("any", &["Go"])];
        assert!(recommendations(&SkillMatcher::default(), &u, &jobs, 10).is_empty());
    }
}
