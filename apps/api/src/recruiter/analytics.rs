use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::job::{ApplicantRow, JobRow};

const RECENT_APPLICATIONS: usize = 5;

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub total: usize,
    pub shortlisted: usize,
    pub rejected: usize,
    pub pending: usize,
    pub accepted: usize,
}

impl StatusCounts {
    pub fn tally<'a>(applications: impl IntoIterator<Item = &'a ApplicantRow>) -> Self {
        let mut counts = StatusCounts::default();
        for app in applications {
            counts.total += 1;
            match app.status.as_str() {
                "shortlisted" => counts.shortlisted += 1,
                "rejected" => counts.rejected += 1,
                "pending" => counts.pending += 1,
                "accepted" => counts.accepted += 1,
                _ => {}
            }
        }
        counts
    }

    /// Shortlisted share as a percentage with one decimal place.
    pub fn conversion_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let rate = self.shortlisted as f64 / self.total as f64 * 100.0;
        (rate * 10.0).round() / 10.0
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub total_jobs: usize,
    pub total_applications: usize,
    pub shortlisted: usize,
    pub rejected: usize,
    pub pending: usize,
    pub accepted: usize,
    pub conversion_rate: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPerformance {
    pub job_id: Uuid,
    pub title: String,
    pub total_applicants: usize,
    pub shortlisted: usize,
    pub rejected: usize,
    pub pending: usize,
    pub posted_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentApplication {
    pub application_id: Uuid,
    pub applicant_name: String,
    pub job_title: String,
    pub status: String,
    pub applied_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecruiterAnalytics {
    pub overview: Overview,
    pub job_performance: Vec<JobPerformance>,
    pub recent_applications: Vec<RecentApplication>,
}

pub fn compute_recruiter_analytics(
    jobs: &[JobRow],
    applications: &[ApplicantRow],
) -> RecruiterAnalytics {
    let counts = StatusCounts::tally(applications);

    let job_performance = jobs
        .iter()
        .map(|job| {
            let per_job = StatusCounts::tally(applications.iter().filter(|a| a.job_id == job.id));
            JobPerformance {
                job_id: job.id,
                title: job.title.clone(),
                total_applicants: per_job.total,
                shortlisted: per_job.shortlisted,
                rejected: per_job.rejected,
                pending: per_job.pending,
                posted_date: job.created_at,
            }
        })
        .collect();

    let mut recent: Vec<&ApplicantRow> = applications.iter().collect();
    recent.sort_by(|a, b| b.applied_at.cmp(&a.applied_at));
    let recent_applications = recent
        .into_iter()
        .take(RECENT_APPLICATIONS)
        .map(|app| RecentApplication {
            application_id: app.application_id,
            applicant_name: app.name.clone(),
            job_title: app.job_title.clone(),
            status: app.status.clone(),
            applied_at: app.applied_at,
        })
        .collect();

    RecruiterAnalytics {
        overview: Overview {
            total_jobs: jobs.len(),
            total_applications: counts.total,
            shortlisted: counts.shortlisted,
            rejected: counts.rejected,
            pending: counts.pending,
            accepted: counts.accepted,
            conversion_rate: counts.conversion_rate(),
        },
        job_performance,
        recent_applications,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::views::fixtures::job;
    use crate::recruiter::applicants::fixtures::applicant;

    fn with_status(mut row: ApplicantRow, status: &str) -> ApplicantRow {
        row.status = status.to_string();
        row
    }

    #[test]
    fn test_conversion_rate_one_decimal() {
        let counts = StatusCounts {
            total: 3,
            shortlisted: 1,
            ..Default::default()
        };
        assert_eq!(counts.conversion_rate(), 33.3);
        assert_eq!(StatusCounts::default().conversion_rate(), 0.0);
    }

    #[test]
    fn test_overview_and_per_job_counts() {
        let a = job("A", &["Rust"]);
        let b = job("B", &["Go"]);
        let apps = vec![
            with_status(applicant(&a, "P1", &[], 50), "shortlisted"),
            with_status(applicant(&a, "P2", &[], 40), "rejected"),
            applicant(&a, "P3", &[], 30),
            with_status(applicant(&b, "P4", &[], 20), "accepted"),
        ];

        let analytics = compute_recruiter_analytics(&[a.clone(), b.clone()], &apps);

        assert_eq!(analytics.overview.total_jobs, 2);
        assert_eq!(analytics.overview.total_applications, 4);
        assert_eq!(analytics.overview.shortlisted, 1);
        assert_eq!(analytics.overview.accepted, 1);
        assert_eq!(analytics.overview.conversion_rate, 25.0);

        let perf_a = &analytics.job_performance[0];
        assert_eq!(perf_a.job_id, a.id);
        assert_eq!(perf_a.total_applicants, 3);
        assert_eq!(perf_a.pending, 1);
        assert_eq!(analytics.job_performance[1].total_applicants, 1);
    }

    #[test]
    fn test_recent_applications_newest_first_capped() {
        let j = job("A", &["Rust"]);
        let apps: Vec<ApplicantRow> = (0..7)
            .map(|i| applicant(&j, &format!("P{i}"), &[], 10 * (i + 1)))
            .collect();

        let analytics = compute_recruiter_analytics(std::slice::from_ref(&j), &apps);
        let names: Vec<&str> = analytics
            .recent_applications
            .iter()
            .map(|r| r.applicant_name.as_str())
            .collect();
        assert_eq!(names, vec!["P0", "P1", "P2", "P3", "P4"]);
    }
}
