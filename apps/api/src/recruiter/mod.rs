// Recruiter views: applicant ranking by skill match, per-pair match scores,
// and hiring-funnel analytics over the recruiter's own jobs.

pub mod analytics;
pub mod applicants;
pub mod handlers;
