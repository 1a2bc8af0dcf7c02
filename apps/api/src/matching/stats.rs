use serde::{Deserialize, Serialize};

use crate::matching::skill_matcher::{percentage, MatchResult};

/// Percentage at or above which a (non-perfect) match counts as "high".
pub const HIGH_MATCH_THRESHOLD: u32 = 70;

/// Aggregate view of one candidate against every job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchStats {
    pub total_jobs: usize,
    /// Jobs with any overlap at all (percentage > 0).
    pub total_matches: usize,
    pub perfect_matches: usize,
    /// At or above the high threshold, perfect matches excluded.
    pub high_matches: usize,
    pub user_skills_count: usize,
    /// Share of jobs with any overlap, as a rounded percentage.
    pub average_match: u32,
}

pub fn compute_match_stats<'a, I>(results: I, user_skills_count: usize) -> MatchStats
where
    I: IntoIterator<Item = &'a MatchResult>,
{
    let mut total_jobs = 0;
    let mut total_matches = 0;
    let mut perfect_matches = 0;
    let mut at_or_above_high = 0;

    for result in results {
        total_jobs += 1;
        if result.match_percentage > 0 {
            total_matches += 1;
        }
        if result.is_perfect() {
            perfect_matches += 1;
        }
        if result.match_percentage >= HIGH_MATCH_THRESHOLD {
            at_or_above_high += 1;
        }
    }

    MatchStats {
        total_jobs,
        total_matches,
        perfect_matches,
        high_matches: at_or_above_high - perfect_matches,
        user_skills_count,
        average_match: percentage(total_matches, total_jobs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(match_percentage: u32) -> MatchResult {
        MatchResult {
            match_percentage,
            matched_skills: vec![],
            missing_skills: vec![],
        }
    }

    #[test]
    fn test_perfect_matches_excluded_from_high() {
        let results: Vec<MatchResult> = [100, 100, 70, 0].into_iter().map(result).collect();
        let stats = compute_match_stats(&results, 4);

        assert_eq!(stats.total_jobs, 4);
        assert_eq!(stats.perfect_matches, 2);
        assert_eq!(stats.high_matches, 1);
        assert_eq!(stats.total_matches, 3);
        assert_eq!(stats.average_match, 75);
        assert_eq!(stats.user_skills_count, 4);
    }

    #[test]
    fn test_high_threshold_is_inclusive() {
        let results: Vec<MatchResult> = [69, 70, 99].into_iter().map(result).collect();
        let stats = compute_match_stats(&results, 2);
        assert_eq!(stats.high_matches, 2);
        assert_eq!(stats.perfect_matches, 0);
    }

    #[test]
    fn test_no_jobs_is_all_zero() {
        let stats = compute_match_stats(&Vec::<MatchResult>::new(), 3);
        assert_eq!(stats.total_jobs, 0);
        assert_eq!(stats.total_matches, 0);
        assert_eq!(stats.average_match, 0);
        assert_eq!(stats.user_skills_count, 3);
    }

    #[test]
    fn test_average_rounds_half_up() {
        // 1 of 8 jobs overlaps → 12.5 → 13
        let mut results = vec![result(40)];
        results.extend((0..7).map(|_| result(0)));
        assert_eq!(compute_match_stats(&results, 1).average_match, 13);
    }

    #[test]
    fn test_serializes_camel_case() {
        let stats = compute_match_stats(&[result(100)], 1);
        let value = serde_json::to_value(stats).unwrap();
        assert_eq!(value["perfectMatches"], 1);
        assert_eq!(value["averageMatch"], 100);
        assert_eq!(value["userSkillsCount"], 1);
    }
}
