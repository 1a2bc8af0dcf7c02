use crate::matching::skill_matcher::{MatchResult, SkillMatcher};

/// An item paired with its match result.
#[derive(Debug, Clone)]
pub struct Ranked<T> {
    pub item: T,
    pub result: MatchResult,
}

/// Ranks jobs for one candidate by descending match percentage.
pub fn rank_jobs<J, R>(
    matcher: &SkillMatcher,
    candidate: Option<&[String]>,
    jobs: Vec<J>,
    required_of: R,
) -> Vec<Ranked<J>>
where
    R: Fn(&J) -> &[String],
{
    let mut ranked: Vec<Ranked<J>> = jobs
        .into_iter()
        .map(|item| {
            let result = matcher.evaluate(candidate, required_of(&item));
            Ranked { item, result }
        })
        .collect();
    sort_ranked(&mut ranked);
    ranked
}

/// Ranks candidates against one job by descending match percentage.
pub fn rank_candidates<A, C>(
    matcher: &SkillMatcher,
    required: &[String],
    candidates: Vec<A>,
    candidate_of: C,
) -> Vec<Ranked<A>>
where
    C: Fn(&A) -> Option<&[String]>,
{
    let mut ranked: Vec<Ranked<A>> = candidates
        .into_iter()
        .map(|item| {
            let result = matcher.evaluate(candidate_of(&item), required);
            Ranked { item, result }
        })
        .collect();
    sort_ranked(&mut ranked);
    ranked
}

/// `sort_by` is stable, so equal percentages keep their input order.
pub fn sort_ranked<T>(ranked: &mut [Ranked<T>]) {
    ranked.sort_by(|a, b| b.result.match_percentage.cmp(&a.result.match_percentage));
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Job {
        name: &'static str,
        skills: Vec<String>,
    }

    fn job(name: &'static str, skills: &[&str]) -> Job {
        Job {
            name,
            skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn names(ranked: &[Ranked<Job>]) -> Vec<&'static str> {
        ranked.iter().map(|r| r.item.name).collect()
    }

    #[test]
    fn test_jobs_sorted_by_descending_match() {
        let candidate = vec!["Rust".to_string(), "SQL".to_string()];
        let jobs = vec![
            job("none", &["Haskell"]),
            job("half", &["Rust", "Kafka"]),
            job("full", &["Rust", "SQL"]),
        ];

        let ranked = rank_jobs(
            &SkillMatcher::default(),
            Some(candidate.as_slice()),
            jobs,
            |j| j.skills.as_slice(),
        );

        assert_eq!(names(&ranked), vec!["full", "half", "none"]);
        let percentages: Vec<u32> = ranked.iter().map(|r| r.result.match_percentage).collect();
        assert_eq!(percentages, vec![100, 50, 0]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let candidate = vec!["Go".to_string()];
        let jobs = vec![
            job("first", &["Go", "C"]),
            job("top", &["Go"]),
            job("second", &["Go", "Zig"]),
            job("third", &["C", "Go"]),
        ];

        let ranked = rank_jobs(
            &SkillMatcher::default(),
            Some(candidate.as_slice()),
            jobs,
            |j| j.skills.as_slice(),
        );

        assert_eq!(names(&ranked), vec!["top", "first", "second", "third"]);
    }

    #[test]
    fn test_candidates_ranked_against_one_job() {
        let required = vec!["React".to_string(), "CSS".to_string()];
        let applicants = vec![
            job("no-skills", &[]),
            job("one", &["react"]),
            job("both", &["React", "CSS"]),
        ];

        let ranked = rank_candidates(&SkillMatcher::default(), &required, applicants, |a| {
            Some(a.skills.as_slice())
        });

        assert_eq!(names(&ranked), vec!["both", "one", "no-skills"]);
        assert_eq!(ranked[2].result.missing_skills, required);
    }

    #[test]
    fn test_empty_input_ranks_to_empty() {
        let ranked = rank_jobs(&SkillMatcher::default(), None, Vec::<Job>::new(), |j| {
            j.skills.as_slice()
        });
        assert!(ranked.is_empty());
    }
}
