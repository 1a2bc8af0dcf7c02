//! Skill Matcher — measures how well a candidate's declared skills cover a
//! job's required skills.
//!
//! Pure and total: no I/O, no errors, safe to call from any number of tasks.
//!
//! Algorithm:
//! 1. Lower-case both lists (output labels keep their original casing).
//! 2. A required skill `r` is satisfied by a candidate skill `c` when either
//!    contains the other as a substring. "Java" and "JavaScript" satisfy each
//!    other; that permissiveness is deliberate and must stay reproducible.
//! 3. matched = required skills satisfied by at least one candidate skill,
//!    missing = the rest. Duplicates are kept on both sides.
//! 4. percentage = round_half_up(matched / required × 100), or 0 when the job
//!    requires nothing.
//! 5. An empty or absent candidate list short-circuits to 0% with every
//!    required skill missing.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Configuration
// ────────────────────────────────────────────────────────────────────────────

/// How empty and whitespace-only skill labels take part in matching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlankSkillPolicy {
    /// Blank candidate skills are dropped before comparison and blank
    /// required skills can never be satisfied.
    #[default]
    Ignore,
    /// Plain substring semantics: an empty label is contained in every label.
    Literal,
}

impl std::str::FromStr for BlankSkillPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ignore" => Ok(BlankSkillPolicy::Ignore),
            "literal" => Ok(BlankSkillPolicy::Literal),
            other => Err(format!(
                "unknown blank skill policy '{other}' (expected 'ignore' or 'literal')"
            )),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Output
// ────────────────────────────────────────────────────────────────────────────

/// Result of matching one candidate against one job. Computed fresh on every
/// call; never cached or persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub match_percentage: u32,
    pub matched_skills: Vec<String>,
    /// Also exposed as `skillGap` by the recruiter views.
    pub missing_skills: Vec<String>,
}

impl MatchResult {
    fn no_candidate_skills(required: &[String]) -> Self {
        MatchResult {
            match_percentage: 0,
            matched_skills: vec![],
            missing_skills: required.to_vec(),
        }
    }

    pub fn is_perfect(&self) -> bool {
        self.match_percentage == 100
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Matcher
// ────────────────────────────────────────────────────────────────────────────

/// Stateless matcher carrying only its immutable blank-skill policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkillMatcher {
    blank_policy: BlankSkillPolicy,
}

impl SkillMatcher {
    pub fn new(blank_policy: BlankSkillPolicy) -> Self {
        Self { blank_policy }
    }

    pub fn blank_policy(&self) -> BlankSkillPolicy {
        self.blank_policy
    }

    /// Matches `candidate` (absent means no declared skills) against
    /// `required`.
    pub fn evaluate(&self, candidate: Option<&[String]>, required: &[String]) -> MatchResult {
        let candidate: Vec<String> = candidate
            .unwrap_or_default()
            .iter()
            .filter(|skill| self.blank_policy == BlankSkillPolicy::Literal || !is_blank(skill))
            .map(|skill| skill.to_lowercase())
            .collect();

        if candidate.is_empty() {
            return MatchResult::no_candidate_skills(required);
        }

        let mut matched_skills = Vec::new();
        let mut missing_skills = Vec::new();

        for skill in required {
            if self.is_satisfied(skill, &candidate) {
                matched_skills.push(skill.clone());
            } else {
                missing_skills.push(skill.clone());
            }
        }

        let match_percentage = percentage(matched_skills.len(), required.len());

        MatchResult {
            match_percentage,
            matched_skills,
            missing_skills,
        }
    }

    /// `candidate_lower` must already be lower-cased.
    fn is_satisfied(&self, required: &str, candidate_lower: &[String]) -> bool {
        if self.blank_policy == BlankSkillPolicy::Ignore && is_blank(required) {
            return false;
        }
        let required_lower = required.to_lowercase();
        candidate_lower
            .iter()
            .any(|c| c.contains(&required_lower) || required_lower.contains(c.as_str()))
    }
}

fn is_blank(skill: &str) -> bool {
    skill.trim().is_empty()
}

/// `round(part / whole × 100)` with halves rounded up, in integer arithmetic.
/// Returns 0 when `whole` is 0.
pub fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    let part = part as u64;
    let whole = whole as u64;
    ((200 * part + whole) / (2 * whole)) as u32
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
