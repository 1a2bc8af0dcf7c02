use serde::Serialize;

/// Built-in vocabulary used when `SKILL_VOCABULARY` is not configured.
pub const DEFAULT_SKILLS: &[&str] = &[
    "javascript", "python", "java", "c++", "c#", "php", "ruby", "go", "rust",
    "react", "angular", "vue", "node.js", "express", "django", "flask", "spring",
    "html", "css", "sass", "bootstrap", "tailwind",
    "mongodb", "mysql", "postgresql", "redis", "elasticsearch",
    "aws", "azure", "gcp", "docker", "kubernetes", "jenkins", "git",
    "machine learning", "ai", "data science", "tensorflow", "pytorch",
    "agile", "scrum", "kanban", "leadership", "communication",
];

/// Characters of resume text echoed back in the extraction preview.
pub const PREVIEW_CHARS: usize = 500;

/// Immutable skill vocabulary shared by every request. Built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillVocabulary {
    skills: Vec<String>,
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect())
    }
}

impl SkillVocabulary {
    pub fn new(skills: Vec<String>) -> Self {
        Self { skills }
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Vocabulary entries (in vocabulary order) that occur anywhere in `text`,
    /// compared case-insensitively. Substring semantics: "java" is found in a
    /// resume mentioning only "JavaScript".
    pub fn extract(&self, text: &str) -> Vec<String> {
        let text = text.to_lowercase();
        self.skills
            .iter()
            .filter(|skill| text.contains(&skill.to_lowercase()))
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionReport {
    pub extracted_skills: Vec<String>,
    pub resume_score: u32,
    pub preview: String,
}

/// Ten points per extracted skill, capped at 100.
pub fn resume_score(extracted: usize) -> u32 {
    extracted.saturating_mul(10).min(100) as u32
}

pub fn analyze_resume(vocabulary: &SkillVocabulary, text: &str) -> ExtractionReport {
    let extracted_skills = vocabulary.extract(text);
    let resume_score = resume_score(extracted_skills.len());
    ExtractionReport {
        extracted_skills,
        resume_score,
        preview: preview(text),
    }
}

fn preview(text: &str) -> String {
    let mut preview: String = text.to_lowercase().chars().take(PREVIEW_CHARS).collect();
    preview.push_str("...");
    preview
}
