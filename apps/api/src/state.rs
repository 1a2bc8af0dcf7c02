use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::matching::skill_matcher::SkillMatcher;
use crate::resume::extraction::SkillVocabulary;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Built once from config; carries the blank-skill policy.
    pub matcher: SkillMatcher,
    /// Resume extraction vocabulary. Immutable after startup.
    pub vocabulary: Arc<SkillVocabulary>,
}

impl AppState {
    pub fn new(db: PgPool, config: Config) -> Self {
        let matcher = SkillMatcher::new(config.blank_skill_policy);
        let vocabulary = match &config.skill_vocabulary {
            Some(skills) => SkillVocabulary::new(skills.clone()),
            None => SkillVocabulary::default(),
        };
        Self {
            db,
            config,
            matcher,
            vocabulary: Arc::new(vocabulary),
        }
    }
}
