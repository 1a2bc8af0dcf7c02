use anyhow::{Context, Result};

use crate::matching::skill_matcher::BlankSkillPolicy;

/// Application configuration loaded from environment variables.
/// Startup fails if a required variable is missing or a value does not parse.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub rust_log: String,
    pub blank_skill_policy: BlankSkillPolicy,
    /// Overrides the built-in resume vocabulary when set.
    pub skill_vocabulary: Option<Vec<String>>,
    pub recommendation_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            blank_skill_policy: match std::env::var("BLANK_SKILL_POLICY") {
                Ok(raw) => raw
                    .parse::<BlankSkillPolicy>()
                    .map_err(anyhow::Error::msg)
                    .context("BLANK_SKILL_POLICY is invalid")?,
                Err(_) => BlankSkillPolicy::default(),
            },
            skill_vocabulary: std::env::var("SKILL_VOCABULARY")
                .ok()
                .map(|raw| parse_skill_list(&raw)),
            recommendation_limit: parse_limit(std::env::var("RECOMMENDATION_LIMIT").ok())?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Splits a comma-separated list, trimming entries and dropping empty ones.
pub fn parse_skill_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_limit(raw: Option<String>) -> Result<usize> {
    let Some(raw) = raw else {
        return Ok(10);
    };
    let limit = raw
        .trim()
        .parse::<usize>()
        .context("RECOMMENDATION_LIMIT must be a positive integer")?;
    anyhow::ensure!(limit > 0, "RECOMMENDATION_LIMIT must be a positive integer");
    Ok(limit)
}
