use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// "jobseeker" | "recruiter" | "admin"
    pub role: String,
    /// NULL until a profile or resume declares skills.
    pub skills: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
}

impl UserRow {
    pub fn skills(&self) -> Option<&[String]> {
        self.skills.as_deref()
    }

    pub fn skills_count(&self) -> usize {
        self.skills.as_ref().map_or(0, Vec::len)
    }
}
