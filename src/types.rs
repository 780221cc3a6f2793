use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// GitHub API response structures

/// Subset of `GET /users/{account}/repos` consumed by the feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GitHubRepo {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub homepage: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    pub stargazers_count: u32,
    pub updated_at: DateTime<Utc>,
}
