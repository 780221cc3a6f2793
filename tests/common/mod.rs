#![allow(dead_code)]

use portfolio_server::catalog::{default_profile, ProjectCatalog};
use portfolio_server::contact::{ContactRelay, ContactService};
use portfolio_server::github::GitHubClient;
use portfolio_server::server::{AppState, FeedSettings};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;

pub const ACCOUNT: &str = "octocat";

/// A repository object shaped like the GitHub listing response.
pub fn repo_json(id: u64) -> Value {
    let description = if id % 2 == 0 {
        Value::Null
    } else {
        json!(format!("Repository {}", id))
    };
    let homepage = if id == 1 { "https://octocat.github.io" } else { "" };
    let language = if id % 3 == 0 { Value::Null } else { json!("Rust") };

    json!({
        "id": id,
        "name": format!("repo-{}", id),
        "full_name": format!("octocat/repo-{}", id),
        "description": description,
        "html_url": format!("https://github.com/octocat/repo-{}", id),
        "homepage": homepage,
        "language": language,
        "topics": ["cli", "tooling", "rust"],
        "stargazers_count": id * 10,
        "updated_at": "2024-05-01T12:00:00Z",
        "private": false
    })
}

pub fn repos_json(count: u64) -> Value {
    Value::Array((1..=count).map(repo_json).collect())
}

pub struct TestContext {
    pub state: AppState,
}

impl TestContext {
    pub fn new(github_api_url: &str, relay: ContactRelay) -> anyhow::Result<Self> {
        let state = AppState {
            catalog: Arc::new(ProjectCatalog::default_catalog()?),
            profile: Arc::new(default_profile()),
            github: GitHubClient::with_base_url(github_api_url)?,
            contact: Arc::new(ContactService::new(relay)?),
            feeds: FeedSettings {
                account: ACCOUNT.to_string(),
                home_page_size: 100,
                current_page_size: 6,
            },
            start_time: Instant::now(),
        };
        Ok(TestContext { state })
    }
}
