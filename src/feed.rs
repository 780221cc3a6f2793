use crate::error::Result;
use crate::github::GitHubClient;
use crate::notify::{Toast, ToastSink};
use crate::types::GitHubRepo;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

/// Cards shown before the "show more" toggle.
pub const DISPLAY_LIMIT: usize = 6;
/// Placeholder cards rendered while a fetch is outstanding.
pub const SKELETON_COUNT: usize = 6;
pub const FETCH_FAILED_MESSAGE: &str = "Failed to load projects from GitHub";
const SHOW_LESS_LABEL: &str = "Show Less";
const TOPIC_BADGE_LIMIT: usize = 2;

/// Pages of the site that carry their own repository feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    Home,
    CurrentProjects,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "repos", rename_all = "snake_case")]
pub enum FeedState {
    Loading,
    Loaded(Vec<GitHubRepo>),
    Failed,
}

impl FeedState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, FeedState::Loading)
    }

    fn label(&self) -> &'static str {
        match self {
            FeedState::Loading => "loading",
            FeedState::Loaded(_) => "loaded",
            FeedState::Failed => "failed",
        }
    }
}

/// Presentation state of one view's repository list.
///
/// Starts in `Loading`; `complete` moves it to `Loaded` or `Failed`, both
/// terminal. The show-more toggle only slices the list already held.
#[derive(Debug, Clone)]
pub struct RepositoryFeed {
    state: FeedState,
    show_all: bool,
}

impl Default for RepositoryFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryFeed {
    pub fn new() -> Self {
        Self {
            state: FeedState::Loading,
            show_all: false,
        }
    }

    pub fn from_state(state: FeedState) -> Self {
        Self {
            state,
            show_all: false,
        }
    }

    pub fn state(&self) -> &FeedState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        !self.state.is_terminal()
    }

    /// Apply the outcome of the fetch. Returns `false` if the feed had
    /// already completed, in which case nothing changes.
    pub fn complete(&mut self, result: Result<Vec<GitHubRepo>>, sink: &dyn ToastSink) -> bool {
        if self.state.is_terminal() {
            warn!(state = self.state.label(), "Ignoring repository result for a completed feed");
            return false;
        }

        self.state = match result {
            Ok(repos) => {
                info!(count = repos.len(), "Repository feed loaded");
                FeedState::Loaded(repos)
            }
            Err(e) => {
                error!("Error fetching GitHub repos: {}", e);
                sink.push(Toast::error(FETCH_FAILED_MESSAGE));
                FeedState::Failed
            }
        };
        true
    }

    /// Everything retrieved; empty unless loaded.
    pub fn repos(&self) -> &[GitHubRepo] {
        match &self.state {
            FeedState::Loaded(repos) => repos.as_slice(),
            _ => &[],
        }
    }

    pub fn visible(&self) -> &[GitHubRepo] {
        let repos = self.repos();
        if self.show_all {
            repos
        } else {
            &repos[..repos.len().min(DISPLAY_LIMIT)]
        }
    }

    /// Number of repositories the toggle reveals.
    pub fn hidden_count(&self) -> usize {
        self.repos().len().saturating_sub(DISPLAY_LIMIT)
    }

    pub fn is_expanded(&self) -> bool {
        self.show_all
    }

    pub fn set_show_all(&mut self, show_all: bool) {
        self.show_all = show_all;
    }

    pub fn toggle_show_all(&mut self) {
        self.show_all = !self.show_all;
    }

    /// Label of the toggle, or `None` when there is nothing beyond the cut.
    pub fn show_more_label(&self) -> Option<String> {
        let hidden = self.hidden_count();
        if hidden == 0 {
            None
        } else if self.show_all {
            Some(SHOW_LESS_LABEL.to_string())
        } else {
            Some(format!("Show More ({} more repositories)", hidden))
        }
    }

    pub fn skeleton_count(&self) -> usize {
        if self.is_loading() {
            SKELETON_COUNT
        } else {
            0
        }
    }

    pub fn cards(&self) -> Vec<RepoCard> {
        self.visible().iter().map(RepoCard::from).collect()
    }

    /// Cards past the cut while collapsed; empty once expanded.
    pub fn more_cards(&self) -> Vec<RepoCard> {
        let shown = self.visible().len();
        self.repos()[shown..].iter().map(RepoCard::from).collect()
    }

    /// Everything a renderer needs, including the cards behind the toggle,
    /// so expanding or collapsing is done on the client without a refetch.
    pub fn view(&self) -> FeedView {
        let hidden = self.hidden_count();
        FeedView {
            state: self.state.label(),
            skeletons: self.skeleton_count(),
            cards: self.cards(),
            more: self.more_cards(),
            total: self.repos().len(),
            hidden,
            show_all: self.show_all,
            show_more_label: self.show_more_label(),
            show_less_label: (hidden > 0).then(|| SHOW_LESS_LABEL.to_string()),
        }
    }
}

/// Card for a single repository.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepoCard {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub stars: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub topics: Vec<String>,
    pub code_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    pub updated_at: DateTime<Utc>,
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl From<&GitHubRepo> for RepoCard {
    fn from(repo: &GitHubRepo) -> Self {
        Self {
            id: repo.id,
            name: repo.name.clone(),
            description: non_blank(&repo.description)
                .unwrap_or_else(|| "No description available".to_string()),
            stars: repo.stargazers_count,
            language: non_blank(&repo.language),
            topics: repo.topics.iter().take(TOPIC_BADGE_LIMIT).cloned().collect(),
            code_url: repo.html_url.clone(),
            live_url: non_blank(&repo.homepage),
            updated_at: repo.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedView {
    pub state: &'static str,
    pub skeletons: usize,
    pub cards: Vec<RepoCard>,
    pub more: Vec<RepoCard>,
    pub total: usize,
    pub hidden: usize,
    pub show_all: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_more_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_less_label: Option<String>,
}

/// Fetch once and return the completed feed.
pub async fn load_feed(
    client: &GitHubClient,
    account: &str,
    page_size: usize,
    sink: &dyn ToastSink,
) -> RepositoryFeed {
    let mut feed = RepositoryFeed::new();
    let result = client.fetch_repositories(account, page_size).await;
    feed.complete(result, sink);
    feed
}

/// Background fetch owned by a view.
///
/// State is published through a watch channel. Dropping the handle aborts the
/// task, so a response that arrives after the view is gone is discarded
/// without touching anything.
///
/// Meant for long-lived rendering surfaces that keep a view mounted while the
/// fetch runs, such as an interactive client polling `state()`. The HTTP feed
/// route does not need one: it awaits `load_feed` inside the request future,
/// and a disconnected request drops that future together with the fetch.
pub struct FeedHandle {
    state: watch::Receiver<FeedState>,
    task: JoinHandle<()>,
}

impl FeedHandle {
    pub fn spawn(
        client: GitHubClient,
        account: String,
        page_size: usize,
        sink: Arc<dyn ToastSink>,
    ) -> Self {
        let (tx, rx) = watch::channel(FeedState::Loading);
        let task = tokio::spawn(async move {
            let feed = load_feed(&client, &account, page_size, sink.as_ref()).await;
            tx.send_replace(feed.state().clone());
        });
        Self { state: rx, task }
    }

    pub fn state(&self) -> FeedState {
        self.state.borrow().clone()
    }

    /// Wait for the fetch to finish. A cancelled fetch stays `Loading`.
    pub async fn finished(&mut self) -> FeedState {
        let finished = self
            .state
            .wait_for(FeedState::is_terminal)
            .await
            .map(|state| (*state).clone());
        match finished {
            Ok(state) => state,
            Err(_) => self.state.borrow().clone(),
        }
    }

    pub fn cancel(&self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for FeedHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
