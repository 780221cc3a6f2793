use crate::catalog::ProjectCatalog;
use crate::contact::{ContactForm, ContactOutcome, ContactService};
use crate::feed::{load_feed, FeedView, Page};
use crate::github::GitHubClient;
use crate::models::{FeaturedProject, GalleryItem, LiveAction, Profile};
use crate::notify::{Toast, ToastLog};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Which account each page lists and how many repositories it asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSettings {
    pub account: String,
    pub home_page_size: usize,
    pub current_page_size: usize,
}

impl FeedSettings {
    pub fn page_size(&self, page: Page) -> usize {
        match page {
            Page::Home => self.home_page_size,
            Page::CurrentProjects => self.current_page_size,
        }
    }
}

/// Shared, read-only application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<ProjectCatalog>,
    pub profile: Arc<Profile>,
    pub github: GitHubClient,
    pub contact: Arc<ContactService>,
    pub feeds: FeedSettings,
    pub start_time: Instant,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct GalleryResponse {
    pub project_id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub items: Vec<GalleryItem>,
}

#[derive(Debug, Serialize)]
pub struct FeedResponse {
    pub page: Page,
    pub account: String,
    pub page_size: usize,
    pub feed: FeedView,
    pub toasts: Vec<Toast>,
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    #[serde(flatten)]
    pub outcome: ContactOutcome,
    pub toasts: Vec<Toast>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    pub uptime_seconds: u64,
    pub featured_projects: usize,
    pub contact_relay: String,
    pub github_api: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LivenessResponse {
    pub status: String,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/profile", get(get_profile))
        .route("/api/projects", get(list_projects))
        .route("/api/projects/:id", get(get_project))
        .route("/api/projects/:id/gallery", get(get_gallery))
        .route("/api/projects/:id/live", get(get_live_action))
        .route("/api/pages/:page/repos", get(get_page_repos))
        .route("/api/contact", post(submit_contact))
        .route("/healthz", get(health_check))
        .route("/livez", get(liveness_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve until `shutdown` resolves
pub async fn start_server<F>(
    state: AppState,
    addr: &str,
    shutdown: F,
) -> Result<(), Box<dyn std::error::Error>>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Portfolio server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}

fn not_found(what: String) -> (StatusCode, Json<ErrorResponse>) {
    (StatusCode::NOT_FOUND, Json(ErrorResponse { error: what }))
}

async fn get_profile(State(state): State<AppState>) -> Json<Profile> {
    Json(state.profile.as_ref().clone())
}

async fn list_projects(State(state): State<AppState>) -> Json<Vec<FeaturedProject>> {
    Json(state.catalog.projects().to_vec())
}

async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<FeaturedProject>, (StatusCode, Json<ErrorResponse>)> {
    state
        .catalog
        .get(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found(format!("Project {} not found", id)))
}

/// Unknown ids yield an empty gallery rather than an error
async fn get_gallery(State(state): State<AppState>, Path(id): Path<u32>) -> Json<GalleryResponse> {
    Json(GalleryResponse {
        project_id: id,
        title: state.catalog.get(id).map(|p| p.title.clone()),
        items: state.catalog.gallery(id).to_vec(),
    })
}

async fn get_live_action(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<LiveAction>, (StatusCode, Json<ErrorResponse>)> {
    state
        .catalog
        .get(id)
        .map(|p| Json(p.live_action()))
        .ok_or_else(|| not_found(format!("Project {} not found", id)))
}

/// Every call performs its own upstream fetch; nothing is cached between pages.
/// The response holds the whole retrieved list, split at the display cut into
/// `cards` and `more`, so the show-more toggle never calls back here.
async fn get_page_repos(
    State(state): State<AppState>,
    Path(page): Path<Page>,
) -> Json<FeedResponse> {
    let toasts = ToastLog::new();
    let page_size = state.feeds.page_size(page);

    let feed = load_feed(&state.github, &state.feeds.account, page_size, &toasts).await;

    Json(FeedResponse {
        page,
        account: state.feeds.account.clone(),
        page_size,
        feed: feed.view(),
        toasts: toasts.drain(),
    })
}

async fn submit_contact(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> impl IntoResponse {
    let toasts = ToastLog::new();
    let outcome = state.contact.submit(form, &toasts).await;

    let status = match outcome {
        ContactOutcome::Sent => StatusCode::OK,
        ContactOutcome::Rejected { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        ContactOutcome::Failed { .. } => StatusCode::BAD_GATEWAY,
    };

    (
        status,
        Json(ContactResponse {
            outcome,
            toasts: toasts.drain(),
        }),
    )
}

async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    // An empty catalog still serves, but the page has nothing to feature.
    let status = if state.catalog.is_empty() {
        HealthStatus::Degraded
    } else {
        HealthStatus::Healthy
    };

    let response = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        featured_projects: state.catalog.len(),
        contact_relay: if state.contact.relay().is_enabled() {
            "emailjs".to_string()
        } else {
            "disabled".to_string()
        },
        github_api: state.github.base_url().to_string(),
    };

    (StatusCode::OK, Json(response))
}

async fn liveness_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(LivenessResponse {
            status: "alive".to_string(),
        }),
    )
}
