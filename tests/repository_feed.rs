mod common;

use common::{repos_json, ACCOUNT};
use portfolio_server::feed::{
    load_feed, FeedHandle, FeedState, RepositoryFeed, FETCH_FAILED_MESSAGE, SKELETON_COUNT,
};
use portfolio_server::github::GitHubClient;
use portfolio_server::notify::{Toast, ToastLog, ToastSink};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_listing(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .respond_with(response)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_eight_repositories_show_six_then_all() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .and(query_param("per_page", "6"))
        .respond_with(ResponseTemplate::new(200).set_body_json(repos_json(8)))
        .expect(1)
        .mount(&server)
        .await;

    let client = GitHubClient::with_base_url(&server.uri()).unwrap();
    let toasts = ToastLog::new();
    let mut feed = load_feed(&client, ACCOUNT, 6, &toasts).await;

    assert_eq!(feed.cards().len(), 6);
    assert_eq!(
        feed.show_more_label().as_deref(),
        Some("Show More (2 more repositories)")
    );

    feed.toggle_show_all();
    let cards = feed.cards();
    assert_eq!(cards.len(), 8);
    assert_eq!(cards[7].name, "repo-8");
    assert!(toasts.is_empty());
}

#[tokio::test]
async fn test_six_or_fewer_hide_the_toggle() {
    let server = MockServer::start().await;
    mock_listing(&server, ResponseTemplate::new(200).set_body_json(repos_json(6))).await;

    let client = GitHubClient::with_base_url(&server.uri()).unwrap();
    let feed = load_feed(&client, ACCOUNT, 100, &ToastLog::new()).await;

    assert_eq!(feed.hidden_count(), 0);
    assert!(feed.show_more_label().is_none());
    assert_eq!(feed.view().cards.len(), 6);
}

#[tokio::test]
async fn test_failed_fetch_leaves_empty_list_and_one_toast() {
    let server = MockServer::start().await;
    mock_listing(&server, ResponseTemplate::new(500)).await;

    let client = GitHubClient::with_base_url(&server.uri()).unwrap();
    let toasts = ToastLog::new();
    let feed = load_feed(&client, ACCOUNT, 6, &toasts).await;

    assert_eq!(feed.state(), &FeedState::Failed);
    assert!(feed.cards().is_empty());
    assert_eq!(feed.skeleton_count(), 0);
    assert!(feed.show_more_label().is_none());
    assert_eq!(toasts.snapshot(), vec![Toast::error(FETCH_FAILED_MESSAGE)]);
}

#[tokio::test]
async fn test_network_failure_replaces_skeletons_with_nothing() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = GitHubClient::with_base_url(&format!("http://{}", addr)).unwrap();
    let toasts = Arc::new(ToastLog::new());
    let mut handle = FeedHandle::spawn(
        client,
        ACCOUNT.to_string(),
        6,
        toasts.clone() as Arc<dyn ToastSink>,
    );

    let state = handle.finished().await;
    let feed = RepositoryFeed::from_state(state);

    assert_eq!(feed.skeleton_count(), 0);
    assert!(feed.cards().is_empty());
    assert_eq!(toasts.len(), 1);
}

#[tokio::test]
async fn test_handle_reports_loading_then_loaded() {
    let server = MockServer::start().await;
    mock_listing(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(repos_json(3))
            .set_delay(Duration::from_millis(200)),
    )
    .await;

    let client = GitHubClient::with_base_url(&server.uri()).unwrap();
    let mut handle = FeedHandle::spawn(client, ACCOUNT.to_string(), 6, Arc::new(ToastLog::new()));

    let loading = RepositoryFeed::from_state(handle.state());
    assert!(loading.is_loading());
    assert_eq!(loading.skeleton_count(), SKELETON_COUNT);

    match handle.finished().await {
        FeedState::Loaded(repos) => assert_eq!(repos.len(), 3),
        other => panic!("Expected loaded feed, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_dropped_view_discards_late_response() {
    let server = MockServer::start().await;
    mock_listing(
        &server,
        ResponseTemplate::new(500).set_delay(Duration::from_millis(300)),
    )
    .await;

    let client = GitHubClient::with_base_url(&server.uri()).unwrap();
    let toasts = Arc::new(ToastLog::new());
    let handle = FeedHandle::spawn(
        client,
        ACCOUNT.to_string(),
        6,
        toasts.clone() as Arc<dyn ToastSink>,
    );

    tokio::time::sleep(Duration::from_millis(50)).await;
    drop(handle);
    tokio::time::sleep(Duration::from_millis(500)).await;

    assert!(toasts.is_empty(), "late failure must not reach a torn-down view");
}

#[tokio::test]
async fn test_cancelled_handle_stays_loading() {
    let server = MockServer::start().await;
    mock_listing(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(repos_json(2))
            .set_delay(Duration::from_millis(300)),
    )
    .await;

    let client = GitHubClient::with_base_url(&server.uri()).unwrap();
    let mut handle = FeedHandle::spawn(client, ACCOUNT.to_string(), 6, Arc::new(ToastLog::new()));
    handle.cancel();

    assert_eq!(handle.finished().await, FeedState::Loading);
}

#[tokio::test]
async fn test_each_page_fetches_independently() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(repos_json(4)))
        .expect(2)
        .mount(&server)
        .await;

    let client = GitHubClient::with_base_url(&server.uri()).unwrap();
    let toasts = ToastLog::new();
    let home = load_feed(&client, ACCOUNT, 100, &toasts).await;
    let current = load_feed(&client, ACCOUNT, 6, &toasts).await;

    assert_eq!(home.repos(), current.repos());
}
