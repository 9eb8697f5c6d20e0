//! End-to-end tests of the authenticated request pipeline: bearer
//! attachment, the single-shot refresh-and-replay path, and session
//! teardown on terminal refresh failure.

mod common;

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use opsdesk::models::Credentials;
use opsdesk::{ApiError, TokenStore};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{anonymous_client, logged_in_client};

fn user_body(username: &str) -> serde_json::Value {
    serde_json::json!({"id": "u1", "username": username})
}

#[tokio::test]
async fn login_stores_both_tokens() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token/"))
        .and(body_json(
            serde_json::json!({"username": "a", "password": "b"}),
        ))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"access": "A1", "refresh": "R1"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (client, store) = anonymous_client(&server);
    assert!(!client.is_authenticated());

    let pair = client.login(&Credentials::new("a", "b")).await.unwrap();
    assert_eq!(pair.access, "A1");
    assert_eq!(pair.refresh, "R1");

    assert!(client.is_authenticated());
    assert_eq!(store.access_token().as_deref(), Some("A1"));
    assert_eq!(store.refresh_token().as_deref(), Some("R1"));
}

#[tokio::test]
async fn logout_clears_tokens_without_network() {
    // No mocks mounted: logout must not touch the server
    let server = MockServer::start().await;
    let (client, store) = logged_in_client(&server);

    assert!(client.is_authenticated());
    client.logout();
    assert!(!client.is_authenticated());
    assert!(store.tokens().is_none());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn bad_credentials_surface_as_status_error_not_refresh() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token/"))
        .respond_with(ResponseTemplate::new(401).set_body_string("{\"detail\": \"bad login\"}"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/token/refresh/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (client, _store) = anonymous_client(&server);
    let err = client
        .login(&Credentials::new("a", "wrong"))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(reqwest::StatusCode::UNAUTHORIZED));
    assert!(!err.is_auth_failure());
}

#[tokio::test]
async fn authenticated_requests_carry_bearer_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/me/"))
        .and(header("authorization", "Bearer A1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_body("sara")))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _store) = logged_in_client(&server);
    let user = client.current_user().await.unwrap();
    assert_eq!(user.username, "sara");
}

#[tokio::test]
async fn anonymous_requests_have_no_authorization_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects/dashboard/stats/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _store) = anonymous_client(&server);
    client.dashboard_stats().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn expired_token_refreshes_once_and_replays() {
    let server = MockServer::start().await;

    // Old token rejected, new token accepted on the same path
    Mock::given(method("GET"))
        .and(path("/projects/5/"))
        .and(header("authorization", "Bearer A1"))
        .respond_with(ResponseTemplate::new(401).set_body_string("{\"detail\": \"expired\"}"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/projects/5/"))
        .and(header("authorization", "Bearer A2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"id": "5", "name": "Corporate website"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/token/refresh/"))
        .and(body_json(serde_json::json!({"refresh": "R1"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"access": "A2"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (client, store) = logged_in_client(&server);
    let project = client.get_project("5").await.unwrap();
    assert_eq!(project.name, "Corporate website");

    // New access token stored, refresh token untouched
    assert_eq!(store.access_token().as_deref(), Some("A2"));
    assert_eq!(store.refresh_token().as_deref(), Some("R1"));
}

#[tokio::test]
async fn replayed_request_401_surfaces_without_second_refresh() {
    let server = MockServer::start().await;

    // Server rejects every token, e.g. server-side revocation
    let hits = Arc::new(AtomicUsize::new(0));
    let hits_clone = hits.clone();
    Mock::given(method("GET"))
        .and(path("/projects/5/"))
        .respond_with(move |_req: &wiremock::Request| {
            hits_clone.fetch_add(1, Ordering::SeqCst);
            ResponseTemplate::new(401).set_body_string("{\"detail\": \"revoked\"}")
        })
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/token/refresh/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"access": "A2"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (client, _store) = logged_in_client(&server);
    let err = client.get_project("5").await.unwrap_err();

    // The second 401 comes straight through: no refresh loop
    assert_eq!(err.status_code(), Some(reqwest::StatusCode::UNAUTHORIZED));
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn refresh_failure_clears_session_and_fires_handler() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects/5/"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/token/refresh/"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({"code": "token_not_valid"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let redirected = Arc::new(AtomicBool::new(false));
    let redirected_clone = redirected.clone();

    let (client, store) = logged_in_client(&server);
    let client = client.with_auth_events(Arc::new(move || {
        redirected_clone.store(true, Ordering::SeqCst);
    }));

    let err = client.get_project("5").await.unwrap_err();

    // The surfaced error is the refresh failure, not the original 401
    assert!(err.is_auth_failure());
    assert!(matches!(err, ApiError::RefreshFailed(_)));
    assert!(store.tokens().is_none());
    assert!(!client.is_authenticated());
    assert!(redirected.load(Ordering::SeqCst));
}

#[tokio::test]
async fn missing_refresh_token_fails_terminally() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects/tasks/my-tasks/"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/token/refresh/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let redirected = Arc::new(AtomicBool::new(false));
    let redirected_clone = redirected.clone();

    let (client, _store) = anonymous_client(&server);
    let client = client.with_auth_events(Arc::new(move || {
        redirected_clone.store(true, Ordering::SeqCst);
    }));

    let err = client.my_tasks().await.unwrap_err();
    match err {
        ApiError::RefreshFailed(cause) => {
            assert!(matches!(*cause, ApiError::MissingRefreshToken));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(redirected.load(Ordering::SeqCst));
}

#[tokio::test]
async fn concurrent_requests_each_refresh_independently() {
    // Two requests observing a 401 each run their own refresh; the client
    // does not de-duplicate in-flight refreshes.
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("authorization", "Bearer A1"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(header("authorization", "Bearer A2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "x", "name": "n"})),
        )
        .mount(&server)
        .await;

    let refreshes = Arc::new(AtomicUsize::new(0));
    let refreshes_clone = refreshes.clone();
    Mock::given(method("POST"))
        .and(path("/token/refresh/"))
        .respond_with(move |_req: &wiremock::Request| {
            refreshes_clone.fetch_add(1, Ordering::SeqCst);
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"access": "A2"}))
        })
        .mount(&server)
        .await;

    let (client, _store) = logged_in_client(&server);
    let (a, b) = futures::future::join(client.get_project("1"), client.get_project("2")).await;

    assert!(a.is_ok());
    assert!(b.is_ok());
    assert_eq!(refreshes.load(Ordering::SeqCst), 2);
}
