//! API Integration Tests
//!
//! Each test starts its own server over a seeded in-memory store, so no
//! external services are needed.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, fixtures::*, TestServer};
use reqwest::StatusCode;
use tuiter_db::MemoryStore;

async fn server_with_tuit(likes: i64, dislikes: i64) -> (TestServer, String) {
    let store = MemoryStore::new();
    let tuit = seed_tuit(&store, 10, likes, dislikes);
    let server = TestServer::start_with_store(store)
        .await
        .expect("Failed to start server");
    (server, tuit.to_string())
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();

    server.store.set_online(false);
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::SERVICE_UNAVAILABLE)
        .await
        .unwrap();
}

// ============================================================================
// Toggle Dislike Tests
// ============================================================================

#[tokio::test]
async fn test_toggle_dislike_sequence() {
    let (server, tid) = server_with_tuit(3, 2).await;
    let path = format!("/api/users/{ALICE}/dislikes/{tid}");

    // Counters start out of step with the records: the toggle rewrites
    // dislikes from the record count
    let response = server.put_as(&path, None).await.unwrap();
    let body: ToggleBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.state, "disliked");
    assert_eq!(body.stats, StatsBody { likes: 3, dislikes: 1 });

    let response = server.put_as(&path, None).await.unwrap();
    let body: ToggleBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.state, "neutral");
    assert_eq!(body.stats, StatsBody { likes: 3, dislikes: 0 });
}

#[tokio::test]
async fn test_toggle_dislike_replaces_like() {
    let (server, tid) = server_with_tuit(0, 0).await;
    let like_path = format!("/api/users/{ALICE}/likes/{tid}");
    let dislike_path = format!("/api/users/{ALICE}/dislikes/{tid}");

    let response = server.put_as(&like_path, None).await.unwrap();
    let body: ToggleBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.state, "liked");
    assert_eq!(body.stats, StatsBody { likes: 1, dislikes: 0 });

    let response = server.put_as(&dislike_path, None).await.unwrap();
    let body: ToggleBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.state, "disliked");
    assert_eq!(body.stats, StatsBody { likes: 0, dislikes: 1 });

    let response = server
        .get(&format!("/api/users/{ALICE}/reactions/{tid}"))
        .await
        .unwrap();
    let state: ReactionStateBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(state.state, "disliked");
    assert_eq!(state.user_id, ALICE.to_string());
    assert_eq!(state.tuit_id, tid);

    let likers: Vec<String> = assert_json(
        server.get(&format!("/api/tuits/{tid}/likes")).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert!(likers.is_empty());
}

#[tokio::test]
async fn test_toggle_like_replaces_dislike() {
    let (server, tid) = server_with_tuit(0, 0).await;

    server
        .put_as(&format!("/api/users/{BOB}/dislikes/{tid}"), None)
        .await
        .unwrap();
    let response = server
        .put_as(&format!("/api/users/{BOB}/likes/{tid}"), None)
        .await
        .unwrap();
    let body: ToggleBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.state, "liked");
    assert_eq!(body.stats, StatsBody { likes: 1, dislikes: 0 });
}

#[tokio::test]
async fn test_toggle_counts_across_users() {
    let (server, tid) = server_with_tuit(0, 0).await;

    for user in [ALICE, BOB, CAROL] {
        let response = server
            .put_as(&format!("/api/users/{user}/dislikes/{tid}"), None)
            .await
            .unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    let dislikers: Vec<String> = assert_json(
        server.get(&format!("/api/tuits/{tid}/dislikes")).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(
        dislikers,
        vec![ALICE.to_string(), BOB.to_string(), CAROL.to_string()]
    );

    let response = server
        .put_as(&format!("/api/users/{BOB}/dislikes/{tid}"), None)
        .await
        .unwrap();
    let body: ToggleBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.stats.dislikes, 2);
}

#[tokio::test]
async fn test_toggle_as_me() {
    let (server, tid) = server_with_tuit(0, 0).await;
    let token = server.token_for(CAROL);

    let response = server
        .put_as(&format!("/api/users/me/dislikes/{tid}"), Some(&token))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let tuits: Vec<TuitBody> = assert_json(
        server
            .get(&format!("/api/users/{CAROL}/dislikes"))
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(tuits.len(), 1);
    assert_eq!(tuits[0].id, tid);
    assert_eq!(tuits[0].posted_by, AUTHOR.to_string());
    assert_eq!(tuits[0].stats.dislikes, 1);
    assert!(tuits[0].tuit.contains(&tid));
}

#[tokio::test]
async fn test_toggle_failures_answer_not_found() {
    let (server, tid) = server_with_tuit(0, 0).await;

    let cases = [
        (format!("/api/users/me/dislikes/{tid}"), None),
        (format!("/api/users/me/dislikes/{tid}"), Some("not-a-token")),
        (format!("/api/users/{ALICE}/dislikes/{MISSING_TUIT}"), None),
        (format!("/api/users/{ALICE}/dislikes/abc"), None),
        (format!("/api/users/nobody/likes/{tid}"), None),
    ];

    for (path, token) in cases {
        let response = server.put_as(&path, token).await.unwrap();
        let body: ErrorEnvelope = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
        assert_eq!(body.error.code, "TOGGLE_FAILED", "{path}");
        assert!(!body.error.message.is_empty());
    }

    // Nothing was recorded by the failed attempts
    let dislikers: Vec<String> = assert_json(
        server.get(&format!("/api/tuits/{tid}/dislikes")).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert!(dislikers.is_empty());
}

#[tokio::test]
async fn test_toggle_while_store_offline() {
    let (server, tid) = server_with_tuit(1, 1).await;
    server.store.set_online(false);

    let response = server
        .put_as(&format!("/api/users/{ALICE}/dislikes/{tid}"), None)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Listing Tests
// ============================================================================

#[tokio::test]
async fn test_user_listing_is_newest_first() {
    let store = MemoryStore::new();
    let first = seed_tuit(&store, 11, 0, 0);
    let second = seed_tuit(&store, 12, 0, 0);
    let server = TestServer::start_with_store(store).await.unwrap();

    for tid in [first, second] {
        server
            .put_as(&format!("/api/users/{ALICE}/likes/{tid}"), None)
            .await
            .unwrap();
    }

    let tuits: Vec<TuitBody> = assert_json(
        server.get(&format!("/api/users/{ALICE}/likes")).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    let ids: Vec<&str> = tuits.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec![second.to_string(), first.to_string()]);
}

#[tokio::test]
async fn test_me_listing_requires_token() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/api/users/me/dislikes").await.unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.error.code, "MISSING_AUTHORIZATION");

    let token = server.token_for(ALICE);
    let response = server
        .get_as("/api/users/me/dislikes", Some(&token))
        .await
        .unwrap();
    let tuits: Vec<TuitBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(tuits.is_empty());
}

#[tokio::test]
async fn test_invalid_uid_is_bad_request() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/api/users/nobody/likes").await.unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "INVALID_PATH_PARAMETER");
}

#[tokio::test]
async fn test_padded_uid_is_bad_request() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/api/users/%205/likes").await.unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "INVALID_PATH_PARAMETER");
}

// ============================================================================
// Plain React / Unreact Tests
// ============================================================================

#[tokio::test]
async fn test_react_and_unreact() {
    let (server, tid) = server_with_tuit(7, 7).await;
    let path = format!("/api/users/{ALICE}/likes/{tid}");

    let response = server.post_as(&path, None).await.unwrap();
    let reaction: ReactionBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(reaction.kind, "like");
    assert_eq!(reaction.user_id, ALICE.to_string());
    assert_eq!(reaction.tuit_id, tid);

    let response = server.post_as(&path, None).await.unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(body.error.code, "DUPLICATE_REACTION");

    let response = server.delete_as(&path, None).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.delete_as(&path, None).await.unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "UNKNOWN_REACTION");
}

#[tokio::test]
async fn test_react_keeps_one_reaction_per_user() {
    let (server, tid) = server_with_tuit(0, 0).await;

    let response = server
        .post_as(&format!("/api/users/{ALICE}/likes/{tid}"), None)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_as(&format!("/api/users/{ALICE}/dislikes/{tid}"), None)
        .await
        .unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(body.error.code, "DUPLICATE_REACTION");

    let likers: Vec<String> = assert_json(
        server.get(&format!("/api/tuits/{tid}/likes")).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    let dislikers: Vec<String> = assert_json(
        server.get(&format!("/api/tuits/{tid}/dislikes")).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(likers, vec![ALICE.to_string()]);
    assert!(dislikers.is_empty());

    let response = server
        .get(&format!("/api/users/{ALICE}/reactions/{tid}"))
        .await
        .unwrap();
    let state: ReactionStateBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(state.state, "liked");
}

#[tokio::test]
async fn test_react_on_unknown_tuit() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post_as(&format!("/api/users/{ALICE}/dislikes/{MISSING_TUIT}"), None)
        .await
        .unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "UNKNOWN_TUIT");
}

// ============================================================================
// Recount Tests
// ============================================================================

#[tokio::test]
async fn test_recount_restores_counters() {
    let (server, tid) = server_with_tuit(0, 0).await;
    server
        .post_as(&format!("/api/users/{ALICE}/likes/{tid}"), None)
        .await
        .unwrap();
    server
        .post_as(&format!("/api/users/{BOB}/dislikes/{tid}"), None)
        .await
        .unwrap();

    let path = format!("/api/tuits/{tid}/stats/recount");

    let response = server.post_as(&path, None).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let token = server.token_for(CAROL);
    let response = server.post_as(&path, Some(&token)).await.unwrap();
    let stats: StatsBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stats, StatsBody { likes: 1, dislikes: 1 });
}

#[tokio::test]
async fn test_recount_unknown_tuit() {
    let server = TestServer::start().await.unwrap();
    let token = server.token_for(ALICE);

    let response = server
        .post_as(&format!("/api/tuits/{MISSING_TUIT}/stats/recount"), Some(&token))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}
