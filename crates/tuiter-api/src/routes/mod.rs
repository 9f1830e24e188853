//! Route definitions
//!
//! Reaction routes are mounted under /api; health routes sit outside the
//! rate limiter.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{dislikes, health, likes, reactions, tuits};
use crate::state::AppState;

/// Create the main API router (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(dislike_routes())
        .merge(like_routes())
        .merge(tuit_routes())
        .route(
            "/users/:uid/reactions/:tid",
            get(reactions::get_reaction_state),
        )
}

/// Dislike routes
fn dislike_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users/:uid/dislikes",
            get(dislikes::find_all_tuits_disliked_by_user),
        )
        .route(
            "/users/:uid/dislikes/:tid",
            post(dislikes::user_dislikes_tuit)
                .put(dislikes::user_toggles_tuit_dislikes)
                .delete(dislikes::user_undislikes_tuit),
        )
}

/// Like routes
fn like_routes() -> Router<AppState> {
    Router::new()
        .route("/users/:uid/likes", get(likes::find_all_tuits_liked_by_user))
        .route(
            "/users/:uid/likes/:tid",
            post(likes::user_likes_tuit)
                .put(likes::user_toggles_tuit_likes)
                .delete(likes::user_unlikes_tuit),
        )
}

/// Tuit-centric routes
fn tuit_routes() -> Router<AppState> {
    Router::new()
        .route("/tuits/:tid/likes", get(tuits::find_all_users_that_liked_tuit))
        .route(
            "/tuits/:tid/dislikes",
            get(tuits::find_all_users_that_disliked_tuit),
        )
        .route("/tuits/:tid/stats/recount", post(tuits::recount_tuit_stats))
}
