//! Tuit-centric reaction handlers

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;
use tuiter_core::ReactionKind;
use tuiter_service::dto::TuitStatsResponse;
use tuiter_service::ReactionService;

use crate::extractors::{AuthUser, TuitPath};
use crate::response::ApiResult;
use crate::state::AppState;

async fn reacting_users(
    state: &AppState,
    kind: ReactionKind,
    path: &TuitPath,
) -> ApiResult<Json<Vec<String>>> {
    let tuit_id = path.tuit_id()?;

    let service = ReactionService::new(state.service_context());
    let users = service.users_reacting_to_tuit(kind, tuit_id).await?;
    Ok(Json(users.into_iter().map(|id| id.to_string()).collect()))
}

/// Get ids of users who liked a tuit
///
/// GET /api/tuits/{tid}/likes
pub async fn find_all_users_that_liked_tuit(
    State(state): State<AppState>,
    Path(path): Path<TuitPath>,
) -> ApiResult<Json<Vec<String>>> {
    reacting_users(&state, ReactionKind::Like, &path).await
}

/// Get ids of users who disliked a tuit
///
/// GET /api/tuits/{tid}/dislikes
pub async fn find_all_users_that_disliked_tuit(
    State(state): State<AppState>,
    Path(path): Path<TuitPath>,
) -> ApiResult<Json<Vec<String>>> {
    reacting_users(&state, ReactionKind::Dislike, &path).await
}

/// Recompute a tuit's counters from its like and dislike records
///
/// POST /api/tuits/{tid}/stats/recount
pub async fn recount_tuit_stats(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<TuitPath>,
) -> ApiResult<Json<TuitStatsResponse>> {
    let tuit_id = path.tuit_id()?;
    info!(tuit_id = %tuit_id, requested_by = %auth.user_id, "Stats recount requested");

    let service = ReactionService::new(state.service_context());
    let stats = service.recount_stats(tuit_id).await?;
    Ok(Json(stats.into()))
}
