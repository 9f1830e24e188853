//! Dislike handlers

use axum::{
    extract::{Path, State},
    Json,
};
use tuiter_core::ReactionKind;
use tuiter_service::dto::{ReactionResponse, ToggleResponse, TuitResponse};

use super::reactions;
use crate::extractors::{OptionalAuthUser, UserPath, UserTuitPath};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Get tuits disliked by a user
///
/// GET /api/users/{uid}/dislikes
pub async fn find_all_tuits_disliked_by_user(
    State(state): State<AppState>,
    caller: OptionalAuthUser,
    Path(path): Path<UserPath>,
) -> ApiResult<Json<Vec<TuitResponse>>> {
    reactions::list_tuits(&state, ReactionKind::Dislike, &caller, &path).await
}

/// Toggle a user's dislike on a tuit
///
/// PUT /api/users/{uid}/dislikes/{tid}
pub async fn user_toggles_tuit_dislikes(
    State(state): State<AppState>,
    caller: Result<OptionalAuthUser, ApiError>,
    Path(path): Path<UserTuitPath>,
) -> ApiResult<Json<ToggleResponse>> {
    reactions::toggle(&state, ReactionKind::Dislike, caller, &path).await
}

/// Dislike a tuit
///
/// POST /api/users/{uid}/dislikes/{tid}
pub async fn user_dislikes_tuit(
    State(state): State<AppState>,
    caller: OptionalAuthUser,
    Path(path): Path<UserTuitPath>,
) -> ApiResult<Created<Json<ReactionResponse>>> {
    reactions::react(&state, ReactionKind::Dislike, &caller, &path).await
}

/// Remove a dislike
///
/// DELETE /api/users/{uid}/dislikes/{tid}
pub async fn user_undislikes_tuit(
    State(state): State<AppState>,
    caller: OptionalAuthUser,
    Path(path): Path<UserTuitPath>,
) -> ApiResult<NoContent> {
    reactions::unreact(&state, ReactionKind::Dislike, &caller, &path).await
}
