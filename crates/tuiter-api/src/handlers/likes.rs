//! Like handlers

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

/// GET /api/users/{uid}/likes
pub async fn find_all_tuits_liked_by_user(
    State(state): State<AppState>,
    caller: OptionalAuthUser,
    Path(path): Path<UserPath>,
) -> ApiResult<Json<Vec<TuitResponse>>> {
    reactions::list_tuits(&state, ReactionKind::Like, &caller, &path).await
}

/// PUT /api/users/{uid}/likes/{tid}
pub async fn user_toggles_tuit_likes(
    State(state): State<AppState>,
    caller: Result<OptionalAuthUser, ApiError>,
    Path(path): Path<UserTuitPath>,
) -> ApiResult<Json<ToggleResponse>> {
    reactions::toggle(&state, ReactionKind::Like, caller, &path).await
}

/// POST /api/users/{uid}/likes/{tid}
pub async fn user_likes_tuit(
    State(state): State<AppState>,
    caller: OptionalAuthUser,
    Path(path): Path<UserTuitPath>,
) -> ApiResult<Created<Json<ReactionResponse>>> {
    reactions::react(&state, ReactionKind::Like, &caller, &path).await
}

/// DELETE /api/users/{uid}/likes/{tid}
pub async fn user_unlikes_tuit(
    State(state): State<AppState>,
    caller: OptionalAuthUser,
    Path(path): Path<UserTuitPath>,
) -> ApiResult<NoContent> {
    reactions::unreact(&state, ReactionKind::Like, &caller, &path).await
}
