//! Reaction handlers shared by the like and dislike routes

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::warn;
use tuiter_core::ReactionKind;
use tuiter_service::dto::{ReactionResponse, ReactionStateResponse, ToggleResponse, TuitResponse};
use tuiter_service::{ReactionService, ToggleReconciler};

use crate::extractors::{OptionalAuthUser, UserPath, UserTuitPath};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Tuits the user reacted to with `kind`
pub(crate) async fn list_tuits(
    state: &AppState,
    kind: ReactionKind,
    caller: &OptionalAuthUser,
    path: &UserPath,
) -> ApiResult<Json<Vec<TuitResponse>>> {
    let user_id = caller.resolve(path.user()?)?;

    let service = ReactionService::new(state.service_context());
    let tuits = service.tuits_reacted_by_user(kind, user_id).await?;
    Ok(Json(tuits.into_iter().map(TuitResponse::from).collect()))
}

/// Toggle a reaction. Any failure, including an unresolvable `me` or a bad
/// token, answers with the same not-found response.
pub(crate) async fn toggle(
    state: &AppState,
    kind: ReactionKind,
    caller: Result<OptionalAuthUser, ApiError>,
    path: &UserTuitPath,
) -> ApiResult<Json<ToggleResponse>> {
    let outcome = async move {
        let user_id = caller?.resolve(path.user()?)?;
        let tuit_id = path.tuit_id()?;
        let outcome = ToggleReconciler::new(state.service_context())
            .toggle(kind, user_id, tuit_id)
            .await?;
        Ok::<_, ApiError>(outcome)
    }
    .await;

    match outcome {
        Ok(outcome) => Ok(Json(outcome.into())),
        Err(e) => {
            warn!(
                error = %e,
                kind = %kind,
                uid = %path.uid,
                tid = %path.tid,
                "Toggle failed"
            );
            Err(ApiError::ToggleFailed)
        }
    }
}

/// Record a reaction without touching counters
pub(crate) async fn react(
    state: &AppState,
    kind: ReactionKind,
    caller: &OptionalAuthUser,
    path: &UserTuitPath,
) -> ApiResult<Created<Json<ReactionResponse>>> {
    let user_id = caller.resolve(path.user()?)?;
    let tuit_id = path.tuit_id()?;

    let service = ReactionService::new(state.service_context());
    let reaction = service.react(kind, user_id, tuit_id).await?;
    Ok(Created(Json(reaction.into())))
}

/// Remove a reaction without touching counters
pub(crate) async fn unreact(
    state: &AppState,
    kind: ReactionKind,
    caller: &OptionalAuthUser,
    path: &UserTuitPath,
) -> ApiResult<NoContent> {
    let user_id = caller.resolve(path.user()?)?;
    let tuit_id = path.tuit_id()?;

    let service = ReactionService::new(state.service_context());
    service.unreact(kind, user_id, tuit_id).await?;
    Ok(NoContent)
}

/// Get a user's reaction state towards a tuit
///
/// GET /api/users/{uid}/reactions/{tid}
pub async fn get_reaction_state(
    State(state): State<AppState>,
    caller: OptionalAuthUser,
    Path(path): Path<UserTuitPath>,
) -> ApiResult<Json<ReactionStateResponse>> {
    let user_id = caller.resolve(path.user()?)?;
    let tuit_id = path.tuit_id()?;

    let service = ReactionService::new(state.service_context());
    let reaction_state = service.reaction_state(user_id, tuit_id).await?;
    Ok(Json(ReactionStateResponse {
        user_id: user_id.to_string(),
        tuit_id: tuit_id.to_string(),
        state: reaction_state,
    }))
}
