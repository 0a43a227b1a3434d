use crate::model::functions::fetch_app_media;
use crate::model::types::{AppState, ResultsSnapshot, SteamMedia, VoteRequest, VoteResponse};
use crate::model::{catalog, types::aggregate};
use axum::extract::{Path, State};
use axum::Json;

/// `POST /vote`. Always HTTP 200; application-level failures travel in
/// `success:false` so the form can surface the message as-is.
pub async fn submit_vote(
    State(state): State<AppState>,
    Json(request): Json<VoteRequest>,
) -> Json<VoteResponse> {
    match state.store.record(&request.user_name, request.votes).await {
        Ok(_) => Json(VoteResponse::ok()),
        Err(e) => {
            tracing::warn!(error = %e, "vote rejected");
            Json(VoteResponse::err(String::from(e)))
        }
    }
}

/// `GET /api/results`.
pub async fn results(State(state): State<AppState>) -> Json<ResultsSnapshot> {
    let ballots = state.store.ballots().await;
    Json(aggregate(catalog::games(), &ballots))
}

/// `GET /api/steam_media/:app_id`. Upstream failures flatten to an
/// unavailable payload; the cascade treats that as this tier exhausted.
pub async fn steam_media(
    State(state): State<AppState>,
    Path(app_id): Path<u32>,
) -> Json<SteamMedia> {
    match fetch_app_media(&state.reqwest_client, app_id).await {
        Ok(media) => Json(media),
        Err(e) => {
            tracing::warn!(app_id, error = %e, "steam media lookup failed");
            Json(SteamMedia::unavailable())
        }
    }
}
