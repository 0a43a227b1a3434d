pub mod api;

use crate::app::shell;
use crate::model::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use leptos_axum::{AxumRouteListing, LeptosRoutes};

pub fn new(leptos_routes: Vec<AxumRouteListing>, app_state: AppState) -> Router {
    Router::new()
        .leptos_routes(&app_state, leptos_routes, {
            let leptos_options = app_state.leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .route("/vote", post(api::submit_vote))
        .route("/api/results", get(api::results))
        .route("/api/steam_media/:app_id", get(api::steam_media))
        .fallback(leptos_axum::file_and_error_handler::<AppState, _>(shell))
        .with_state(app_state)
}
