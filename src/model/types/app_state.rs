use crate::model::functions::VoteStore;
use axum::extract::FromRef;

#[derive(FromRef, Clone, Debug)]
pub struct AppState {
    pub store: VoteStore,
    pub reqwest_client: reqwest::Client,
    pub leptos_options: leptos::prelude::LeptosOptions,
}

impl AppState {
    pub fn new(leptos_options: leptos::prelude::LeptosOptions) -> Self {
        Self {
            store: VoteStore::default(),
            reqwest_client: reqwest::Client::new(),
            leptos_options,
        }
    }
}
