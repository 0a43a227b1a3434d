use crate::components::general::{RankedList, ResultsTable};
use crate::model::types::{Error, ResultsSnapshot};
use gloo::net::http::Request;
use leptos::{logging::error, prelude::*, task::spawn_local};
use leptos_meta::Title;

#[derive(Clone, Debug)]
enum ResultsState {
    Loading,
    Loaded(ResultsSnapshot),
    Failed,
}

/// Fetches the aggregate snapshot once per page load and renders it in one
/// pass. On failure every container shows the same error block, never a mix
/// of data and error text.
#[component]
pub fn ResultsPage() -> impl IntoView {
    let (state, set_state) = signal(ResultsState::Loading);

    Effect::new(move |_| {
        spawn_local(async move {
            match fetch_results().await {
                Ok(snapshot) => set_state.set(ResultsState::Loaded(snapshot)),
                Err(e) => {
                    error!("error fetching results: {:?}", e);
                    set_state.set(ResultsState::Failed);
                }
            }
        });
    });

    view! {
        <Title text="LAN Game Night — Results" />
        <div id="results-page">
            <h1>"Voting Results"</h1>
            {move || match state.get() {
                ResultsState::Loading => view! {
                    <div class="media-tile">
                        <div class="spinner"></div>
                        <p>"Loading results..."</p>
                    </div>
                }
                    .into_any(),
                ResultsState::Failed => view! {
                    <div class="top-lists">
                        <section id="top-interested">
                            <h2>"Most Wanted Games"</h2>
                            <ResultsError />
                        </section>
                        <section id="top-maybe">
                            <h2>"Maybe Interested"</h2>
                            <ResultsError />
                        </section>
                        <section id="top-engagement">
                            <h2>"Highest Engagement"</h2>
                            <ResultsError />
                        </section>
                    </div>
                    <section id="full-results">
                        <h2>"Full Results"</h2>
                        <ResultsError />
                    </section>
                }
                    .into_any(),
                ResultsState::Loaded(snapshot) => view! {
                    <p class="subtitle">"Total voters: " {snapshot.total_voters}</p>
                    <div class="top-lists">
                        <section id="top-interested">
                            <RankedList
                                heading="Most Wanted Games"
                                entries=snapshot.top_interested.clone()
                            />
                        </section>
                        <section id="top-maybe">
                            <RankedList
                                heading="Maybe Interested"
                                entries=snapshot.top_maybe.clone()
                            />
                        </section>
                        <section id="top-engagement">
                            <RankedList
                                heading="Highest Engagement"
                                entries=snapshot.top_engagement.clone()
                            />
                        </section>
                    </div>
                    <section id="full-results">
                        <h2>"Full Results"</h2>
                        <ResultsTable games=snapshot.games.clone() />
                    </section>
                }
                    .into_any(),
            }}
            <a class="button back-link" href="/">
                "Back to Voting"
            </a>
        </div>
    }
}

#[component]
fn ResultsError() -> impl IntoView {
    view! {
        <div class="results-error">
            <p>"Error loading results. Please try again later."</p>
            <a href="/">"Go back to voting"</a>
        </div>
    }
}

async fn fetch_results() -> Result<ResultsSnapshot, Error> {
    let response = Request::get("/api/results")
        .send()
        .await
        .map_err(|e| Error::Fetch(e.to_string()))?;
    if !response.ok() {
        return Err(Error::Fetch(format!(
            "results fetch returned {}",
            response.status()
        )));
    }
    response
        .json::<ResultsSnapshot>()
        .await
        .map_err(|e| Error::Decode(e.to_string()))
}
