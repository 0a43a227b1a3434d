use crate::pages;
use leptos::{logging::error, prelude::*, task::spawn_local};
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};
use wasm_bindgen_futures::JsFuture;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <link rel="manifest" href="/manifest.json" />
                <link rel="stylesheet" href="/pkg/lan_game_vote.css" />

                <title>"LAN Game Night"</title>
                <meta
                    name="description"
                    content="Vote on the games for the next LAN night: mark what you are interested in, then watch the results page settle the schedule."
                />

                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    Effect::new(move |_| {
        register_service_worker();
    });
    view! {
        <Router>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=pages::VotePage />
                    <Route path=path!("/results") view=pages::ResultsPage />
                </Routes>
            </main>
        </Router>
    }
}

/// Offline shell: public/sw.js pre-caches the document root and static
/// assets on install and serves cache-first afterwards.
fn register_service_worker() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let container = window.navigator().service_worker();
    spawn_local(async move {
        if let Err(e) = JsFuture::from(container.register("/sw.js")).await {
            error!("error registering service worker: {:?}", e);
        }
    });
}
