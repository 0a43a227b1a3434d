use crate::components::general::{GameCard, Toast, ToastMessage};
use crate::model::catalog;
use crate::model::types::{is_duplicate_name_message, VoteChoice, VoteRequest, VoteResponse};
use gloo::net::http::Request;
use gloo::storage::{errors::StorageError, LocalStorage, Storage};
use gloo::timers::future::sleep;
use leptos::either::Either;
use leptos::{logging::error, prelude::*, task::spawn_local};
use leptos_meta::Title;
use leptos_router::{hooks::use_navigate, NavigateOptions};
use std::collections::HashMap;
use std::time::Duration;

const NAME_STORAGE_KEY: &str = "voter_name";
/// Long enough for the success toast to be seen before leaving the page.
const RESULTS_REDIRECT_DELAY: Duration = Duration::from_millis(1500);

/// The ballot form. Two states only: idle and submitting; while a request is
/// in flight every control is disabled, so a single click can never produce
/// two concurrent submissions.
#[component]
pub fn VotePage() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (name_error, set_name_error) = signal(None::<String>);
    let (selections, set_selections) = signal(HashMap::<u32, VoteChoice>::new());
    let (toast, set_toast) = signal(None::<ToastMessage>);
    let (submitting, set_submitting) = signal(false);

    // Remember the name across visits; a kiosk machine sees many voters, so
    // a missing key is the normal case.
    Effect::new(move |_| match LocalStorage::get::<String>(NAME_STORAGE_KEY) {
        Ok(stored) => set_name.set(stored),
        Err(StorageError::KeyNotFound(_)) => {}
        Err(e) => error!("error reading stored voter name: {:?}", e),
    });

    let disabled = Signal::derive(move || submitting.get());
    let navigate = use_navigate();

    let on_submit = move |_| {
        let navigate = navigate.clone();
        let trimmed = name.with_untracked(|n| n.trim().to_owned());
        if trimmed.is_empty() {
            set_name_error.set(Some("Please enter your name".to_owned()));
            set_toast.set(Some(ToastMessage::error("Please enter your name")));
            return;
        }
        if submitting.get_untracked() {
            return;
        }
        set_name_error.set(None);
        set_submitting.set(true);

        let votes = selections.get_untracked();
        spawn_local(async move {
            match submit_votes(&trimmed, votes).await {
                Ok(VoteResponse { success: true, .. }) => {
                    if let Err(e) = LocalStorage::set(NAME_STORAGE_KEY, &trimmed) {
                        error!("error storing voter name: {:?}", e);
                    }
                    set_toast.set(Some(ToastMessage::success("Vote submitted successfully!")));
                    set_selections.set(HashMap::new());
                    sleep(RESULTS_REDIRECT_DELAY).await;
                    navigate("/results", NavigateOptions::default());
                }
                Ok(VoteResponse { message, .. }) => {
                    set_submitting.set(false);
                    let message =
                        message.unwrap_or_else(|| "Error submitting vote".to_owned());
                    if is_duplicate_name_message(&message) {
                        set_name_error.set(Some(message.clone()));
                    }
                    set_toast.set(Some(ToastMessage::error(message)));
                }
                Err(e) => {
                    error!("error submitting vote: {:?}", e);
                    set_submitting.set(false);
                    set_toast.set(Some(ToastMessage::error(
                        "An error occurred. Please try again.",
                    )));
                }
            }
        });
    };

    view! {
        <Title text="LAN Game Night — Vote" />
        <Toast message=toast on_dismiss=Callback::new(move |_| set_toast.set(None)) />
        <div id="vote-page">
            <header>
                <h1>"LAN Game Night"</h1>
                <p>"Mark the games you want on the schedule, then submit once."</p>
            </header>

            <div class="input-with-label">
                <label for="voter-name">"Your Name"</label>
                <input
                    type="text"
                    id="voter-name"
                    class="text-input"
                    placeholder="ex. Sam"
                    class:input-err=move || name_error.with(Option::is_some)
                    prop:value=name
                    prop:disabled=move || submitting.get()
                    on:input=move |ev| {
                        set_name.set(event_target_value(&ev));
                        set_name_error.set(None);
                    }
                />
                {move || {
                    name_error.get().map(|message| view! { <p class="inline-error">{message}</p> })
                }}
            </div>

            <div class="game-grid">
                <For
                    each=move || catalog::games().iter().cloned()
                    key=|game| game.id
                    children=move |game| {
                        let id = game.id;
                        let choice = Signal::derive(move || {
                            selections.with(|s| s.get(&id).copied())
                        });
                        let on_select = Callback::new(move |choice: VoteChoice| {
                            set_selections
                                .update(|s| {
                                    s.insert(id, choice);
                                })
                        });
                        view! { <GameCard game choice on_select disabled /> }
                    }
                />
            </div>

            <button
                class="button submit-button"
                prop:disabled=move || submitting.get()
                on:click=on_submit
            >
                {move || {
                    if submitting.get() {
                        Either::Left(view! {
                            <span class="spinner"></span>
                            "Submitting..."
                        })
                    } else {
                        Either::Right("Submit Votes")
                    }
                }}
            </button>
        </div>
    }
}

async fn submit_votes(
    user_name: &str,
    votes: HashMap<u32, VoteChoice>,
) -> Result<VoteResponse, gloo::net::Error> {
    Request::post("/vote")
        .json(&VoteRequest {
            user_name: user_name.to_owned(),
            votes,
        })?
        .send()
        .await?
        .json::<VoteResponse>()
        .await
}
