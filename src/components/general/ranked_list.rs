use crate::model::types::RankedEntry;
use leptos::{either::Either, prelude::*};

/// One of the "top games" columns on the results page.
#[component]
pub fn RankedList(#[prop(into)] heading: String, entries: Vec<RankedEntry>) -> impl IntoView {
    view! {
        <h2>{heading}</h2>
        {if entries.is_empty() {
            Either::Left(view! { <p class="no-votes">"No votes yet"</p> })
        } else {
            Either::Right(
                view! {
                    <ol class="ranked-list">
                        {entries
                            .into_iter()
                            .map(|entry| {
                                let votes = if entry.count == 1 { "vote" } else { "votes" };
                                view! {
                                    <li>
                                        <span class="ranked-title">{entry.title}</span>
                                        <span class="ranked-count">{entry.count} " " {votes}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ol>
                },
            )
        }}
    }
}
