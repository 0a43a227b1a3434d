use crate::model::types::GameTally;
use leptos::prelude::*;

/// The full tally, one row per catalog game in the snapshot's order
/// (descending interested count, ties by title).
#[component]
pub fn ResultsTable(games: Vec<GameTally>) -> impl IntoView {
    view! {
        <table class="results-table">
            <thead>
                <tr>
                    <th>"Game"</th>
                    <th>"Interested"</th>
                    <th>"Maybe"</th>
                    <th>"Not interested"</th>
                </tr>
            </thead>
            <tbody>
                {games
                    .into_iter()
                    .map(|tally| {
                        view! {
                            <tr>
                                <td class="cell-title">{tally.title.clone()}</td>
                                <td class="cell-interested">
                                    <span>{tally.interested_count()}</span>
                                    <VoterNames names=tally.interested.clone() />
                                </td>
                                <td class="cell-maybe">
                                    <span>{tally.maybe_count()}</span>
                                    <VoterNames names=tally.maybe.clone() />
                                </td>
                                <td class="cell-not-interested">
                                    <span>{tally.not_interested_count()}</span>
                                    <VoterNames names=tally.not_interested />
                                </td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

#[component]
fn VoterNames(names: Vec<String>) -> impl IntoView {
    (!names.is_empty()).then(|| view! { <div class="voter-names">{names.join(", ")}</div> })
}
