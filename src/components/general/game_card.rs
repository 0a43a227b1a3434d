use crate::components::general::MediaPlayer;
use crate::model::types::{Game, VoteChoice};
use leptos::prelude::*;

/// One catalog entry on the ballot: media tile, store link, and the
/// three-way radio group. The radios are owned here; the page only sees the
/// selected choice through the callback.
#[component]
pub fn GameCard(
    game: Game,
    #[prop(into)] choice: Signal<Option<VoteChoice>>,
    on_select: Callback<VoteChoice>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let radio_group = format!("game_{}", game.id);

    view! {
        <div class="game-card">
            <MediaPlayer game=game.clone() />
            <div class="game-info">
                <h3 class="game-title">
                    <a href=game.store_url.clone() target="_blank">
                        {game.title.clone()}
                    </a>
                </h3>
                <p class="game-meta">{game.price.clone()} " · " {game.max_players.clone()} " players"</p>
            </div>
            <div class="choices">
                {VoteChoice::ALL
                    .iter()
                    .map(|&option| {
                        let input_id = format!("{}-{}", radio_group, option.as_str());
                        let name = radio_group.clone();
                        view! {
                            <label class="choice" for=input_id.clone()>
                                <input
                                    type="radio"
                                    id=input_id.clone()
                                    name=name
                                    value=option.as_str()
                                    prop:checked=move || choice.get() == Some(option)
                                    prop:disabled=move || disabled.get()
                                    on:change=move |_| on_select.run(option)
                                />
                                {option.label()}
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
