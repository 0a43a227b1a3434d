use crate::model::types::{placeholder_url, steam_capsule_url, youtube_thumbnail_url, Game};
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ThumbStage {
    Capsule,
    Youtube,
    Placeholder,
}

/// Strict two-step degrade chain: Steam capsule, then the YouTube thumbnail
/// if a video id is known, then a generated stand-in with the title. Once on
/// the placeholder the error handler does nothing, so a broken placeholder
/// never loops.
#[component]
pub fn Thumbnail(game: Game) -> impl IntoView {
    let initial = match (game.steam_app_id, &game.youtube_id) {
        (Some(_), _) => ThumbStage::Capsule,
        (None, Some(_)) => ThumbStage::Youtube,
        (None, None) => ThumbStage::Placeholder,
    };
    let (stage, set_stage) = signal(initial);

    let has_youtube = game.youtube_id.is_some();
    let on_error = move |_| match stage.get_untracked() {
        ThumbStage::Capsule => set_stage.set(if has_youtube {
            ThumbStage::Youtube
        } else {
            ThumbStage::Placeholder
        }),
        ThumbStage::Youtube => set_stage.set(ThumbStage::Placeholder),
        ThumbStage::Placeholder => {}
    };

    let alt = format!("Preview of {}", game.title);
    let src = move || match stage.get() {
        ThumbStage::Capsule => steam_capsule_url(game.steam_app_id.unwrap_or_default()),
        ThumbStage::Youtube => match &game.youtube_id {
            Some(id) => youtube_thumbnail_url(id),
            None => placeholder_url(&game.title),
        },
        ThumbStage::Placeholder => placeholder_url(&game.title),
    };

    view! { <img class="thumbnail" src=src alt=alt on:error=on_error /> }
}
