use crate::components::general::Thumbnail;
use crate::model::types::{
    is_special_title, youtube_embed_url, youtube_oembed_url, Game, MediaDescriptor, MediaSource,
    SteamMedia,
};
use gloo::net::http::Request;
use icondata::IoPlay;
use leptos::{
    logging::{log, warn},
    prelude::*,
    task::spawn_local,
};

#[derive(Clone, Debug, PartialEq, Eq)]
enum MediaState {
    Idle,
    Loading,
    Resolved(MediaSource),
}

/// The click-to-play tile of a game card. One click resolves exactly one
/// media source through the fallback cascade and swaps the whole container
/// content at every stage.
///
/// A click while a lookup is in flight is ignored; the pending fetch is not
/// cancelled, so a stale response can never race a newer one into the
/// container.
#[component]
pub fn MediaPlayer(game: Game) -> impl IntoView {
    let descriptor = MediaDescriptor::from(&game);
    let (state, set_state) = signal(MediaState::Idle);

    let on_play = {
        let descriptor = descriptor.clone();
        move |_| {
            if state.get_untracked() != MediaState::Idle {
                return;
            }
            set_state.set(MediaState::Loading);
            let descriptor = descriptor.clone();
            spawn_local(async move {
                let source = resolve(&descriptor).await;
                log!("media for {:?} resolved to {:?}", descriptor.title, source);
                set_state.set(MediaState::Resolved(source));
            });
        }
    };

    let store_url = descriptor.store_url.clone();
    let title = descriptor.title.clone();

    view! {
        <div class="video-container">
            {move || {
                let store_url = store_url.clone();
                let title = title.clone();
                match state.get() {
                    MediaState::Idle => {
                        let game = game.clone();
                        view! {
                            <Thumbnail game />
                            <button class="play-overlay" title="Play trailer" on:click=on_play.clone()>
                                <svg viewBox=IoPlay.view_box inner_html=IoPlay.data></svg>
                            </button>
                        }
                            .into_any()
                    }
                    MediaState::Loading => view! {
                        <div class="media-tile">
                            <div class="spinner"></div>
                            <p>"Loading video..."</p>
                        </div>
                    }
                        .into_any(),
                    MediaState::Resolved(MediaSource::SteamClip(url)) => view! {
                        <video src=url controls=true autoplay=true prop:muted=true></video>
                    }
                        .into_any(),
                    MediaState::Resolved(MediaSource::SteamScreenshot(url)) => view! {
                        <a href=store_url target="_blank">
                            <img src=url alt=format!("Screenshot of {}", title) />
                        </a>
                    }
                        .into_any(),
                    MediaState::Resolved(MediaSource::YoutubeEmbed(video_id)) => view! {
                        <iframe
                            src=youtube_embed_url(&video_id)
                            allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                            allowfullscreen=true
                        ></iframe>
                    }
                        .into_any(),
                    MediaState::Resolved(MediaSource::LearnMore) => view! {
                        <div class="media-tile">
                            <p>{title.clone()}</p>
                            <a class="button" href=store_url target="_blank">
                                "Learn more"
                            </a>
                        </div>
                    }
                        .into_any(),
                    MediaState::Resolved(MediaSource::Unavailable) => view! {
                        <div class="media-tile media-unavailable">
                            <svg fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    stroke-width="2"
                                    d="M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z"
                                ></path>
                            </svg>
                            <p>"No video available."</p>
                            <a href=store_url target="_blank">
                                "View on store page"
                            </a>
                        </div>
                    }
                        .into_any(),
                }
            }}
        </div>
    }
}

/// Walks the fallback tiers in the documented order: allow-list, Steam proxy
/// (movie, else screenshot), YouTube embeddability probe, terminal
/// unavailable tile. Every failure degrades to the next tier.
async fn resolve(descriptor: &MediaDescriptor) -> MediaSource {
    if is_special_title(&descriptor.title) {
        return MediaSource::LearnMore;
    }

    if let Some(app_id) = descriptor.steam_app_id {
        match fetch_steam_media(app_id).await {
            Ok(media) => match media.best_source() {
                Some(source) => return source,
                None => warn!("no steam media for {}, trying the trailer", descriptor.title),
            },
            Err(e) => warn!(
                "steam media lookup failed for {}: {:?}",
                descriptor.title, e
            ),
        }
    }

    if let Some(video_id) = &descriptor.youtube_id {
        if youtube_embeddable(video_id).await {
            return MediaSource::YoutubeEmbed(video_id.clone());
        }
    }

    MediaSource::Unavailable
}

async fn fetch_steam_media(app_id: u32) -> Result<SteamMedia, gloo::net::Error> {
    Request::get(&format!("/api/steam_media/{}", app_id))
        .send()
        .await?
        .json::<SteamMedia>()
        .await
}

/// HEAD-style existence check against the oEmbed endpoint; any transport
/// failure counts as not embeddable.
async fn youtube_embeddable(video_id: &str) -> bool {
    match Request::get(&youtube_oembed_url(video_id)).send().await {
        Ok(response) => response.ok(),
        Err(e) => {
            warn!("oembed probe failed for {}: {:?}", video_id, e);
            false
        }
    }
}
