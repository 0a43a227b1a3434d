use crate::model::types::Game;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Titles that skip the whole media cascade and get a plain "learn more"
/// link instead. These are launcher-only games with no useful trailer embed.
pub const SPECIAL_TITLES: [&str; 6] = [
    "GoldenEye: Source",
    "Heroes of the Storm",
    "Renegade X",
    "StarCraft",
    "StarCraft 2",
    "Warcraft III: Reforged",
];

pub fn is_special_title(title: &str) -> bool {
    SPECIAL_TITLES.contains(&title)
}

/// What the cascade works from; read off a catalog entry when the play
/// overlay is clicked, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaDescriptor {
    pub game_id: u32,
    pub title: String,
    pub store_url: String,
    pub youtube_id: Option<String>,
    pub steam_app_id: Option<u32>,
}

impl From<&Game> for MediaDescriptor {
    fn from(game: &Game) -> Self {
        Self {
            game_id: game.id,
            title: game.title.clone(),
            store_url: game.store_url.clone(),
            youtube_id: game.youtube_id.clone(),
            steam_app_id: game.steam_app_id,
        }
    }
}

/// The one thing the cascade resolves per click. Every variant renders
/// something; there is no empty terminal state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaSource {
    SteamClip(String),
    SteamScreenshot(String),
    YoutubeEmbed(String),
    LearnMore,
    Unavailable,
}

/// Response of `GET /api/steam_media/:app_id`, the server-side flattening of
/// the storefront appdetails payload.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct SteamMedia {
    pub success: bool,
    #[serde(default)]
    pub movies: Vec<SteamMovie>,
    #[serde(default)]
    pub screenshots: Vec<SteamScreenshot>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SteamMovie {
    pub name: String,
    pub webm_max: Option<String>,
    pub mp4_max: Option<String>,
}

impl SteamMovie {
    pub fn best_url(&self) -> Option<&str> {
        self.webm_max.as_deref().or(self.mp4_max.as_deref())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SteamScreenshot {
    pub path_thumbnail: String,
    pub path_full: String,
}

impl SteamMedia {
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// First movie if it has a playable url (webm preferred over mp4), else
    /// the first screenshot at full resolution. None means tier exhausted.
    pub fn best_source(&self) -> Option<MediaSource> {
        if !self.success {
            return None;
        }
        if let Some(url) = self.movies.first().and_then(SteamMovie::best_url) {
            return Some(MediaSource::SteamClip(url.to_owned()));
        }
        self.screenshots.first().map(|shot| {
            let path = if shot.path_full.is_empty() {
                &shot.path_thumbnail
            } else {
                &shot.path_full
            };
            MediaSource::SteamScreenshot(path.clone())
        })
    }
}

/// Raw shape of `https://store.steampowered.com/api/appdetails`, keyed by the
/// app id it was asked about.
pub type AppDetailsResponse = HashMap<String, AppDetailsEntry>;

#[derive(Deserialize, Debug, Clone)]
pub struct AppDetailsEntry {
    pub success: bool,
    #[serde(default)]
    pub data: Option<AppDetailsData>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct AppDetailsData {
    #[serde(default)]
    pub movies: Vec<RawMovie>,
    #[serde(default)]
    pub screenshots: Vec<SteamScreenshot>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct RawMovie {
    #[serde(default)]
    pub name: String,
    pub webm: Option<RawMovieFormats>,
    pub mp4: Option<RawMovieFormats>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct RawMovieFormats {
    pub max: Option<String>,
}

impl SteamMedia {
    pub fn from_appdetails(app_id: u32, response: AppDetailsResponse) -> Self {
        let Some(entry) = response.get(&app_id.to_string()) else {
            return Self::unavailable();
        };
        if !entry.success {
            return Self::unavailable();
        }
        let data = entry.data.clone().unwrap_or_default();
        Self {
            success: true,
            movies: data
                .movies
                .into_iter()
                .map(|movie| SteamMovie {
                    name: movie.name,
                    webm_max: movie.webm.and_then(|f| f.max),
                    mp4_max: movie.mp4.and_then(|f| f.max),
                })
                .collect(),
            screenshots: data.screenshots,
        }
    }
}

pub fn youtube_embed_url(video_id: &str) -> String {
    format!(
        "https://www.youtube.com/embed/{}?autoplay=1&mute=1&controls=1&modestbranding=1&rel=0",
        video_id
    )
}

pub fn youtube_oembed_url(video_id: &str) -> String {
    format!(
        "https://www.youtube.com/oembed?url=https://www.youtube.com/watch?v={}&format=json",
        video_id
    )
}

pub fn youtube_thumbnail_url(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{}/hqdefault.jpg", video_id)
}

pub fn steam_capsule_url(app_id: u32) -> String {
    format!(
        "https://cdn.cloudflare.steamstatic.com/steam/apps/{}/header.jpg",
        app_id
    )
}

/// Generated stand-in carrying the game title, the last rung of the
/// thumbnail fallback chain.
pub fn placeholder_url(title: &str) -> String {
    let text: String = title
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '+' })
        .collect();
    format!("https://placehold.co/460x215?text={}", text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> AppDetailsResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn appdetails_with_movie_flattens_to_clip() {
        let response = decode(
            r#"{"945360": {"success": true, "data": {"movies": [
                {"name": "Trailer", "webm": {"480": "w480", "max": "wmax"}, "mp4": {"max": "mmax"}}
            ], "screenshots": [{"path_thumbnail": "t", "path_full": "f"}]}}}"#,
        );
        let media = SteamMedia::from_appdetails(945360, response);
        assert_eq!(media.best_source(), Some(MediaSource::SteamClip("wmax".to_owned())));
    }

    #[test]
    fn mp4_is_used_when_webm_is_missing() {
        let response = decode(
            r#"{"1": {"success": true, "data": {"movies": [
                {"name": "Trailer", "mp4": {"max": "mmax"}}
            ]}}}"#,
        );
        let media = SteamMedia::from_appdetails(1, response);
        assert_eq!(media.best_source(), Some(MediaSource::SteamClip("mmax".to_owned())));
    }

    #[test]
    fn screenshot_is_the_fallback_when_no_movie_plays() {
        let response = decode(
            r#"{"1": {"success": true, "data": {
                "movies": [{"name": "broken"}],
                "screenshots": [{"path_thumbnail": "thumb", "path_full": "full"}]
            }}}"#,
        );
        let media = SteamMedia::from_appdetails(1, response);
        assert_eq!(
            media.best_source(),
            Some(MediaSource::SteamScreenshot("full".to_owned()))
        );
    }

    #[test]
    fn unsuccessful_lookup_exhausts_the_tier() {
        let response = decode(r#"{"1": {"success": false}}"#);
        let media = SteamMedia::from_appdetails(1, response);
        assert_eq!(media, SteamMedia::unavailable());
        assert_eq!(media.best_source(), None);
    }

    #[test]
    fn missing_app_id_key_exhausts_the_tier() {
        let response = decode(r#"{"2": {"success": true, "data": {}}}"#);
        assert_eq!(SteamMedia::from_appdetails(1, response).best_source(), None);
    }

    #[test]
    fn empty_media_lists_exhaust_the_tier() {
        let response = decode(r#"{"1": {"success": true, "data": {"movies": [], "screenshots": []}}}"#);
        assert_eq!(SteamMedia::from_appdetails(1, response).best_source(), None);
    }

    #[test]
    fn special_titles_are_on_the_allow_list() {
        assert!(is_special_title("Heroes of the Storm"));
        assert!(!is_special_title("Among Us"));
    }

    #[test]
    fn placeholder_url_carries_the_title() {
        assert_eq!(
            placeholder_url("Age of Empires II"),
            "https://placehold.co/460x215?text=Age+of+Empires+II"
        );
    }

    #[test]
    fn descriptor_is_read_off_the_catalog_entry() {
        let game = Game::new(
            4,
            "Among Us",
            "https://store.steampowered.com/app/945360/Among_Us/",
            "$4.99",
            "15",
            Some("NSJ4cESNQfE"),
        );
        let descriptor = MediaDescriptor::from(&game);
        assert_eq!(descriptor.steam_app_id, Some(945360));
        assert_eq!(descriptor.youtube_id.as_deref(), Some("NSJ4cESNQfE"));
    }
}
