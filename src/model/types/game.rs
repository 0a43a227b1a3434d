use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: u32,
    pub title: String,
    pub store_url: String,
    pub price: String,
    pub max_players: String,
    /// none if no trailer is known for the game
    pub youtube_id: Option<String>,
    /// none for games that are not sold on Steam
    pub steam_app_id: Option<u32>,
}

impl Game {
    pub fn new(
        id: u32,
        title: &str,
        store_url: &str,
        price: &str,
        max_players: &str,
        youtube_id: Option<&str>,
    ) -> Self {
        Self {
            id,
            title: title.to_owned(),
            store_url: store_url.to_owned(),
            price: price.to_owned(),
            max_players: max_players.to_owned(),
            youtube_id: youtube_id.map(str::to_owned),
            steam_app_id: steam_app_id_from_url(store_url),
        }
    }
}

/// Pulls the numeric app id out of a Steam store url like
/// `https://store.steampowered.com/app/945360/Among_Us/`.
pub fn steam_app_id_from_url(url: &str) -> Option<u32> {
    if !url.starts_with("https://store.steampowered.com/") {
        return None;
    }
    url.split('/')
        .skip_while(|segment| *segment != "app")
        .nth(1)
        .and_then(|id| id.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_id_is_parsed_from_store_url() {
        assert_eq!(
            steam_app_id_from_url("https://store.steampowered.com/app/945360/Among_Us/"),
            Some(945360)
        );
    }

    #[test]
    fn non_steam_urls_have_no_app_id() {
        assert_eq!(
            steam_app_id_from_url("https://www.moddb.com/mods/goldeneye-source"),
            None
        );
        assert_eq!(
            steam_app_id_from_url("https://starcraft.blizzard.com/en-us/"),
            None
        );
    }

    #[test]
    fn mangled_store_urls_are_rejected() {
        assert_eq!(
            steam_app_id_from_url("https://store.steampowered.com/app/not_a_number/Foo/"),
            None
        );
        assert_eq!(steam_app_id_from_url("https://store.steampowered.com/"), None);
    }
}
