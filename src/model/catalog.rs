use crate::model::types::Game;
use std::sync::LazyLock;

/// The game-night ballot. Edited by hand before each session; ids are only
/// required to be unique, not dense.
static GAMES: LazyLock<Vec<Game>> = LazyLock::new(|| {
    vec![
        Game::new(1, "7 Days to Die", "https://store.steampowered.com/app/251570/7_Days_to_Die/", "$20.99", "8", Some("Nl_9h2e-3fM")),
        Game::new(2, "Age of Empires II: Definitive Edition", "https://store.steampowered.com/app/813780/Age_of_Empires_II_Definitive_Edition/", "$34.99", "8", Some("1NhWgW7enMM")),
        Game::new(3, "Age of Empires IV: Anniversary Edition", "https://store.steampowered.com/app/1466860/Age_of_Empires_IV_Anniversary_Edition/", "$39.99", "8", Some("O79KBkO5GtA")),
        Game::new(4, "Among Us", "https://store.steampowered.com/app/945360/Among_Us/", "$4.99", "15", Some("NSJ4cESNQfE")),
        Game::new(5, "ARK: Survival Ascended", "https://store.steampowered.com/app/2399830/ARK_Survival_Ascended/", "$44.99", "70", Some("5fJI6XP0J2M")),
        Game::new(6, "BallisticNG", "https://store.steampowered.com/app/473770/BallisticNG/", "$14.99", "16", Some("lz3f0J7tXK4")),
        Game::new(7, "Ball Race Party", "https://store.steampowered.com/app/3202400/Ball_Race_Party/", "$3.99", "12", Some("mQY3Z9v7Lq4")),
        Game::new(8, "Besiege", "https://store.steampowered.com/app/346010/Besiege/", "$3.74", "8", Some("g7Vh2h6xqa0")),
        Game::new(9, "Blackwake", "https://store.steampowered.com/app/420290/Blackwake/", "FREE", "13 Player Crew", Some("JNq8wFnMA7w")),
        Game::new(10, "Circuit Superstars", "https://store.steampowered.com/app/1097130/Circuit_Superstars/", "$19.99", "12", Some("VjZ7tU4hU9s")),
        Game::new(11, "Command & Conquer Remastered", "https://store.steampowered.com/app/1213210/Command__Conquer_Remastered_Collection/", "$4.99", "4 / 8", Some("OarRYpma1h4")),
        Game::new(12, "Counter-Strike", "https://store.steampowered.com/app/10/CounterStrike/", "$9.99", "10 / 32", Some("edYCtaNSc3g")),
        Game::new(13, "Counter-Strike 2", "https://store.steampowered.com/app/730/CounterStrike_2/", "FREE", "10 / 64", Some("RzZ2bWZ_8Ho")),
        Game::new(14, "DayZ", "https://store.steampowered.com/app/221100/DayZ/", "$29.99", "60", Some("XIWyk2mz5ug")),
        Game::new(15, "Due Process", "https://store.steampowered.com/app/753650/Due_Process/", "$0.99", "10", Some("XlZR0GQnR1k")),
        Game::new(16, "EmptyEpsilon", "https://store.steampowered.com/app/1907040/EmptyEpsilon/", "FREE", "32", Some("tMnXqY4ZQo8")),
        Game::new(17, "Fistful of Frags", "https://store.steampowered.com/app/265630/Fistful_of_Frags/", "FREE", "20", Some("zQY3qKh6vRg")),
        Game::new(18, "GoldenEye: Source", "https://www.moddb.com/mods/goldeneye-source", "FREE", "16", Some("3f0zVRcMZJc")),
        Game::new(19, "Guild Wars 2", "https://store.steampowered.com/app/1284210/Guild_Wars_2/", "FREE", "N/A", Some("oR9XaU9M5t8")),
        Game::new(20, "Halo: The Master Chief Collection", "https://store.steampowered.com/app/976730/Halo_The_Master_Chief_Collection/", "$39.99", "16", Some("8r8CNWfUQvo")),
        Game::new(21, "Heroes of the Storm", "https://heroesofthestorm.blizzard.com/en-us/", "FREE", "10", Some("0ecv0bT9DEo")),
        Game::new(22, "HYPERCHARGE: Unboxed", "https://store.steampowered.com/app/523660/HYPERCHARGE_Unboxed/", "$24.99", "8", Some("eLdi9aINqXk")),
        Game::new(23, "Marvel Rivals", "https://store.steampowered.com/app/2767030/Marvel_Rivals/", "FREE", "12", Some("jSP4KPf2D4M")),
        Game::new(24, "NEOTOKYO", "https://store.steampowered.com/app/244630/NEOTOKYO/", "FREE", "32", Some("4c7aZ6lzw7o")),
        Game::new(25, "Nuclear Nightmare", "https://store.steampowered.com/app/2909110/Nuclear_Nightmare/", "$6.99", "8", Some("vXqWZ8QkUQk")),
        Game::new(26, "Overwatch 2", "https://store.steampowered.com/app/2357570/Overwatch_2/", "FREE", "12", Some("GKXS_YA9s7E")),
        Game::new(27, "Overload", "https://store.steampowered.com/app/448850/Overload/", "$29.99", "8", Some("3f0zVRcMZJc")),
        Game::new(28, "PICO PARK 2", "https://store.steampowered.com/app/2644470/PICO_PARK_2/", "FREE", "8", Some("8QjDm0fFKy4")),
        Game::new(29, "Pummel Party", "https://store.steampowered.com/app/880940/Pummel_Party/", "$14.99", "8", Some("9Kp8LbGJ8sQ")),
        Game::new(30, "Renegade X", "https://totemarts.games/games/renegade-x/", "FREE", "64", Some("h2X9F8Y6f7E")),
        Game::new(31, "Retrocycles", "https://store.steampowered.com/app/1306180/Retrocycles/", "FREE", "16", Some("5XgB5XgB5Xg")),
        Game::new(32, "Rust", "https://store.steampowered.com/app/252490/Rust/", "$39.99", "1024", Some("MJV4fsUKfSk")),
        Game::new(33, "Sea of Thieves", "https://store.steampowered.com/app/1172620/Sea_of_Thieves_2025_Edition/", "$39.99", "4 Player Crew", Some("r5JIBaETE8I")),
        Game::new(34, "Serious Sam HD", "https://store.steampowered.com/app/41000/Serious_Sam_HD_The_First_Encounter/", "$1.49", "16", Some("3f0zVRcMZJc")),
        Game::new(35, "Soldat 2", "https://store.steampowered.com/app/474220/Soldat_2/", "$7.99", "32", Some("5XgB5XgB5Xg")),
        Game::new(36, "StarCraft", "https://starcraft.blizzard.com/en-us/", "FREE", "8 / 12", Some("VTLcAKAzSbM")),
        Game::new(37, "StarCraft 2", "https://starcraft2.blizzard.com/en-us/", "FREE", "8 / 12", Some("9SfCDk5PStM")),
        Game::new(38, "Stumble Guys", "https://store.steampowered.com/app/1677740/Stumble_Guys/", "FREE", "32", Some("DGBGgH5jfXc")),
        Game::new(39, "Sven Co-op", "https://store.steampowered.com/app/225840/Sven_Coop/", "FREE", "32", Some("3f0zVRcMZJc")),
        Game::new(40, "Texas Chain Saw Massacre", "https://store.steampowered.com/app/1433140/The_Texas_Chain_Saw_Massacre/", "$19.99", "7", Some("yXfDwgW4H4E")),
        Game::new(41, "Torchlight II", "https://store.steampowered.com/app/200710/Torchlight_II/", "$19.99", "8", Some("8ZbFHCW6e2M")),
        Game::new(42, "TRIBES 3: Rivals", "https://store.steampowered.com/app/2687970/TRIBES_3_Rivals/", "$19.99", "32", Some("h2X9F8Y6f7E")),
        Game::new(43, "V Rising", "https://store.steampowered.com/app/1604030/V_Rising/", "$34.99", "60", Some("aGBZL3pQ9vI")),
        Game::new(44, "Viscera Cleanup Detail", "https://store.steampowered.com/app/246900/Viscera_Cleanup_Detail/", "$12.99 or $34.99 for 4-Pack", "32", Some("N9pX3yPdd0c")),
        Game::new(45, "Warborne Above Ashes", "https://store.steampowered.com/app/3142050/Warborne_Above_Ashes/", "FREE", "200", Some("5XgB5XgB5Xg")),
        Game::new(46, "Warcraft III: Reforged", "https://warcraft3.blizzard.com/en-us/", "$29.99", "24", Some("1m7L9uLzR5g")),
        Game::new(47, "X-MODE", "https://store.steampowered.com/app/2265640/XMODE/", "FREE", "N/A", Some("5XgB5XgB5Xg")),
    ]
});

pub fn games() -> &'static [Game] {
    &GAMES
}

pub fn game(id: u32) -> Option<&'static Game> {
    GAMES.iter().find(|game| game.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::types::is_special_title;
    use itertools::Itertools;

    #[test]
    fn ids_are_unique() {
        assert_eq!(games().iter().map(|g| g.id).unique().count(), games().len());
    }

    #[test]
    fn every_special_title_is_in_the_catalog() {
        for title in crate::model::types::SPECIAL_TITLES {
            assert!(
                games().iter().any(|g| g.title == title),
                "allow-listed title {:?} missing from catalog",
                title
            );
        }
    }

    #[test]
    fn steam_games_have_an_app_id() {
        for game in games() {
            if game.store_url.starts_with("https://store.steampowered.com/") {
                assert!(game.steam_app_id.is_some(), "{} has no app id", game.title);
            } else {
                assert!(game.steam_app_id.is_none(), "{} should have no app id", game.title);
            }
        }
    }

    #[test]
    fn special_titles_sold_off_steam_stay_off_the_cascade() {
        for game in games().iter().filter(|g| is_special_title(&g.title)) {
            assert!(game.steam_app_id.is_none());
        }
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(game(4).map(|g| g.title.as_str()), Some("Among Us"));
        assert!(game(999).is_none());
    }
}
