use crate::model::types::Game;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How many games the ranked lists on the results page show.
pub const TOP_LIST_LEN: usize = 10;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum VoteChoice {
    Interested,
    Maybe,
    NotInterested,
}

impl VoteChoice {
    pub const ALL: [VoteChoice; 3] = [
        VoteChoice::Interested,
        VoteChoice::Maybe,
        VoteChoice::NotInterested,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VoteChoice::Interested => "interested",
            VoteChoice::Maybe => "maybe",
            VoteChoice::NotInterested => "not_interested",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VoteChoice::Interested => "Interested",
            VoteChoice::Maybe => "Maybe",
            VoteChoice::NotInterested => "Not interested",
        }
    }
}

/// Body of `POST /vote`. Games the voter skipped are simply absent.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VoteRequest {
    pub user_name: String,
    pub votes: HashMap<u32, VoteChoice>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VoteResponse {
    pub success: bool,
    pub message: Option<String>,
}

impl VoteResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            message: Some("Vote recorded successfully!".to_owned()),
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}

/// The message pattern the vote form looks for to decide whether the name
/// field itself should be flagged.
pub fn is_duplicate_name_message(message: &str) -> bool {
    message.to_lowercase().contains("already voted")
}

/// One accepted submission.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Ballot {
    pub id: String,
    pub user_name: String,
    pub votes: HashMap<u32, VoteChoice>,
}

/// Per-game tally carrying the voter names behind each count.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GameTally {
    pub game_id: u32,
    pub title: String,
    pub interested: Vec<String>,
    pub maybe: Vec<String>,
    pub not_interested: Vec<String>,
}

impl GameTally {
    fn new(game_id: u32, title: String) -> Self {
        Self {
            game_id,
            title,
            interested: Vec::new(),
            maybe: Vec::new(),
            not_interested: Vec::new(),
        }
    }

    pub fn interested_count(&self) -> usize {
        self.interested.len()
    }

    pub fn maybe_count(&self) -> usize {
        self.maybe.len()
    }

    pub fn not_interested_count(&self) -> usize {
        self.not_interested.len()
    }

    /// Interested plus maybe, the "would show up" number.
    pub fn engagement_count(&self) -> usize {
        self.interested.len() + self.maybe.len()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub title: String,
    pub count: usize,
}

/// The one canonical shape of `GET /api/results`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ResultsSnapshot {
    pub total_voters: usize,
    pub games: Vec<GameTally>,
    pub top_interested: Vec<RankedEntry>,
    pub top_maybe: Vec<RankedEntry>,
    pub top_engagement: Vec<RankedEntry>,
}

/// Folds the accepted ballots into the results snapshot.
///
/// The table rows are ordered by descending interested count, ties broken
/// alphabetically by title. Voter name lists are sorted. Votes referencing a
/// game id that is not in the catalog are dropped.
pub fn aggregate(games: &[Game], ballots: &[Ballot]) -> ResultsSnapshot {
    let mut tallies: Vec<GameTally> = games
        .iter()
        .map(|game| GameTally::new(game.id, game.title.clone()))
        .collect();

    for ballot in ballots {
        for (game_id, choice) in &ballot.votes {
            let Some(tally) = tallies.iter_mut().find(|t| t.game_id == *game_id) else {
                continue;
            };
            let bucket = match choice {
                VoteChoice::Interested => &mut tally.interested,
                VoteChoice::Maybe => &mut tally.maybe,
                VoteChoice::NotInterested => &mut tally.not_interested,
            };
            bucket.push(ballot.user_name.clone());
        }
    }

    for tally in &mut tallies {
        tally.interested.sort();
        tally.maybe.sort();
        tally.not_interested.sort();
    }

    tallies.sort_by(|a, b| {
        b.interested_count()
            .cmp(&a.interested_count())
            .then_with(|| a.title.cmp(&b.title))
    });

    let top_interested = top_by(&tallies, GameTally::interested_count);
    let top_maybe = top_by(&tallies, GameTally::maybe_count);
    let top_engagement = top_by(&tallies, GameTally::engagement_count);

    ResultsSnapshot {
        total_voters: ballots.len(),
        games: tallies,
        top_interested,
        top_maybe,
        top_engagement,
    }
}

fn top_by(tallies: &[GameTally], count: impl Fn(&GameTally) -> usize) -> Vec<RankedEntry> {
    tallies
        .iter()
        .map(|tally| RankedEntry {
            title: tally.title.clone(),
            count: count(tally),
        })
        .filter(|entry| entry.count > 0)
        .sorted_by(|a, b| b.count.cmp(&a.count).then_with(|| a.title.cmp(&b.title)))
        .take(TOP_LIST_LEN)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(id: u32, title: &str) -> Game {
        Game::new(
            id,
            title,
            &format!("https://store.steampowered.com/app/{}/x/", id),
            "$9.99",
            "8",
            None,
        )
    }

    fn ballot(name: &str, votes: &[(u32, VoteChoice)]) -> Ballot {
        Ballot {
            id: cuid2::create_id(),
            user_name: name.to_owned(),
            votes: votes.iter().copied().collect(),
        }
    }

    #[test]
    fn choice_wire_strings_are_snake_case() {
        assert_eq!(
            serde_json::to_string(&VoteChoice::NotInterested).unwrap(),
            "\"not_interested\""
        );
        assert_eq!(
            serde_json::from_str::<VoteChoice>("\"maybe\"").unwrap(),
            VoteChoice::Maybe
        );
    }

    #[test]
    fn vote_request_round_trips_through_json() {
        let req = VoteRequest {
            user_name: "ada".to_owned(),
            votes: [(1, VoteChoice::Interested), (2, VoteChoice::NotInterested)]
                .into_iter()
                .collect(),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(serde_json::from_str::<VoteRequest>(&json).unwrap(), req);
    }

    #[test]
    fn table_is_sorted_by_interested_desc_then_title() {
        let games = vec![game(1, "Rust"), game(2, "Among Us"), game(3, "Besiege")];
        let ballots = vec![
            ballot("ada", &[(2, VoteChoice::Interested), (1, VoteChoice::Interested)]),
            ballot("bob", &[(2, VoteChoice::Interested), (3, VoteChoice::Interested)]),
        ];

        let snapshot = aggregate(&games, &ballots);
        let titles: Vec<&str> = snapshot.games.iter().map(|t| t.title.as_str()).collect();
        // Among Us leads with two interested; Besiege and Rust tie at one and
        // fall back to alphabetical order.
        assert_eq!(titles, vec!["Among Us", "Besiege", "Rust"]);
    }

    #[test]
    fn voter_names_are_collected_and_sorted() {
        let games = vec![game(1, "Rust")];
        let ballots = vec![
            ballot("zoe", &[(1, VoteChoice::Interested)]),
            ballot("ada", &[(1, VoteChoice::Interested)]),
            ballot("mel", &[(1, VoteChoice::Maybe)]),
        ];

        let snapshot = aggregate(&games, &ballots);
        assert_eq!(snapshot.total_voters, 3);
        assert_eq!(snapshot.games[0].interested, vec!["ada", "zoe"]);
        assert_eq!(snapshot.games[0].maybe, vec!["mel"]);
        assert!(snapshot.games[0].not_interested.is_empty());
    }

    #[test]
    fn top_lists_skip_zero_counts_and_cap_at_ten() {
        let games: Vec<Game> = (1..=15).map(|id| game(id, &format!("Game {:02}", id))).collect();
        let votes: Vec<(u32, VoteChoice)> =
            (1..=12).map(|id| (id, VoteChoice::Interested)).collect();
        let ballots = vec![ballot("ada", &votes)];

        let snapshot = aggregate(&games, &ballots);
        assert_eq!(snapshot.top_interested.len(), TOP_LIST_LEN);
        assert!(snapshot.top_interested.iter().all(|e| e.count == 1));
        assert!(snapshot.top_maybe.is_empty());
        // engagement mirrors interested when nobody picked maybe
        assert_eq!(snapshot.top_engagement.len(), TOP_LIST_LEN);
    }

    #[test]
    fn votes_for_unknown_games_are_dropped() {
        let games = vec![game(1, "Rust")];
        let ballots = vec![ballot("ada", &[(99, VoteChoice::Interested)])];

        let snapshot = aggregate(&games, &ballots);
        assert_eq!(snapshot.total_voters, 1);
        assert!(snapshot.games[0].interested.is_empty());
        assert!(snapshot.top_interested.is_empty());
    }

    #[test]
    fn engagement_counts_interested_and_maybe() {
        let games = vec![game(1, "Rust"), game(2, "Among Us")];
        let ballots = vec![
            ballot("ada", &[(1, VoteChoice::Maybe), (2, VoteChoice::Interested)]),
            ballot("bob", &[(1, VoteChoice::Maybe)]),
            ballot("mel", &[(1, VoteChoice::NotInterested)]),
        ];

        let snapshot = aggregate(&games, &ballots);
        let rust = snapshot
            .top_engagement
            .iter()
            .find(|e| e.title == "Rust")
            .unwrap();
        assert_eq!(rust.count, 2);
    }

    #[test]
    fn duplicate_name_message_is_recognized() {
        let err = crate::model::types::Error::DuplicateName {
            name: "ada".to_owned(),
        };
        assert!(is_duplicate_name_message(&String::from(err)));
        assert!(!is_duplicate_name_message("network unreachable"));
    }
}
