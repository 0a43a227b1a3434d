use crate::model::types::{Ballot, Error, VoteChoice};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory ballot box. The session is fresh per process on purpose, the
/// same way the original wiped its database file on every start.
#[derive(Clone, Debug, Default)]
pub struct VoteStore {
    ballots: Arc<RwLock<Vec<Ballot>>>,
}

impl VoteStore {
    /// Accepts one ballot per voter name (trimmed, case-insensitive).
    pub async fn record(
        &self,
        user_name: &str,
        votes: HashMap<u32, VoteChoice>,
    ) -> Result<Ballot, Error> {
        let name = user_name.trim();
        if name.is_empty() {
            return Err(Error::InvalidRequest("user name is empty".to_owned()));
        }

        let mut ballots = self.ballots.write().await;
        if ballots
            .iter()
            .any(|ballot| ballot.user_name.eq_ignore_ascii_case(name))
        {
            return Err(Error::DuplicateName {
                name: name.to_owned(),
            });
        }

        let ballot = Ballot {
            id: cuid2::create_id(),
            user_name: name.to_owned(),
            votes,
        };
        ballots.push(ballot.clone());
        tracing::info!(voter = %ballot.user_name, votes = ballot.votes.len(), "ballot recorded");
        Ok(ballot)
    }

    pub async fn ballots(&self) -> Vec<Ballot> {
        self.ballots.read().await.clone()
    }
}
