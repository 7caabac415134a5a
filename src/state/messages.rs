use crate::router::FetchTarget;
use crate::state::app_state::FetchTicket;
use crate::state::network::LoadingState;
use crossterm::event::KeyEvent;
use cricket_api::{LeaderboardSource, Match, PlayerRanking};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkRequest {
    LoadMatches { ticket: FetchTicket },
    LoadLeaderboard { source: LeaderboardSource, ticket: FetchTicket },
}

impl NetworkRequest {
    pub fn target(&self) -> FetchTarget {
        match self {
            NetworkRequest::LoadMatches { .. } => FetchTarget::Matches,
            NetworkRequest::LoadLeaderboard { source, .. } => {
                FetchTarget::Leaderboard(source.clone())
            }
        }
    }

    pub fn ticket(&self) -> FetchTicket {
        match self {
            NetworkRequest::LoadMatches { ticket } | NetworkRequest::LoadLeaderboard { ticket, .. } => {
                *ticket
            }
        }
    }
}

#[derive(Debug)]
pub enum NetworkResponse {
    LoadingStateChanged { loading_state: LoadingState },
    MatchesLoaded { ticket: FetchTicket, matches: Vec<Match> },
    LeaderboardLoaded {
        ticket: FetchTicket,
        source: LeaderboardSource,
        rankings: Vec<PlayerRanking>,
    },
    /// Transport or parse failure; the view that asked stays empty.
    FetchFailed {
        ticket: FetchTicket,
        target: FetchTarget,
        message: String,
    },
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    KeyPressed(KeyEvent),
    Resize,
    AppStarted,
}
