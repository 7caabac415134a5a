use crate::router::{Route, Router};
use chrono::Local;
use cricket_api::{LeaderboardSource, Match, PlayerRanking};
use log::debug;

// ---------------------------------------------------------------------------
// Fetch slot: display state of one data-loading view
// ---------------------------------------------------------------------------

/// Identifies one dispatched fetch. Only the ticket of the most recent
/// `begin` may write into the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// Records shown by a view, keyed by what they were loaded for.
///
/// Each `begin` clears the records so rows for a previous key never show
/// while the next fetch is in flight, and bumps the generation so that a
/// slower, older fetch resolving later is discarded.
#[derive(Debug)]
pub struct FetchSlot<K, T> {
    key: Option<K>,
    records: Vec<T>,
    status: LoadStatus,
    generation: u64,
    loaded_at: Option<String>,
}

impl<K, T> Default for FetchSlot<K, T> {
    fn default() -> Self {
        Self {
            key: None,
            records: Vec::new(),
            status: LoadStatus::Idle,
            generation: 0,
            loaded_at: None,
        }
    }
}

impl<K, T> FetchSlot<K, T> {
    pub fn begin(&mut self, key: K) -> FetchTicket {
        self.generation = self.generation.wrapping_add(1);
        self.key = Some(key);
        self.records.clear();
        self.status = LoadStatus::Loading;
        self.loaded_at = None;
        FetchTicket {
            generation: self.generation,
        }
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Replace the records with a completed fetch. Returns false (and keeps
    /// the current state) when the ticket is stale.
    pub fn commit(&mut self, ticket: FetchTicket, records: Vec<T>) -> bool {
        if !self.is_current(ticket) {
            debug!(
                "discarding stale result (generation {} < {})",
                ticket.generation, self.generation
            );
            return false;
        }
        self.records = records;
        self.status = LoadStatus::Loaded;
        self.loaded_at = Some(Local::now().format("%H:%M").to_string());
        true
    }

    /// Record a failed fetch. Records stay empty.
    pub fn fail(&mut self, ticket: FetchTicket, message: String) -> bool {
        if !self.is_current(ticket) {
            debug!("discarding stale failure: {message}");
            return false;
        }
        self.records.clear();
        self.status = LoadStatus::Failed(message);
        true
    }

    pub fn key(&self) -> Option<&K> {
        self.key.as_ref()
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn loaded_at(&self) -> Option<&str> {
        self.loaded_at.as_deref()
    }
}

// ---------------------------------------------------------------------------
// Match list
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct MatchListState {
    pub slot: FetchSlot<(), Match>,
    pub selected: usize,
}

impl MatchListState {
    pub fn select_next(&mut self) {
        let max = self.slot.records().len().saturating_sub(1);
        if self.selected < max {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_match(&self) -> Option<&Match> {
        self.slot.records().get(self.selected)
    }
}

// ---------------------------------------------------------------------------
// Leaderboard tables (default leaderboard and match detail)
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct LeaderboardState {
    pub slot: FetchSlot<LeaderboardSource, PlayerRanking>,
    pub scroll_offset: usize,
}

impl LeaderboardState {
    pub fn scroll_down(&mut self) {
        let max = self.slot.records().len().saturating_sub(1);
        self.scroll_offset = self.scroll_offset.saturating_add(1).min(max);
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }
}

// ---------------------------------------------------------------------------
// Address bar: direct path entry
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct AddressBarState {
    pub editing: bool,
    pub input: String,
}

impl AddressBarState {
    pub fn open(&mut self, current: &Route) {
        self.editing = true;
        self.input = current.path();
    }

    pub fn cancel(&mut self) {
        self.editing = false;
        self.input.clear();
    }

    /// Close the bar and return the route typed into it.
    pub fn submit(&mut self) -> Route {
        let route = Route::parse(&self.input);
        self.cancel();
        route
    }
}

// ---------------------------------------------------------------------------
// Root app state
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct AppState {
    pub router: Router,
    pub matches: MatchListState,
    /// `/leaderboard`
    pub leaderboard: LeaderboardState,
    /// `/match/{id}`
    pub match_detail: LeaderboardState,
    pub address_bar: AddressBarState,
    pub show_logs: bool,
}

impl AppState {
    pub fn new(initial: Route) -> Self {
        Self {
            router: Router::new(initial),
            ..Self::default()
        }
    }

    /// The view that owns rankings loaded from `source`.
    pub fn leaderboard_for_mut(&mut self, source: &LeaderboardSource) -> &mut LeaderboardState {
        match source {
            LeaderboardSource::Default => &mut self.leaderboard,
            LeaderboardSource::Match(_) => &mut self.match_detail,
        }
    }

    /// The table shown by the current route, if it shows one.
    pub fn active_leaderboard(&self) -> Option<&LeaderboardState> {
        match self.router.current() {
            Route::Leaderboard => Some(&self.leaderboard),
            Route::Match { .. } => Some(&self.match_detail),
            _ => None,
        }
    }

    pub fn active_leaderboard_mut(&mut self) -> Option<&mut LeaderboardState> {
        match self.router.current() {
            Route::Leaderboard => Some(&mut self.leaderboard),
            Route::Match { .. } => Some(&mut self.match_detail),
            _ => None,
        }
    }
}
