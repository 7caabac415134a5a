use crate::router::{FetchTarget, Route, Transition};
use crate::state::app_settings::AppSettings;
use crate::state::app_state::{AppState, FetchTicket};
use crate::state::messages::NetworkRequest;
use cricket_api::{LeaderboardSource, Match, PlayerRanking};
use log::debug;

pub struct App {
    pub settings: AppSettings,
    pub state: AppState,
}

impl App {
    pub fn new(settings: AppSettings) -> Self {
        let app = Self {
            state: AppState::new(settings.initial_route.clone()),
            settings,
        };

        if let Some(level) = app.settings.log_level {
            log::set_max_level(level);
            tui_logger::set_default_level(level);
        }

        app
    }

    // -----------------------------------------------------------------------
    // Routing: every entered view that loads data returns its request
    // -----------------------------------------------------------------------

    /// Activate the initial route.
    pub fn start(&mut self) -> Option<NetworkRequest> {
        let target = self.state.router.current().fetch_target()?;
        Some(self.dispatch(target))
    }

    pub fn navigate(&mut self, route: Route) -> Option<NetworkRequest> {
        let transition = self.state.router.navigate(route);
        self.on_transition(transition)
    }

    pub fn go_back(&mut self) -> Option<NetworkRequest> {
        let transition = self.state.router.back();
        self.on_transition(transition)
    }

    /// Fetch the current view's document again.
    pub fn reload(&mut self) -> Option<NetworkRequest> {
        let target = self.state.router.current().fetch_target()?;
        Some(self.dispatch(target))
    }

    /// Follow the highlighted entry of the match list.
    pub fn open_selected_match(&mut self) -> Option<NetworkRequest> {
        let match_id = self.state.matches.selected_match()?.match_id.clone();
        self.navigate(Route::Match { match_id })
    }

    fn on_transition(&mut self, transition: Transition) -> Option<NetworkRequest> {
        match transition {
            Transition::Unchanged => None,
            Transition::Entered { fetch } => {
                debug!("entered {}", self.state.router.current());
                fetch.map(|target| self.dispatch(target))
            }
        }
    }

    /// Reset the target view and build the request that refills it.
    fn dispatch(&mut self, target: FetchTarget) -> NetworkRequest {
        match target {
            FetchTarget::Matches => {
                let ticket = self.state.matches.slot.begin(());
                NetworkRequest::LoadMatches { ticket }
            }
            FetchTarget::Leaderboard(source) => {
                let view = self.state.leaderboard_for_mut(&source);
                let ticket = view.slot.begin(source.clone());
                view.scroll_offset = 0;
                NetworkRequest::LoadLeaderboard { source, ticket }
            }
        }
    }

    // -----------------------------------------------------------------------
    // Network response handlers: called from main_ui_loop
    // -----------------------------------------------------------------------

    pub fn on_matches_loaded(&mut self, ticket: FetchTicket, matches: Vec<Match>) {
        let count = matches.len();
        if self.state.matches.slot.commit(ticket, matches) {
            debug!("showing {count} matches");
            self.state.matches.selected = self
                .state
                .matches
                .selected
                .min(count.saturating_sub(1));
        }
    }

    pub fn on_leaderboard_loaded(
        &mut self,
        ticket: FetchTicket,
        source: LeaderboardSource,
        rankings: Vec<PlayerRanking>,
    ) {
        let view = self.state.leaderboard_for_mut(&source);
        if view.slot.key() != Some(&source) {
            debug!("discarding rankings for {source}: view moved on");
            return;
        }
        let count = rankings.len();
        if view.slot.commit(ticket, rankings) {
            debug!("showing {count} rankings for {source}");
        }
    }

    pub fn on_fetch_failed(&mut self, ticket: FetchTicket, target: FetchTarget, message: String) {
        match target {
            FetchTarget::Matches => {
                self.state.matches.slot.fail(ticket, message);
            }
            FetchTarget::Leaderboard(source) => {
                self.state.leaderboard_for_mut(&source).slot.fail(ticket, message);
            }
        }
    }

    // -----------------------------------------------------------------------
    // View navigation
    // -----------------------------------------------------------------------

    pub fn select_down(&mut self) {
        if *self.state.router.current() == Route::Home {
            self.state.matches.select_next();
        } else if let Some(view) = self.state.active_leaderboard_mut() {
            view.scroll_down();
        }
    }

    pub fn select_up(&mut self) {
        if *self.state.router.current() == Route::Home {
            self.state.matches.select_prev();
        } else if let Some(view) = self.state.active_leaderboard_mut() {
            view.scroll_up();
        }
    }

    pub fn open_address_bar(&mut self) {
        let current = self.state.router.current().clone();
        self.state.address_bar.open(&current);
    }

    pub fn submit_address_bar(&mut self) -> Option<NetworkRequest> {
        let route = self.state.address_bar.submit();
        self.navigate(route)
    }

    pub fn toggle_show_logs(&mut self) {
        self.state.show_logs = !self.state.show_logs;
    }

    pub fn toggle_full_screen(&mut self) {
        self.settings.full_screen = !self.settings.full_screen;
    }
}
