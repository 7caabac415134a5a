use cricket_api::LeaderboardSource;
use std::fmt;

/// Back-history entries kept before the oldest is dropped.
pub const HISTORY_LIMIT: usize = 50;

const MATCH_PREFIX: &str = "match";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Home,
    Leaderboard,
    About,
    HowItWorks,
    Contact,
    Match { match_id: String },
    NotFound { path: String },
}

/// The document a view needs when it becomes active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchTarget {
    Matches,
    Leaderboard(LeaderboardSource),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Already on this route; the view keeps its state.
    Unchanged,
    /// A view was entered and, if it loads data, needs `fetch`.
    Entered { fetch: Option<FetchTarget> },
}

impl Route {
    /// Map a typed path (or a pasted URL) to a route.
    ///
    /// Query strings, fragments and a trailing slash are ignored. Anything
    /// unrecognised becomes [`Route::NotFound`] carrying the normalised path.
    pub fn parse(input: &str) -> Self {
        let path = normalize_path(input);
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["leaderboard"] => Route::Leaderboard,
            ["about"] => Route::About,
            ["how-it-works"] => Route::HowItWorks,
            ["contact"] => Route::Contact,
            [prefix, id] if *prefix == MATCH_PREFIX => Route::Match {
                match_id: (*id).to_string(),
            },
            _ => Route::NotFound { path },
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Leaderboard => "/leaderboard".to_string(),
            Route::About => "/about".to_string(),
            Route::HowItWorks => "/how-it-works".to_string(),
            Route::Contact => "/contact".to_string(),
            Route::Match { match_id } => format!("/{MATCH_PREFIX}/{match_id}"),
            Route::NotFound { path } => path.clone(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Today's Matches",
            Route::Leaderboard => "Today's Horoscope Leaderboard",
            Route::About => "About",
            Route::HowItWorks => "How It Works",
            Route::Contact => "Contact",
            Route::Match { .. } => "Horoscope Leaderboard",
            Route::NotFound { .. } => "Not Found",
        }
    }

    pub fn fetch_target(&self) -> Option<FetchTarget> {
        match self {
            Route::Home => Some(FetchTarget::Matches),
            Route::Leaderboard => Some(FetchTarget::Leaderboard(LeaderboardSource::Default)),
            Route::Match { match_id } => Some(FetchTarget::Leaderboard(LeaderboardSource::Match(
                match_id.clone(),
            ))),
            Route::About | Route::HowItWorks | Route::Contact | Route::NotFound { .. } => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

fn normalize_path(input: &str) -> String {
    let mut rest = input.trim();
    for scheme in ["http://", "https://"] {
        if let Some(stripped) = rest.strip_prefix(scheme) {
            rest = stripped.find('/').map_or("", |i| &stripped[i..]);
        }
    }
    if let Some(end) = rest.find(['?', '#']) {
        rest = &rest[..end];
    }
    let trimmed = rest.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// Current route plus a bounded back-history.
#[derive(Debug, Default)]
pub struct Router {
    current: Route,
    history: Vec<Route>,
}

impl Router {
    pub fn new(initial: Route) -> Self {
        Self {
            current: initial,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn navigate(&mut self, route: Route) -> Transition {
        if route == self.current {
            return Transition::Unchanged;
        }
        let previous = std::mem::replace(&mut self.current, route);
        self.history.push(previous);
        if self.history.len() > HISTORY_LIMIT {
            self.history.remove(0);
        }
        self.entered()
    }

    pub fn back(&mut self) -> Transition {
        let Some(previous) = self.history.pop() else {
            return Transition::Unchanged;
        };
        self.current = previous;
        self.entered()
    }

    fn entered(&self) -> Transition {
        Transition::Entered {
            fetch: self.current.fetch_target(),
        }
    }
}
