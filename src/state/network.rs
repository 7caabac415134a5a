use crate::state::messages::{NetworkRequest, NetworkResponse};
use cricket_api::client::CricketApi;
use log::{debug, error};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::mpsc;

const SPINNER_CHARS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
pub const ERROR_CHAR: char = '!';

#[derive(Debug, Copy, Clone)]
pub struct LoadingState {
    pub is_loading: bool,
    pub spinner_char: char,
}

impl Default for LoadingState {
    fn default() -> Self {
        Self { is_loading: false, spinner_char: ' ' }
    }
}

/// Runs every request on its own task so a slow document never blocks a
/// newer one. Results carry their ticket; the view decides what commits.
pub struct NetworkWorker {
    client: CricketApi,
    requests: mpsc::Receiver<NetworkRequest>,
    responses: mpsc::Sender<NetworkResponse>,
    in_flight: Arc<AtomicUsize>,
}

impl NetworkWorker {
    pub fn new(
        client: CricketApi,
        requests: mpsc::Receiver<NetworkRequest>,
        responses: mpsc::Sender<NetworkResponse>,
    ) -> Self {
        Self {
            client,
            requests,
            responses,
            in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub async fn run(mut self) {
        while let Some(request) = self.requests.recv().await {
            let client = self.client.clone();
            let responses = self.responses.clone();
            let in_flight = self.in_flight.clone();

            tokio::spawn(async move {
                if in_flight.fetch_add(1, Ordering::SeqCst) == 0 {
                    start_loading_animation(&responses, &in_flight).await;
                }

                let response = fetch(&client, request).await;
                let is_ok = !matches!(response, NetworkResponse::FetchFailed { .. });

                if in_flight.fetch_sub(1, Ordering::SeqCst) == 1 {
                    stop_loading_animation(&responses, &in_flight, is_ok).await;
                }

                if let Err(e) = responses.send(response).await {
                    error!("Failed to send network response: {e}");
                }
            });
        }
    }
}

/// Perform one request. Failures are logged here and turned into
/// [`NetworkResponse::FetchFailed`].
pub async fn fetch(client: &CricketApi, request: NetworkRequest) -> NetworkResponse {
    let target = request.target();
    let ticket = request.ticket();
    debug!("fetching {target:?} (generation {})", ticket.generation);

    let result = match request {
        NetworkRequest::LoadMatches { ticket } => client
            .fetch_matches()
            .await
            .map(|matches| NetworkResponse::MatchesLoaded { ticket, matches }),
        NetworkRequest::LoadLeaderboard { source, ticket } => client
            .fetch_leaderboard(&source)
            .await
            .map(|rankings| NetworkResponse::LeaderboardLoaded { ticket, source, rankings }),
    };

    result.unwrap_or_else(|err| {
        error!("Failed to load {target:?}: {err}");
        NetworkResponse::FetchFailed {
            ticket,
            target,
            message: err.to_string(),
        }
    })
}

async fn start_loading_animation(
    responses: &mpsc::Sender<NetworkResponse>,
    in_flight: &Arc<AtomicUsize>,
) {
    let mut loading_state = LoadingState { is_loading: true, spinner_char: SPINNER_CHARS[0] };
    let _ = responses
        .send(NetworkResponse::LoadingStateChanged { loading_state })
        .await;

    let responses = responses.clone();
    let in_flight = in_flight.clone();

    tokio::spawn(async move {
        let mut spinner_index = 1;
        let mut interval = tokio::time::interval(Duration::from_millis(33));
        loop {
            interval.tick().await;
            if in_flight.load(Ordering::SeqCst) == 0 {
                break;
            }
            loading_state.spinner_char = SPINNER_CHARS[spinner_index];
            spinner_index = (spinner_index + 1) % SPINNER_CHARS.len();
            let _ = responses
                .send(NetworkResponse::LoadingStateChanged { loading_state })
                .await;
        }
    });
}

/// Hide the spinner unless another request started while we waited.
async fn stop_loading_animation(
    responses: &mpsc::Sender<NetworkResponse>,
    in_flight: &Arc<AtomicUsize>,
    is_ok: bool,
) {
    tokio::time::sleep(Duration::from_millis(15)).await;
    if in_flight.load(Ordering::SeqCst) > 0 {
        return;
    }

    let spinner_char = if is_ok { ' ' } else { ERROR_CHAR };
    let _ = responses
        .send(NetworkResponse::LoadingStateChanged {
            loading_state: LoadingState { is_loading: false, spinner_char },
        })
        .await;
}
