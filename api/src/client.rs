use crate::wire::{WireMatch, WireRanking, WireScore};
use crate::{LeaderboardSource, MATCHES_PATH, Match, PlayerRanking, Score, ScoreColumn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

pub type ApiResult<T> = Result<T, ApiError>;

/// Where the static site is served during development.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5173";

/// Root the resource paths are resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Static host, e.g. `https://example.org`.
    Http(String),
    /// Directory the ranking job writes its JSON into.
    Directory(PathBuf),
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource::Http(DEFAULT_BASE_URL.to_string())
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Http(base) => f.write_str(base),
            DataSource::Directory(dir) => write!(f, "{}", dir.display()),
        }
    }
}

/// Read-only client for the match listing and leaderboard documents.
#[derive(Debug, Clone)]
pub struct CricketApi {
    client: Client,
    source: DataSource,
    timeout: Duration,
}

impl Default for CricketApi {
    fn default() -> Self {
        Self::new(DataSource::default())
    }
}

#[derive(Debug)]
pub enum ApiError {
    /// Host unreachable, connection reset, timeout.
    Network(reqwest::Error, String),
    /// Local document missing or unreadable.
    Io(std::io::Error, String),
    /// Non-success HTTP status.
    Api(reqwest::Error, String),
    /// Body is not the expected JSON array.
    Parsing(serde_json::Error, String),
    InvalidPath(String),
}

impl ApiError {
    /// Transport failures as opposed to malformed content.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Network(..) | ApiError::Io(..) | ApiError::Api(..))
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            ApiError::Io(e, path) => write!(f, "Read error for {path}: {e}"),
            ApiError::Api(e, url) => write!(f, "HTTP error for {url}: {e}"),
            ApiError::Parsing(e, location) => write!(f, "Parse error for {location}: {e}"),
            ApiError::InvalidPath(msg) => write!(f, "Invalid resource path: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Network(e, _) | ApiError::Api(e, _) => Some(e),
            ApiError::Io(e, _) => Some(e),
            ApiError::Parsing(e, _) => Some(e),
            ApiError::InvalidPath(_) => None,
        }
    }
}

impl CricketApi {
    pub fn new(source: DataSource) -> Self {
        Self {
            client: Client::builder()
                .user_agent("hctui/0.1 (terminal horoscope leaderboard)")
                .build()
                .unwrap_or_default(),
            source,
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn source(&self) -> &DataSource {
        &self.source
    }

    /// Fetch today's match listing, in document order.
    pub async fn fetch_matches(&self) -> ApiResult<Vec<Match>> {
        let raw: Vec<WireMatch> = self.get(MATCHES_PATH).await?;
        Ok(raw
            .into_iter()
            .map(|m| Match {
                match_id: m.match_id,
                teams: m.teams,
            })
            .collect())
    }

    /// Fetch the ranking rows of one leaderboard document, in document order.
    pub async fn fetch_leaderboard(
        &self,
        source: &LeaderboardSource,
    ) -> ApiResult<Vec<PlayerRanking>> {
        if let Some(id) = source.match_id() {
            validate_match_id(id)?;
        }
        let raw: Vec<WireRanking> = self.get(&source.path()).await?;
        let column = source.score_column();
        Ok(raw.into_iter().map(|r| map_ranking(r, column)).collect())
    }

    /// Full URL or file path a resource path resolves to.
    pub fn location(&self, path: &str) -> String {
        match &self.source {
            DataSource::Http(base) => format!("{}{path}", base.trim_end_matches('/')),
            DataSource::Directory(dir) => dir
                .join(path.trim_start_matches('/'))
                .display()
                .to_string(),
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        if path.is_empty() || !path.starts_with('/') {
            return Err(ApiError::InvalidPath(format!("{path:?} is not rooted")));
        }
        let location = self.location(path);

        let body = match &self.source {
            DataSource::Http(_) => {
                let response = self
                    .client
                    .get(&location)
                    .timeout(self.timeout)
                    .send()
                    .await
                    .map_err(|e| ApiError::Network(e, location.clone()))?
                    .error_for_status()
                    .map_err(|e| ApiError::Api(e, location.clone()))?;
                response
                    .bytes()
                    .await
                    .map_err(|e| ApiError::Network(e, location.clone()))?
                    .to_vec()
            }
            DataSource::Directory(_) => {
                tokio::fs::read(&location)
                    .await
                    .map_err(|e| ApiError::Io(e, location.clone()))?
            }
        };

        serde_json::from_slice(&body).map_err(|e| ApiError::Parsing(e, location))
    }
}

/// Ids are interpolated into a file name; reject anything that could escape it.
fn validate_match_id(id: &str) -> ApiResult<()> {
    if id.trim().is_empty() {
        return Err(ApiError::InvalidPath("empty match id".into()));
    }
    if id.contains(|c: char| c == '/' || c == '\\') || id.contains("..") {
        return Err(ApiError::InvalidPath(format!("match id {id:?}")));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Mapping: wire records → domain types
// ---------------------------------------------------------------------------

/// Only the column the source names is read. Labels are kept as delivered;
/// null or a missing key is the one case that leaves the cell empty.
fn map_ranking(raw: WireRanking, column: ScoreColumn) -> PlayerRanking {
    let score = match column {
        ScoreColumn::Rating => raw.rating,
        ScoreColumn::PredictionScale => raw.prediction_scale,
    };

    PlayerRanking {
        player: raw.player,
        team: raw.team,
        zodiac: raw.zodiac,
        dob: raw.dob,
        score: score.map(map_score),
    }
}

fn map_score(raw: WireScore) -> Score {
    match raw {
        WireScore::Number(n) => Score::Number(n),
        WireScore::Label(s) => Score::Label(s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn api_for(server: &mockito::ServerGuard) -> CricketApi {
        CricketApi::new(DataSource::Http(server.url()))
    }

    fn temp_data_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("cricket-api-{name}-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[tokio::test]
    async fn fetches_match_listing_in_document_order() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/matches.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[{"matchId":"m1","teams":"India vs Australia"},
                    {"matchId":"m2","teams":"England vs Pakistan"}]"#,
            )
            .create_async()
            .await;

        let matches = api_for(&server).fetch_matches().await.unwrap();
        mock.assert_async().await;
        assert_eq!(
            matches,
            vec![
                Match { match_id: "m1".into(), teams: "India vs Australia".into() },
                Match { match_id: "m2".into(), teams: "England vs Pakistan".into() },
            ]
        );
    }

    #[tokio::test]
    async fn empty_listing_is_ok() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/matches.json")
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let matches = api_for(&server).fetch_matches().await.unwrap();
        assert!(matches.is_empty());
    }

    #[tokio::test]
    async fn per_match_leaderboard_uses_match_path() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/leaderboard-112233.json")
            .with_status(200)
            .with_body(
                r#"[{"Player":"A","Team":"T","Zodiac":"Leo","DOB":"01/01/90","PredictionScale":12},
                    {"Player":"B","Team":"T","Zodiac":"Virgo","DOB":"02/02/91"}]"#,
            )
            .create_async()
            .await;

        let rows = api_for(&server)
            .fetch_leaderboard(&LeaderboardSource::Match("112233".into()))
            .await
            .unwrap();
        mock.assert_async().await;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].player, "A");
        assert_eq!(rows[0].score_label(), "12");
        assert_eq!(rows[1].score_label(), "N/A");
    }

    #[tokio::test]
    async fn default_leaderboard_reads_rating() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/leaderboard-v2.json")
            .with_status(200)
            .with_body(
                r#"[{"Player":"A","Team":"T","Zodiac":"Leo","DOB":"1990-01-01","Rating":9},
                    {"Player":"B","Team":"T","Zodiac":"Leo","DOB":"1990-01-01","Rating":null}]"#,
            )
            .create_async()
            .await;

        let rows = api_for(&server)
            .fetch_leaderboard(&LeaderboardSource::Default)
            .await
            .unwrap();
        assert_eq!(rows[0].score_label(), "9");
        assert_eq!(rows[1].score_label(), "N/A");
    }

    #[tokio::test]
    async fn missing_document_is_an_http_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/leaderboard-nope.json")
            .with_status(404)
            .create_async()
            .await;

        let err = api_for(&server)
            .fetch_leaderboard(&LeaderboardSource::Match("nope".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Api(..)), "got {err}");
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn server_error_is_an_http_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/matches.json")
            .with_status(500)
            .create_async()
            .await;

        let err = api_for(&server).fetch_matches().await.unwrap_err();
        assert!(matches!(err, ApiError::Api(..)));
    }

    #[tokio::test]
    async fn malformed_body_is_a_parse_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/matches.json")
            .with_status(200)
            .with_body("<!doctype html><html></html>")
            .create_async()
            .await;

        let err = api_for(&server).fetch_matches().await.unwrap_err();
        assert!(matches!(err, ApiError::Parsing(..)));
        assert!(!err.is_transport());
    }

    #[tokio::test]
    async fn object_instead_of_array_is_a_parse_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/matches.json")
            .with_status(200)
            .with_body(r#"{"matches":[]}"#)
            .create_async()
            .await;

        let err = api_for(&server).fetch_matches().await.unwrap_err();
        assert!(matches!(err, ApiError::Parsing(..)));
    }

    #[tokio::test]
    async fn unreachable_host_is_a_network_error() {
        // Port 9 (discard) is closed on test hosts.
        let api = CricketApi::new(DataSource::Http("http://127.0.0.1:9".into()))
            .with_timeout(Duration::from_secs(2));
        let err = api.fetch_matches().await.unwrap_err();
        assert!(matches!(err, ApiError::Network(..)), "got {err}");
    }

    #[tokio::test]
    async fn empty_match_id_is_rejected_before_io() {
        let api = CricketApi::new(DataSource::Http("http://127.0.0.1:9".into()));
        let err = api
            .fetch_leaderboard(&LeaderboardSource::Match("  ".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidPath(_)));
    }

    #[tokio::test]
    async fn traversal_in_match_id_is_rejected() {
        let api = CricketApi::new(DataSource::Directory(temp_data_dir("traversal")));
        let err = api
            .fetch_leaderboard(&LeaderboardSource::Match("../secrets".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidPath(_)));
    }

    #[tokio::test]
    async fn reads_documents_from_a_directory() {
        let dir = temp_data_dir("dir");
        fs::write(
            dir.join("matches.json"),
            r#"[{"matchId":42,"teams":"India vs Australia"}]"#,
        )
        .unwrap();
        fs::write(
            dir.join("leaderboard-42.json"),
            r#"[{"Player":"A","Team":"T","Zodiac":"Leo","DOB":"1990-01-01"}]"#,
        )
        .unwrap();

        let api = CricketApi::new(DataSource::Directory(dir.clone()));
        let matches = api.fetch_matches().await.unwrap();
        assert_eq!(matches[0].match_id, "42");

        let rows = api
            .fetch_leaderboard(&LeaderboardSource::Match("42".into()))
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].score_label(), "N/A");

        let _ = fs::remove_dir_all(dir);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn directory_reads_run_off_the_runtime_thread() {
        let dir = temp_data_dir("concurrent");
        fs::write(dir.join("matches.json"), r#"[{"matchId":"m1","teams":"A vs B"}]"#).unwrap();
        fs::write(dir.join("leaderboard-v2.json"), "[]").unwrap();

        let api = CricketApi::new(DataSource::Directory(dir.clone()));
        let (matches, rows) = tokio::join!(
            api.fetch_matches(),
            api.fetch_leaderboard(&LeaderboardSource::Default)
        );
        assert_eq!(matches.unwrap().len(), 1);
        assert!(rows.unwrap().is_empty());

        let _ = fs::remove_dir_all(dir);
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let api = CricketApi::new(DataSource::Directory(temp_data_dir("missing")));
        let err = api
            .fetch_leaderboard(&LeaderboardSource::Match("absent".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Io(..)));
    }

    #[test]
    fn location_joins_base_and_path() {
        let api = CricketApi::new(DataSource::Http("https://example.org/".into()));
        assert_eq!(api.location("/matches.json"), "https://example.org/matches.json");
    }

    #[test]
    fn other_score_column_is_not_read() {
        let raw = WireRanking {
            player: "A".into(),
            rating: Some(WireScore::Number(3.0)),
            ..Default::default()
        };
        let row = map_ranking(raw, ScoreColumn::PredictionScale);
        assert_eq!(row.score, None);
        assert_eq!(row.score_label(), "N/A");
    }

    #[test]
    fn labels_are_kept_verbatim() {
        let blank = WireRanking {
            prediction_scale: Some(WireScore::Label(String::new())),
            ..Default::default()
        };
        let padded = WireRanking {
            prediction_scale: Some(WireScore::Label("  high ".into())),
            ..Default::default()
        };
        assert_eq!(map_ranking(blank, ScoreColumn::PredictionScale).score_label(), "");
        assert_eq!(
            map_ranking(padded, ScoreColumn::PredictionScale).score_label(),
            "  high "
        );
    }

    #[tokio::test]
    async fn per_match_cells_only_default_missing_values() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/leaderboard-m1.json")
            .with_status(200)
            .with_body(
                r#"[{"Player":"A","Team":"T","Zodiac":"Leo","DOB":"1990-01-01","Rating":7},
                    {"Player":"B","Team":"T","Zodiac":"Leo","DOB":"1990-01-01","PredictionScale":""},
                    {"Player":"C","Team":"T","Zodiac":"Leo","DOB":"1990-01-01","PredictionScale":"  high "}]"#,
            )
            .create_async()
            .await;

        let rows = api_for(&server)
            .fetch_leaderboard(&LeaderboardSource::Match("m1".into()))
            .await
            .unwrap();
        let labels: Vec<String> = rows.iter().map(PlayerRanking::score_label).collect();
        assert_eq!(labels, vec!["N/A", "", "  high "]);
    }
}
