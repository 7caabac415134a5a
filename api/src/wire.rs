/// Wire types for the static JSON documents published next to the client.
/// Endpoints: /matches.json, /leaderboard-{matchId}.json, /leaderboard-v2.json
use serde::{Deserialize, Deserializer};

#[derive(Deserialize, Default, Debug)]
#[serde(rename_all = "camelCase")]
pub struct WireMatch {
    /// The ranking job writes numeric ids straight from its upstream feed.
    #[serde(default, deserialize_with = "lenient_string")]
    pub match_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub teams: String,
}

/// One leaderboard record. Field names are PascalCase as delivered.
#[derive(Deserialize, Default, Debug)]
pub struct WireRanking {
    #[serde(rename = "Player", default, deserialize_with = "lenient_string")]
    pub player: String,
    #[serde(rename = "Team", default, deserialize_with = "lenient_string")]
    pub team: String,
    #[serde(rename = "Zodiac", default, deserialize_with = "lenient_string")]
    pub zodiac: String,
    #[serde(rename = "DOB", default, deserialize_with = "lenient_string")]
    pub dob: String,
    /// Present on the default leaderboard; null when the sign went unranked.
    #[serde(rename = "Rating", default)]
    pub rating: Option<WireScore>,
    /// Present on per-match leaderboards.
    #[serde(rename = "PredictionScale", default)]
    pub prediction_scale: Option<WireScore>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum WireScore {
    Number(f64),
    Label(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LenientText {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

/// Accept a string, a number or null for a text field. Null becomes "".
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<LenientText>::deserialize(deserializer)? {
        Some(LenientText::Text(s)) => s,
        Some(LenientText::Int(n)) => n.to_string(),
        Some(LenientText::Float(n)) => n.to_string(),
        Some(LenientText::Bool(b)) => b.to_string(),
        None => String::new(),
    })
}
