use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 64-bit Steam account id. Travels as a decimal string in JSON, the same way
/// the Steam Web API sends it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SteamId(pub u64);

impl fmt::Display for SteamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SteamId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(SteamId)
    }
}

impl TryFrom<String> for SteamId {
    type Error = std::num::ParseIntError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SteamId> for String {
    fn from(id: SteamId) -> Self {
        id.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlayerSummary {
    pub steamid: SteamId,
    pub personaname: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct OwnedGame {
    pub appid: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct App {
    pub appid: u64,
    pub name: String,
}

/// appid -> app name, platform wide.
pub type AppCatalog = AHashMap<u64, String>;

#[derive(Debug, Deserialize)]
pub struct PlayerSummariesEnvelope {
    pub response: PlayerSummariesBody,
}

#[derive(Debug, Deserialize)]
pub struct PlayerSummariesBody {
    #[serde(default)]
    pub players: Vec<PlayerSummary>,
}

#[derive(Debug, Deserialize)]
pub struct AppListEnvelope {
    pub applist: AppListBody,
}

#[derive(Debug, Deserialize)]
pub struct AppListBody {
    pub apps: Vec<App>,
}

#[derive(Debug, Deserialize)]
pub struct OwnedGamesEnvelope {
    pub response: OwnedGamesBody,
}

// Steam answers with an empty `response` object for private profiles.
#[derive(Debug, Deserialize)]
pub struct OwnedGamesBody {
    pub game_count: Option<u32>,
    pub games: Option<Vec<OwnedGame>>,
}

/// One resolved player, alive only while a report is being built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerReport {
    pub steamid: SteamId,
    pub name: String,
    pub appids: AHashSet<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub steamid: SteamId,
}

impl From<PlayerReport> for Player {
    fn from(report: PlayerReport) -> Self {
        Player {
            name: report.name,
            steamid: report.steamid,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedGame {
    pub name: String,
    pub appid: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedGamesReport {
    pub players: Vec<Player>,
    pub shared_games: Vec<SharedGame>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steam_id_serializes_as_string() {
        let player = Player {
            name: "Gabe".into(),
            steamid: SteamId(76_561_197_960_287_930),
        };
        let json = serde_json::to_value(&player).unwrap();
        assert_eq!(json["steamid"], "76561197960287930");
        assert_eq!(json["name"], "Gabe");
    }

    #[test]
    fn private_profile_has_no_games() {
        let body = r#"{"response":{}}"#;
        let envelope: OwnedGamesEnvelope = serde_json::from_str(body).unwrap();
        assert!(envelope.response.games.is_none());
    }
}
