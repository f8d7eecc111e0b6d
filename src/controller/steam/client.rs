use super::SteamApiClient;
use crate::error::AppError;
use crate::model::{
    AppCatalog, AppListEnvelope, OwnedGame, OwnedGamesEnvelope, PlayerSummariesEnvelope,
    PlayerSummary, SteamId,
};
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument};

pub const DEFAULT_STEAM_API_URL: &str = "https://api.steampowered.com";

const PLAYER_SUMMARIES_PATH: &str = "/ISteamUser/GetPlayerSummaries/v2";
const APP_LIST_PATH: &str = "/ISteamApps/GetAppList/v2";
const OWNED_GAMES_PATH: &str = "/IPlayerService/GetOwnedGames/v1";

/// Talks to the Steam Web API over HTTP. No retries: one failed call is one
/// `AppError::Upstream`.
#[derive(Clone)]
pub struct ReqwestSteamClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl ReqwestSteamClient {
    /// # Errors
    ///
    /// Will return `Err` if the underlying http client cannot be built
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self, AppError> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("steamwhat/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(ReqwestSteamClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_text(&self, path: &str, query: &[(&str, String)]) -> Result<String, AppError> {
        let body = self
            .http
            .get(self.url(path))
            .query(query)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)?
            .text()
            .await?;
        Ok(body)
    }
}

#[async_trait]
impl SteamApiClient for ReqwestSteamClient {
    #[instrument(skip(self), fields(count = steamids.len()))]
    async fn get_player_summaries(
        &self,
        steamids: &[SteamId],
    ) -> Result<Vec<PlayerSummary>, AppError> {
        let joined = steamids
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let body = self
            .get_text(
                PLAYER_SUMMARIES_PATH,
                &[("key", self.api_key.clone()), ("steamids", joined)],
            )
            .await?;
        let players = decode_player_summaries(&body)?;
        info!("Fetched {} player summaries", players.len());
        Ok(players)
    }

    #[instrument(skip(self))]
    async fn get_app_list(&self) -> Result<Arc<AppCatalog>, AppError> {
        let body = self.get_text(APP_LIST_PATH, &[]).await?;
        let catalog = decode_app_list(&body)?;
        info!("Fetched app list with {} apps", catalog.len());
        Ok(Arc::new(catalog))
    }

    #[instrument(skip(self))]
    async fn get_owned_games(&self, steamid: SteamId) -> Result<Vec<OwnedGame>, AppError> {
        let body = self
            .get_text(
                OWNED_GAMES_PATH,
                &[("key", self.api_key.clone()), ("steamid", steamid.to_string())],
            )
            .await?;
        decode_owned_games(steamid, &body)
    }
}

/// # Errors
///
/// Will return `Err` if the body is not a player summaries envelope
pub fn decode_player_summaries(body: &str) -> Result<Vec<PlayerSummary>, AppError> {
    let envelope: PlayerSummariesEnvelope = serde_json::from_str(body)?;
    Ok(envelope.response.players)
}

/// # Errors
///
/// Will return `Err` if the body is not an app list envelope
pub fn decode_app_list(body: &str) -> Result<AppCatalog, AppError> {
    let envelope: AppListEnvelope = serde_json::from_str(body)?;
    Ok(envelope
        .applist
        .apps
        .into_iter()
        .map(|app| (app.appid, app.name))
        .collect())
}

/// # Errors
///
/// Will return `Err` if the body is malformed or the library is not visible
pub fn decode_owned_games(steamid: SteamId, body: &str) -> Result<Vec<OwnedGame>, AppError> {
    let envelope: OwnedGamesEnvelope = serde_json::from_str(body)?;
    match envelope.response.games {
        Some(games) => Ok(games),
        None if envelope.response.game_count == Some(0) => Ok(Vec::new()),
        None => Err(AppError::Upstream(format!(
            "game library of {steamid} is private or unavailable"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_player_summaries() {
        let body = r#"{"response":{"players":[
            {"steamid":"76561197960287930","personaname":"Rabscuttle","profilestate":1},
            {"steamid":"76561197960435530","personaname":"Robin"}
        ]}}"#;
        let players = decode_player_summaries(body).unwrap();
        assert_eq!(players.len(), 2);
        assert_eq!(players[0].steamid, SteamId(76_561_197_960_287_930));
        assert_eq!(players[1].personaname, "Robin");
    }

    #[test]
    fn app_list_last_name_wins() {
        let body = r#"{"applist":{"apps":[
            {"appid":10,"name":"Counter-Strike"},
            {"appid":20,"name":"Team Fortress Classic"},
            {"appid":10,"name":"Counter-Strike 1.6"}
        ]}}"#;
        let catalog = decode_app_list(body).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.get(&10_u64).map(String::as_str),
            Some("Counter-Strike 1.6")
        );
    }

    #[test]
    fn owned_games_of_private_profile_is_an_error() {
        let err = decode_owned_games(SteamId(1), r#"{"response":{}}"#).unwrap_err();
        assert!(matches!(err, AppError::Upstream(msg) if msg.contains("private")));
    }

    #[test]
    fn owned_games_with_zero_count_is_empty() {
        let games = decode_owned_games(SteamId(1), r#"{"response":{"game_count":0}}"#).unwrap();
        assert!(games.is_empty());
    }

    #[test]
    fn garbage_body_is_upstream_error() {
        let err = decode_app_list("<html>rate limited</html>").unwrap_err();
        assert!(matches!(err, AppError::Upstream(_)));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client =
            ReqwestSteamClient::new("http://localhost:9/", "key", Duration::from_secs(1)).unwrap();
        assert_eq!(
            client.url(APP_LIST_PATH),
            "http://localhost:9/ISteamApps/GetAppList/v2"
        );
    }
}
