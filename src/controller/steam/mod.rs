pub mod cached;
pub mod client;

pub use cached::CachedSteamClient;
pub use client::ReqwestSteamClient;

use crate::error::AppError;
use crate::model::{AppCatalog, OwnedGame, PlayerSummary, SteamId};
use async_trait::async_trait;
use std::sync::Arc;

/// The three Steam Web API reads the reports are built from.
#[async_trait]
pub trait SteamApiClient: Send + Sync {
    /// One batched lookup for every id in `steamids`. Ids Steam does not
    /// know are simply absent from the result.
    async fn get_player_summaries(&self, steamids: &[SteamId])
    -> Result<Vec<PlayerSummary>, AppError>;

    /// The full platform-wide appid -> name catalog.
    async fn get_app_list(&self) -> Result<Arc<AppCatalog>, AppError>;

    /// # Errors
    ///
    /// Will return `Err` when the library is private or the profile unknown.
    async fn get_owned_games(&self, steamid: SteamId) -> Result<Vec<OwnedGame>, AppError>;
}

#[async_trait]
impl<C: SteamApiClient + ?Sized> SteamApiClient for Arc<C> {
    async fn get_player_summaries(
        &self,
        steamids: &[SteamId],
    ) -> Result<Vec<PlayerSummary>, AppError> {
        (**self).get_player_summaries(steamids).await
    }

    async fn get_app_list(&self) -> Result<Arc<AppCatalog>, AppError> {
        (**self).get_app_list().await
    }

    async fn get_owned_games(&self, steamid: SteamId) -> Result<Vec<OwnedGame>, AppError> {
        (**self).get_owned_games(steamid).await
    }
}
