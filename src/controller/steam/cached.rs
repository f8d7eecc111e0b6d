use super::SteamApiClient;
use crate::controller::cache::{CachePolicy, MemoCache, memo_key};
use crate::error::AppError;
use crate::model::{AppCatalog, OwnedGame, PlayerSummary, SteamId};
use async_trait::async_trait;
use std::sync::Arc;

/// Memoizing decorator around any [`SteamApiClient`]. Each call kind has its
/// own cache, keyed by the call's arguments.
#[derive(Clone)]
pub struct CachedSteamClient<C> {
    inner: C,
    player_summaries: MemoCache<Vec<PlayerSummary>>,
    app_list: MemoCache<Arc<AppCatalog>>,
    owned_games: MemoCache<Vec<OwnedGame>>,
}

impl<C: SteamApiClient> CachedSteamClient<C> {
    #[must_use]
    pub fn new(inner: C, policy: CachePolicy) -> Self {
        CachedSteamClient {
            inner,
            player_summaries: MemoCache::new(policy),
            app_list: MemoCache::new(policy),
            owned_games: MemoCache::new(policy),
        }
    }
}

#[async_trait]
impl<C: SteamApiClient> SteamApiClient for CachedSteamClient<C> {
    async fn get_player_summaries(
        &self,
        steamids: &[SteamId],
    ) -> Result<Vec<PlayerSummary>, AppError> {
        let key = memo_key("player_summaries", steamids);
        self.player_summaries
            .get_or_try_insert_with(key, || self.inner.get_player_summaries(steamids))
            .await
    }

    async fn get_app_list(&self) -> Result<Arc<AppCatalog>, AppError> {
        let key = memo_key::<SteamId>("app_list", &[]);
        self.app_list
            .get_or_try_insert_with(key, || self.inner.get_app_list())
            .await
    }

    async fn get_owned_games(&self, steamid: SteamId) -> Result<Vec<OwnedGame>, AppError> {
        let key = memo_key("owned_games", &[steamid]);
        self.owned_games
            .get_or_try_insert_with(key, || self.inner.get_owned_games(steamid))
            .await
    }
}
