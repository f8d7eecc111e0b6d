#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use steamwhat::AppError;
use steamwhat::controller::steam::SteamApiClient;
use steamwhat::model::{AppCatalog, OwnedGame, PlayerSummary, SteamId};

/// In-memory stand-in for the Steam Web API that counts every call.
#[derive(Default)]
pub struct StubSteam {
    pub names: HashMap<SteamId, String>,
    pub libraries: HashMap<SteamId, Vec<u64>>,
    pub catalog: AppCatalog,
    pub private: HashSet<SteamId>,
    pub fail_summaries: bool,
    pub summary_calls: AtomicUsize,
    pub app_list_calls: AtomicUsize,
    pub owned_games_calls: AtomicUsize,
}

impl StubSteam {
    pub fn player(mut self, id: u64, name: &str, appids: &[u64]) -> Self {
        self.names.insert(SteamId(id), name.to_string());
        self.libraries.insert(SteamId(id), appids.to_vec());
        self
    }

    pub fn private_player(mut self, id: u64, name: &str) -> Self {
        self.names.insert(SteamId(id), name.to_string());
        self.private.insert(SteamId(id));
        self
    }

    pub fn app(mut self, appid: u64, name: &str) -> Self {
        self.catalog.insert(appid, name.to_string());
        self
    }

    pub fn calls(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SteamApiClient for StubSteam {
    async fn get_player_summaries(
        &self,
        steamids: &[SteamId],
    ) -> Result<Vec<PlayerSummary>, AppError> {
        self.summary_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_summaries {
            return Err(AppError::Upstream("503 Service Unavailable".into()));
        }
        Ok(steamids
            .iter()
            .filter_map(|id| {
                self.names.get(id).map(|name| PlayerSummary {
                    steamid: *id,
                    personaname: name.clone(),
                })
            })
            .collect())
    }

    async fn get_app_list(&self) -> Result<Arc<AppCatalog>, AppError> {
        self.app_list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(self.catalog.clone()))
    }

    async fn get_owned_games(&self, steamid: SteamId) -> Result<Vec<OwnedGame>, AppError> {
        self.owned_games_calls.fetch_add(1, Ordering::SeqCst);
        if self.private.contains(&steamid) {
            return Err(AppError::Upstream(format!(
                "game library of {steamid} is private or unavailable"
            )));
        }
        self.libraries
            .get(&steamid)
            .map(|appids| appids.iter().map(|appid| OwnedGame { appid: *appid }).collect())
            .ok_or_else(|| AppError::Upstream(format!("unknown player {steamid}")))
    }
}

/// Three friends with overlapping libraries and a fourth with a private one.
pub fn friends() -> StubSteam {
    StubSteam::default()
        .app(10, "Counter-Strike")
        .app(20, "Team Fortress Classic")
        .app(30, "day of defeat")
        .app(40, "Deathmatch Classic")
        .app(70, "Half-Life")
        .player(1, "gabe", &[10, 20, 30, 70])
        .player(2, "Robin", &[20, 30, 40, 70])
        .player(3, "alyx", &[30, 70, 20])
        .private_player(4, "Shy")
}
