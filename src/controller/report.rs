use crate::controller::steam::SteamApiClient;
use crate::error::AppError;
use crate::model::{
    AppCatalog, Player, PlayerReport, PlayerSummary, SharedGame, SharedGamesReport, SteamId,
};
use ahash::AHashSet;
use futures::future::join_all;
use tracing::{info, warn};

/// Drops repeated ids, keeping the first occurrence of each.
#[must_use]
pub fn dedup_steamids(steamids: &[SteamId]) -> Vec<SteamId> {
    let mut seen = AHashSet::with_capacity(steamids.len());
    steamids
        .iter()
        .copied()
        .filter(|id| seen.insert(*id))
        .collect()
}

fn find_summary(summaries: &[PlayerSummary], steamid: SteamId) -> Option<&PlayerSummary> {
    summaries.iter().find(|p| p.steamid == steamid)
}

async fn resolve_player(
    api: &dyn SteamApiClient,
    summaries: &[PlayerSummary],
    steamid: SteamId,
) -> Result<PlayerReport, AppError> {
    let summary = find_summary(summaries, steamid).ok_or_else(|| {
        AppError::Upstream(format!("no player summary returned for {steamid}"))
    })?;
    let games = api.get_owned_games(steamid).await?;
    Ok(PlayerReport {
        steamid,
        name: summary.personaname.clone(),
        appids: games.iter().map(|g| g.appid).collect(),
    })
}

/// Resolves every id independently. A player that cannot be resolved is
/// logged and left out; the remaining players keep request order.
async fn resolve_players(
    api: &dyn SteamApiClient,
    summaries: &[PlayerSummary],
    steamids: &[SteamId],
) -> Vec<PlayerReport> {
    let attempts = join_all(
        steamids
            .iter()
            .map(|id| resolve_player(api, summaries, *id)),
    )
    .await;

    steamids
        .iter()
        .zip(attempts)
        .filter_map(|(steamid, attempt)| match attempt {
            Ok(report) => Some(report),
            Err(e) => {
                warn!(%steamid, error = %e, "dropping player from report");
                None
            }
        })
        .collect()
}

/// Appids present in every report. An empty family of players has no
/// defined intersection, so that case is an error.
///
/// # Errors
///
/// Will return `Err` if `reports` is empty
pub fn intersect_appids(reports: &[PlayerReport]) -> Result<AHashSet<u64>, AppError> {
    let (first, rest) = reports.split_first().ok_or(AppError::EmptyResolution)?;
    let mut shared = first.appids.clone();
    for report in rest {
        shared.retain(|appid| report.appids.contains(appid));
    }
    Ok(shared)
}

/// # Errors
///
/// Will return `Err` if a shared appid is missing from the catalog
pub fn name_shared_games(
    shared: &AHashSet<u64>,
    catalog: &AppCatalog,
) -> Result<Vec<SharedGame>, AppError> {
    shared
        .iter()
        .map(|appid| {
            catalog
                .get(appid)
                .map(|name| SharedGame {
                    name: name.clone(),
                    appid: *appid,
                })
                .ok_or(AppError::DataInconsistency(*appid))
        })
        .collect()
}

pub fn sort_players_by_name(players: &mut [Player]) {
    players.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.steamid.cmp(&b.steamid))
    });
}

pub fn sort_games_by_name(games: &mut [SharedGame]) {
    games.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.appid.cmp(&b.appid))
    });
}

/// Players whose summary and game library could both be fetched, in the
/// order they were requested.
///
/// # Errors
///
/// Will return `Err` if the batched summaries call fails
pub async fn build_players_report(
    api: &dyn SteamApiClient,
    steamids: &[SteamId],
) -> Result<Vec<Player>, AppError> {
    let steamids = dedup_steamids(steamids);
    let summaries = api.get_player_summaries(&steamids).await?;
    let reports = resolve_players(api, &summaries, &steamids).await;
    Ok(reports.into_iter().map(Player::from).collect())
}

/// # Errors
///
/// Will return `Err` if the summaries or app list call fails, if no player
/// resolves, or if a shared appid is missing from the app list
pub async fn build_shared_games_report(
    api: &dyn SteamApiClient,
    steamids: &[SteamId],
) -> Result<SharedGamesReport, AppError> {
    let steamids = dedup_steamids(steamids);
    let summaries = api.get_player_summaries(&steamids).await?;
    let catalog = api.get_app_list().await?;

    let reports = resolve_players(api, &summaries, &steamids).await;
    let shared = intersect_appids(&reports)?;

    let mut shared_games = name_shared_games(&shared, &catalog)?;
    sort_games_by_name(&mut shared_games);

    let mut players: Vec<Player> = reports.into_iter().map(Player::from).collect();
    sort_players_by_name(&mut players);

    info!(
        requested = steamids.len(),
        resolved = players.len(),
        shared = shared_games.len(),
        "built shared games report"
    );

    Ok(SharedGamesReport {
        players,
        shared_games,
    })
}
