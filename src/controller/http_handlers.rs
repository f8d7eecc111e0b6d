use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use std::collections::HashMap;
use std::sync::Arc;

use super::report::{build_players_report, build_shared_games_report};
use super::request::parse_steamids;
use super::steam::SteamApiClient;
use crate::error::AppError;
use crate::view::index::render_index_template;

/// Shared by every worker; the client is normally a `CachedSteamClient`.
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn SteamApiClient>,
}

impl AppState {
    pub fn new(api: impl SteamApiClient + 'static) -> Self {
        AppState { api: Arc::new(api) }
    }
}

pub async fn players(
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let steamids = parse_steamids(&query)?;
    let players = build_players_report(state.api.as_ref(), &steamids)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "players request failed"))?;
    Ok(HttpResponse::Ok().json(players))
}

pub async fn shared_games(
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let steamids = parse_steamids(&query)?;
    let report = build_shared_games_report(state.api.as_ref(), &steamids)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "shared games request failed"))?;
    Ok(HttpResponse::Ok().json(report))
}

pub async fn index() -> impl Responder {
    let markup = render_index_template("Shared Steam games");
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

/// Routes served by the app, minus `/static` which needs the file system.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/players", web::get().to(players))
        .route("/sharedgames", web::get().to(shared_games))
        .route("/health", web::get().to(HttpResponse::Ok));
}
