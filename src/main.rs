use steamwhat::args;
use steamwhat::controller::steam::{CachedSteamClient, ReqwestSteamClient};
use steamwhat::{AppState, configure_routes};

use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = args::args_checks()?;

    let steam = ReqwestSteamClient::new(
        &args.steam_api_url,
        &args.steam_api_key,
        args.request_timeout,
    )?;
    let policy = args.cache_policy();
    info!(
        ttl = ?policy.ttl,
        max_entries = policy.max_entries,
        "steam api responses are cached"
    );
    let state = AppState::new(CachedSteamClient::new(steam, policy));

    info!("listening on {}", args.bind);
    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(state.clone()))
            .configure(configure_routes)
            .service(Files::new("/static", "./static"))
    })
    .bind(&args.bind)?
    .run()
    .await?;
    Ok(())
}
