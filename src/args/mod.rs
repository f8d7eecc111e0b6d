use crate::controller::cache::CachePolicy;
use clap::Parser;
use std::time::Duration;

pub mod types;
pub mod validation;

pub use types::{Args, CleanArgs};

/// Loads `.env` if present, then parses and validates the command line.
///
/// # Errors
///
/// Will return `Err` if the arguments are invalid
pub fn args_checks() -> Result<CleanArgs, String> {
    dotenvy::dotenv().ok();
    let mut xx = Args::parse();
    xx.validate()?;
    Ok(CleanArgs::new(xx))
}

impl CleanArgs {
    #[must_use]
    pub fn new(args: Args) -> Self {
        CleanArgs {
            steam_api_key: args.steam_api_key.unwrap_or_default(),
            bind: args.bind,
            steam_api_url: args.steam_api_url,
            request_timeout: Duration::from_secs(args.request_timeout_secs),
            cache_ttl_secs: args.cache_ttl_secs,
            cache_max_entries: args.cache_max_entries,
        }
    }

    #[must_use]
    pub fn cache_policy(&self) -> CachePolicy {
        CachePolicy::from_secs(self.cache_ttl_secs, self.cache_max_entries)
    }
}
