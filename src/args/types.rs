use clap::Parser;

use crate::controller::cache::DEFAULT_CACHE_MAX_ENTRIES;
use crate::controller::steam::client::DEFAULT_STEAM_API_URL;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Steam Web API key. Either the key itself or the path of a file holding it.
    #[arg(long, env = "STEAM_API_KEY", value_name = "STEAM_API_KEY", hide_env_values = true)]
    pub steam_api_key: Option<String>,
    #[arg(
        short = 'b',
        long,
        env = "STEAMWHAT_BIND",
        value_name = "ADDRESS",
        default_value = "0.0.0.0:5000"
    )]
    pub bind: String,
    /// Base url of the Steam Web API. Point it elsewhere for proxies or tests.
    #[arg(
        long,
        env = "STEAM_API_URL",
        value_name = "URL",
        default_value = DEFAULT_STEAM_API_URL,
        value_parser = crate::args::validation::check_http_url
    )]
    pub steam_api_url: String,
    /// Upper bound on each call to the Steam Web API.
    #[arg(
        long,
        env = "STEAMWHAT_REQUEST_TIMEOUT",
        value_name = "SECONDS",
        default_value = "30"
    )]
    pub request_timeout_secs: u64,
    /// How long fetched Steam data is reused. 0 keeps it until the process exits.
    #[arg(
        long,
        env = "STEAMWHAT_CACHE_TTL",
        value_name = "SECONDS",
        default_value = "300"
    )]
    pub cache_ttl_secs: u64,
    #[arg(
        long,
        env = "STEAMWHAT_CACHE_MAX_ENTRIES",
        value_name = "COUNT",
        default_value_t = DEFAULT_CACHE_MAX_ENTRIES
    )]
    pub cache_max_entries: usize,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub steam_api_key: String,
    pub bind: String,
    pub steam_api_url: String,
    pub request_timeout: std::time::Duration,
    pub cache_ttl_secs: u64,
    pub cache_max_entries: usize,
}
