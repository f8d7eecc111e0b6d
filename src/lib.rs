pub mod args;
pub mod error;
pub mod model;
pub mod controller {
    pub mod cache;
    pub mod http_handlers;
    pub mod report;
    pub mod request;
    pub mod steam;
}
pub mod view {
    pub mod index;
}

pub const SCRIPT_PATH: &str = "static/sharedgames.js";

pub use controller::http_handlers::{AppState, configure_routes};
pub use error::AppError;
