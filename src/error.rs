use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("No steam ids specified")]
    MissingParameter,
    #[error("Steam ids are malformed: '{0}' is not a steam id")]
    MalformedInput(String),
    #[error("steam api error: {0}")]
    Upstream(String),
    #[error("app {0} is owned by every player but missing from the steam app list")]
    DataInconsistency(u64),
    #[error("none of the requested players could be resolved")]
    EmptyResolution,
}

impl AppError {
    #[must_use]
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Self::MissingParameter | Self::MalformedInput(_))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        Self::Upstream(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Upstream(format!("unexpected response body: {err}"))
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        if self.is_caller_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type("text/plain; charset=utf-8")
            .body(format!("ERROR: {self}"))
    }
}
