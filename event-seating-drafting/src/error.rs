use core::time::Duration;

use hyper::StatusCode;

#[derive(thiserror::Error, Debug)]
pub enum DraftingError {
    #[error("no api key configured for message drafting")]
    MissingApiKey,
    #[error("message drafting timed out after {0:?}")]
    Timeout(Duration),
    #[error("drafting service returned no text")]
    EmptyResponse,
    #[error("drafting service answered with {0}")]
    Status(StatusCode),
    #[error("drafting endpoint has no host")]
    MissingHost,
    #[error("invalid dns name {0}")]
    InvalidDnsName(String),
    #[error("invalid uri {0}")]
    InvalidUri(#[from] hyper::http::uri::InvalidUri),
    #[error("hyper {0}")]
    Hyper(#[from] hyper::Error),
    #[error("hyper http {0}")]
    HyperHttp(#[from] hyper::http::Error),
    #[error("io {0}")]
    Io(#[from] std::io::Error),
    #[error("json {0}")]
    Json(#[from] serde_json::Error),
}
