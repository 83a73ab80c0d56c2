use event_seating_config::ConfigError;
use event_seating_core::SeatingError;

#[derive(thiserror::Error, Debug)]
pub enum ConsoleError {
    #[error("{0}")]
    Seating(#[from] SeatingError),
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("join error: {0}")]
    Join(#[from] tokio::task::JoinError),
}
