use reqwest::StatusCode;
use thiserror::Error;

/// Failures that end the menu loop.
#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("failed to read operator input: {0}")]
    Input(String),
    #[error("menu selection {0} does not exist")]
    UnknownChoice(usize),
}

/// Reasons a joke could not be fetched.
///
/// The operator never sees these. The joke handler logs them and shows one
/// static message for all of them.
#[derive(Debug, Error)]
pub enum JokeError {
    #[error("request to joke API failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("joke API answered with status {0}")]
    Status(StatusCode),
    #[error("joke API payload could not be decoded: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("joke API returned an empty batch")]
    Empty,
}
