use thiserror::Error;

#[derive(Error, Debug)]
pub enum NewsError {
    #[error("FINNHUB_API_KEY is not set")]
    MissingCredential,

    #[error("Error reaching upstream news API")]
    Transport(#[from] reqwest::Error),

    #[error("Upstream news API returned {0}")]
    Upstream(String),

    #[error("Error decoding upstream response: {0}")]
    Decode(String),
}
