/// Every failure collapses into one of these; callers only care that it failed
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("API error: {0}")]
    Status(u16),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),
}
