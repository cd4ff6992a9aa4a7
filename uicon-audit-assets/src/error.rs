/// Errors from the reference listing and the icon-directory scan.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("GitHub API error: {0}")]
    Api(String),
}

impl AssetError {
    pub fn api(msg: impl Into<String>) -> Self {
        Self::Api(msg.into())
    }
}
