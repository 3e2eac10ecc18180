//! Error types for asset fetching

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("http status {0}")]
    Status(u16),

    #[error("malformed data url")]
    DataUrl,

    #[error("base64 decode failed: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("payload is not a supported image")]
    UnsupportedImage,
}

pub type Result<T> = std::result::Result<T, AssetError>;
