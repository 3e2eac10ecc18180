//! Asset sources: where raw bytes come from

use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;

use crate::{AssetError, Result};

/// Fetches raw bytes for a URL. The trait is the seam tests mock; the
/// cache layers memoization and failure absorption on top of it.
#[async_trait]
pub trait AssetSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// HTTP source over a shared client with a request timeout
pub struct HttpAssetSource {
    client: reqwest::Client,
}

impl HttpAssetSource {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("fce-report/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl AssetSource for HttpAssetSource {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AssetError::Status(status.as_u16()));
        }
        Ok(response.bytes().await?.to_vec())
    }
}

/// Decode a `data:` URL payload without touching the network
pub fn decode_data_url(url: &str) -> Result<Vec<u8>> {
    let rest = url.strip_prefix("data:").ok_or(AssetError::DataUrl)?;
    let (meta, payload) = rest.split_once(',').ok_or(AssetError::DataUrl)?;
    if meta.ends_with(";base64") {
        Ok(base64::engine::general_purpose::STANDARD.decode(payload.trim())?)
    } else {
        // Percent-encoded text payloads never hold image bytes
        Err(AssetError::DataUrl)
    }
}

/// True when the reference is a `data:` URL
pub fn is_data_url(reference: &str) -> bool {
    reference.starts_with("data:")
}
