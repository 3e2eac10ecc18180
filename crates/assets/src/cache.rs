//! Per-build asset cache: memoized, failure-absorbing resolution

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use report_doc::{image_dimensions, ImageContent, ImageFormat};

use crate::{decode_data_url, is_data_url, AssetSource};

/// A fetched and decoded image, ready to embed
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAsset {
    pub bytes: Vec<u8>,
    pub format: ImageFormat,
    pub px_width: u32,
    pub px_height: u32,
}

impl ResolvedAsset {
    /// Sniff and measure a payload; `None` when it is not a supported image
    pub fn from_bytes(bytes: Vec<u8>) -> Option<Self> {
        let format = ImageFormat::sniff(&bytes);
        if !format.is_supported() {
            return None;
        }
        let (px_width, px_height) = image_dimensions(&bytes, format);
        Some(Self {
            bytes,
            format,
            px_width,
            px_height,
        })
    }

    /// Turn the asset into placeable image content at its natural size
    pub fn to_content(&self, alt_text: impl Into<String>) -> ImageContent {
        ImageContent::new(
            self.bytes.clone(),
            self.format,
            self.px_width,
            self.px_height,
            alt_text,
        )
    }
}

/// One build's memo table over an [`AssetSource`].
///
/// `resolve` never fails: absent references, network errors, bad statuses
/// and undecodable payloads all come back as `None`, and every outcome is
/// memoized so the same reference is fetched at most once per build.
pub struct AssetCache {
    source: Arc<dyn AssetSource>,
    memo: Mutex<HashMap<String, Option<Arc<ResolvedAsset>>>>,
}

impl AssetCache {
    pub fn new(source: Arc<dyn AssetSource>) -> Self {
        Self {
            source,
            memo: Mutex::new(HashMap::new()),
        }
    }

    /// Resolve a reference to an image, absorbing every failure as `None`
    pub async fn resolve(&self, reference: Option<&str>) -> Option<Arc<ResolvedAsset>> {
        let reference = reference?.trim();
        if reference.is_empty() {
            return None;
        }

        if let Ok(memo) = self.memo.lock() {
            if let Some(hit) = memo.get(reference) {
                return hit.clone();
            }
        }

        let resolved = self.resolve_uncached(reference).await.map(Arc::new);
        if let Ok(mut memo) = self.memo.lock() {
            memo.insert(reference.to_string(), resolved.clone());
        }
        resolved
    }

    async fn resolve_uncached(&self, reference: &str) -> Option<ResolvedAsset> {
        let bytes = if is_data_url(reference) {
            match decode_data_url(reference) {
                Ok(bytes) => bytes,
                Err(err) => {
                    warn!(%err, "data url decode failed");
                    return None;
                }
            }
        } else {
            match self.source.fetch(reference).await {
                Ok(bytes) => bytes,
                Err(err) => {
                    warn!(reference, %err, "asset fetch failed");
                    return None;
                }
            }
        };

        match ResolvedAsset::from_bytes(bytes) {
            Some(asset) => {
                debug!(
                    reference,
                    format = ?asset.format,
                    width = asset.px_width,
                    height = asset.px_height,
                    "asset resolved"
                );
                Some(asset)
            }
            None => {
                warn!(reference, "payload is not a supported image");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AssetError, Result};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // 1x1 transparent PNG
    const TINY_PNG: &[u8] = &[
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
        0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x62, 0x00,
        0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
        0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
    ];

    struct CountingSource {
        calls: AtomicUsize,
        fail: bool,
    }

    impl CountingSource {
        fn new(fail: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail,
            }
        }
    }

    #[async_trait]
    impl AssetSource for CountingSource {
        async fn fetch(&self, _url: &str) -> Result<Vec<u8>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(AssetError::Status(404))
            } else {
                Ok(TINY_PNG.to_vec())
            }
        }
    }

    #[tokio::test]
    async fn test_absent_reference_is_none_without_io() {
        let source = Arc::new(CountingSource::new(false));
        let cache = AssetCache::new(source.clone());
        assert!(cache.resolve(None).await.is_none());
        assert!(cache.resolve(Some("")).await.is_none());
        assert!(cache.resolve(Some("   ")).await.is_none());
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_success_is_memoized() {
        let source = Arc::new(CountingSource::new(false));
        let cache = AssetCache::new(source.clone());
        let first = cache.resolve(Some("https://example.test/logo.png")).await;
        let second = cache.resolve(Some("https://example.test/logo.png")).await;
        assert!(first.is_some());
        assert_eq!(first, second);
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failure_is_memoized_too() {
        let source = Arc::new(CountingSource::new(true));
        let cache = AssetCache::new(source.clone());
        assert!(cache.resolve(Some("https://example.test/gone.png")).await.is_none());
        assert!(cache.resolve(Some("https://example.test/gone.png")).await.is_none());
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_data_url_skips_the_source() {
        use base64::Engine;
        let source = Arc::new(CountingSource::new(false));
        let cache = AssetCache::new(source.clone());
        let url = format!(
            "data:image/png;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(TINY_PNG)
        );
        let asset = cache.resolve(Some(&url)).await.expect("decodes");
        assert_eq!(asset.format, ImageFormat::Png);
        assert_eq!((asset.px_width, asset.px_height), (1, 1));
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_non_image_payload_resolves_to_none() {
        struct TextSource;
        #[async_trait]
        impl AssetSource for TextSource {
            async fn fetch(&self, _url: &str) -> Result<Vec<u8>> {
                Ok(b"<html>not found</html>".to_vec())
            }
        }
        let cache = AssetCache::new(Arc::new(TextSource));
        assert!(cache.resolve(Some("https://example.test/x")).await.is_none());
    }
}
