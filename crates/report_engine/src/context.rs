//! Per-build context shared by the section builders
//!
//! One context exists per report request. It owns the asset memo cache, so
//! concurrent builds never share fetch state, and it pins the generation
//! date so a build is reproducible when the caller supplies one.

use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use assets::{AssetCache, AssetSource};
use report_doc::ReportTheme;

/// Everything a section builder needs besides the record itself
pub struct BuildContext {
    /// Memoized asset resolution for this build only
    pub assets: AssetCache,
    /// Style constants shared by every section
    pub theme: ReportTheme,
    /// Correlates log events for one build
    pub build_id: Uuid,
    /// Date stamped on the report; the one dynamic field
    pub generated_on: NaiveDate,
}

impl BuildContext {
    /// Create a context over an asset source, dating the report today
    pub fn new(source: Arc<dyn AssetSource>) -> Self {
        Self::with_date(source, chrono::Local::now().date_naive())
    }

    /// Create a context with a pinned generation date
    pub fn with_date(source: Arc<dyn AssetSource>, generated_on: NaiveDate) -> Self {
        Self {
            assets: AssetCache::new(source),
            theme: ReportTheme::default(),
            build_id: Uuid::new_v4(),
            generated_on,
        }
    }

    /// Generation date formatted for the report body
    pub fn date_display(&self) -> String {
        self.generated_on.format("%B %d, %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assets::Result;
    use async_trait::async_trait;

    struct NullSource;

    #[async_trait]
    impl AssetSource for NullSource {
        async fn fetch(&self, _url: &str) -> Result<Vec<u8>> {
            Err(assets::AssetError::Status(404))
        }
    }

    #[test]
    fn test_date_display() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
        let ctx = BuildContext::with_date(Arc::new(NullSource), date);
        assert_eq!(ctx.date_display(), "June 14, 2024");
    }

    #[test]
    fn test_contexts_get_distinct_build_ids() {
        let a = BuildContext::new(Arc::new(NullSource));
        let b = BuildContext::new(Arc::new(NullSource));
        assert_ne!(a.build_id, b.build_id);
    }
}
