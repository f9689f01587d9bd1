//! Media Resolution
//!
//! Sections point at media either by literal URL or by media library asset
//! id. Resolution never fails: an unknown id is handed back unchanged and
//! treated as a path, since sections may be edited before the library has
//! loaded.

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::BuilderConfig;
use crate::error::SectionError;
use crate::models::{MediaAsset, MediaType};

/// URL schemes passed through without a library lookup
const ABSOLUTE_SCHEMES: &[&str] = &["http", "https", "data", "blob"];

/// Whether `reference` is already a fully qualified URL or a data URI.
pub fn is_absolute_reference(reference: &str) -> bool {
    url::Url::parse(reference)
        .map(|u| ABSOLUTE_SCHEMES.contains(&u.scheme()))
        .unwrap_or(false)
}

/// Map a media reference to a displayable URL.
pub fn resolve(reference: &str, assets: &[MediaAsset]) -> String {
    if reference.is_empty() || is_absolute_reference(reference) {
        return reference.to_string();
    }

    assets
        .iter()
        .find(|asset| asset.id == reference)
        .map(|asset| asset.url.clone())
        .unwrap_or_else(|| reference.to_string())
}

// ============================================
// Media Sources
// ============================================

/// Where the media library asset list comes from
#[async_trait]
pub trait MediaSource: Send + Sync {
    async fn fetch_assets(&self) -> Result<Vec<MediaAsset>, SectionError>;
}

/// Fixed in-memory asset list
#[derive(Debug, Clone, Default)]
pub struct StaticMediaSource {
    assets: Vec<MediaAsset>,
}

impl StaticMediaSource {
    pub fn new(assets: Vec<MediaAsset>) -> Self {
        Self { assets }
    }
}

#[async_trait]
impl MediaSource for StaticMediaSource {
    async fn fetch_assets(&self) -> Result<Vec<MediaAsset>, SectionError> {
        Ok(self.assets.clone())
    }
}

/// Asset list stored as a JSON array on disk
#[derive(Debug, Clone)]
pub struct JsonFileMediaSource {
    path: PathBuf,
}

impl JsonFileMediaSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl MediaSource for JsonFileMediaSource {
    async fn fetch_assets(&self) -> Result<Vec<MediaAsset>, SectionError> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        let assets: Vec<MediaAsset> = serde_json::from_str(&raw)?;
        tracing::debug!(path = %self.path.display(), count = assets.len(), "Loaded media manifest");
        Ok(assets)
    }
}

// ============================================
// Media Library
// ============================================

#[derive(Debug, Default)]
struct LibraryState {
    assets: Vec<MediaAsset>,
    /// Ticket of the fetch whose result is currently held
    applied: u64,
}

/// Outcome of [`MediaLibrary::refresh`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Applied { ticket: u64, count: usize },
    /// A newer fetch finished first; this response was dropped.
    Stale { ticket: u64 },
}

/// Shared snapshot of the media library.
///
/// Every refresh takes a ticket from a monotonic counter before fetching.
/// A response is only applied if no later ticket has been applied already,
/// so a slow fetch can never overwrite a newer asset list.
pub struct MediaLibrary {
    source: Arc<dyn MediaSource>,
    state: RwLock<LibraryState>,
    next_ticket: AtomicU64,
}

impl MediaLibrary {
    pub fn new(source: Arc<dyn MediaSource>) -> Self {
        Self {
            source,
            state: RwLock::new(LibraryState::default()),
            next_ticket: AtomicU64::new(0),
        }
    }

    /// Library backed by the manifest named in the config, or an empty one.
    pub fn from_config(config: &BuilderConfig) -> Self {
        match &config.media_manifest {
            Some(path) => Self::new(Arc::new(JsonFileMediaSource::new(path.clone()))),
            None => Self::new(Arc::new(StaticMediaSource::default())),
        }
    }

    pub async fn refresh(&self) -> Result<RefreshOutcome, SectionError> {
        let ticket = self.next_ticket.fetch_add(1, Ordering::SeqCst) + 1;

        let assets = match self.source.fetch_assets().await {
            Ok(assets) => assets,
            Err(e) => {
                tracing::warn!(ticket, "Media library fetch failed: {}", e);
                return Err(e);
            }
        };

        let mut state = self.state.write().await;
        if ticket < state.applied {
            tracing::debug!(ticket, applied = state.applied, "Discarding stale media response");
            return Ok(RefreshOutcome::Stale { ticket });
        }

        let count = assets.len();
        state.assets = assets;
        state.applied = ticket;
        tracing::info!(ticket, count, "Media library refreshed");

        Ok(RefreshOutcome::Applied { ticket, count })
    }

    /// Copy of the current asset list
    pub async fn snapshot(&self) -> Vec<MediaAsset> {
        self.state.read().await.assets.clone()
    }

    pub async fn resolve(&self, reference: &str) -> String {
        resolve(reference, &self.state.read().await.assets)
    }

    pub async fn find(&self, id: &str) -> Option<MediaAsset> {
        self.state
            .read()
            .await
            .assets
            .iter()
            .find(|asset| asset.id == id)
            .cloned()
    }

    /// Assets selectable as section images
    pub async fn images(&self) -> Vec<MediaAsset> {
        self.state
            .read()
            .await
            .assets
            .iter()
            .filter(|asset| asset.media_type == MediaType::Image)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;

    fn asset(id: &str, url: &str) -> MediaAsset {
        MediaAsset {
            id: id.into(),
            url: url.into(),
            media_type: MediaType::Image,
            size_kb: 120.0,
            filename: format!("{}.jpg", id),
            uploaded_at: Utc::now(),
        }
    }

    #[test]
    fn test_resolve_by_id() {
        let assets = vec![asset("m1", "/uploads/bali.jpg")];
        assert_eq!(resolve("m1", &assets), "/uploads/bali.jpg");
    }

    #[test]
    fn test_resolve_unknown_reference_unchanged() {
        assert_eq!(resolve("m42", &[]), "m42");
        assert_eq!(resolve("/images/local.png", &[]), "/images/local.png");
        assert_eq!(resolve("", &[asset("", "/x.jpg")]), "");
    }

    #[test]
    fn test_absolute_urls_pass_through() {
        let assets = vec![asset("https://x/y.png", "/shadowed.jpg")];
        assert_eq!(resolve("https://x/y.png", &assets), "https://x/y.png");
        assert_eq!(resolve("data:image/png;base64,iVBORw0KGgo=", &assets), "data:image/png;base64,iVBORw0KGgo=");
        assert!(!is_absolute_reference("m1"));
        assert!(!is_absolute_reference("/uploads/a.jpg"));
    }

    #[tokio::test]
    async fn test_library_refresh_and_lookup() {
        let mut video = asset("v1", "/uploads/clip.mp4");
        video.media_type = MediaType::Video;
        let source = StaticMediaSource::new(vec![asset("m1", "/uploads/a.jpg"), video]);
        let library = MediaLibrary::new(Arc::new(source));

        assert_eq!(library.resolve("m1").await, "m1");

        let outcome = library.refresh().await.unwrap();
        assert_eq!(outcome, RefreshOutcome::Applied { ticket: 1, count: 2 });
        assert_eq!(library.resolve("m1").await, "/uploads/a.jpg");
        assert_eq!(library.images().await.len(), 1);
        assert!(library.find("v1").await.is_some());
    }

    /// First call answers slowly with the old list, later calls answer at once.
    struct SlowFirstSource {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl MediaSource for SlowFirstSource {
        async fn fetch_assets(&self) -> Result<Vec<MediaAsset>, SectionError> {
            if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
                tokio::time::sleep(Duration::from_millis(80)).await;
                Ok(vec![asset("m1", "/old.jpg")])
            } else {
                Ok(vec![asset("m1", "/new.jpg")])
            }
        }
    }

    #[tokio::test]
    async fn test_stale_response_is_discarded() {
        let library = MediaLibrary::new(Arc::new(SlowFirstSource {
            calls: AtomicUsize::new(0),
        }));

        let (first, second) = tokio::join!(library.refresh(), async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            library.refresh().await
        });

        assert_eq!(first.unwrap(), RefreshOutcome::Stale { ticket: 1 });
        assert_eq!(second.unwrap(), RefreshOutcome::Applied { ticket: 2, count: 1 });
        assert_eq!(library.resolve("m1").await, "/new.jpg");
    }
}
