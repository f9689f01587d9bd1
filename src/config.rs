//! Builder Configuration
//!
//! All configuration values are loaded from environment variables and fall
//! back to the defaults below.

use crate::error::SectionError;
use std::env;
use std::path::PathBuf;

/// Section builder configuration loaded from environment
#[derive(Debug, Clone, PartialEq)]
pub struct BuilderConfig {
    /// Gallery tiles shown in a preview before the "+N more" tile
    /// (from SECTION_GALLERY_PREVIEW_LIMIT env var)
    pub gallery_preview_limit: usize,

    /// Image reference given to freshly created sections that need one
    /// (from SECTION_PLACEHOLDER_IMAGE env var)
    pub placeholder_image: String,

    /// JSON file listing the media library assets
    /// (from SECTION_MEDIA_MANIFEST env var)
    pub media_manifest: Option<PathBuf>,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            gallery_preview_limit: 6,
            placeholder_image: "/images/placeholder.jpg".to_string(),
            media_manifest: None,
        }
    }
}

impl BuilderConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            gallery_preview_limit: env::var("SECTION_GALLERY_PREVIEW_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.gallery_preview_limit),

            placeholder_image: env::var("SECTION_PLACEHOLDER_IMAGE")
                .unwrap_or(defaults.placeholder_image),

            media_manifest: env::var("SECTION_MEDIA_MANIFEST")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), SectionError> {
        if self.gallery_preview_limit == 0 {
            return Err(SectionError::Config(
                "SECTION_GALLERY_PREVIEW_LIMIT must be at least 1".to_string(),
            ));
        }

        if self.placeholder_image.trim().is_empty() {
            return Err(SectionError::Config(
                "SECTION_PLACEHOLDER_IMAGE must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
