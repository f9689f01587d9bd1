//! RustPress Content Section Builder
//!
//! Page composition for travel blog posts and pages, providing:
//! - Six typed section kinds (hero, text, image, gallery, popular posts, breadcrumb)
//! - Defaulted section factory and schema validation with field paths
//! - Pure list editing (append, replace, remove, move)
//! - Partial updates that merge nested settings field by field
//! - Media library references resolved to displayable URLs
//! - Live preview rendering to an element tree or HTML
//! - Persisted `contentSections` JSON codec
//!
//! # Configuration
//!
//! All configuration is loaded from environment variables:
//! - `SECTION_GALLERY_PREVIEW_LIMIT` - Gallery tiles shown in a preview (default: 6)
//! - `SECTION_PLACEHOLDER_IMAGE` - Image given to new sections (default: "/images/placeholder.jpg")
//! - `SECTION_MEDIA_MANIFEST` - JSON file listing media library assets (optional)
//!
//! # Usage
//!
//! ```rust,ignore
//! use rustpress_section_builder::{SectionBuilder, SectionType};
//!
//! let mut builder = SectionBuilder::from_env()?;
//! builder.refresh_media().await?;
//!
//! let hero = builder.add_section(SectionType::Hero);
//! builder.update_section_json(hero, &serde_json::json!({ "title": "Three days in Porto" }))?;
//!
//! let preview = builder.preview_all().await.to_html();
//! let saved = builder.save_json()?;
//! ```

pub mod builder;
pub mod codec;
pub mod config;
pub mod editors;
pub mod error;
pub mod media;
pub mod models;
pub mod render;
pub mod schema;
pub mod store;

// Re-export commonly used types
pub use builder::SectionBuilder;
pub use codec::PageSections;
pub use config::BuilderConfig;
pub use editors::{apply_list_edit, apply_patch, ListEdit, Merge, SectionPatch};
pub use error::{FieldError, SectionError, ValidationError};
pub use media::{resolve, MediaLibrary, MediaSource, RefreshOutcome};
pub use models::*;
pub use render::{render, render_all, PreviewNode, RenderContext};
pub use schema::{create_section, create_section_with, parse_section, validate_section};
pub use store::SectionList;
