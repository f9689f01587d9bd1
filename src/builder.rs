//! Section Builder Session
//!
//! Owns the section list of the page being edited together with the media
//! library and configuration. Every edit builds the next list with the pure
//! store and editor operations and replaces the owned list in one step; a
//! failed edit leaves the list untouched.

use serde_json::Value;
use std::sync::Arc;

use crate::codec;
use crate::config::BuilderConfig;
use crate::editors::{apply_list_edit, apply_patch, ListEdit, SectionPatch};
use crate::error::{SectionError, ValidationError};
use crate::media::{MediaLibrary, RefreshOutcome};
use crate::models::{ContentSection, SectionType};
use crate::render::{render, render_all, PreviewNode, RenderContext};
use crate::store::SectionList;

pub struct SectionBuilder {
    sections: SectionList,
    media: Arc<MediaLibrary>,
    config: BuilderConfig,
}

impl SectionBuilder {
    /// Create a builder with the media library named in `config`.
    pub fn new(config: BuilderConfig) -> Result<Self, SectionError> {
        let media = Arc::new(MediaLibrary::from_config(&config));
        Self::with_media(config, media)
    }

    /// Create a builder from environment configuration.
    pub fn from_env() -> Result<Self, SectionError> {
        Self::new(BuilderConfig::from_env())
    }

    /// Create a builder sharing an existing media library.
    pub fn with_media(config: BuilderConfig, media: Arc<MediaLibrary>) -> Result<Self, SectionError> {
        config.validate()?;

        Ok(Self {
            sections: SectionList::new(),
            media,
            config,
        })
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    pub fn media(&self) -> &Arc<MediaLibrary> {
        &self.media
    }

    pub fn sections(&self) -> &SectionList {
        &self.sections
    }

    pub fn section(&self, index: usize) -> Option<&ContentSection> {
        self.sections.get(index)
    }

    fn section_at(&self, index: usize) -> Result<&ContentSection, SectionError> {
        self.sections.get(index).ok_or(SectionError::IndexOutOfRange {
            index,
            len: self.sections.len(),
        })
    }

    // ============================================
    // Editing
    // ============================================

    /// Append a defaulted section and return its index.
    pub fn add_section(&mut self, section_type: SectionType) -> usize {
        self.sections = self.sections.add(section_type, &self.config.placeholder_image);
        let index = self.sections.len() - 1;

        tracing::info!(index, section_type = %section_type, "Section added");
        index
    }

    /// Merge a partial update into the section at `index`.
    pub fn update_section(&mut self, index: usize, patch: SectionPatch) -> Result<(), SectionError> {
        let next = apply_patch(self.section_at(index)?, patch)?;
        self.sections = self.sections.replace_at(index, next)?;

        tracing::debug!(index, "Section updated");
        Ok(())
    }

    /// Like [`SectionBuilder::update_section`], reading an untagged JSON
    /// partial object as a patch for the section's own type.
    pub fn update_section_json(&mut self, index: usize, partial: &Value) -> Result<(), SectionError> {
        let section_type = self.section_at(index)?.section_type();
        let patch = SectionPatch::from_value(section_type, partial)?;
        self.update_section(index, patch)
    }

    /// Edit a list-valued field (gallery images, breadcrumb items, posts).
    pub fn edit_list(&mut self, index: usize, edit: ListEdit) -> Result<(), SectionError> {
        let next = apply_list_edit(self.section_at(index)?, edit)?;
        self.sections = self.sections.replace_at(index, next)?;

        tracing::debug!(index, "Section list field edited");
        Ok(())
    }

    pub fn replace_section(&mut self, index: usize, section: ContentSection) -> Result<(), SectionError> {
        let section_type = section.section_type();
        self.sections = self.sections.replace_at(index, section)?;

        tracing::info!(index, section_type = %section_type, "Section replaced");
        Ok(())
    }

    /// Remove the section at `index` and hand it back.
    pub fn remove_section(&mut self, index: usize) -> Result<ContentSection, SectionError> {
        let removed = self.section_at(index)?.clone();
        self.sections = self.sections.remove_at(index)?;

        tracing::info!(index, section_type = %removed.section_type(), "Section removed");
        Ok(removed)
    }

    pub fn move_section(&mut self, from: usize, to: usize) -> Result<(), SectionError> {
        self.sections = self.sections.move_to(from, to)?;

        tracing::info!(from, to, "Section moved");
        Ok(())
    }

    // ============================================
    // Preview
    // ============================================

    pub async fn refresh_media(&self) -> Result<RefreshOutcome, SectionError> {
        self.media.refresh().await
    }

    /// Preview of the section at `index` against the current media snapshot.
    pub async fn preview(&self, index: usize) -> Result<PreviewNode, SectionError> {
        let section = self.section_at(index)?;
        let assets = self.media.snapshot().await;
        let ctx = RenderContext::new(&assets).with_gallery_limit(self.config.gallery_preview_limit);

        Ok(render(section, &ctx))
    }

    /// Preview of the whole page.
    pub async fn preview_all(&self) -> PreviewNode {
        let assets = self.media.snapshot().await;
        let ctx = RenderContext::new(&assets).with_gallery_limit(self.config.gallery_preview_limit);

        render_all(self.sections.as_slice(), &ctx)
    }

    // ============================================
    // Persistence
    // ============================================

    /// Check every section, with error paths rooted at the section index.
    pub fn validate(&self) -> Result<(), SectionError> {
        let errors: Vec<_> = self
            .sections
            .iter()
            .enumerate()
            .filter_map(|(i, section)| section.check().err().map(|e| e.prefixed(&format!("[{}]", i))))
            .flat_map(|e| e.errors)
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(errors).into())
        }
    }

    /// Replace the page with the sections in `json`; returns the count loaded.
    pub fn load_json(&mut self, json: &str) -> Result<usize, SectionError> {
        let sections = codec::from_json(json)?;
        let count = sections.len();
        self.sections = SectionList::from(sections);

        tracing::info!(count, "Sections loaded");
        Ok(count)
    }

    /// Serialize the page. Refuses to save while any section is invalid.
    pub fn save_json(&self) -> Result<String, SectionError> {
        if let Err(e) = self.validate() {
            tracing::warn!("Refusing to save invalid sections: {}", e);
            return Err(e);
        }

        let json = codec::to_json(self.sections.as_slice())?;
        tracing::info!(count = self.sections.len(), "Sections saved");
        Ok(json)
    }
}
