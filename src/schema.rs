//! Section Schema
//!
//! Factory and validation for [`ContentSection`]. Validation is total over
//! the six variants: an unknown tag is rejected, never passed through.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashSet;
use validator::Validate;

use crate::error::{collect_validator_errors, FieldError, SectionError, ValidationError};
use crate::models::*;

/// Placeholder image used when no configuration is supplied
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "/images/placeholder.jpg";

/// Create a fully defaulted, valid section of the given type.
pub fn create_section(section_type: SectionType) -> ContentSection {
    create_section_with(section_type, DEFAULT_PLACEHOLDER_IMAGE)
}

/// Like [`create_section`], with the image given to sections that require one.
pub fn create_section_with(section_type: SectionType, placeholder_image: &str) -> ContentSection {
    match section_type {
        SectionType::Hero => ContentSection::Hero(HeroSection {
            background_image: placeholder_image.to_string(),
            title: "Your Hero Title".into(),
            subtitle: Some("Add a subtitle to set the scene".into()),
            ..HeroSection::default()
        }),
        SectionType::Text => ContentSection::Text(TextSection {
            content: "Start writing your content here...".into(),
            ..TextSection::default()
        }),
        SectionType::Image => ContentSection::Image(ImageSection {
            image: placeholder_image.to_string(),
            ..ImageSection::default()
        }),
        SectionType::Gallery => ContentSection::Gallery(GallerySection {
            images: vec![GalleryImage {
                url: placeholder_image.to_string(),
                alt_text: Some("Gallery image".into()),
                ..GalleryImage::default()
            }],
            ..GallerySection::default()
        }),
        SectionType::PopularPosts => ContentSection::PopularPosts(PopularPostsSection::default()),
        SectionType::Breadcrumb => ContentSection::Breadcrumb(BreadcrumbSection {
            items: vec![BreadcrumbItem::new("Home", Some("/"))],
            ..BreadcrumbSection::default()
        }),
    }
}

/// Validate untyped input against the expected section type.
///
/// Returns the normalized section with defaults applied to every missing
/// optional field, or every violated rule with its field path.
pub fn validate_section(value: &Value, expected_type: &str) -> Result<ContentSection, SectionError> {
    let section_type: SectionType = expected_type.parse()?;

    let object = value
        .as_object()
        .ok_or_else(|| ValidationError::single("", "Section must be a JSON object"))?;

    if let Some(tag) = object.get("type") {
        match tag.as_str() {
            Some(found) if found == section_type.as_str() => {}
            Some(found) => {
                return Err(ValidationError::single(
                    "type",
                    format!("Expected a '{}' section, found '{}'", section_type, found),
                )
                .into())
            }
            None => {
                return Err(ValidationError::single("type", "Section type must be a string").into())
            }
        }
    }

    let section = match section_type {
        SectionType::Hero => ContentSection::Hero(decode(value)?),
        SectionType::Text => ContentSection::Text(decode(value)?),
        SectionType::Image => ContentSection::Image(decode(value)?),
        SectionType::Gallery => ContentSection::Gallery(decode(value)?),
        SectionType::PopularPosts => ContentSection::PopularPosts(decode(value)?),
        SectionType::Breadcrumb => ContentSection::Breadcrumb(decode(value)?),
    };

    section.check()?;
    Ok(section)
}

/// Validate input that carries its own `type` tag.
pub fn parse_section(value: &Value) -> Result<ContentSection, SectionError> {
    let tag = value
        .get("type")
        .ok_or_else(|| ValidationError::single("type", "Section type is required"))?
        .as_str()
        .ok_or_else(|| ValidationError::single("type", "Section type must be a string"))?;

    validate_section(value, tag)
}

fn decode<T: DeserializeOwned>(value: &Value) -> Result<T, ValidationError> {
    serde::Deserialize::deserialize(value)
        .map_err(|e| ValidationError::single("", format!("Malformed section data: {}", e)))
}

impl ContentSection {
    /// Check every schema rule of this section.
    pub fn check(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();

        match self {
            ContentSection::Hero(s) => hero_errors(s, &mut errors),
            ContentSection::Text(s) => text_errors(s, &mut errors),
            ContentSection::Image(s) => collect_validator_errors("", s.validate(), &mut errors),
            ContentSection::Gallery(s) => gallery_errors(s, &mut errors),
            ContentSection::PopularPosts(s) => {
                collect_validator_errors("", s.validate(), &mut errors)
            }
            ContentSection::Breadcrumb(s) => breadcrumb_errors(s, &mut errors),
        }

        if errors.is_empty() {
            Ok(())
        } else {
            errors.sort_by(|a, b| a.path.cmp(&b.path));
            Err(ValidationError::new(errors))
        }
    }

    pub fn is_valid(&self) -> bool {
        self.check().is_ok()
    }
}

fn hero_errors(hero: &HeroSection, out: &mut Vec<FieldError>) {
    collect_validator_errors("", hero.validate(), out);
    collect_validator_errors("animation", hero.animation.validate(), out);

    if hero.title.is_empty() {
        out.push(FieldError::new("title", "Title is required"));
    }

    let mut seen = HashSet::new();
    for platform in &hero.social_sharing.platforms {
        if !seen.insert(platform) {
            out.push(FieldError::new(
                "socialSharing.platforms",
                format!("Platform '{}' is listed more than once", platform.as_str()),
            ));
        }
    }
}

fn text_errors(text: &TextSection, out: &mut Vec<FieldError>) {
    collect_validator_errors("", text.validate(), out);
    collect_validator_errors("dropCap", text.drop_cap.validate(), out);
    if !text.drop_cap.color.is_empty() && !is_css_color(&text.drop_cap.color) {
        out.push(FieldError::new("dropCap.color", "Drop cap color must be a CSS color"));
    }
    collect_validator_errors("animation", text.animation.validate(), out);
}

fn gallery_errors(gallery: &GallerySection, out: &mut Vec<FieldError>) {
    collect_validator_errors("", gallery.validate(), out);
    for (i, image) in gallery.images.iter().enumerate() {
        collect_validator_errors(&format!("images[{}]", i), image.validate(), out);
    }
    collect_validator_errors("responsive.mobile", gallery.responsive.mobile.validate(), out);
    collect_validator_errors("responsive.desktop", gallery.responsive.desktop.validate(), out);
    collect_validator_errors("animation", gallery.animation.validate(), out);
}

fn breadcrumb_errors(breadcrumb: &BreadcrumbSection, out: &mut Vec<FieldError>) {
    collect_validator_errors("", breadcrumb.validate(), out);
    for (i, item) in breadcrumb.items.iter().enumerate() {
        collect_validator_errors(&format!("items[{}]", i), item.validate(), out);
    }
}
