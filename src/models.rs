//! Section Data Models
//!
//! The closed set of page-building blocks a post or page is composed of.
//! Every struct deserializes with `#[serde(default)]`: missing optional
//! fields take the defaults below, missing required fields come through
//! empty and are rejected by [`ContentSection::check`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use crate::error::SectionError;

// ============================================
// Section Type Tag
// ============================================

/// Discriminator of [`ContentSection`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionType {
    Hero,
    Text,
    Image,
    Gallery,
    PopularPosts,
    Breadcrumb,
}

impl SectionType {
    pub const ALL: [SectionType; 6] = [
        SectionType::Hero,
        SectionType::Text,
        SectionType::Image,
        SectionType::Gallery,
        SectionType::PopularPosts,
        SectionType::Breadcrumb,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionType::Hero => "hero",
            SectionType::Text => "text",
            SectionType::Image => "image",
            SectionType::Gallery => "gallery",
            SectionType::PopularPosts => "popular-posts",
            SectionType::Breadcrumb => "breadcrumb",
        }
    }

    /// Label shown in the "add section" menu
    pub fn label(&self) -> &'static str {
        match self {
            SectionType::Hero => "Hero Section",
            SectionType::Text => "Text Block",
            SectionType::Image => "Image",
            SectionType::Gallery => "Image Gallery",
            SectionType::PopularPosts => "Popular Posts",
            SectionType::Breadcrumb => "Breadcrumb",
        }
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionType {
    type Err = SectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| SectionError::UnknownSectionType(s.to_string()))
    }
}

// ============================================
// Content Section
// ============================================

/// One typed block of a page composition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ContentSection {
    Hero(HeroSection),
    Text(TextSection),
    Image(ImageSection),
    Gallery(GallerySection),
    PopularPosts(PopularPostsSection),
    Breadcrumb(BreadcrumbSection),
}

impl ContentSection {
    pub fn section_type(&self) -> SectionType {
        match self {
            ContentSection::Hero(_) => SectionType::Hero,
            ContentSection::Text(_) => SectionType::Text,
            ContentSection::Image(_) => SectionType::Image,
            ContentSection::Gallery(_) => SectionType::Gallery,
            ContentSection::PopularPosts(_) => SectionType::PopularPosts,
            ContentSection::Breadcrumb(_) => SectionType::Breadcrumb,
        }
    }

    /// Media references held by this section, in display order
    pub fn media_references(&self) -> Vec<&str> {
        let references: Vec<&str> = match self {
            ContentSection::Hero(s) => vec![s.background_image.as_str()],
            ContentSection::Image(s) => vec![s.image.as_str()],
            ContentSection::Gallery(s) => s.images.iter().map(|i| i.url.as_str()).collect(),
            ContentSection::PopularPosts(s) => s
                .featured_post
                .iter()
                .map(|p| p.image_url.as_str())
                .chain(s.side_posts.iter().map(|p| p.image_url.as_str()))
                .collect(),
            ContentSection::Text(_) | ContentSection::Breadcrumb(_) => Vec::new(),
        };

        references.into_iter().filter(|r| !r.is_empty()).collect()
    }
}

// ============================================
// Shared Sub-objects
// ============================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnimationType {
    #[default]
    FadeIn,
    SlideUp,
    SlideDown,
    SlideLeft,
    SlideRight,
    ZoomIn,
}

/// Entrance animation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct Animation {
    pub enabled: bool,

    #[serde(rename = "type")]
    pub kind: AnimationType,

    #[validate(range(min = 0.1, max = 3.0, message = "Animation duration must be between 0.1 and 3 seconds"))]
    pub duration: f64,

    #[validate(range(min = 0.0, max = 2.0, message = "Animation delay must be between 0 and 2 seconds"))]
    pub delay: f64,
}

impl Default for Animation {
    fn default() -> Self {
        Self {
            enabled: true,
            kind: AnimationType::FadeIn,
            duration: 0.6,
            delay: 0.0,
        }
    }
}

// ============================================
// Hero
// ============================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Facebook,
    Twitter,
    Linkedin,
    Copy,
    Share,
}

impl SocialPlatform {
    pub fn as_str(&self) -> &'static str {
        match self {
            SocialPlatform::Facebook => "facebook",
            SocialPlatform::Twitter => "twitter",
            SocialPlatform::Linkedin => "linkedin",
            SocialPlatform::Copy => "copy",
            SocialPlatform::Share => "share",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SharePosition {
    Top,
    #[default]
    Bottom,
    Floating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareStyle {
    #[default]
    Icons,
    Buttons,
    Minimal,
}

/// Share buttons shown on a hero
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialSharing {
    pub enabled: bool,
    pub platforms: Vec<SocialPlatform>,
    pub position: SharePosition,
    pub style: ShareStyle,
}

impl Default for SocialSharing {
    fn default() -> Self {
        Self {
            enabled: false,
            platforms: vec![
                SocialPlatform::Facebook,
                SocialPlatform::Twitter,
                SocialPlatform::Linkedin,
                SocialPlatform::Copy,
            ],
            position: SharePosition::Bottom,
            style: ShareStyle::Icons,
        }
    }
}

/// Hero height per breakpoint (CSS lengths)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroHeight {
    pub mobile: String,
    pub tablet: String,
    pub desktop: String,
}

impl Default for HeroHeight {
    fn default() -> Self {
        Self {
            mobile: "60vh".into(),
            tablet: "70vh".into(),
            desktop: "80vh".into(),
        }
    }
}

/// Hero title size per breakpoint (utility classes)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroTitleSize {
    pub mobile: String,
    pub tablet: String,
    pub desktop: String,
}

impl Default for HeroTitleSize {
    fn default() -> Self {
        Self {
            mobile: "text-3xl".into(),
            tablet: "text-4xl".into(),
            desktop: "text-5xl".into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundPosition {
    #[default]
    Center,
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundSize {
    #[default]
    Cover,
    Contain,
    Auto,
}

/// Full-width header image with title and post metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroSection {
    #[validate(length(min = 1, message = "Background image is required"))]
    pub background_image: String,

    #[validate(length(max = 200, message = "Title must be at most 200 characters"))]
    pub title: String,

    pub subtitle: Option<String>,
    pub author: Option<String>,
    pub publish_date: Option<String>,
    pub read_time: Option<String>,

    #[validate(range(min = 0.0, max = 1.0, message = "Overlay opacity must be between 0 and 1"))]
    pub overlay_opacity: f64,

    pub height: HeroHeight,
    pub title_size: HeroTitleSize,

    pub parallax: bool,

    #[validate(range(min = 0.0, max = 2.0, message = "Parallax speed must be between 0 and 2"))]
    pub parallax_speed: f64,

    pub background_position: BackgroundPosition,
    pub background_size: BackgroundSize,
    pub animation: Animation,
    pub social_sharing: SocialSharing,
}

impl Default for HeroSection {
    fn default() -> Self {
        Self {
            background_image: String::new(),
            title: String::new(),
            subtitle: None,
            author: None,
            publish_date: None,
            read_time: None,
            overlay_opacity: 0.4,
            height: HeroHeight::default(),
            title_size: HeroTitleSize::default(),
            parallax: false,
            parallax_speed: 0.5,
            background_position: BackgroundPosition::Center,
            background_size: BackgroundSize::Cover,
            animation: Animation::default(),
            social_sharing: SocialSharing::default(),
        }
    }
}

// ============================================
// Text
// ============================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Sm,
    #[default]
    Base,
    Lg,
    Xl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    Sans,
    #[default]
    Serif,
    Mono,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineHeight {
    Tight,
    Normal,
    #[default]
    Relaxed,
    Loose,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropCapSize {
    Small,
    #[default]
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Normal,
    Semibold,
    #[default]
    Bold,
}

lazy_static::lazy_static! {
    static ref CSS_COLOR: Option<regex::Regex> = regex::Regex::new(
        r"^(#([0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})|[a-zA-Z]{3,20}|(rgb|rgba|hsl|hsla)\([0-9.,%\s/]+\))$"
    )
    .ok();
}

/// Whether `value` is a hex, named, or `rgb()`/`hsl()` CSS color.
pub fn is_css_color(value: &str) -> bool {
    CSS_COLOR
        .as_ref()
        .map(|re| re.is_match(value.trim()))
        .unwrap_or(false)
}

/// Enlarged first letter of a paragraph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct DropCap {
    pub enabled: bool,
    pub size: DropCapSize,

    #[validate(length(min = 1, message = "Drop cap color is required"))]
    pub color: String,

    pub font_weight: FontWeight,
    pub float: bool,
}

impl Default for DropCap {
    fn default() -> Self {
        Self {
            enabled: false,
            size: DropCapSize::Medium,
            color: "#1f2937".into(),
            font_weight: FontWeight::Bold,
            float: true,
        }
    }
}

/// Body copy block
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct TextSection {
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,

    pub alignment: TextAlignment,
    pub font_size: FontSize,
    pub font_family: FontFamily,
    pub line_height: LineHeight,
    pub drop_cap: DropCap,
    pub animation: Animation,
}

// ============================================
// Image
// ============================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageAlignment {
    Left,
    #[default]
    Center,
    Right,
    Full,
}

/// Single image with optional caption
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageSection {
    #[validate(length(min = 1, message = "Image is required"))]
    pub image: String,

    pub alt_text: Option<String>,
    pub caption: Option<String>,

    #[validate(range(min = 1, max = 10000, message = "Width must be between 1 and 10000 pixels"))]
    pub width: Option<i64>,

    #[validate(range(min = 1, max = 10000, message = "Height must be between 1 and 10000 pixels"))]
    pub height: Option<i64>,

    pub alignment: ImageAlignment,
    pub rounded: bool,
    pub shadow: bool,
}

impl Default for ImageSection {
    fn default() -> Self {
        Self {
            image: String::new(),
            alt_text: None,
            caption: None,
            width: None,
            height: None,
            alignment: ImageAlignment::Center,
            rounded: true,
            shadow: false,
        }
    }
}

// ============================================
// Gallery
// ============================================

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleryImage {
    #[validate(length(min = 1, message = "Image URL is required"))]
    pub url: String,

    pub alt_text: Option<String>,
    pub caption: Option<String>,

    #[validate(range(min = 1, max = 10000, message = "Width must be between 1 and 10000 pixels"))]
    pub width: Option<i64>,

    #[validate(range(min = 1, max = 10000, message = "Height must be between 1 and 10000 pixels"))]
    pub height: Option<i64>,
}

impl GalleryImage {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryLayout {
    #[default]
    Grid,
    Masonry,
    Carousel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spacing {
    None,
    Small,
    #[default]
    Medium,
    Large,
}

/// Per-breakpoint override; `None` inherits the section value.
///
/// Integer fields are wide so an out-of-range value reaches the range
/// check and is reported on its own path.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ResponsiveOverride {
    #[validate(range(min = 1, max = 6, message = "Columns must be between 1 and 6"))]
    pub columns: Option<i64>,

    pub spacing: Option<Spacing>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleryResponsive {
    pub mobile: ResponsiveOverride,
    pub desktop: ResponsiveOverride,
}

impl Default for GalleryResponsive {
    fn default() -> Self {
        Self {
            mobile: ResponsiveOverride {
                columns: Some(1),
                spacing: Some(Spacing::Small),
            },
            desktop: ResponsiveOverride {
                columns: Some(3),
                spacing: Some(Spacing::Medium),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HoverEffect {
    #[default]
    Zoom,
    Fade,
    Lift,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HoverEffects {
    pub enabled: bool,
    pub effect: HoverEffect,
    pub show_caption: bool,
}

impl Default for HoverEffects {
    fn default() -> Self {
        Self {
            enabled: true,
            effect: HoverEffect::Zoom,
            show_caption: true,
        }
    }
}

/// Grid, masonry or carousel of images
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct GallerySection {
    #[validate(length(min = 1, message = "At least one image is required"))]
    pub images: Vec<GalleryImage>,

    pub layout: GalleryLayout,

    #[validate(range(min = 1, max = 6, message = "Columns must be between 1 and 6"))]
    pub columns: i64,

    pub spacing: Spacing,
    pub responsive: GalleryResponsive,
    pub hover_effects: HoverEffects,
    pub animation: Animation,
}

impl Default for GallerySection {
    fn default() -> Self {
        Self {
            images: Vec::new(),
            layout: GalleryLayout::Grid,
            columns: 3,
            spacing: Spacing::Medium,
            responsive: GalleryResponsive::default(),
            hover_effects: HoverEffects::default(),
            animation: Animation::default(),
        }
    }
}

// ============================================
// Popular Posts
// ============================================

/// Maximum number of side posts next to the featured post
pub const MAX_SIDE_POSTS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeaturedPost {
    pub title: String,
    pub excerpt: String,
    pub image_url: String,
    pub read_time: String,
    pub publish_date: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SidePost {
    pub title: String,
    pub excerpt: String,
    pub image_url: String,
    pub read_time: String,
    pub publish_date: String,
}

/// One featured post plus up to three side posts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct PopularPostsSection {
    #[validate(length(max = 200, message = "Title must be at most 200 characters"))]
    pub title: String,

    pub description: Option<String>,
    pub featured_post: Option<FeaturedPost>,

    #[validate(length(max = 3, message = "At most 3 side posts are allowed"))]
    pub side_posts: Vec<SidePost>,
}

impl Default for PopularPostsSection {
    fn default() -> Self {
        Self {
            title: "Popular Posts".into(),
            description: None,
            featured_post: None,
            side_posts: Vec::new(),
        }
    }
}

// ============================================
// Breadcrumb
// ============================================

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct BreadcrumbItem {
    #[validate(length(min = 1, message = "Label is required"))]
    pub label: String,

    pub href: Option<String>,
}

impl BreadcrumbItem {
    pub fn new(label: impl Into<String>, href: Option<&str>) -> Self {
        Self {
            label: label.into(),
            href: href.map(String::from),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Separator {
    #[default]
    #[serde(rename = ">")]
    Chevron,
    #[serde(rename = "→")]
    Arrow,
    #[serde(rename = "|")]
    Pipe,
    #[serde(rename = "/")]
    Slash,
}

impl Separator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Separator::Chevron => ">",
            Separator::Arrow => "→",
            Separator::Pipe => "|",
            Separator::Slash => "/",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSize {
    #[default]
    Sm,
    Base,
    Lg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreadcrumbColor {
    #[default]
    Gray,
    Primary,
    Dark,
    Light,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BreadcrumbStyle {
    pub separator: Separator,
    pub text_size: TextSize,
    pub show_home_icon: bool,
    pub color: BreadcrumbColor,
}

impl Default for BreadcrumbStyle {
    fn default() -> Self {
        Self {
            separator: Separator::Chevron,
            text_size: TextSize::Sm,
            show_home_icon: true,
            color: BreadcrumbColor::Gray,
        }
    }
}

/// Navigation trail rendered above the content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct BreadcrumbSection {
    pub enabled: bool,

    #[validate(length(min = 1, message = "At least one breadcrumb item is required"))]
    pub items: Vec<BreadcrumbItem>,

    pub style: BreadcrumbStyle,
}

impl Default for BreadcrumbSection {
    fn default() -> Self {
        Self {
            enabled: true,
            items: Vec::new(),
            style: BreadcrumbStyle::default(),
        }
    }
}

// ============================================
// Media Library
// ============================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
}

/// Uploaded file owned by the media library
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaAsset {
    pub id: String,
    pub url: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    #[serde(rename = "sizeKB")]
    pub size_kb: f64,
    pub filename: String,
    pub uploaded_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_type_round_trip() {
        for t in SectionType::ALL {
            assert_eq!(t.as_str().parse::<SectionType>().unwrap(), t);
        }
        assert!(matches!(
            "carousel".parse::<SectionType>(),
            Err(SectionError::UnknownSectionType(ref s)) if s == "carousel"
        ));
    }

    #[test]
    fn test_tagged_serialization() {
        let section = ContentSection::PopularPosts(PopularPostsSection::default());
        let json = serde_json::to_value(&section).unwrap();
        assert_eq!(json["type"], "popular-posts");
        assert_eq!(json["title"], "Popular Posts");
        assert_eq!(json["sidePosts"], serde_json::json!([]));
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let hero: HeroSection =
            serde_json::from_value(serde_json::json!({ "title": "Lisbon" })).unwrap();
        assert_eq!(hero.title, "Lisbon");
        assert_eq!(hero.overlay_opacity, 0.4);
        assert_eq!(hero.height.desktop, "80vh");
        assert_eq!(hero.title_size.desktop, "text-5xl");
        assert!(hero.background_image.is_empty());
    }

    #[test]
    fn test_separator_wire_names() {
        let style: BreadcrumbStyle =
            serde_json::from_value(serde_json::json!({ "separator": "→" })).unwrap();
        assert_eq!(style.separator, Separator::Arrow);
        assert!(style.show_home_icon);
    }

    #[test]
    fn test_media_asset_wire_names() {
        let asset: MediaAsset = serde_json::from_value(serde_json::json!({
            "id": "m1",
            "url": "/uploads/porto.jpg",
            "type": "image",
            "sizeKB": 245.5,
            "filename": "porto.jpg",
            "uploadedAt": "2024-03-01T10:00:00Z"
        }))
        .unwrap();
        assert_eq!(asset.media_type, MediaType::Image);
        assert_eq!(asset.size_kb, 245.5);
    }

    #[test]
    fn test_media_references_skip_empty() {
        let section = ContentSection::Gallery(GallerySection {
            images: vec![GalleryImage::new("a.jpg"), GalleryImage::new("")],
            ..GallerySection::default()
        });
        assert_eq!(section.media_references(), vec!["a.jpg"]);
    }
}
