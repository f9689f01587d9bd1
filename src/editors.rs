//! Section Editors
//!
//! Partial updates for every section variant. A patch names only the fields
//! being changed; nested sub-objects (animation, drop cap, social sharing,
//! responsive settings, hover effects, breadcrumb style) are merged field by
//! field, so changing `animation.duration` keeps the rest of `animation`.
//!
//! Optional text fields can be cleared by sending an explicit `null`.
//!
//! List-valued fields are never replaced through a patch. They go through
//! [`ListEdit`], which applies the same bounds checks as the section store
//! plus the minimum/maximum length guards of the editing UI.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{SectionError, ValidationError};
use crate::models::*;
use crate::store;

/// Keeps an explicit `null` apart from an absent field.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

fn set<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

fn merge_nested<T: Merge>(slot: &mut T, patch: Option<T::Patch>) {
    if let Some(patch) = patch {
        slot.merge(patch);
    }
}

/// Field-by-field merge of a partial update
pub trait Merge {
    type Patch;

    fn merge(&mut self, patch: Self::Patch);

    /// Non-destructive form of [`Merge::merge`].
    fn merged(&self, patch: Self::Patch) -> Self
    where
        Self: Clone,
    {
        let mut next = self.clone();
        next.merge(patch);
        next
    }
}

// ============================================
// Shared Sub-object Patches
// ============================================

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnimationPatch {
    pub enabled: Option<bool>,
    #[serde(rename = "type")]
    pub kind: Option<AnimationType>,
    pub duration: Option<f64>,
    pub delay: Option<f64>,
}

impl Merge for Animation {
    type Patch = AnimationPatch;

    fn merge(&mut self, patch: AnimationPatch) {
        set(&mut self.enabled, patch.enabled);
        set(&mut self.kind, patch.kind);
        set(&mut self.duration, patch.duration);
        set(&mut self.delay, patch.delay);
    }
}

/// Mobile/tablet/desktop values of the hero height and title size
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ResponsiveSizesPatch {
    pub mobile: Option<String>,
    pub tablet: Option<String>,
    pub desktop: Option<String>,
}

impl Merge for HeroHeight {
    type Patch = ResponsiveSizesPatch;

    fn merge(&mut self, patch: ResponsiveSizesPatch) {
        set(&mut self.mobile, patch.mobile);
        set(&mut self.tablet, patch.tablet);
        set(&mut self.desktop, patch.desktop);
    }
}

impl Merge for HeroTitleSize {
    type Patch = ResponsiveSizesPatch;

    fn merge(&mut self, patch: ResponsiveSizesPatch) {
        set(&mut self.mobile, patch.mobile);
        set(&mut self.tablet, patch.tablet);
        set(&mut self.desktop, patch.desktop);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialSharingPatch {
    pub enabled: Option<bool>,
    pub platforms: Option<Vec<SocialPlatform>>,
    pub position: Option<SharePosition>,
    pub style: Option<ShareStyle>,
}

impl Merge for SocialSharing {
    type Patch = SocialSharingPatch;

    fn merge(&mut self, patch: SocialSharingPatch) {
        set(&mut self.enabled, patch.enabled);
        set(&mut self.platforms, patch.platforms);
        set(&mut self.position, patch.position);
        set(&mut self.style, patch.style);
    }
}

// ============================================
// Variant Patches
// ============================================

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroPatch {
    pub background_image: Option<String>,
    pub title: Option<String>,
    #[serde(deserialize_with = "double_option")]
    pub subtitle: Option<Option<String>>,
    #[serde(deserialize_with = "double_option")]
    pub author: Option<Option<String>>,
    #[serde(deserialize_with = "double_option")]
    pub publish_date: Option<Option<String>>,
    #[serde(deserialize_with = "double_option")]
    pub read_time: Option<Option<String>>,
    pub overlay_opacity: Option<f64>,
    pub height: Option<ResponsiveSizesPatch>,
    pub title_size: Option<ResponsiveSizesPatch>,
    pub parallax: Option<bool>,
    pub parallax_speed: Option<f64>,
    pub background_position: Option<BackgroundPosition>,
    pub background_size: Option<BackgroundSize>,
    pub animation: Option<AnimationPatch>,
    pub social_sharing: Option<SocialSharingPatch>,
}

impl Merge for HeroSection {
    type Patch = HeroPatch;

    fn merge(&mut self, patch: HeroPatch) {
        set(&mut self.background_image, patch.background_image);
        set(&mut self.title, patch.title);
        set(&mut self.subtitle, patch.subtitle);
        set(&mut self.author, patch.author);
        set(&mut self.publish_date, patch.publish_date);
        set(&mut self.read_time, patch.read_time);
        set(&mut self.overlay_opacity, patch.overlay_opacity);
        merge_nested(&mut self.height, patch.height);
        merge_nested(&mut self.title_size, patch.title_size);
        set(&mut self.parallax, patch.parallax);
        set(&mut self.parallax_speed, patch.parallax_speed);
        set(&mut self.background_position, patch.background_position);
        set(&mut self.background_size, patch.background_size);
        merge_nested(&mut self.animation, patch.animation);
        merge_nested(&mut self.social_sharing, patch.social_sharing);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DropCapPatch {
    pub enabled: Option<bool>,
    pub size: Option<DropCapSize>,
    pub color: Option<String>,
    pub font_weight: Option<FontWeight>,
    pub float: Option<bool>,
}

impl Merge for DropCap {
    type Patch = DropCapPatch;

    fn merge(&mut self, patch: DropCapPatch) {
        set(&mut self.enabled, patch.enabled);
        set(&mut self.size, patch.size);
        set(&mut self.color, patch.color);
        set(&mut self.font_weight, patch.font_weight);
        set(&mut self.float, patch.float);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextPatch {
    pub content: Option<String>,
    pub alignment: Option<TextAlignment>,
    pub font_size: Option<FontSize>,
    pub font_family: Option<FontFamily>,
    pub line_height: Option<LineHeight>,
    pub drop_cap: Option<DropCapPatch>,
    pub animation: Option<AnimationPatch>,
}

impl Merge for TextSection {
    type Patch = TextPatch;

    fn merge(&mut self, patch: TextPatch) {
        set(&mut self.content, patch.content);
        set(&mut self.alignment, patch.alignment);
        set(&mut self.font_size, patch.font_size);
        set(&mut self.font_family, patch.font_family);
        set(&mut self.line_height, patch.line_height);
        merge_nested(&mut self.drop_cap, patch.drop_cap);
        merge_nested(&mut self.animation, patch.animation);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImagePatch {
    pub image: Option<String>,
    #[serde(deserialize_with = "double_option")]
    pub alt_text: Option<Option<String>>,
    #[serde(deserialize_with = "double_option")]
    pub caption: Option<Option<String>>,
    #[serde(deserialize_with = "double_option")]
    pub width: Option<Option<i64>>,
    #[serde(deserialize_with = "double_option")]
    pub height: Option<Option<i64>>,
    pub alignment: Option<ImageAlignment>,
    pub rounded: Option<bool>,
    pub shadow: Option<bool>,
}

impl Merge for ImageSection {
    type Patch = ImagePatch;

    fn merge(&mut self, patch: ImagePatch) {
        set(&mut self.image, patch.image);
        set(&mut self.alt_text, patch.alt_text);
        set(&mut self.caption, patch.caption);
        set(&mut self.width, patch.width);
        set(&mut self.height, patch.height);
        set(&mut self.alignment, patch.alignment);
        set(&mut self.rounded, patch.rounded);
        set(&mut self.shadow, patch.shadow);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResponsiveOverridePatch {
    #[serde(deserialize_with = "double_option")]
    pub columns: Option<Option<i64>>,
    #[serde(deserialize_with = "double_option")]
    pub spacing: Option<Option<Spacing>>,
}

impl Merge for ResponsiveOverride {
    type Patch = ResponsiveOverridePatch;

    fn merge(&mut self, patch: ResponsiveOverridePatch) {
        set(&mut self.columns, patch.columns);
        set(&mut self.spacing, patch.spacing);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GalleryResponsivePatch {
    pub mobile: Option<ResponsiveOverridePatch>,
    pub desktop: Option<ResponsiveOverridePatch>,
}

impl Merge for GalleryResponsive {
    type Patch = GalleryResponsivePatch;

    fn merge(&mut self, patch: GalleryResponsivePatch) {
        merge_nested(&mut self.mobile, patch.mobile);
        merge_nested(&mut self.desktop, patch.desktop);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HoverEffectsPatch {
    pub enabled: Option<bool>,
    pub effect: Option<HoverEffect>,
    pub show_caption: Option<bool>,
}

impl Merge for HoverEffects {
    type Patch = HoverEffectsPatch;

    fn merge(&mut self, patch: HoverEffectsPatch) {
        set(&mut self.enabled, patch.enabled);
        set(&mut self.effect, patch.effect);
        set(&mut self.show_caption, patch.show_caption);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleryPatch {
    pub layout: Option<GalleryLayout>,
    pub columns: Option<i64>,
    pub spacing: Option<Spacing>,
    pub responsive: Option<GalleryResponsivePatch>,
    pub hover_effects: Option<HoverEffectsPatch>,
    pub animation: Option<AnimationPatch>,
}

impl Merge for GallerySection {
    type Patch = GalleryPatch;

    fn merge(&mut self, patch: GalleryPatch) {
        set(&mut self.layout, patch.layout);
        set(&mut self.columns, patch.columns);
        set(&mut self.spacing, patch.spacing);
        merge_nested(&mut self.responsive, patch.responsive);
        merge_nested(&mut self.hover_effects, patch.hover_effects);
        merge_nested(&mut self.animation, patch.animation);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PopularPostsPatch {
    pub title: Option<String>,
    #[serde(deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(deserialize_with = "double_option")]
    pub featured_post: Option<Option<FeaturedPost>>,
}

impl Merge for PopularPostsSection {
    type Patch = PopularPostsPatch;

    fn merge(&mut self, patch: PopularPostsPatch) {
        set(&mut self.title, patch.title);
        set(&mut self.description, patch.description);
        set(&mut self.featured_post, patch.featured_post);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BreadcrumbStylePatch {
    pub separator: Option<Separator>,
    pub text_size: Option<TextSize>,
    pub show_home_icon: Option<bool>,
    pub color: Option<BreadcrumbColor>,
}

impl Merge for BreadcrumbStyle {
    type Patch = BreadcrumbStylePatch;

    fn merge(&mut self, patch: BreadcrumbStylePatch) {
        set(&mut self.separator, patch.separator);
        set(&mut self.text_size, patch.text_size);
        set(&mut self.show_home_icon, patch.show_home_icon);
        set(&mut self.color, patch.color);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BreadcrumbPatch {
    pub enabled: Option<bool>,
    pub style: Option<BreadcrumbStylePatch>,
}

impl Merge for BreadcrumbSection {
    type Patch = BreadcrumbPatch;

    fn merge(&mut self, patch: BreadcrumbPatch) {
        set(&mut self.enabled, patch.enabled);
        merge_nested(&mut self.style, patch.style);
    }
}

// ============================================
// Section Patch
// ============================================

/// Partial update for one section, tagged like [`ContentSection`]
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum SectionPatch {
    Hero(HeroPatch),
    Text(TextPatch),
    Image(ImagePatch),
    Gallery(GalleryPatch),
    PopularPosts(PopularPostsPatch),
    Breadcrumb(BreadcrumbPatch),
}

impl SectionPatch {
    pub fn section_type(&self) -> SectionType {
        match self {
            SectionPatch::Hero(_) => SectionType::Hero,
            SectionPatch::Text(_) => SectionType::Text,
            SectionPatch::Image(_) => SectionType::Image,
            SectionPatch::Gallery(_) => SectionType::Gallery,
            SectionPatch::PopularPosts(_) => SectionType::PopularPosts,
            SectionPatch::Breadcrumb(_) => SectionType::Breadcrumb,
        }
    }

    /// Read an untagged partial object as a patch for `section_type`.
    pub fn from_value(section_type: SectionType, value: &Value) -> Result<Self, SectionError> {
        fn decode<T: serde::de::DeserializeOwned>(value: &Value) -> Result<T, SectionError> {
            Deserialize::deserialize(value).map_err(|e| {
                ValidationError::single("", format!("Malformed section update: {}", e)).into()
            })
        }

        Ok(match section_type {
            SectionType::Hero => SectionPatch::Hero(decode(value)?),
            SectionType::Text => SectionPatch::Text(decode(value)?),
            SectionType::Image => SectionPatch::Image(decode(value)?),
            SectionType::Gallery => SectionPatch::Gallery(decode(value)?),
            SectionType::PopularPosts => SectionPatch::PopularPosts(decode(value)?),
            SectionType::Breadcrumb => SectionPatch::Breadcrumb(decode(value)?),
        })
    }
}

fn mismatch(section: &ContentSection, found: SectionType) -> SectionError {
    SectionError::VariantMismatch {
        expected: section.section_type().to_string(),
        found: found.to_string(),
    }
}

/// Merge `patch` into a copy of `section`.
///
/// The result is not re-validated; sections may pass through invalid states
/// while being edited and are checked when the page is saved.
pub fn apply_patch(section: &ContentSection, patch: SectionPatch) -> Result<ContentSection, SectionError> {
    let found = patch.section_type();
    let mut next = section.clone();

    match (&mut next, patch) {
        (ContentSection::Hero(s), SectionPatch::Hero(p)) => s.merge(p),
        (ContentSection::Text(s), SectionPatch::Text(p)) => s.merge(p),
        (ContentSection::Image(s), SectionPatch::Image(p)) => s.merge(p),
        (ContentSection::Gallery(s), SectionPatch::Gallery(p)) => s.merge(p),
        (ContentSection::PopularPosts(s), SectionPatch::PopularPosts(p)) => s.merge(p),
        (ContentSection::Breadcrumb(s), SectionPatch::Breadcrumb(p)) => s.merge(p),
        _ => return Err(mismatch(section, found)),
    }

    Ok(next)
}

// ============================================
// List Item Patches
// ============================================

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleryImagePatch {
    pub url: Option<String>,
    #[serde(deserialize_with = "double_option")]
    pub alt_text: Option<Option<String>>,
    #[serde(deserialize_with = "double_option")]
    pub caption: Option<Option<String>>,
    #[serde(deserialize_with = "double_option")]
    pub width: Option<Option<i64>>,
    #[serde(deserialize_with = "double_option")]
    pub height: Option<Option<i64>>,
}

impl Merge for GalleryImage {
    type Patch = GalleryImagePatch;

    fn merge(&mut self, patch: GalleryImagePatch) {
        set(&mut self.url, patch.url);
        set(&mut self.alt_text, patch.alt_text);
        set(&mut self.caption, patch.caption);
        set(&mut self.width, patch.width);
        set(&mut self.height, patch.height);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BreadcrumbItemPatch {
    pub label: Option<String>,
    #[serde(deserialize_with = "double_option")]
    pub href: Option<Option<String>>,
}

impl Merge for BreadcrumbItem {
    type Patch = BreadcrumbItemPatch;

    fn merge(&mut self, patch: BreadcrumbItemPatch) {
        set(&mut self.label, patch.label);
        set(&mut self.href, patch.href);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SidePostPatch {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub image_url: Option<String>,
    pub read_time: Option<String>,
    pub publish_date: Option<String>,
}

impl Merge for SidePost {
    type Patch = SidePostPatch;

    fn merge(&mut self, patch: SidePostPatch) {
        set(&mut self.title, patch.title);
        set(&mut self.excerpt, patch.excerpt);
        set(&mut self.image_url, patch.image_url);
        set(&mut self.read_time, patch.read_time);
        set(&mut self.publish_date, patch.publish_date);
    }
}

fn update_item<T: Merge + Clone>(items: &[T], index: usize, patch: T::Patch) -> Result<Vec<T>, SectionError> {
    let current = items
        .get(index)
        .ok_or(SectionError::IndexOutOfRange { index, len: items.len() })?;
    store::replace_at(items, index, current.merged(patch))
}

/// Remove unless the list is already at `min` entries.
fn remove_guarded<T: Clone>(items: &[T], index: usize, min: usize) -> Result<Vec<T>, SectionError> {
    if index >= items.len() {
        return store::remove_at(items, index);
    }
    if items.len() <= min {
        tracing::debug!(index, len = items.len(), "Removal ignored at minimum length");
        return Ok(items.to_vec());
    }
    store::remove_at(items, index)
}

// ============================================
// List Operations
// ============================================

impl GallerySection {
    pub fn add_image(&self, image: GalleryImage) -> Self {
        Self {
            images: store::append(&self.images, image),
            ..self.clone()
        }
    }

    pub fn update_image(&self, index: usize, patch: GalleryImagePatch) -> Result<Self, SectionError> {
        Ok(Self {
            images: update_item(&self.images, index, patch)?,
            ..self.clone()
        })
    }

    /// Removing the only image leaves the gallery unchanged.
    pub fn remove_image(&self, index: usize) -> Result<Self, SectionError> {
        Ok(Self {
            images: remove_guarded(&self.images, index, 1)?,
            ..self.clone()
        })
    }

    pub fn move_image(&self, from: usize, to: usize) -> Result<Self, SectionError> {
        Ok(Self {
            images: store::move_to(&self.images, from, to)?,
            ..self.clone()
        })
    }
}

impl BreadcrumbSection {
    pub fn add_item(&self, item: BreadcrumbItem) -> Self {
        Self {
            items: store::append(&self.items, item),
            ..self.clone()
        }
    }

    pub fn update_item(&self, index: usize, patch: BreadcrumbItemPatch) -> Result<Self, SectionError> {
        Ok(Self {
            items: update_item(&self.items, index, patch)?,
            ..self.clone()
        })
    }

    /// Removing the only item leaves the trail unchanged.
    pub fn remove_item(&self, index: usize) -> Result<Self, SectionError> {
        Ok(Self {
            items: remove_guarded(&self.items, index, 1)?,
            ..self.clone()
        })
    }
}

impl PopularPostsSection {
    /// Adding past [`MAX_SIDE_POSTS`] leaves the section unchanged.
    pub fn add_side_post(&self, post: SidePost) -> Self {
        if self.side_posts.len() >= MAX_SIDE_POSTS {
            tracing::debug!(len = self.side_posts.len(), "Side post ignored at capacity");
            return self.clone();
        }
        Self {
            side_posts: store::append(&self.side_posts, post),
            ..self.clone()
        }
    }

    pub fn update_side_post(&self, index: usize, patch: SidePostPatch) -> Result<Self, SectionError> {
        Ok(Self {
            side_posts: update_item(&self.side_posts, index, patch)?,
            ..self.clone()
        })
    }

    pub fn remove_side_post(&self, index: usize) -> Result<Self, SectionError> {
        Ok(Self {
            side_posts: store::remove_at(&self.side_posts, index)?,
            ..self.clone()
        })
    }

    pub fn set_featured_post(&self, post: FeaturedPost) -> Self {
        Self {
            featured_post: Some(post),
            ..self.clone()
        }
    }

    pub fn clear_featured_post(&self) -> Self {
        Self {
            featured_post: None,
            ..self.clone()
        }
    }
}

/// Edit of a list-valued field inside a section
#[derive(Debug, Clone, PartialEq)]
pub enum ListEdit {
    AddImage(GalleryImage),
    UpdateImage(usize, GalleryImagePatch),
    RemoveImage(usize),
    MoveImage { from: usize, to: usize },
    AddItem(BreadcrumbItem),
    UpdateItem(usize, BreadcrumbItemPatch),
    RemoveItem(usize),
    AddSidePost(SidePost),
    UpdateSidePost(usize, SidePostPatch),
    RemoveSidePost(usize),
    SetFeaturedPost(FeaturedPost),
    ClearFeaturedPost,
}

impl ListEdit {
    /// The section variant this edit applies to
    pub fn target(&self) -> SectionType {
        match self {
            ListEdit::AddImage(_)
            | ListEdit::UpdateImage(..)
            | ListEdit::RemoveImage(_)
            | ListEdit::MoveImage { .. } => SectionType::Gallery,
            ListEdit::AddItem(_) | ListEdit::UpdateItem(..) | ListEdit::RemoveItem(_) => {
                SectionType::Breadcrumb
            }
            ListEdit::AddSidePost(_)
            | ListEdit::UpdateSidePost(..)
            | ListEdit::RemoveSidePost(_)
            | ListEdit::SetFeaturedPost(_)
            | ListEdit::ClearFeaturedPost => SectionType::PopularPosts,
        }
    }
}

/// Apply a list edit to a copy of `section`.
pub fn apply_list_edit(section: &ContentSection, edit: ListEdit) -> Result<ContentSection, SectionError> {
    let target = edit.target();

    let next = match (section, edit) {
        (ContentSection::Gallery(g), ListEdit::AddImage(image)) => ContentSection::Gallery(g.add_image(image)),
        (ContentSection::Gallery(g), ListEdit::UpdateImage(i, p)) => ContentSection::Gallery(g.update_image(i, p)?),
        (ContentSection::Gallery(g), ListEdit::RemoveImage(i)) => ContentSection::Gallery(g.remove_image(i)?),
        (ContentSection::Gallery(g), ListEdit::MoveImage { from, to }) => {
            ContentSection::Gallery(g.move_image(from, to)?)
        }
        (ContentSection::Breadcrumb(b), ListEdit::AddItem(item)) => ContentSection::Breadcrumb(b.add_item(item)),
        (ContentSection::Breadcrumb(b), ListEdit::UpdateItem(i, p)) => {
            ContentSection::Breadcrumb(b.update_item(i, p)?)
        }
        (ContentSection::Breadcrumb(b), ListEdit::RemoveItem(i)) => ContentSection::Breadcrumb(b.remove_item(i)?),
        (ContentSection::PopularPosts(p), ListEdit::AddSidePost(post)) => {
            ContentSection::PopularPosts(p.add_side_post(post))
        }
        (ContentSection::PopularPosts(p), ListEdit::UpdateSidePost(i, patch)) => {
            ContentSection::PopularPosts(p.update_side_post(i, patch)?)
        }
        (ContentSection::PopularPosts(p), ListEdit::RemoveSidePost(i)) => {
            ContentSection::PopularPosts(p.remove_side_post(i)?)
        }
        (ContentSection::PopularPosts(p), ListEdit::SetFeaturedPost(post)) => {
            ContentSection::PopularPosts(p.set_featured_post(post))
        }
        (ContentSection::PopularPosts(p), ListEdit::ClearFeaturedPost) => {
            ContentSection::PopularPosts(p.clear_featured_post())
        }
        _ => return Err(mismatch(section, target)),
    };

    Ok(next)
}
