//! Section Preview Rendering
//!
//! Turns sections into a small element tree for the editor's live preview.
//! Rendering is total: absent media becomes a placeholder, empty text
//! becomes placeholder copy, and nothing here can fail.

use serde::Serialize;

use crate::media::resolve;
use crate::models::*;

/// Tiles a gallery preview shows before collapsing the rest into "+N more"
pub const DEFAULT_GALLERY_PREVIEW_LIMIT: usize = 6;

const TEXT_PLACEHOLDER: &str = "Start typing your content...";

const VOID_TAGS: &[&str] = &["img", "br", "hr"];

// ============================================
// Preview Tree
// ============================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PreviewNode {
    Element(Element),
    Text { text: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    pub tag: String,
    pub classes: Vec<String>,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<PreviewNode>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            classes: Vec::new(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add one or more space-separated classes.
    pub fn class(mut self, classes: impl AsRef<str>) -> Self {
        self.classes
            .extend(classes.as_ref().split_whitespace().map(String::from));
        self
    }

    pub fn class_if(self, condition: bool, classes: impl AsRef<str>) -> Self {
        if condition {
            self.class(classes)
        } else {
            self
        }
    }

    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes.push((name.to_string(), value.into()));
        self
    }

    pub fn child(mut self, node: impl Into<PreviewNode>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<PreviewNode>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(PreviewNode::text(text))
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

impl From<Element> for PreviewNode {
    fn from(element: Element) -> Self {
        PreviewNode::Element(element)
    }
}

impl PreviewNode {
    pub fn text(text: impl Into<String>) -> Self {
        PreviewNode::Text { text: text.into() }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            PreviewNode::Element(e) => Some(e),
            PreviewNode::Text { .. } => None,
        }
    }

    /// All elements in this tree carrying `class`, in document order
    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_by_class(class, &mut found);
        found
    }

    fn collect_by_class<'a>(&'a self, class: &str, found: &mut Vec<&'a Element>) {
        if let PreviewNode::Element(e) = self {
            if e.has_class(class) {
                found.push(e);
            }
            for child in &e.children {
                child.collect_by_class(class, found);
            }
        }
    }

    /// Concatenated text of the tree
    pub fn text_content(&self) -> String {
        match self {
            PreviewNode::Text { text } => text.clone(),
            PreviewNode::Element(e) => e.children.iter().map(PreviewNode::text_content).collect(),
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            PreviewNode::Text { text } => out.push_str(&html_escape::encode_text(text)),
            PreviewNode::Element(e) => {
                out.push('<');
                out.push_str(&e.tag);
                if !e.classes.is_empty() {
                    out.push_str(" class=\"");
                    out.push_str(&html_escape::encode_double_quoted_attribute(&e.classes.join(" ")));
                    out.push('"');
                }
                for (name, value) in &e.attributes {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(&html_escape::encode_double_quoted_attribute(value));
                    out.push('"');
                }
                out.push('>');

                if VOID_TAGS.contains(&e.tag.as_str()) {
                    return;
                }

                for child in &e.children {
                    child.write_html(out);
                }
                out.push_str("</");
                out.push_str(&e.tag);
                out.push('>');
            }
        }
    }
}

// ============================================
// Render Context
// ============================================

/// What the renderer needs besides the section itself
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub assets: &'a [MediaAsset],
    pub gallery_preview_limit: usize,
}

impl<'a> RenderContext<'a> {
    pub fn new(assets: &'a [MediaAsset]) -> Self {
        Self {
            assets,
            gallery_preview_limit: DEFAULT_GALLERY_PREVIEW_LIMIT,
        }
    }

    pub fn with_gallery_limit(mut self, limit: usize) -> Self {
        self.gallery_preview_limit = limit.max(1);
        self
    }

    /// Resolved URL, or `None` when no media is set.
    fn media(&self, reference: &str) -> Option<String> {
        if reference.trim().is_empty() {
            None
        } else {
            Some(resolve(reference, self.assets))
        }
    }
}

/// Percent-encode the characters that could close a quoted CSS `url('...')`.
fn css_url(url: &str) -> String {
    let mut out = String::with_capacity(url.len());
    for c in url.chars() {
        match c {
            '\'' => out.push_str("%27"),
            '"' => out.push_str("%22"),
            '(' => out.push_str("%28"),
            ')' => out.push_str("%29"),
            '\\' => out.push_str("%5C"),
            c if c.is_whitespace() || c.is_control() => {
                let mut buf = [0u8; 4];
                for b in c.encode_utf8(&mut buf).bytes() {
                    out.push_str(&format!("%{:02X}", b));
                }
            }
            c => out.push(c),
        }
    }
    out
}

/// Colors that fail the CSS color check fall back to the default.
fn drop_cap_color(drop_cap: &DropCap) -> String {
    if is_css_color(&drop_cap.color) {
        drop_cap.color.trim().to_string()
    } else {
        DropCap::default().color
    }
}

fn placeholder(message: &str) -> Element {
    Element::new("div").class("media-placeholder").text(message)
}

fn animated(element: Element, animation: &Animation) -> Element {
    if !animation.enabled {
        return element;
    }
    element
        .attr("data-animation", animation_name(animation.kind))
        .attr("data-duration", format!("{}s", animation.duration))
        .attr("data-delay", format!("{}s", animation.delay))
}

fn animation_name(kind: AnimationType) -> &'static str {
    match kind {
        AnimationType::FadeIn => "fade-in",
        AnimationType::SlideUp => "slide-up",
        AnimationType::SlideDown => "slide-down",
        AnimationType::SlideLeft => "slide-left",
        AnimationType::SlideRight => "slide-right",
        AnimationType::ZoomIn => "zoom-in",
    }
}

// ============================================
// Section Renderers
// ============================================

/// Render one section.
pub fn render(section: &ContentSection, ctx: &RenderContext<'_>) -> PreviewNode {
    let element = match section {
        ContentSection::Hero(s) => render_hero(s, ctx),
        ContentSection::Text(s) => render_text(s),
        ContentSection::Image(s) => render_image(s, ctx),
        ContentSection::Gallery(s) => render_gallery(s, ctx),
        ContentSection::PopularPosts(s) => render_popular_posts(s, ctx),
        ContentSection::Breadcrumb(s) => render_breadcrumb(s),
    };

    element
        .class("content-section")
        .attr("data-section-type", section.section_type().as_str())
        .into()
}

/// Render a whole page in section order.
pub fn render_all(sections: &[ContentSection], ctx: &RenderContext<'_>) -> PreviewNode {
    if sections.is_empty() {
        return Element::new("div")
            .class("page-preview page-preview-empty")
            .text("No sections yet. Add a section to start building this page.")
            .into();
    }

    Element::new("div")
        .class("page-preview")
        .children(sections.iter().map(|s| render(s, ctx)))
        .into()
}

fn render_hero(hero: &HeroSection, ctx: &RenderContext<'_>) -> Element {
    let background = match ctx.media(&hero.background_image) {
        Some(url) => Element::new("div")
            .class("hero-background absolute inset-0")
            .class_if(hero.parallax, "hero-parallax")
            .attr(
                "style",
                format!(
                    "background-image: url('{}'); background-position: {}; background-size: {}",
                    css_url(&url),
                    background_position(hero.background_position),
                    background_size(hero.background_size)
                ),
            ),
        None => placeholder("No background image selected").class("absolute inset-0"),
    };
    let background = if hero.parallax {
        background.attr("data-parallax-speed", hero.parallax_speed.to_string())
    } else {
        background
    };

    let title = if hero.title.is_empty() { "Untitled" } else { hero.title.as_str() };
    let mut content = Element::new("div").class("hero-content relative").child(
        Element::new("h1")
            .class("hero-title font-bold")
            .class(&hero.title_size.mobile)
            .class(format!("md:{}", hero.title_size.tablet))
            .class(format!("lg:{}", hero.title_size.desktop))
            .text(title),
    );

    if let Some(subtitle) = hero.subtitle.as_deref().filter(|s| !s.is_empty()) {
        content = content.child(Element::new("p").class("hero-subtitle").text(subtitle));
    }

    let meta: Vec<Element> = [
        hero.author.as_deref().map(|a| ("hero-author", format!("By {}", a))),
        hero.publish_date.as_deref().map(|d| ("hero-date", d.to_string())),
        hero.read_time.as_deref().map(|r| ("hero-read-time", r.to_string())),
    ]
    .into_iter()
    .flatten()
    .filter(|(_, text)| !text.is_empty())
    .map(|(class, text)| Element::new("span").class(class).text(text))
    .collect();
    if !meta.is_empty() {
        content = content.child(Element::new("div").class("hero-meta").children(meta));
    }

    if hero.social_sharing.enabled && !hero.social_sharing.platforms.is_empty() {
        content = content.child(render_share_bar(&hero.social_sharing));
    }

    let element = Element::new("section")
        .class("section-hero relative overflow-hidden")
        .attr("style", format!("height: {}", hero.height.desktop))
        .attr("data-height-mobile", hero.height.mobile.clone())
        .attr("data-height-tablet", hero.height.tablet.clone())
        .child(background)
        .child(
            Element::new("div")
                .class("hero-overlay absolute inset-0 bg-black")
                .attr("style", format!("opacity: {}", hero.overlay_opacity)),
        )
        .child(content);

    animated(element, &hero.animation)
}

fn render_share_bar(sharing: &SocialSharing) -> Element {
    let position = match sharing.position {
        SharePosition::Top => "share-top",
        SharePosition::Bottom => "share-bottom",
        SharePosition::Floating => "share-floating",
    };
    let style = match sharing.style {
        ShareStyle::Icons => "share-icons",
        ShareStyle::Buttons => "share-buttons",
        ShareStyle::Minimal => "share-minimal",
    };

    Element::new("div")
        .class("social-share")
        .class(position)
        .class(style)
        .children(sharing.platforms.iter().map(|p| {
            Element::new("button")
                .class(format!("share-button share-{}", p.as_str()))
                .attr("aria-label", format!("Share on {}", platform_label(*p)))
                .text(platform_label(*p))
        }))
}

fn platform_label(platform: SocialPlatform) -> &'static str {
    match platform {
        SocialPlatform::Facebook => "Facebook",
        SocialPlatform::Twitter => "Twitter",
        SocialPlatform::Linkedin => "LinkedIn",
        SocialPlatform::Copy => "Copy link",
        SocialPlatform::Share => "Share",
    }
}

fn background_position(position: BackgroundPosition) -> &'static str {
    match position {
        BackgroundPosition::Center => "center",
        BackgroundPosition::Top => "top",
        BackgroundPosition::Bottom => "bottom",
        BackgroundPosition::Left => "left",
        BackgroundPosition::Right => "right",
    }
}

fn background_size(size: BackgroundSize) -> &'static str {
    match size {
        BackgroundSize::Cover => "cover",
        BackgroundSize::Contain => "contain",
        BackgroundSize::Auto => "auto",
    }
}

fn render_text(text: &TextSection) -> Element {
    let alignment = match text.alignment {
        TextAlignment::Left => "text-left",
        TextAlignment::Center => "text-center",
        TextAlignment::Right => "text-right",
        TextAlignment::Justify => "text-justify",
    };
    let font_size = match text.font_size {
        FontSize::Sm => "text-sm",
        FontSize::Base => "text-base",
        FontSize::Lg => "text-lg",
        FontSize::Xl => "text-xl",
    };
    let font_family = match text.font_family {
        FontFamily::Sans => "font-sans",
        FontFamily::Serif => "font-serif",
        FontFamily::Mono => "font-mono",
    };
    let line_height = match text.line_height {
        LineHeight::Tight => "leading-tight",
        LineHeight::Normal => "leading-normal",
        LineHeight::Relaxed => "leading-relaxed",
        LineHeight::Loose => "leading-loose",
    };

    let container = Element::new("div")
        .class("section-text")
        .class(alignment)
        .class(font_size)
        .class(font_family)
        .class(line_height);

    let paragraphs: Vec<&str> = text
        .content
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    if paragraphs.is_empty() {
        let container = container.child(
            Element::new("p")
                .class("text-placeholder italic text-gray-400")
                .text(TEXT_PLACEHOLDER),
        );
        return animated(container, &text.animation);
    }

    let rendered = paragraphs.iter().enumerate().map(|(i, paragraph)| {
        if i == 0 && text.drop_cap.enabled {
            render_drop_cap_paragraph(paragraph, &text.drop_cap)
        } else {
            Element::new("p").text(*paragraph)
        }
    });

    animated(container.children(rendered), &text.animation)
}

fn render_drop_cap_paragraph(paragraph: &str, drop_cap: &DropCap) -> Element {
    let mut chars = paragraph.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return Element::new("p").class("text-placeholder").text(TEXT_PLACEHOLDER),
    };
    let rest = chars.as_str();

    let size = match drop_cap.size {
        DropCapSize::Small => "drop-cap-small text-4xl",
        DropCapSize::Medium => "drop-cap-medium text-6xl",
        DropCapSize::Large => "drop-cap-large text-8xl",
    };
    let weight = match drop_cap.font_weight {
        FontWeight::Normal => "font-normal",
        FontWeight::Semibold => "font-semibold",
        FontWeight::Bold => "font-bold",
    };

    let cap = Element::new("span")
        .class("drop-cap")
        .class(size)
        .class(weight)
        .class_if(drop_cap.float, "float-left mr-2 leading-none")
        .attr("style", format!("color: {}", drop_cap_color(drop_cap)))
        .text(first.to_string());

    let p = Element::new("p").class("has-drop-cap").child(cap);
    if rest.is_empty() {
        p
    } else {
        p.text(rest)
    }
}

fn render_image(image: &ImageSection, ctx: &RenderContext<'_>) -> Element {
    let alignment = match image.alignment {
        ImageAlignment::Left => "image-left mr-auto",
        ImageAlignment::Center => "image-center mx-auto",
        ImageAlignment::Right => "image-right ml-auto",
        ImageAlignment::Full => "image-full w-full",
    };
    let figure = Element::new("figure").class("section-image").class(alignment);

    let url = match ctx.media(&image.image) {
        Some(url) => url,
        None => return figure.child(placeholder("No image selected")),
    };

    let mut img = Element::new("img")
        .class("max-w-full h-auto")
        .class_if(image.rounded, "rounded-lg")
        .class_if(image.shadow, "shadow-lg")
        .attr("src", url)
        .attr("alt", image.alt_text.clone().unwrap_or_default());
    if let Some(width) = image.width {
        img = img.attr("width", width.to_string());
    }
    if let Some(height) = image.height {
        img = img.attr("height", height.to_string());
    }

    let figure = figure.child(img);
    match image.caption.as_deref().filter(|c| !c.is_empty()) {
        Some(caption) => figure.child(
            Element::new("figcaption")
                .class("image-caption text-sm text-gray-500")
                .text(caption),
        ),
        None => figure,
    }
}

fn gap_class(spacing: Spacing) -> &'static str {
    match spacing {
        Spacing::None => "gap-0",
        Spacing::Small => "gap-2",
        Spacing::Medium => "gap-4",
        Spacing::Large => "gap-8",
    }
}

fn render_gallery(gallery: &GallerySection, ctx: &RenderContext<'_>) -> Element {
    let layout = match gallery.layout {
        GalleryLayout::Grid => "gallery-grid grid",
        GalleryLayout::Masonry => "gallery-masonry",
        GalleryLayout::Carousel => "gallery-carousel flex overflow-x-auto",
    };
    let mobile_columns = gallery.responsive.mobile.columns.unwrap_or(gallery.columns);
    let desktop_columns = gallery.responsive.desktop.columns.unwrap_or(gallery.columns);
    let mobile_spacing = gallery.responsive.mobile.spacing.unwrap_or(gallery.spacing);
    let desktop_spacing = gallery.responsive.desktop.spacing.unwrap_or(gallery.spacing);

    let container = Element::new("div")
        .class("section-gallery")
        .class(layout)
        .class(format!("grid-cols-{}", mobile_columns))
        .class(format!("md:grid-cols-{}", gallery.columns))
        .class(format!("lg:grid-cols-{}", desktop_columns))
        .class(gap_class(mobile_spacing))
        .class(format!("lg:{}", gap_class(desktop_spacing)));

    if gallery.images.is_empty() {
        return container.child(placeholder("No images in gallery"));
    }

    let limit = ctx.gallery_preview_limit.max(1);
    let hover = gallery.hover_effects.enabled.then(|| match gallery.hover_effects.effect {
        HoverEffect::Zoom => "hover-zoom",
        HoverEffect::Fade => "hover-fade",
        HoverEffect::Lift => "hover-lift",
    });

    let tiles = gallery.images.iter().take(limit).map(|image| {
        let tile = Element::new("figure")
            .class("gallery-tile relative overflow-hidden")
            .class(hover.unwrap_or_default());
        let tile = match ctx.media(&image.url) {
            Some(url) => tile.child(
                Element::new("img")
                    .class("w-full h-full object-cover")
                    .attr("src", url)
                    .attr("alt", image.alt_text.clone().unwrap_or_default()),
            ),
            None => tile.child(placeholder("No image selected")),
        };
        match image.caption.as_deref().filter(|c| !c.is_empty()) {
            Some(caption) if gallery.hover_effects.show_caption => tile.child(
                Element::new("figcaption").class("gallery-caption").text(caption),
            ),
            _ => tile,
        }
    });

    let container = container.children(tiles);
    let hidden = gallery.images.len().saturating_sub(limit);
    let container = if hidden > 0 {
        container.child(
            Element::new("div")
                .class("gallery-more flex items-center justify-center")
                .text(format!("+{} more", hidden)),
        )
    } else {
        container
    };

    animated(container, &gallery.animation)
}

fn post_image(reference: &str, ctx: &RenderContext<'_>, alt: &str) -> Element {
    match ctx.media(reference) {
        Some(url) => Element::new("img")
            .class("post-image w-full object-cover")
            .attr("src", url)
            .attr("alt", alt.to_string()),
        None => placeholder("No image selected"),
    }
}

fn post_meta(publish_date: &str, read_time: &str) -> Element {
    let parts: Vec<&str> = [publish_date, read_time]
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect();
    Element::new("div")
        .class("post-meta text-sm text-gray-500")
        .text(parts.join(" · "))
}

fn render_popular_posts(posts: &PopularPostsSection, ctx: &RenderContext<'_>) -> Element {
    let mut section = Element::new("section")
        .class("section-popular-posts")
        .child(Element::new("h2").class("popular-posts-title").text(posts.title.clone()));

    if let Some(description) = posts.description.as_deref().filter(|d| !d.is_empty()) {
        section = section.child(
            Element::new("p")
                .class("popular-posts-description")
                .text(description),
        );
    }

    if posts.featured_post.is_none() && posts.side_posts.is_empty() {
        return section.child(
            Element::new("p")
                .class("media-placeholder")
                .text("No posts selected"),
        );
    }

    let mut grid = Element::new("div").class("popular-posts-grid grid md:grid-cols-2 gap-6");

    if let Some(featured) = &posts.featured_post {
        let mut article = Element::new("article")
            .class("featured-post")
            .child(post_image(&featured.image_url, ctx, &featured.title));
        if !featured.category.is_empty() {
            article = article.child(
                Element::new("span")
                    .class("post-category")
                    .text(featured.category.clone()),
            );
        }
        article = article
            .child(Element::new("h3").class("post-title").text(featured.title.clone()))
            .child(Element::new("p").class("post-excerpt").text(featured.excerpt.clone()))
            .child(post_meta(&featured.publish_date, &featured.read_time));
        grid = grid.child(article);
    }

    if !posts.side_posts.is_empty() {
        grid = grid.child(
            Element::new("div")
                .class("side-posts flex flex-col gap-4")
                .children(posts.side_posts.iter().map(|post| {
                    Element::new("article")
                        .class("side-post flex gap-3")
                        .child(post_image(&post.image_url, ctx, &post.title))
                        .child(
                            Element::new("div")
                                .child(Element::new("h4").class("post-title").text(post.title.clone()))
                                .child(Element::new("p").class("post-excerpt").text(post.excerpt.clone()))
                                .child(post_meta(&post.publish_date, &post.read_time)),
                        )
                })),
        );
    }

    section.child(grid)
}

fn render_breadcrumb(breadcrumb: &BreadcrumbSection) -> Element {
    let text_size = match breadcrumb.style.text_size {
        TextSize::Sm => "text-sm",
        TextSize::Base => "text-base",
        TextSize::Lg => "text-lg",
    };
    let color = match breadcrumb.style.color {
        BreadcrumbColor::Gray => "breadcrumb-gray text-gray-600",
        BreadcrumbColor::Primary => "breadcrumb-primary text-blue-600",
        BreadcrumbColor::Dark => "breadcrumb-dark text-gray-900",
        BreadcrumbColor::Light => "breadcrumb-light text-gray-200",
    };

    let nav = Element::new("nav")
        .class("section-breadcrumb")
        .class(text_size)
        .class(color)
        .attr("aria-label", "Breadcrumb");

    if !breadcrumb.enabled {
        return nav.class("breadcrumb-hidden").text("Breadcrumb hidden");
    }
    if breadcrumb.items.is_empty() {
        return nav.child(placeholder("No breadcrumb items"));
    }

    let last = breadcrumb.items.len() - 1;
    let mut list = Element::new("ol").class("flex items-center gap-2");

    for (i, item) in breadcrumb.items.iter().enumerate() {
        let mut li = Element::new("li").class("breadcrumb-item");
        if i == 0 && breadcrumb.style.show_home_icon {
            li = li.child(
                Element::new("span")
                    .class("breadcrumb-home-icon")
                    .attr("aria-hidden", "true")
                    .text("⌂"),
            );
        }

        li = match (&item.href, i == last) {
            (Some(href), false) => li.child(Element::new("a").attr("href", href.clone()).text(item.label.clone())),
            _ if i == last => li.child(
                Element::new("span")
                    .class("breadcrumb-current font-medium")
                    .attr("aria-current", "page")
                    .text(item.label.clone()),
            ),
            _ => li.child(Element::new("span").text(item.label.clone())),
        };
        list = list.child(li);

        if i != last {
            list = list.child(
                Element::new("li")
                    .class("breadcrumb-separator")
                    .attr("aria-hidden", "true")
                    .text(breadcrumb.style.separator.as_str()),
            );
        }
    }

    nav.child(list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::create_section;
    use chrono::Utc;

    fn gallery(n: usize, columns: i64) -> ContentSection {
        ContentSection::Gallery(GallerySection {
            images: (0..n).map(|i| GalleryImage::new(format!("/img/{}.jpg", i))).collect(),
            columns,
            ..GallerySection::default()
        })
    }

    #[test]
    fn test_gallery_truncates_with_more_tile() {
        let node = render(&gallery(9, 3), &RenderContext::new(&[]));
        assert_eq!(node.find_by_class("gallery-tile").len(), 6);
        let more = node.find_by_class("gallery-more");
        assert_eq!(more.len(), 1);
        assert_eq!(PreviewNode::from(more[0].clone()).text_content(), "+3 more");

        let root = node.as_element().unwrap();
        assert_eq!(root.children.len(), 7);
        assert!(root.has_class("md:grid-cols-3"));
    }

    #[test]
    fn test_gallery_without_overflow_has_no_more_tile() {
        let node = render(&gallery(6, 3), &RenderContext::new(&[]));
        assert_eq!(node.find_by_class("gallery-tile").len(), 6);
        assert!(node.find_by_class("gallery-more").is_empty());
    }

    #[test]
    fn test_gallery_limit_is_configurable() {
        let ctx = RenderContext::new(&[]).with_gallery_limit(4);
        let node = render(&gallery(9, 3), &ctx);
        assert_eq!(node.find_by_class("gallery-tile").len(), 4);
        assert!(node.text_content().contains("+5 more"));
    }

    #[test]
    fn test_empty_gallery_placeholder() {
        let node = render(&gallery(0, 3), &RenderContext::new(&[]));
        assert!(node.text_content().contains("No images in gallery"));
    }

    #[test]
    fn test_drop_cap_splits_first_character() {
        let section = ContentSection::Text(TextSection {
            content: "Évora at dawn".into(),
            drop_cap: DropCap {
                enabled: true,
                ..DropCap::default()
            },
            ..TextSection::default()
        });
        let node = render(&section, &RenderContext::new(&[]));
        let caps = node.find_by_class("drop-cap");
        assert_eq!(caps.len(), 1);
        assert_eq!(PreviewNode::from(caps[0].clone()).text_content(), "É");
        assert_eq!(node.text_content(), "Évora at dawn");
    }

    #[test]
    fn test_empty_text_uses_placeholder() {
        let section = ContentSection::Text(TextSection {
            drop_cap: DropCap {
                enabled: true,
                ..DropCap::default()
            },
            ..TextSection::default()
        });
        let node = render(&section, &RenderContext::new(&[]));
        assert!(node.find_by_class("drop-cap").is_empty());
        assert_eq!(node.text_content(), TEXT_PLACEHOLDER);
    }

    #[test]
    fn test_single_character_drop_cap() {
        let section = ContentSection::Text(TextSection {
            content: "A".into(),
            drop_cap: DropCap {
                enabled: true,
                ..DropCap::default()
            },
            ..TextSection::default()
        });
        let node = render(&section, &RenderContext::new(&[]));
        assert_eq!(node.text_content(), "A");
    }

    #[test]
    fn test_image_placeholder_and_resolution() {
        let missing = ContentSection::Image(ImageSection::default());
        let node = render(&missing, &RenderContext::new(&[]));
        assert!(node.text_content().contains("No image selected"));

        let assets = vec![MediaAsset {
            id: "m7".into(),
            url: "/uploads/santorini.jpg".into(),
            media_type: MediaType::Image,
            size_kb: 310.0,
            filename: "santorini.jpg".into(),
            uploaded_at: Utc::now(),
        }];
        let section = ContentSection::Image(ImageSection {
            image: "m7".into(),
            caption: Some("Oia".into()),
            ..ImageSection::default()
        });
        let html = render(&section, &RenderContext::new(&assets)).to_html();
        assert!(html.contains(r#"src="/uploads/santorini.jpg""#));
        assert!(html.contains("<figcaption"));
    }

    #[test]
    fn test_hero_without_background() {
        let section = ContentSection::Hero(HeroSection {
            title: "Lapland".into(),
            ..HeroSection::default()
        });
        let node = render(&section, &RenderContext::new(&[]));
        assert!(node.text_content().contains("No background image selected"));
        assert!(node.text_content().contains("Lapland"));
    }

    #[test]
    fn test_hero_share_bar() {
        let mut hero = HeroSection {
            background_image: "/a.jpg".into(),
            title: "Nepal".into(),
            ..HeroSection::default()
        };
        hero.social_sharing.enabled = true;
        let node = render(&ContentSection::Hero(hero), &RenderContext::new(&[]));
        assert_eq!(node.find_by_class("share-button").len(), 4);
    }

    #[test]
    fn test_breadcrumb_marks_current_page() {
        let section = ContentSection::Breadcrumb(BreadcrumbSection {
            items: vec![
                BreadcrumbItem::new("Home", Some("/")),
                BreadcrumbItem::new("Europe", Some("/europe")),
                BreadcrumbItem::new("Lisbon", None),
            ],
            ..BreadcrumbSection::default()
        });
        let node = render(&section, &RenderContext::new(&[]));
        assert_eq!(node.find_by_class("breadcrumb-separator").len(), 2);
        let current = node.find_by_class("breadcrumb-current");
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].get_attr("aria-current"), Some("page"));
    }

    #[test]
    fn test_every_factory_section_renders() {
        for t in SectionType::ALL {
            let node = render(&create_section(t), &RenderContext::new(&[]));
            let root = node.as_element().unwrap();
            assert_eq!(root.get_attr("data-section-type"), Some(t.as_str()));
            assert!(!node.to_html().is_empty());
        }
    }

    #[test]
    fn test_style_values_cannot_break_out() {
        let hero = ContentSection::Hero(HeroSection {
            background_image: "/x.jpg'); background:url(evil".into(),
            title: "Oslo".into(),
            ..HeroSection::default()
        });
        let node = render(&hero, &RenderContext::new(&[]));
        let style = node.find_by_class("hero-background")[0].get_attr("style").unwrap().to_string();
        assert!(style.starts_with("background-image: url('/x.jpg%27%29;%20background:url%28evil');"));

        let text = ContentSection::Text(TextSection {
            content: "Bergen".into(),
            drop_cap: DropCap {
                enabled: true,
                color: "red; background:url(evil)".into(),
                ..DropCap::default()
            },
            ..TextSection::default()
        });
        let node = render(&text, &RenderContext::new(&[]));
        assert_eq!(node.find_by_class("drop-cap")[0].get_attr("style"), Some("color: #1f2937"));
    }

    #[test]
    fn test_gallery_breakpoints_inherit_section_values() {
        let mut section = GallerySection {
            images: vec![GalleryImage::new("/a.jpg")],
            columns: 4,
            ..GallerySection::default()
        };
        section.responsive.mobile = ResponsiveOverride::default();
        section.responsive.desktop = ResponsiveOverride::default();

        let node = render(&ContentSection::Gallery(section), &RenderContext::new(&[]));
        let root = node.as_element().unwrap();
        assert!(root.has_class("grid-cols-4"));
        assert!(root.has_class("lg:grid-cols-4"));
        assert!(root.has_class("gap-4"));

        let defaults = render(&gallery(2, 3), &RenderContext::new(&[]));
        let root = defaults.as_element().unwrap();
        assert!(root.has_class("grid-cols-1"));
        assert!(root.has_class("gap-2"));
        assert!(root.has_class("lg:grid-cols-3"));
    }

    #[test]
    fn test_html_is_escaped() {
        let section = ContentSection::Text(TextSection {
            content: "<script>alert(1)</script>".into(),
            ..TextSection::default()
        });
        let html = render(&section, &RenderContext::new(&[])).to_html();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_render_all_preserves_order() {
        let sections = vec![create_section(SectionType::Breadcrumb), create_section(SectionType::Hero)];
        let node = render_all(&sections, &RenderContext::new(&[]));
        let types: Vec<&str> = node
            .as_element()
            .unwrap()
            .children
            .iter()
            .filter_map(|c| c.as_element()?.get_attr("data-section-type"))
            .collect();
        assert_eq!(types, vec!["breadcrumb", "hero"]);

        let empty = render_all(&[], &RenderContext::new(&[]));
        assert!(empty.text_content().contains("No sections yet"));
    }
}
