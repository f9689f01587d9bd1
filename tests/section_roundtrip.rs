//! Property-based tests for the persisted section format.
//!
//! Generates valid sections of every kind, with arbitrary floats, optional
//! fields and list lengths, and checks that saving and loading gives back
//! exactly the same page.

use proptest::prelude::*;
use rustpress_section_builder::codec::{from_json, to_json};
use rustpress_section_builder::*;

fn text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ,.'-]{1,40}"
}

fn optional_text() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[A-Za-z0-9 ,.'-]{0,40}")
}

fn media_reference() -> impl Strategy<Value = String> {
    prop_oneof![
        "m[0-9]{1,4}",
        "/uploads/[a-z]{3,10}\\.jpg",
        "https://cdn\\.example\\.com/[a-z]{3,10}\\.png",
    ]
}

fn pixels() -> impl Strategy<Value = Option<i64>> {
    proptest::option::of(1i64..=10000)
}

fn color() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["#1f2937", "#fff", "crimson", "rgb(12, 34, 56)"]).prop_map(String::from)
}

fn spacing() -> impl Strategy<Value = Spacing> {
    prop::sample::select(vec![Spacing::None, Spacing::Small, Spacing::Medium, Spacing::Large])
}

prop_compose! {
    fn animation()(
        enabled in any::<bool>(),
        kind in prop::sample::select(vec![
            AnimationType::FadeIn,
            AnimationType::SlideUp,
            AnimationType::SlideDown,
            AnimationType::SlideLeft,
            AnimationType::SlideRight,
            AnimationType::ZoomIn,
        ]),
        duration in 0.1f64..=3.0,
        delay in 0.0f64..=2.0,
    ) -> Animation {
        Animation { enabled, kind, duration, delay }
    }
}

// =============================================================================
// Section Strategies
// =============================================================================

prop_compose! {
    fn social_sharing()(
        enabled in any::<bool>(),
        platforms in prop::sample::subsequence(vec![
            SocialPlatform::Facebook,
            SocialPlatform::Twitter,
            SocialPlatform::Linkedin,
            SocialPlatform::Copy,
            SocialPlatform::Share,
        ], 0..=5),
        position in prop::sample::select(vec![SharePosition::Top, SharePosition::Bottom, SharePosition::Floating]),
        style in prop::sample::select(vec![ShareStyle::Icons, ShareStyle::Buttons, ShareStyle::Minimal]),
    ) -> SocialSharing {
        SocialSharing { enabled, platforms, position, style }
    }
}

prop_compose! {
    fn hero()(
        background_image in media_reference(),
        title in text(),
        subtitle in optional_text(),
        author in optional_text(),
        read_time in optional_text(),
        overlay_opacity in 0.0f64..=1.0,
        parallax in any::<bool>(),
        parallax_speed in 0.0f64..=2.0,
        mobile_height in "[1-9][0-9]vh",
        background_position in prop::sample::select(vec![
            BackgroundPosition::Center,
            BackgroundPosition::Top,
            BackgroundPosition::Bottom,
            BackgroundPosition::Left,
            BackgroundPosition::Right,
        ]),
        background_size in prop::sample::select(vec![BackgroundSize::Cover, BackgroundSize::Contain, BackgroundSize::Auto]),
        animation in animation(),
        social_sharing in social_sharing(),
    ) -> ContentSection {
        let mut hero = HeroSection {
            background_image,
            title,
            subtitle,
            author,
            read_time,
            overlay_opacity,
            parallax,
            parallax_speed,
            background_position,
            background_size,
            animation,
            social_sharing,
            ..HeroSection::default()
        };
        hero.height.mobile = mobile_height;
        ContentSection::Hero(hero)
    }
}

prop_compose! {
    fn text_section()(
        content in "[A-Za-z ]{1,200}",
        alignment in prop::sample::select(vec![
            TextAlignment::Left,
            TextAlignment::Center,
            TextAlignment::Right,
            TextAlignment::Justify,
        ]),
        font_size in prop::sample::select(vec![FontSize::Sm, FontSize::Base, FontSize::Lg, FontSize::Xl]),
        font_family in prop::sample::select(vec![FontFamily::Sans, FontFamily::Serif, FontFamily::Mono]),
        line_height in prop::sample::select(vec![
            LineHeight::Tight,
            LineHeight::Normal,
            LineHeight::Relaxed,
            LineHeight::Loose,
        ]),
        drop_cap_enabled in any::<bool>(),
        drop_cap_size in prop::sample::select(vec![DropCapSize::Small, DropCapSize::Medium, DropCapSize::Large]),
        drop_cap_color in color(),
        font_weight in prop::sample::select(vec![FontWeight::Normal, FontWeight::Semibold, FontWeight::Bold]),
        float in any::<bool>(),
        animation in animation(),
    ) -> ContentSection {
        ContentSection::Text(TextSection {
            content,
            alignment,
            font_size,
            font_family,
            line_height,
            drop_cap: DropCap {
                enabled: drop_cap_enabled,
                size: drop_cap_size,
                color: drop_cap_color,
                font_weight,
                float,
            },
            animation,
        })
    }
}

prop_compose! {
    fn image_section()(
        image in media_reference(),
        alt_text in optional_text(),
        caption in optional_text(),
        width in pixels(),
        height in pixels(),
        alignment in prop::sample::select(vec![
            ImageAlignment::Left,
            ImageAlignment::Center,
            ImageAlignment::Right,
            ImageAlignment::Full,
        ]),
        rounded in any::<bool>(),
        shadow in any::<bool>(),
    ) -> ContentSection {
        ContentSection::Image(ImageSection { image, alt_text, caption, width, height, alignment, rounded, shadow })
    }
}

prop_compose! {
    fn gallery_image()(
        url in media_reference(),
        alt_text in optional_text(),
        caption in optional_text(),
        width in pixels(),
        height in pixels(),
    ) -> GalleryImage {
        GalleryImage { url, alt_text, caption, width, height }
    }
}

prop_compose! {
    fn responsive_override()(
        columns in proptest::option::of(1i64..=6),
        spacing in proptest::option::of(spacing()),
    ) -> ResponsiveOverride {
        ResponsiveOverride { columns, spacing }
    }
}

prop_compose! {
    fn gallery_section()(
        images in prop::collection::vec(gallery_image(), 1..12),
        layout in prop::sample::select(vec![GalleryLayout::Grid, GalleryLayout::Masonry, GalleryLayout::Carousel]),
        columns in 1i64..=6,
        spacing in spacing(),
        mobile in responsive_override(),
        desktop in responsive_override(),
        hover_enabled in any::<bool>(),
        effect in prop::sample::select(vec![HoverEffect::Zoom, HoverEffect::Fade, HoverEffect::Lift]),
        show_caption in any::<bool>(),
        animation in animation(),
    ) -> ContentSection {
        ContentSection::Gallery(GallerySection {
            images,
            layout,
            columns,
            spacing,
            responsive: GalleryResponsive { mobile, desktop },
            hover_effects: HoverEffects { enabled: hover_enabled, effect, show_caption },
            animation,
        })
    }
}

prop_compose! {
    fn side_post()(
        title in text(),
        excerpt in text(),
        image_url in media_reference(),
        read_time in "[1-9] min",
        publish_date in "2024-0[1-9]-1[0-9]",
    ) -> SidePost {
        SidePost { title, excerpt, image_url, read_time, publish_date }
    }
}

prop_compose! {
    fn popular_posts_section()(
        title in "[A-Za-z ]{0,60}",
        description in optional_text(),
        featured in proptest::option::of((side_post(), text())),
        side_posts in prop::collection::vec(side_post(), 0..=MAX_SIDE_POSTS),
    ) -> ContentSection {
        let featured_post = featured.map(|(post, category)| FeaturedPost {
            title: post.title,
            excerpt: post.excerpt,
            image_url: post.image_url,
            read_time: post.read_time,
            publish_date: post.publish_date,
            category,
        });
        ContentSection::PopularPosts(PopularPostsSection { title, description, featured_post, side_posts })
    }
}

prop_compose! {
    fn breadcrumb_section()(
        enabled in any::<bool>(),
        items in prop::collection::vec(
            (text(), proptest::option::of("/[a-z]{1,12}"))
                .prop_map(|(label, href)| BreadcrumbItem { label, href }),
            1..6,
        ),
        separator in prop::sample::select(vec![Separator::Chevron, Separator::Arrow, Separator::Pipe, Separator::Slash]),
        text_size in prop::sample::select(vec![TextSize::Sm, TextSize::Base, TextSize::Lg]),
        show_home_icon in any::<bool>(),
        color in prop::sample::select(vec![
            BreadcrumbColor::Gray,
            BreadcrumbColor::Primary,
            BreadcrumbColor::Dark,
            BreadcrumbColor::Light,
        ]),
    ) -> ContentSection {
        ContentSection::Breadcrumb(BreadcrumbSection {
            enabled,
            items,
            style: BreadcrumbStyle { separator, text_size, show_home_icon, color },
        })
    }
}

fn section() -> impl Strategy<Value = ContentSection> {
    prop_oneof![
        hero(),
        text_section(),
        image_section(),
        gallery_section(),
        popular_posts_section(),
        breadcrumb_section(),
    ]
}

// =============================================================================
// Round-trip Properties
// =============================================================================

proptest! {
    /// Generated sections satisfy every schema rule
    #[test]
    fn prop_generated_sections_are_valid(section in section()) {
        prop_assert!(section.check().is_ok(), "{:?}", section.check());
    }

    /// Saving and loading a page is lossless
    #[test]
    fn prop_page_round_trip(sections in prop::collection::vec(section(), 0..8)) {
        let json = to_json(&sections).unwrap();
        prop_assert_eq!(from_json(&json).unwrap(), sections);
    }

    /// The page document form is lossless too
    #[test]
    fn prop_page_document_round_trip(sections in prop::collection::vec(section(), 0..8)) {
        let page = PageSections::new(sections);
        let decoded = PageSections::from_json(&page.to_json().unwrap()).unwrap();
        prop_assert_eq!(decoded, page);
    }
}
