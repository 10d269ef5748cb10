//! Theme layer: one component tree, two looks.
//!
//! A [`Theme`] bundles everything that distinguishes the variants — the
//! palette slug the stylesheet keys off, the hero's decorative layers, the
//! scene the embedded viewer loads, and the wording. Sections never branch
//! on "which variant am I"; they render whatever `Theme` they were given.

use crate::content::SiteContent;

/// Decorative background treatment behind the hero content. The actual
/// pixels live in the stylesheet; this only decides which layers exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decor {
    /// Soft top-to-bottom gradient veil (warm variant).
    Vignette,
    /// Starfield, nebula blur, and scanline overlay (cosmic variant).
    Starfield,
}

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    slug: &'static str,
    pub decor: Decor,
    /// Opaque descriptor handed to the embedded scene viewer. Never
    /// inspected here.
    pub scene_url: &'static str,
    pub content: SiteContent,
}

impl Theme {
    pub const fn ember() -> Self {
        Theme {
            slug: "ember",
            decor: Decor::Vignette,
            scene_url: "https://prod.spline.design/xXD1hOqciVNtJX50/scene.splinecode",
            content: SiteContent::ember(),
        }
    }

    pub const fn cosmos() -> Self {
        Theme {
            slug: "cosmos",
            decor: Decor::Starfield,
            scene_url: "https://prod.spline.design/kZDDjO5HuC9GJUM2/scene.splinecode",
            content: SiteContent::cosmos(),
        }
    }

    /// Value of the `data-theme` attribute on the page root; the
    /// stylesheet's `[data-theme="…"]` blocks carry the palette tokens.
    pub fn slug(&self) -> &'static str {
        self.slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_are_distinct_css_idents() {
        let ember = Theme::ember();
        let cosmos = Theme::cosmos();
        assert_ne!(ember.slug(), cosmos.slug());
        for theme in [ember, cosmos] {
            assert!(theme
                .slug()
                .chars()
                .all(|c| c.is_ascii_lowercase() || c == '-'));
        }
    }

    #[test]
    fn decor_tracks_variant() {
        assert_eq!(Theme::ember().decor, Decor::Vignette);
        assert_eq!(Theme::cosmos().decor, Decor::Starfield);
    }

    #[test]
    fn scene_urls_are_remote() {
        for theme in [Theme::ember(), Theme::cosmos()] {
            assert!(theme.scene_url.starts_with("https://"));
            assert!(theme.scene_url.ends_with(".splinecode"));
        }
    }
}
