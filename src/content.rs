//! Fixed, render-time content for both site variants.
//!
//! Everything here is a `'static` literal: the site has no backend and no
//! persistence, so "data" means the arrays the sections render from. The
//! two variants (Ember and Cosmos) share every structure and differ only
//! in wording; palettes and decoration live in [`crate::theme`].

/// In-page anchor targets, in the page's top-to-bottom order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Home,
    About,
    Projects,
    Stack,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Projects,
        SectionId::Stack,
        SectionId::Contact,
    ];

    /// The `id` attribute the section element carries.
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Projects => "projects",
            SectionId::Stack => "stack",
            SectionId::Contact => "contact",
        }
    }

    /// Fragment href pointing at [`Self::anchor`]. Resolution is native
    /// browser scrolling; a dangling target degrades to a no-op jump.
    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }
}

/// One entry in the navigation header. Order in [`NAV_LINKS`] is display
/// order.
#[derive(Debug, Clone, Copy)]
pub struct NavLink {
    pub label: &'static str,
    pub target: SectionId,
}

/// The header link row. Home is reachable through the brand mark instead,
/// so it is not listed here.
pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { label: "About", target: SectionId::About },
    NavLink { label: "Projects", target: SectionId::Projects },
    NavLink { label: "Stack", target: SectionId::Stack },
    NavLink { label: "Contact", target: SectionId::Contact },
];

/// Glyphs the feature cards can ask for; rendered by
/// `components::icons::feature_glyph`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Cpu,
    Bot,
    Sparkles,
    Code,
}

#[derive(Debug, Clone, Copy)]
pub struct StatItem {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct FeatureCard {
    pub icon: IconKind,
    pub title: &'static str,
    pub blurb: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ProjectCard {
    pub title: &'static str,
    pub blurb: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    GitHub,
    LinkedIn,
    Email,
}

/// Outbound profile/contact reference. Hrefs are opaque strings; nothing
/// validates them.
#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub label: &'static str,
    pub href: &'static str,
}

const SOCIALS: [SocialLink; 3] = [
    SocialLink {
        kind: SocialKind::GitHub,
        label: "GitHub",
        href: "https://github.com",
    },
    SocialLink {
        kind: SocialKind::LinkedIn,
        label: "LinkedIn",
        href: "https://linkedin.com",
    },
    SocialLink {
        kind: SocialKind::Email,
        label: "you@example.com",
        href: "mailto:you@example.com",
    },
];

/// Every piece of copy one variant renders. Both constructors must keep
/// the same shape (same counts per collection); the tests below pin that
/// down so editing one variant can't silently unbalance the other.
#[derive(Debug, Clone, Copy)]
pub struct SiteContent {
    pub owner: &'static str,
    pub hero_badge: &'static str,
    pub hero_title: &'static str,
    pub hero_lede: &'static str,
    pub cta_primary: &'static str,
    pub cta_secondary: &'static str,
    pub stats: &'static [StatItem],
    pub about_heading: &'static str,
    pub about_body: &'static str,
    pub interests: &'static [&'static str],
    pub features: &'static [FeatureCard],
    pub projects_heading: &'static str,
    pub projects_aside: &'static str,
    pub projects: &'static [ProjectCard],
    pub stack_heading: &'static str,
    pub stack_lede: &'static str,
    pub stack: &'static [&'static str],
    pub contact_heading: &'static str,
    pub contact_lede: &'static str,
    pub socials: &'static [SocialLink],
    pub footer_note: &'static str,
}

impl SiteContent {
    /// Warm variant: ember palette, vignette hero.
    pub const fn ember() -> Self {
        SiteContent {
            owner: "your.name",
            hero_badge: "AI Engineer \u{2022} Tech Explorer",
            hero_title: "Building useful things with AI",
            hero_lede: "I design and ship intelligent products\u{2014}combining solid \
                        engineering with a taste for futuristic interfaces. Let\u{2019}s \
                        create something people love.",
            cta_primary: "See projects",
            cta_secondary: "Get in touch",
            stats: &[
                StatItem { value: "5+", label: "Years" },
                StatItem { value: "30+", label: "Projects" },
                StatItem { value: "LLMs", label: "Models" },
                StatItem { value: "GenAI", label: "Focus" },
            ],
            about_heading: "Hi, I\u{2019}m your.name",
            about_body: "I build AI-first products and systems. From rapid prototyping \
                         to production-grade services, I care about performance, \
                         reliability, and clean UX.",
            interests: &["AI engineering", "LLM apps", "Agentic systems", "DX & tooling"],
            features: &[
                FeatureCard {
                    icon: IconKind::Cpu,
                    title: "Systems",
                    blurb: "From idea to deployable, scalable services.",
                },
                FeatureCard {
                    icon: IconKind::Bot,
                    title: "AI apps",
                    blurb: "Reliable LLM flows, evals, and guardrails.",
                },
                FeatureCard {
                    icon: IconKind::Code,
                    title: "Product",
                    blurb: "Iterative delivery with real user feedback.",
                },
                FeatureCard {
                    icon: IconKind::Sparkles,
                    title: "Design",
                    blurb: "Dark, tactile UI with motion and depth.",
                },
            ],
            projects_heading: "Selected work",
            projects_aside: "Open for collaborations \u{2192}",
            projects: &[
                ProjectCard {
                    title: "Agentic Research Assistant",
                    blurb: "Multi-tool agent that synthesizes sources, plans tasks, and \
                            drafts reports with citations.",
                    tags: &["Agents", "Tool use", "Evals"],
                },
                ProjectCard {
                    title: "Realtime Voice Tutor",
                    blurb: "Streaming TTS/STT with turn-taking and memory for natural \
                            language lessons.",
                    tags: &["Realtime", "RAG", "Voice"],
                },
                ProjectCard {
                    title: "Code Copilot for Docs",
                    blurb: "Embeddings + retrieval pipelines over large documentation \
                            sets with safety filters.",
                    tags: &["RAG", "LLMs", "Guardrails"],
                },
                ProjectCard {
                    title: "Vision Workflow Studio",
                    blurb: "Composable CV + LLM blocks for rapid prototyping and demos.",
                    tags: &["Vision", "UX", "Prototyping"],
                },
            ],
            stack_heading: "Current stack",
            stack_lede: "The tools I reach for when moving fast and building robust systems.",
            stack: &[
                "Python", "FastAPI", "Node", "React", "Tailwind", "Postgres", "Mongo",
                "Docker", "Vercel", "AWS", "OpenAI", "LangChain",
            ],
            contact_heading: "Let\u{2019}s talk",
            contact_lede: "Got an idea or a problem to solve? I\u{2019}m available for \
                           select collaborations and advisory.",
            socials: &SOCIALS,
            footer_note: "Built with care \u{2022} Dark system",
        }
    }

    /// Space variant: cosmos palette, starfield hero.
    pub const fn cosmos() -> Self {
        SiteContent {
            owner: "your.name",
            hero_badge: "AI Engineer \u{2022} Orbit Enthusiast",
            hero_title: "Shipping software past the stratosphere",
            hero_lede: "I build intelligent systems with the calm of deep space and the \
                        precision of mission control. Signal over noise, always.",
            cta_primary: "Explore missions",
            cta_secondary: "Open a channel",
            stats: &[
                StatItem { value: "5+", label: "Years" },
                StatItem { value: "30+", label: "Launches" },
                StatItem { value: "LLMs", label: "Models" },
                StatItem { value: "GenAI", label: "Focus" },
            ],
            about_heading: "Hello from the dark side of the build",
            about_body: "I build AI-first products and systems. From first prototype to \
                         stable orbit, I care about performance, reliability, and \
                         interfaces that feel weightless.",
            interests: &["AI engineering", "LLM apps", "Agentic systems", "DX & tooling"],
            features: &[
                FeatureCard {
                    icon: IconKind::Cpu,
                    title: "Systems",
                    blurb: "From idea to deployable, scalable services.",
                },
                FeatureCard {
                    icon: IconKind::Bot,
                    title: "AI apps",
                    blurb: "Reliable LLM flows, evals, and guardrails.",
                },
                FeatureCard {
                    icon: IconKind::Code,
                    title: "Product",
                    blurb: "Iterative delivery with real user feedback.",
                },
                FeatureCard {
                    icon: IconKind::Sparkles,
                    title: "Design",
                    blurb: "Nebula gradients, starlight, and depth.",
                },
            ],
            projects_heading: "Mission log",
            projects_aside: "Open for collaborations \u{2192}",
            projects: &[
                ProjectCard {
                    title: "Agentic Research Assistant",
                    blurb: "Multi-tool agent that synthesizes sources, plans tasks, and \
                            drafts reports with citations.",
                    tags: &["Agents", "Tool use", "Evals"],
                },
                ProjectCard {
                    title: "Realtime Voice Tutor",
                    blurb: "Streaming TTS/STT with turn-taking and memory for natural \
                            language lessons.",
                    tags: &["Realtime", "RAG", "Voice"],
                },
                ProjectCard {
                    title: "Code Copilot for Docs",
                    blurb: "Embeddings + retrieval pipelines over large documentation \
                            sets with safety filters.",
                    tags: &["RAG", "LLMs", "Guardrails"],
                },
                ProjectCard {
                    title: "Vision Workflow Studio",
                    blurb: "Composable CV + LLM blocks for rapid prototyping and demos.",
                    tags: &["Vision", "UX", "Prototyping"],
                },
            ],
            stack_heading: "Flight hardware",
            stack_lede: "The tools I reach for when moving fast and building robust systems.",
            stack: &[
                "Python", "FastAPI", "Node", "React", "Tailwind", "Postgres", "Mongo",
                "Docker", "Vercel", "AWS", "OpenAI", "LangChain",
            ],
            contact_heading: "Open a channel",
            contact_lede: "Got an idea or a problem to solve? I\u{2019}m available for \
                           select collaborations and advisory.",
            socials: &SOCIALS,
            footer_note: "Built with care \u{2022} Cosmic system",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_anchor_set_is_stable() {
        let anchors: Vec<_> = SectionId::ALL.iter().map(|s| s.anchor()).collect();
        assert_eq!(anchors, ["home", "about", "projects", "stack", "contact"]);
    }

    #[test]
    fn every_nav_target_resolves_to_a_section() {
        for link in NAV_LINKS {
            assert!(
                SectionId::ALL.contains(&link.target),
                "nav link {:?} points at a section that is never rendered",
                link.label
            );
        }
    }

    #[test]
    fn nav_order_matches_page_order() {
        let labels: Vec<_> = NAV_LINKS.iter().map(|l| l.label).collect();
        assert_eq!(labels, ["About", "Projects", "Stack", "Contact"]);
    }

    #[test]
    fn href_is_anchor_with_hash() {
        assert_eq!(SectionId::About.href(), "#about");
        assert_eq!(SectionId::Home.href(), "#home");
    }

    #[test]
    fn both_variants_share_structure() {
        let a = SiteContent::ember();
        let b = SiteContent::cosmos();
        assert_eq!(a.stats.len(), b.stats.len());
        assert_eq!(a.features.len(), b.features.len());
        assert_eq!(a.projects.len(), b.projects.len());
        assert_eq!(a.stack.len(), b.stack.len());
        assert_eq!(a.interests.len(), b.interests.len());
        assert_eq!(a.socials.len(), b.socials.len());
    }

    #[test]
    fn card_and_tag_counts() {
        for content in [SiteContent::ember(), SiteContent::cosmos()] {
            assert_eq!(content.projects.len(), 4);
            assert_eq!(content.stack.len(), 12);
            assert_eq!(content.stats.len(), 4);
            assert_eq!(content.features.len(), 4);
            for project in content.projects {
                assert!(!project.tags.is_empty());
            }
        }
    }

    #[test]
    fn variants_differ_in_copy_only() {
        let a = SiteContent::ember();
        let b = SiteContent::cosmos();
        assert_ne!(a.hero_title, b.hero_title);
        assert_ne!(a.footer_note, b.footer_note);
        // Identity and contact surface stay shared.
        assert_eq!(a.owner, b.owner);
        assert_eq!(a.socials[2].href, b.socials[2].href);
    }

    #[test]
    fn social_links_cover_profiles_and_mail() {
        let kinds: Vec<_> = SOCIALS.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            [SocialKind::GitHub, SocialKind::LinkedIn, SocialKind::Email]
        );
        assert!(SOCIALS[2].href.starts_with("mailto:"));
    }
}
