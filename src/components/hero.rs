use crate::analytics::track_event;
use crate::components::{IconMail, IconRocket, IconSparkles, Reveal, SceneEmbed};
use crate::content::SectionId;
use crate::theme::{Decor, Theme};
use leptos::*;

/// Background treatment matching the theme. Layers are purely decorative
/// and sit between the scene embed and the text content.
fn decor_layers(decor: Decor) -> View {
    match decor {
        Decor::Vignette => view! {
            <div class="hero-veil" aria-hidden="true"></div>
        }
        .into_view(),
        Decor::Starfield => view! {
            <div class="starfield" aria-hidden="true"></div>
            <div class="nebula" aria-hidden="true"></div>
            <div class="scanlines" aria-hidden="true"></div>
        }
        .into_view(),
    }
}

/// Full-viewport intro: scene embed at the back, decorative layers over
/// it, entrance-animated text and CTAs on top. The stacking is
/// independent — a scene that never loads leaves everything else intact.
#[component]
pub fn HeroSection(theme: Theme) -> impl IntoView {
    let c = theme.content;

    view! {
        <section id=SectionId::Home.anchor() class="hero">
            <SceneEmbed scene_url=theme.scene_url/>
            {decor_layers(theme.decor)}
            <div class="hero-inner">
                <Reveal>
                    <div class="hero-badge">
                        <IconSparkles size=14/>
                        <span>{c.hero_badge}</span>
                    </div>
                </Reveal>
                <Reveal delay_ms=100>
                    <h1 class="hero-title">{c.hero_title}</h1>
                </Reveal>
                <Reveal delay_ms=200>
                    <p class="hero-lede">{c.hero_lede}</p>
                </Reveal>
                <Reveal delay_ms=300>
                    <div class="hero-actions">
                        <a
                            class="button primary"
                            href=SectionId::Projects.href()
                            on:click=|_| track_event("cta-projects")
                        >
                            <IconRocket/>
                            {c.cta_primary}
                        </a>
                        <a
                            class="button ghost"
                            href=SectionId::Contact.href()
                            on:click=|_| track_event("cta-contact")
                        >
                            <IconMail/>
                            {c.cta_secondary}
                        </a>
                    </div>
                </Reveal>
                <Reveal delay_ms=450>
                    <div class="stat-grid">
                        {c.stats
                            .iter()
                            .map(|stat| {
                                view! {
                                    <div class="stat-card">
                                        <div class="stat-value">{stat.value}</div>
                                        <div class="stat-label">{stat.label}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
