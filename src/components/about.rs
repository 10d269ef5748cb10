use crate::components::feature_glyph;
use crate::content::SectionId;
use crate::theme::Theme;
use leptos::*;

#[component]
pub fn AboutSection(theme: Theme) -> impl IntoView {
    let c = theme.content;

    view! {
        <section id=SectionId::About.anchor() class="section about">
            <div class="section-glow" aria-hidden="true"></div>
            <div class="section-inner two-col">
                <div>
                    <h2>{c.about_heading}</h2>
                    <p class="section-body">{c.about_body}</p>
                    <div class="pill-row">
                        {c.interests
                            .iter()
                            .map(|interest| view! { <span class="pill">{*interest}</span> })
                            .collect_view()}
                    </div>
                </div>
                <div class="feature-grid">
                    {c.features
                        .iter()
                        .map(|card| {
                            view! {
                                <div class="feature-card">
                                    <span class="feature-icon">{feature_glyph(card.icon)}</span>
                                    <div class="feature-title">{card.title}</div>
                                    <p class="feature-blurb">{card.blurb}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
