use crate::components::{IconGithub, IconLinkedin, IconMail};
use crate::content::{SectionId, SocialKind, SocialLink};
use crate::theme::Theme;
use leptos::ev::SubmitEvent;
use leptos::*;

fn contact_link(social: SocialLink) -> View {
    let glyph = match social.kind {
        SocialKind::GitHub => view! { <IconGithub/> }.into_view(),
        SocialKind::LinkedIn => view! { <IconLinkedin/> }.into_view(),
        SocialKind::Email => view! { <IconMail/> }.into_view(),
    };
    let external = social.kind != SocialKind::Email;
    view! {
        <a
            href=social.href
            target=external.then_some("_blank")
            rel=external.then_some("noreferrer")
            class="button ghost"
        >
            {glyph}
            {social.label}
        </a>
    }
    .into_view()
}

#[component]
pub fn ContactSection(theme: Theme) -> impl IntoView {
    let c = theme.content;

    // The form deliberately goes nowhere: suppress the native submission
    // and do nothing else, so submitting can never reload or navigate.
    // TODO: point this at a real form endpoint once one exists.
    let on_submit = |ev: SubmitEvent| {
        ev.prevent_default();
    };

    view! {
        <section id=SectionId::Contact.anchor() class="section contact">
            <div class="section-inner two-col">
                <div>
                    <h2>{c.contact_heading}</h2>
                    <p class="section-lede">{c.contact_lede}</p>
                    <div class="contact-links">
                        {c.socials.iter().map(|s| contact_link(*s)).collect_view()}
                    </div>
                </div>
                <form class="contact-form" on:submit=on_submit>
                    <input type="text" placeholder="Your name"/>
                    <input type="email" placeholder="Email"/>
                    <textarea rows=5 placeholder="What are we building?"></textarea>
                    <button type="submit" class="button primary">"Send message"</button>
                </form>
            </div>
        </section>
    }
}
