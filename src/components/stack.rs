use crate::content::SectionId;
use crate::theme::Theme;
use leptos::*;

#[component]
pub fn StackSection(theme: Theme) -> impl IntoView {
    let c = theme.content;

    view! {
        <section id=SectionId::Stack.anchor() class="section stack">
            <div class="section-inner">
                <h2>{c.stack_heading}</h2>
                <p class="section-lede">{c.stack_lede}</p>
                <div class="stack-grid">
                    {c.stack
                        .iter()
                        .map(|tool| view! { <div class="stack-tile">{*tool}</div> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
