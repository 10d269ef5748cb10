use crate::content::SectionId;
use crate::theme::Theme;
use leptos::*;

#[component]
pub fn ProjectsSection(theme: Theme) -> impl IntoView {
    let c = theme.content;

    view! {
        <section id=SectionId::Projects.anchor() class="section projects">
            <div class="section-inner">
                <div class="section-head">
                    <h2>{c.projects_heading}</h2>
                    <a href=SectionId::Contact.href() class="aside-link">{c.projects_aside}</a>
                </div>
                <div class="project-grid">
                    {c.projects
                        .iter()
                        .map(|project| {
                            view! {
                                <article class="project-card">
                                    <div class="card-sheen" aria-hidden="true"></div>
                                    <h3>{project.title}</h3>
                                    <p>{project.blurb}</p>
                                    <div class="tag-row">
                                        {project
                                            .tags
                                            .iter()
                                            .map(|tag| view! { <span class="tag">{*tag}</span> })
                                            .collect_view()}
                                    </div>
                                    <span class="card-more">"Read more \u{2192}"</span>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
