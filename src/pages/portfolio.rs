use crate::components::{
    AboutSection, ContactSection, Footer, HeroSection, NavBar, ProjectsSection, StackSection,
};
use crate::theme::Theme;
use leptos::*;

/// The whole site as one composed view, top to bottom. Which look you get
/// is decided entirely by the [`Theme`] handed in; the tree itself is
/// identical for every variant.
#[component]
pub fn PortfolioPage(theme: Theme) -> impl IntoView {
    view! {
        <div class="site" data-theme=theme.slug()>
            <NavBar theme=theme/>
            <main>
                <HeroSection theme=theme/>
                <AboutSection theme=theme/>
                <ProjectsSection theme=theme/>
                <StackSection theme=theme/>
                <ContactSection theme=theme/>
            </main>
            <Footer theme=theme/>
        </div>
    }
}
