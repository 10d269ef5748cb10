use leptos::*;
use leptos_router::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <main class="not-found">
            <h1>"404"</h1>
            <p class="tagline">"Nothing out here but empty space."</p>
            <nav class="back-nav">
                <A href="/">"\u{2190} Back to the portfolio"</A>
            </nav>
        </main>
    }
}
