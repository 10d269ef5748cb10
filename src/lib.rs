pub mod analytics;
pub mod components;
pub mod content;
pub mod pages;
pub mod theme;

use leptos::*;
use leptos_router::*;
use pages::{NotFoundPage, PortfolioPage};
use theme::Theme;
use wasm_bindgen::prelude::*;

/// Root component: error surface around the routed variants.
///
/// Each route is a fixed content set over the same component tree — `/`
/// serves the warm Ember variant, `/cosmos` the space one. There is no
/// runtime theme switching; picking a different look means loading a
/// different route.
#[component]
fn Root() -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|errors| view! {
            <main class="not-found">
                <h2>"Something went wrong"</h2>
                <p>"The page hit an unexpected error. A refresh usually clears it."</p>
                <ul>
                    {move || errors.get()
                        .into_iter()
                        .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                        .collect_view()
                    }
                </ul>
                <button on:click=|_| {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().reload();
                    }
                }>"Reload"</button>
            </main>
        }>
            <Router>
                <Routes>
                    <Route path="/" view=|| view! { <PortfolioPage theme=Theme::ember()/> }/>
                    <Route path="/cosmos" view=|| view! { <PortfolioPage theme=Theme::cosmos()/> }/>
                    <Route path="/*" view=NotFoundPage/>
                </Routes>
            </Router>
        </ErrorBoundary>
    }
}

/// Mount the application to the DOM
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(Root);
}
