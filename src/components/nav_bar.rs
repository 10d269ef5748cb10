use std::cell::Cell;

use crate::analytics::track_event;
use crate::components::{IconClose, IconGithub, IconLinkedin, IconMail, IconMenu};
use crate::content::{SectionId, SocialKind, SocialLink, NAV_LINKS};
use crate::theme::Theme;
use leptos::*;

thread_local! {
    static MENU_TRACKED: Cell<bool> = const { Cell::new(false) };
}

/// Emit the analytics event once per page load, on first use of the
/// disclosure control.
fn track_first_menu_use() {
    MENU_TRACKED.with(|tracked| {
        if !tracked.get() {
            tracked.set(true);
            track_event("menu-used");
        }
    });
}

/// Disclosure state of the small-viewport navigation panel.
///
/// Owned by [`NavBar`]; nothing else writes it, and a full page reload is
/// the only other way it changes (back to `Closed`). Activating the toggle
/// flips it; picking a destination from the open panel dismisses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn dismissed(self) -> Self {
        MenuState::Closed
    }

    pub fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }
}

fn social_icon_link(social: SocialLink) -> View {
    let glyph = match social.kind {
        SocialKind::GitHub => view! { <IconGithub/> }.into_view(),
        SocialKind::LinkedIn => view! { <IconLinkedin/> }.into_view(),
        SocialKind::Email => view! { <IconMail/> }.into_view(),
    };
    if social.kind == SocialKind::Email {
        // The header mail glyph jumps to the contact section; the real
        // mailto link lives down there.
        view! {
            <a href=SectionId::Contact.href() class="icon-link accent" aria-label="Contact">
                {glyph}
            </a>
        }
        .into_view()
    } else {
        view! {
            <a href=social.href target="_blank" rel="noreferrer" class="icon-link"
                aria-label=social.label>
                {glyph}
            </a>
        }
        .into_view()
    }
}

/// Fixed header: brand mark, desktop link row, and the mobile disclosure
/// panel. Navigation itself is native in-page scrolling; this component
/// only shows and hides things.
#[component]
pub fn NavBar(theme: Theme) -> impl IntoView {
    let (menu, set_menu) = create_signal(MenuState::default());

    let toggle = move |_| {
        set_menu.update(|state| *state = state.toggled());
        track_first_menu_use();
    };
    let dismiss = move |_| set_menu.update(|state| *state = state.dismissed());

    let socials = theme.content.socials;

    view! {
        <header class="site-nav">
            <div class="nav-shell">
                <a href=SectionId::Home.href() class="nav-brand">
                    <span class="brand-dot" aria-hidden="true"></span>
                    <span>{theme.content.owner}</span>
                </a>
                <nav class="nav-links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| view! { <a href=link.target.href()>{link.label}</a> })
                        .collect_view()}
                    <span class="nav-divider" aria-hidden="true"></span>
                    <span class="nav-socials">
                        {socials.iter().map(|s| social_icon_link(*s)).collect_view()}
                    </span>
                </nav>
                <button
                    class="menu-toggle"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu.get().is_open().to_string()
                    on:click=toggle
                >
                    {move || if menu.get().is_open() {
                        view! { <IconClose size=20/> }.into_view()
                    } else {
                        view! { <IconMenu size=20/> }.into_view()
                    }}
                </button>
            </div>
            <Show when=move || menu.get().is_open()>
                <div class="menu-panel">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a href=link.target.href() on:click=dismiss>{link.label}</a>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
    }

    #[test]
    fn toggling_alternates_and_pairs_cancel() {
        let mut state = MenuState::default();
        for round in 1..=6 {
            state = state.toggled();
            if round % 2 == 1 {
                assert_eq!(state, MenuState::Open, "odd toggle #{round}");
            } else {
                assert_eq!(state, MenuState::Closed, "even toggle #{round}");
            }
        }
    }

    #[test]
    fn picking_a_destination_dismisses() {
        assert_eq!(MenuState::Open.dismissed(), MenuState::Closed);
        // Dismissal from Closed is a no-op, not a flip.
        assert_eq!(MenuState::Closed.dismissed(), MenuState::Closed);
    }

    #[test]
    fn open_is_the_only_open_state() {
        assert!(MenuState::Open.is_open());
        assert!(!MenuState::Closed.is_open());
    }
}
