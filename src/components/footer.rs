use crate::theme::Theme;
use leptos::*;

/// Current calendar year, read from the browser clock. Called inside the
/// render closure so every render re-reads it; nothing is cached across a
/// year boundary.
fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

fn copyright_line(year: u32, owner: &str) -> String {
    format!("\u{a9} {year} {owner}")
}

#[component]
pub fn Footer(theme: Theme) -> impl IntoView {
    let owner = theme.content.owner;

    view! {
        <footer class="site-footer">
            <div class="footer-inner">
                <p>{move || copyright_line(current_year(), owner)}</p>
                <p class="footer-note">{theme.content.footer_note}</p>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_uses_the_year_it_is_given() {
        assert_eq!(copyright_line(2026, "your.name"), "\u{a9} 2026 your.name");
        // No caching: a different year in, a different line out.
        assert_eq!(copyright_line(2027, "your.name"), "\u{a9} 2027 your.name");
    }
}
