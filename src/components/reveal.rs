use leptos::*;

/// One-shot entrance transition for a block of content.
///
/// The wrapped block starts invisible and offset downward, then settles
/// into place after `delay_ms`. The `.reveal` keyframes in the stylesheet
/// drive the motion; it runs once per mount and is never reversed —
/// sections stay mounted for the page's whole life, so there is nothing
/// to undo.
#[component]
pub fn Reveal(#[prop(default = 0)] delay_ms: u32, children: Children) -> impl IntoView {
    view! {
        <div class="reveal" style=delay_style(delay_ms)>
            {children()}
        </div>
    }
}

fn delay_style(delay_ms: u32) -> String {
    format!("animation-delay: {delay_ms}ms")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_lands_in_the_inline_style() {
        assert_eq!(delay_style(0), "animation-delay: 0ms");
        assert_eq!(delay_style(450), "animation-delay: 450ms");
    }
}
