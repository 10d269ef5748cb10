use leptos::*;

/// Opaque embed of a remotely hosted interactive 3D scene.
///
/// The `<spline-viewer>` element is defined by the viewer script loaded in
/// `index.html`; this component only hands it the scene descriptor URL and
/// stretches it over the parent. Whether the remote scene actually loads
/// is the viewer's own business — the content layers above it render
/// either way.
#[component]
pub fn SceneEmbed(scene_url: &'static str) -> impl IntoView {
    view! {
        <div class="scene-layer" aria-hidden="true">
            <spline-viewer url=scene_url></spline-viewer>
        </div>
    }
}
