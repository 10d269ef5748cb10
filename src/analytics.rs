use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = umami, js_name = track)]
    fn umami_track(event: &str);
}

/// Record a named interaction in Umami.
///
/// The tracker script is loaded (or not) by `index.html`. When it is
/// missing — adblocker, or a local build without the tag — this degrades
/// to a silent no-op instead of throwing into the console.
pub fn track_event(event: &str) {
    let loaded = js_sys::eval("typeof umami !== 'undefined'")
        .ok()
        .and_then(|v| v.as_bool())
        .unwrap_or(false);
    if loaded {
        umami_track(event);
    }
}
