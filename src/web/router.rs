use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::ui_model::Page;

pub(super) fn current_page() -> Page {
    let hash = web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default();
    Page::from_hash(&hash)
}

/// Navigate by writing the hash. The `hashchange` listener does the rest, so
/// programmatic and browser-initiated navigation share one code path.
pub(super) fn navigate_to(page: Page) {
    if let Some(w) = web_sys::window() {
        let _ = w.location().set_hash(&page.hash());
    }
}

/// Route titles double as the document title.
pub(super) fn apply_page_title(page: Page) {
    if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
        doc.set_title(&format!("{} · Toolbox", page.title()));
    }
}

/// Register a persistent `hashchange` listener. The closure lives for the
/// whole page; leak it.
pub(super) fn on_hash_change(f: impl Fn() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let cb = Closure::wrap(Box::new(move |_ev: web_sys::Event| f()) as Box<dyn FnMut(_)>);
    let _ = window.add_event_listener_with_callback("hashchange", cb.as_ref().unchecked_ref());
    cb.forget();
}
