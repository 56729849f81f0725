//! The real app. Compiled only with `--features web` on `wasm32`.

mod bridge;
mod router;
mod shell;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::ui_model::BridgeStatus;
use bridge::HostApi;
use shell::{PagePanel, Sidebar, Topbar};

/// Mount the app. Called from the wasm entrypoint.
pub fn start() {
    mount_to_body(|| view! { <App /> });
}

#[component]
fn App() -> impl IntoView {
    let (page, set_page) = signal(router::current_page());
    let (bridge_status, set_bridge_status) = signal(BridgeStatus::Resolving);

    // The resolved capability handle lives here and is handed to whatever
    // needs it; nothing re-reads the global slot after bootstrap.
    let host_api: StoredValue<Option<HostApi>, LocalStorage> = StoredValue::new_local(None);

    // Keep the page signal in lockstep with the URL hash: back/forward,
    // reloads, and programmatic navigation all go through the hash.
    router::apply_page_title(page.get_untracked());
    router::on_hash_change(move || {
        let p = router::current_page();
        router::apply_page_title(p);
        set_page.set(p);
    });

    // Resolve the host bridge exactly once at bootstrap. A host that never
    // signals readiness leaves this pending and the topbar keeps showing the
    // resolving state.
    spawn_local(async move {
        match bridge::resolve_host_api().await {
            Some(api) => {
                host_api.set_value(Some(api));
                set_bridge_status.set(BridgeStatus::Connected);
            }
            None => set_bridge_status.set(BridgeStatus::Detached),
        }
    });

    view! {
        <Topbar bridge_status=bridge_status />
        <div class="layout">
            <Sidebar page=page />
            <main class="content">
                <PagePanel page=page bridge_status=bridge_status host_api=host_api />
            </main>
        </div>
    }
}
