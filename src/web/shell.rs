use leptos::prelude::*;

use super::bridge::HostApi;
use super::router;
use crate::ui_model::{BridgeStatus, Page};

#[component]
pub(super) fn Topbar(bridge_status: ReadSignal<BridgeStatus>) -> impl IntoView {
    view! {
        <header class="app-header">
            <div class="app-header-left">
                <h1 class="brand">"Toolbox"</h1>
            </div>
            <div class="app-header-right">
                <span class=move || bridge_status.get().css_class()>
                    {move || bridge_status.get().label()}
                </span>
                <Show when=move || bridge_status.get() == BridgeStatus::Connected>
                    <span class="live-dot"></span>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub(super) fn Sidebar(page: ReadSignal<Page>) -> impl IntoView {
    view! {
        <aside class="sidebar">
            <div class="sidebar-header">
                <div class="sidebar-title">"Tools"</div>
            </div>
            <div class="sidebar-section">
                {Page::all()
                    .iter()
                    .map(|&p| {
                        view! {
                            <button
                                class=move || {
                                    if page.get() == p {
                                        "sidebar-item active"
                                    } else {
                                        "sidebar-item"
                                    }
                                }
                                on:click=move |_| router::navigate_to(p)
                            >
                                <span class="sidebar-ico">{p.icon()}</span>
                                <span class="sidebar-label">{p.title()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </aside>
    }
}

/// Uniform panel for the active route. View content proper is the host
/// application's business; the panel renders the route metadata and, for
/// tool pages, whether the host is there to back them.
#[component]
pub(super) fn PagePanel(
    page: ReadSignal<Page>,
    bridge_status: ReadSignal<BridgeStatus>,
    host_api: StoredValue<Option<HostApi>, LocalStorage>,
) -> impl IntoView {
    view! {
        <section class="panel">
            <h2 class="panel-title">{move || page.get().title()}</h2>
            <p class="panel-desc">{move || page.get().description()}</p>

            <Show when=move || page.get() == Page::Home>
                <div class="stat-grid">
                    <Stat label="Host" value=move || bridge_status.get().label().to_string() />
                    <Stat
                        label="Capability"
                        value=move || {
                            host_api
                                .with_value(|h| {
                                    h.as_ref().map(|api| format!("held ({})", api.type_name()))
                                })
                                .unwrap_or_else(|| "—".to_string())
                        }
                    />
                </div>
            </Show>

            <Show when=move || {
                page.get().needs_host() && bridge_status.get() == BridgeStatus::Detached
            }>
                <p class="panel-note">
                    "This tool needs the desktop host; it is unavailable in a plain browser."
                </p>
            </Show>
        </section>
    }
}

#[component]
fn Stat(label: &'static str, value: impl Fn() -> String + Send + 'static) -> impl IntoView {
    view! {
        <div class="stat-row">
            <div class="stat-label">{label}</div>
            <div class="stat-value">{value}</div>
        </div>
    }
}
