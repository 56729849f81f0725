//! Browser-hosted WASM frontend for the desktop toolbox.
//!
//! The desktop host embeds this app in a webview and injects its capability
//! object into the page's global scope once startup finishes. The `web`
//! module resolves that object (tolerating a host that is still starting)
//! and drives a small hash-routed shell from a declarative page inventory.
//!
//! This crate is intentionally a stub by default so it builds and its unit
//! tests run on native targets without requiring wasm toolchains.
//!
//! Enable the real app with: `--features web` (and a wasm32 target).

pub mod bridge_model;
pub mod ui_model;

/// Placeholder function for non-web (or non-wasm) builds.
#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
pub fn placeholder() {
    // No-op.
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::start;
