use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::bridge_model::{close_race, probe, CapabilitySlot, Probe, RaceCheck};

/// Event the host dispatches on `window` once the capability slot is wired.
const READY_EVENT: &str = "pywebviewready";

/// Opaque handle to the host-injected API object. This crate never looks
/// inside it; consumers receive the reference as-is.
#[derive(Debug, Clone)]
pub(super) struct HostApi(JsValue);

impl HostApi {
    /// `typeof` of the underlying handle, for display only.
    pub(super) fn type_name(&self) -> String {
        self.0.js_typeof().as_string().unwrap_or_default()
    }
}

/// The capability slot as the host wires it: `window.pywebview.api`, read
/// via `Reflect` so a missing `pywebview` object is an empty slot, not an
/// exception.
struct WindowSlot<'a>(&'a web_sys::Window);

impl CapabilitySlot for WindowSlot<'_> {
    type Api = JsValue;

    fn read(&self) -> Option<JsValue> {
        read_api_slot(self.0)
    }
}

fn read_api_slot(window: &web_sys::Window) -> Option<JsValue> {
    let host = js_sys::Reflect::get(window.as_ref(), &JsValue::from_str("pywebview")).ok()?;
    if host.is_null() || host.is_undefined() {
        return None;
    }
    let api = js_sys::Reflect::get(&host, &JsValue::from_str("api")).ok()?;
    if api.is_null() || api.is_undefined() {
        None
    } else {
        Some(api)
    }
}

/// Resolve the host capability object, whether or not the host has finished
/// initializing at call time. Settles at most once and never fails: a
/// missing host is a `None`, not an error. No timeout is enforced; if the
/// host never signals readiness the future stays pending.
pub(super) async fn resolve_host_api() -> Option<HostApi> {
    let window = web_sys::window();
    let slot = window.as_ref().map(WindowSlot);

    match probe(slot.as_ref()) {
        Probe::NoEnvironment => return None,
        Probe::Ready(api) => return Some(HostApi(api)),
        Probe::AwaitSignal => {}
    }
    let Some(window) = window else {
        return None;
    };

    let settled = wasm_bindgen_futures::JsFuture::from(ready_promise(&window))
        .await
        .unwrap_or(JsValue::NULL);
    if settled.is_null() || settled.is_undefined() {
        None
    } else {
        Some(HostApi(settled))
    }
}

/// Promise that settles with the slot contents once the readiness event
/// fires, or immediately if the slot was filled between the caller's probe
/// and the listener registration. The listener is `once`, and the immediate
/// path removes it by hand, so no second settlement can reach the promise.
fn ready_promise(window: &web_sys::Window) -> js_sys::Promise {
    js_sys::Promise::new(&mut |resolve, _reject| {
        let resolve_on_ready = resolve.clone();
        let window_at_ready = window.clone();
        let on_ready = Closure::wrap(Box::new(move |_ev: web_sys::Event| {
            // Whatever the slot holds at firing time wins, even nothing: a
            // readiness signal with an empty slot settles as null.
            let api = read_api_slot(&window_at_ready).unwrap_or(JsValue::NULL);
            let _ = resolve_on_ready.call1(&JsValue::UNDEFINED, &api);
        }) as Box<dyn FnMut(_)>);

        let opts = web_sys::AddEventListenerOptions::new();
        opts.set_once(true);
        let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
            READY_EVENT,
            on_ready.as_ref().unchecked_ref(),
            &opts,
        );

        match close_race(&WindowSlot(window)) {
            RaceCheck::SettleNow(api) => {
                let _ = window.remove_event_listener_with_callback(
                    READY_EVENT,
                    on_ready.as_ref().unchecked_ref(),
                );
                let _ = resolve.call1(&JsValue::UNDEFINED, &api);
            }
            RaceCheck::KeepWaiting => {}
        }

        on_ready.forget();
    })
}
