//! One-shot immersive capability probe, run once per mount.
//!
//! `navigator.xr` is reached through `js_sys::Reflect` so the probe works
//! whether or not the browser exposes WebXR at all; a missing or broken
//! API degrades to a web-only capability snapshot, never an error.

use viewer_core::{hints_from_user_agent, secure_context_allows_immersive, CapabilitySnapshot};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

pub async fn probe_capabilities() -> CapabilitySnapshot {
    let Some(window) = web::window() else {
        return CapabilitySnapshot::none();
    };
    let navigator = window.navigator();

    let ua = navigator.user_agent().unwrap_or_default();
    let hints = hints_from_user_agent(&ua);

    let location = window.location();
    let protocol = location.protocol().unwrap_or_default();
    let hostname = location.hostname().unwrap_or_default();
    let secure = secure_context_allows_immersive(&protocol, &hostname);

    let xr = js_sys::Reflect::get(navigator.as_ref(), &JsValue::from_str("xr"))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null());
    let Some(xr) = xr else {
        log::info!("[probe] navigator.xr absent; web mode only");
        return CapabilitySnapshot {
            hints,
            ..CapabilitySnapshot::none()
        };
    };

    let immersive_vr_supported = session_supported(&xr, "immersive-vr").await;
    let immersive_ar_supported = session_supported(&xr, "immersive-ar").await;
    let snapshot = CapabilitySnapshot {
        has_immersive_api: true,
        immersive_vr_supported,
        immersive_ar_supported,
        hints,
    }
    .gated(secure);
    log::info!(
        "[probe] vr={} ar={} secure={}",
        snapshot.immersive_vr_supported,
        snapshot.immersive_ar_supported,
        secure
    );
    snapshot
}

/// `xr.isSessionSupported(mode)`, with every failure mapped to `false`.
async fn session_supported(xr: &JsValue, mode: &str) -> bool {
    let Ok(method) = js_sys::Reflect::get(xr, &JsValue::from_str("isSessionSupported")) else {
        return false;
    };
    let Some(method) = method.dyn_ref::<js_sys::Function>() else {
        return false;
    };
    let Ok(promise) = method.call1(xr, &JsValue::from_str(mode)) else {
        return false;
    };
    let Ok(promise) = promise.dyn_into::<js_sys::Promise>() else {
        return false;
    };
    match JsFuture::from(promise).await {
        Ok(v) => v.as_bool().unwrap_or(false),
        Err(e) => {
            log::warn!("[probe] isSessionSupported({mode}) rejected: {:?}", e);
            false
        }
    }
}
