//! WebXR plumbing. The session state machine lives in the core crate;
//! this module executes its directives against the browser and feeds
//! session events and head poses back in.
//!
//! XR objects are reached dynamically through `js_sys::Reflect`, the same
//! way the host page would write `navigator.xr`, so nothing here assumes
//! the API exists until the capability probe has said it does.

use crate::ViewerHandle;
use glam::{EulerRot, Quat};
use std::rc::Rc;
use viewer_core::{Directives, SessionDirective, SessionEnd};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Execute an ordered directive list from the session lifecycle.
pub(crate) fn execute(handle: &Rc<ViewerHandle>, directives: Directives<JsValue>) {
    for directive in directives {
        match directive {
            SessionDirective::SetRendererImmersive(on) => {
                log::info!("[xr] renderer immersive: {on}");
            }
            SessionDirective::EndSession(session) => end_session(&session),
            SessionDirective::DetachSession => {
                handle.reference_space.replace(None);
            }
            SessionDirective::StopFrameLoop => {
                // Drops the XR pose loop; the canvas loop is owned by
                // dispose.
                handle.xr_tick.replace(None);
            }
            SessionDirective::ReleaseGraphics => {
                handle.gpu.replace(None);
            }
        }
    }
}

/// Begin an immersive session request. Enables the renderer flag first,
/// then races the browser's consent prompt against possible teardown; the
/// lifecycle decides what happens when the promise settles.
pub(crate) fn request_session(handle: Rc<ViewerHandle>) {
    let directives = handle
        .core
        .borrow_mut()
        .lifecycle_mut()
        .set_immersive_enabled(true);
    execute(&handle, directives);
    let accepted = handle.core.borrow_mut().lifecycle_mut().begin_request();
    if !accepted {
        log::info!("[xr] session request ignored (already in flight or presenting)");
        return;
    }
    spawn_local(async move {
        match request_immersive_session().await {
            Ok(session) => on_session_created(handle, session),
            Err(e) => {
                handle.core.borrow_mut().lifecycle_mut().request_failed();
                handle.emit_error(&format!("immersive session request failed: {:?}", e));
            }
        }
    });
}

fn on_session_created(handle: Rc<ViewerHandle>, session: JsValue) {
    if !handle.alive.get() {
        // The viewer was disposed while the consent prompt was open.
        end_session(&session);
        return;
    }
    wire_end_event(&handle, &session);
    let directives = handle
        .core
        .borrow_mut()
        .lifecycle_mut()
        .session_created(session.clone());
    if !directives.is_empty() {
        // The lifecycle rejected the session (teardown or disable raced
        // the request); it hands back the end directive.
        execute(&handle, directives);
        return;
    }
    log::info!("[xr] immersive session started");
    start_pose_loop(handle, session);
}

/// `session.end()`; the promise is intentionally ignored, the `end` event
/// is the source of truth.
fn end_session(session: &JsValue) {
    if let Ok(end) = js_sys::Reflect::get(session, &JsValue::from_str("end")) {
        if let Some(end) = end.dyn_ref::<js_sys::Function>() {
            let _ = end.call0(session);
        }
    }
}

fn wire_end_event(handle: &Rc<ViewerHandle>, session: &JsValue) {
    let Some(target) = session.dyn_ref::<web::EventTarget>() else {
        log::warn!("[xr] session is not an EventTarget; end event not wired");
        return;
    };
    let h = handle.clone();
    let closure = Closure::wrap(Box::new(move || {
        if !h.alive.get() {
            return;
        }
        log::info!("[xr] immersive session ended");
        let directives = h.core.borrow_mut().session_ended(SessionEnd::User);
        execute(&h, directives);
    }) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback("end", closure.as_ref().unchecked_ref());
    closure.forget();
}

async fn request_immersive_session() -> Result<JsValue, JsValue> {
    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let xr = js_sys::Reflect::get(window.navigator().as_ref(), &JsValue::from_str("xr"))?;
    if xr.is_undefined() || xr.is_null() {
        return Err(JsValue::from_str("navigator.xr unavailable"));
    }
    let request = js_sys::Reflect::get(&xr, &JsValue::from_str("requestSession"))?
        .dyn_into::<js_sys::Function>()?;
    let promise = request
        .call1(&xr, &JsValue::from_str("immersive-vr"))?
        .dyn_into::<js_sys::Promise>()?;
    JsFuture::from(promise).await
}

async fn request_reference_space(session: &JsValue) -> Result<JsValue, JsValue> {
    let request = js_sys::Reflect::get(session, &JsValue::from_str("requestReferenceSpace"))?
        .dyn_into::<js_sys::Function>()?;
    let promise = request
        .call1(session, &JsValue::from_str("local"))?
        .dyn_into::<js_sys::Promise>()?;
    JsFuture::from(promise).await
}

/// Per-XR-frame head pose sampling. The device pose drives orientation
/// directly while presenting; the canvas loop keeps rendering the same
/// orientation as a mirror view.
fn start_pose_loop(handle: Rc<ViewerHandle>, session: JsValue) {
    spawn_local(async move {
        let space = match request_reference_space(&session).await {
            Ok(s) => s,
            Err(e) => {
                handle.emit_error(&format!("reference space unavailable: {:?}", e));
                return;
            }
        };
        handle.reference_space.replace(Some(space));

        let h = handle.clone();
        let session_tick = session.clone();
        let tick = Closure::wrap(Box::new(move |_time: f64, xr_frame: JsValue| {
            if !h.alive.get() || h.xr_tick.borrow().is_none() {
                return;
            }
            let pose = {
                let space = h.reference_space.borrow();
                space.as_ref().and_then(|s| sample_pose(&xr_frame, s))
            };
            if let Some((yaw, pitch)) = pose {
                h.core
                    .borrow_mut()
                    .orientation_mut()
                    .set_head_pose(yaw, pitch);
            }
            request_xr_frame(&session_tick, &h);
        }) as Box<dyn FnMut(f64, JsValue)>);
        handle.xr_tick.replace(Some(tick));
        request_xr_frame(&session, &handle);
    });
}

fn request_xr_frame(session: &JsValue, handle: &Rc<ViewerHandle>) {
    let tick = handle.xr_tick.borrow();
    let Some(tick) = tick.as_ref() else { return };
    let Ok(request) = js_sys::Reflect::get(session, &JsValue::from_str("requestAnimationFrame"))
    else {
        return;
    };
    let Some(request) = request.dyn_ref::<js_sys::Function>() else {
        return;
    };
    let _ = request.call1(session, tick.as_ref().unchecked_ref());
}

/// Extract yaw and pitch from `frame.getViewerPose(space)`. Roll is
/// dropped; the viewer never applies roll to the flat camera.
fn sample_pose(xr_frame: &JsValue, space: &JsValue) -> Option<(f32, f32)> {
    let get_pose = js_sys::Reflect::get(xr_frame, &JsValue::from_str("getViewerPose"))
        .ok()?
        .dyn_into::<js_sys::Function>()
        .ok()?;
    let pose = get_pose.call1(xr_frame, space).ok()?;
    if pose.is_undefined() || pose.is_null() {
        return None;
    }
    let transform = js_sys::Reflect::get(&pose, &JsValue::from_str("transform")).ok()?;
    let orientation = js_sys::Reflect::get(&transform, &JsValue::from_str("orientation")).ok()?;
    let component = |key: &str| {
        js_sys::Reflect::get(&orientation, &JsValue::from_str(key))
            .ok()
            .and_then(|v| v.as_f64())
    };
    let quat = Quat::from_xyzw(
        component("x")? as f32,
        component("y")? as f32,
        component("z")? as f32,
        component("w")? as f32,
    );
    let (yaw, pitch, _roll) = quat.to_euler(EulerRot::YXZ);
    Some((yaw, pitch))
}
