//! Pointer wiring: move drives the orientation targets, down/up implement
//! marker clicks. A click only counts when down and up hit the same
//! marker, and a marker hit stops propagation so page-level handlers
//! never also fire.

use crate::{navigate_to, ViewerHandle};
use std::rc::Rc;
use viewer_core::HotspotKind;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub fn wire_pointer_handlers(handle: &Rc<ViewerHandle>) {
    wire_pointermove(handle);
    wire_pointerdown(handle);
    wire_pointerup(handle);
}

/// Pointer position normalized to [-1, 1] on both axes, y growing
/// downward as in client coordinates.
fn pointer_norm(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f64 - rect.left();
    let y_css = ev.client_y() as f64 - rect.top();
    let nx = (x_css / rect.width().max(1.0)) * 2.0 - 1.0;
    let ny = (y_css / rect.height().max(1.0)) * 2.0 - 1.0;
    (nx as f32, ny as f32)
}

fn pick_at(handle: &ViewerHandle, nx: f32, ny: f32) -> Option<usize> {
    let aspect = handle.canvas.width() as f32 / (handle.canvas.height() as f32).max(1.0);
    // NDC y grows upward
    handle.core.borrow().pick_hotspot_at(nx, -ny, aspect)
}

fn wire_pointermove(handle: &Rc<ViewerHandle>) {
    let h = handle.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !h.alive.get() {
            return;
        }
        let (nx, ny) = pointer_norm(&ev, &h.canvas);
        h.core.borrow_mut().orientation_mut().pointer_moved(nx, ny);
    }) as Box<dyn FnMut(_)>);
    _ = handle
        .canvas
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerdown(handle: &Rc<ViewerHandle>) {
    let h = handle.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !h.alive.get() {
            return;
        }
        let (nx, ny) = pointer_norm(&ev, &h.canvas);
        if let Some(i) = pick_at(&h, nx, ny) {
            ev.stop_propagation();
            ev.prevent_default();
            h.pressed_marker.set(Some(i));
        } else {
            h.pressed_marker.set(None);
        }
    }) as Box<dyn FnMut(_)>);
    _ = handle
        .canvas
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(handle: &Rc<ViewerHandle>) {
    let h = handle.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !h.alive.get() {
            return;
        }
        let pressed = h.pressed_marker.take();
        let (nx, ny) = pointer_norm(&ev, &h.canvas);
        let hit = pick_at(&h, nx, ny);
        if pressed.is_none() || hit != pressed {
            return;
        }
        ev.stop_propagation();
        ev.prevent_default();

        let index = pressed.unwrap_or_default();
        let hotspot = h.core.borrow_mut().hotspot_clicked(index);
        let Some(hotspot) = hotspot else { return };
        log::info!("[click] hotspot {} ({:?})", hotspot.id, hotspot.kind);

        if hotspot.kind == HotspotKind::Navigation {
            let target = h.core.borrow().navigation_target_index(&hotspot);
            if let Some(target) = target {
                navigate_to(&h, target);
            }
        }
        if let Some(cb) = h.on_hotspot.borrow().as_ref() {
            let payload = JsValue::from_serde(&hotspot).unwrap_or(JsValue::NULL);
            let _ = cb.call1(&JsValue::NULL, &payload);
        }
    }) as Box<dyn FnMut(_)>);
    _ = handle
        .canvas
        .add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    closure.forget();
}
