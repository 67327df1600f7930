//! Canvas frame loop driven by requestAnimationFrame. Each tick advances
//! the core one frame (authority switch plus orientation smoothing) and
//! redraws; the id of the pending frame is kept so dispose can cancel it.

use crate::render::MarkerInstance;
use crate::ViewerHandle;
use std::rc::Rc;
use viewer_core::{MARKER_SCALE, MAX_MARKERS};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn start_loop(handle: Rc<ViewerHandle>) {
    let h = handle.clone();
    *handle.raf_tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !h.alive.get() {
            return;
        }
        tick(&h);
        if let Some(w) = web::window() {
            if let Ok(id) = w.request_animation_frame(
                h.raf_tick
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            ) {
                h.raf_id.set(Some(id));
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Ok(id) = w.request_animation_frame(
            handle
                .raf_tick
                .borrow()
                .as_ref()
                .unwrap()
                .as_ref()
                .unchecked_ref(),
        ) {
            handle.raf_id.set(Some(id));
        }
    }
}

fn tick(h: &ViewerHandle) {
    let orientation;
    let mut markers: Vec<MarkerInstance> = Vec::new();
    {
        let mut core = h.core.borrow_mut();
        core.begin_frame();
        orientation = core.orientation().orientation();
        if let Some(scene) = core.navigator().current() {
            for hotspot in scene.hotspots.iter().take(MAX_MARKERS) {
                markers.push(MarkerInstance {
                    pos: hotspot.position.to_array(),
                    scale: MARKER_SCALE,
                    icon: hotspot.icon().index(),
                    _pad: [0; 3],
                });
            }
        }
    }
    if let Some(gpu) = h.gpu.borrow_mut().as_mut() {
        gpu.resize_if_needed(h.canvas.width(), h.canvas.height());
        if let Err(e) = gpu.render(orientation, &markers) {
            log::error!("[frame] render error: {:?}", e);
        }
    }
}
