#![cfg(target_arch = "wasm32")]
//! WASM front-end for the panoramic tour viewer. The host page constructs
//! one viewer per canvas via [`mount_viewer`]; all cross-scene state lives
//! in the core crate and every platform effect (GPU, DOM, WebXR) is
//! executed here against the directives the core hands back.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use viewer_core::{CapabilitySnapshot, ModeDirective, PresentingChange, SessionEnd, ViewMode};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod probe;
mod render;
mod store;
mod texture;
mod xr;

pub(crate) type CoreViewer = viewer_core::Viewer<JsValue>;

/// Per-mount state shared by event closures, the frame loop, and the XR
/// plumbing. One instance per canvas; `dispose()` flips `alive` so stale
/// closures and late promises become no-ops.
pub(crate) struct ViewerHandle {
    pub alive: Cell<bool>,
    pub canvas: web::HtmlCanvasElement,
    pub core: RefCell<CoreViewer>,
    pub gpu: RefCell<Option<render::GpuState>>,
    pub raf_id: Cell<Option<i32>>,
    pub raf_tick: RefCell<Option<Closure<dyn FnMut()>>>,
    pub xr_tick: RefCell<Option<Closure<dyn FnMut(f64, JsValue)>>>,
    pub reference_space: RefCell<Option<JsValue>>,
    pub pressed_marker: Cell<Option<usize>>,
    pub texture_epoch: Cell<u64>,
    pub prompt_pending: Cell<bool>,
    pub on_hotspot: RefCell<Option<js_sys::Function>>,
    pub on_mode_decision: RefCell<Option<js_sys::Function>>,
    pub on_presenting: RefCell<Option<js_sys::Function>>,
    pub on_error: RefCell<Option<js_sys::Function>>,
}

impl ViewerHandle {
    pub(crate) fn emit_error(&self, message: &str) {
        log::error!("[viewer] {message}");
        if let Some(cb) = self.on_error.borrow().as_ref() {
            let _ = cb.call1(&JsValue::NULL, &JsValue::from_str(message));
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("viewer-web starting");
    Ok(())
}

/// Create a viewer on the given canvas, load the tour from the database
/// URL, and start rendering. The returned object owns the mount; call
/// `dispose()` before removing the canvas.
#[wasm_bindgen]
pub async fn mount_viewer(
    canvas_id: String,
    db_url: String,
    tour_id: String,
    initial_scene_id: Option<String>,
) -> Result<TourViewer, JsValue> {
    match mount_inner(&canvas_id, &db_url, &tour_id, initial_scene_id.as_deref()).await {
        Ok(v) => Ok(v),
        Err(e) => {
            log::error!("mount error: {:?}", e);
            Err(JsValue::from_str(&e.to_string()))
        }
    }
}

async fn mount_inner(
    canvas_id: &str,
    db_url: &str,
    tour_id: &str,
    initial_scene_id: Option<&str>,
) -> anyhow::Result<TourViewer> {
    let db = store::fetch_db(db_url).await?;
    let (tour, scenes, _issues) = db.load_tour(tour_id)?;
    log::info!(
        "[mount] tour {} mode {:?} with {} scene(s)",
        tour.id,
        tour.mode,
        scenes.len()
    );

    let canvas = dom::canvas_by_id(canvas_id)?;
    dom::wire_canvas_resize(&canvas);

    // Negotiation starts from an unknown capability snapshot so the first
    // frame never waits on the async probe; the settled probe renegotiates
    // below.
    let (core, _) = CoreViewer::new(tour, scenes, CapabilitySnapshot::none(), initial_scene_id);

    let gpu = render::GpuState::new(&canvas).await?;

    let handle = Rc::new(ViewerHandle {
        alive: Cell::new(true),
        canvas,
        core: RefCell::new(core),
        gpu: RefCell::new(Some(gpu)),
        raf_id: Cell::new(None),
        raf_tick: RefCell::new(None),
        xr_tick: RefCell::new(None),
        reference_space: RefCell::new(None),
        pressed_marker: Cell::new(None),
        texture_epoch: Cell::new(0),
        prompt_pending: Cell::new(false),
        on_hotspot: RefCell::new(None),
        on_mode_decision: RefCell::new(None),
        on_presenting: RefCell::new(None),
        on_error: RefCell::new(None),
    });

    // Presenting transitions reach the host through the callback channel.
    // The listener runs inside lifecycle calls, so it must not touch the
    // core cell.
    {
        let weak = Rc::downgrade(&handle);
        handle
            .core
            .borrow_mut()
            .lifecycle_mut()
            .subscribe(move |change| {
                if let Some(h) = weak.upgrade() {
                    let presenting = matches!(change, PresentingChange::Started);
                    if let Some(cb) = h.on_presenting.borrow().as_ref() {
                        let _ = cb.call1(&JsValue::NULL, &JsValue::from_bool(presenting));
                    }
                }
            });
    }
    let attach = handle.core.borrow_mut().lifecycle_mut().attach_renderer();
    xr::execute(&handle, attach);

    load_current_scene(&handle);
    events::wire_pointer_handlers(&handle);
    frame::start_loop(handle.clone());

    // Flat rendering is already under way; when the probe settles the
    // core renegotiates and may ask for a session or a prompt.
    {
        let handle = handle.clone();
        spawn_local(async move {
            let capability = probe::probe_capabilities().await;
            if !handle.alive.get() {
                return;
            }
            let directive = handle.core.borrow_mut().capability_resolved(capability);
            if let Some(directive) = directive {
                run_mode_directive(&handle, directive);
            }
        });
    }

    Ok(TourViewer { inner: handle })
}

pub(crate) fn run_mode_directive(handle: &Rc<ViewerHandle>, directive: ModeDirective) {
    match directive {
        ModeDirective::RequestSession => xr::request_session(handle.clone()),
        ModeDirective::PromptUser => {
            let cb = handle.on_mode_decision.borrow().clone();
            match cb {
                Some(cb) => {
                    let _ = cb.call0(&JsValue::NULL);
                }
                // The host has not registered the callback yet; fire it
                // as soon as it arrives.
                None => handle.prompt_pending.set(true),
            }
        }
    }
}

/// Switch the navigator to `index` and start the panorama swap.
pub(crate) fn navigate_to(handle: &Rc<ViewerHandle>, index: usize) {
    let switched = handle.core.borrow_mut().navigator_mut().select_by_index(index);
    if switched {
        load_current_scene(handle);
    }
}

/// Decode the current scene's panorama in the background and swap it in
/// when done. The epoch guard discards a decode that finishes after a
/// later navigation.
pub(crate) fn load_current_scene(handle: &Rc<ViewerHandle>) {
    let url = match handle.core.borrow().navigator().current() {
        Some(scene) => scene.image_url.clone(),
        None => return,
    };
    let epoch = handle.texture_epoch.get() + 1;
    handle.texture_epoch.set(epoch);

    let handle = handle.clone();
    spawn_local(async move {
        match texture::load_panorama_rgba(&url).await {
            Ok(img) => {
                if !handle.alive.get() || handle.texture_epoch.get() != epoch {
                    return; // superseded by a later navigation or dispose
                }
                if let Some(gpu) = handle.gpu.borrow_mut().as_mut() {
                    gpu.set_panorama_pixels(img.width, img.height, &img.rgba);
                    log::info!("[scene] panorama ready ({}x{})", img.width, img.height);
                }
            }
            Err(e) => {
                if handle.alive.get() && handle.texture_epoch.get() == epoch {
                    handle.emit_error(&format!("{e}"));
                }
            }
        }
    });
}

#[wasm_bindgen]
pub struct TourViewer {
    inner: Rc<ViewerHandle>,
}

#[wasm_bindgen]
impl TourViewer {
    pub fn mode(&self) -> String {
        match self.inner.core.borrow().mode() {
            ViewMode::Ask => "ask",
            ViewMode::Web => "web",
            ViewMode::Vr => "vr",
        }
        .to_string()
    }

    pub fn presenting(&self) -> bool {
        self.inner.core.borrow().presenting()
    }

    /// Whether host chrome should show an enter-VR affordance.
    pub fn show_enter_vr(&self) -> bool {
        self.inner.core.borrow().immersive_affordance_visible()
    }

    pub fn capability(&self) -> JsValue {
        JsValue::from_serde(self.inner.core.borrow().capability()).unwrap_or(JsValue::NULL)
    }

    pub fn scenes(&self) -> JsValue {
        JsValue::from_serde(self.inner.core.borrow().navigator().scenes()).unwrap_or(JsValue::NULL)
    }

    pub fn scene_count(&self) -> usize {
        self.inner.core.borrow().navigator().len()
    }

    pub fn current_scene_index(&self) -> usize {
        self.inner.core.borrow().navigator().current_index()
    }

    pub fn current_scene_id(&self) -> Option<String> {
        self.inner
            .core
            .borrow()
            .navigator()
            .current()
            .map(|s| s.id.clone())
    }

    pub fn next_scene(&self) {
        self.inner.core.borrow_mut().navigator_mut().next();
        load_current_scene(&self.inner);
    }

    pub fn prev_scene(&self) {
        self.inner.core.borrow_mut().navigator_mut().prev();
        load_current_scene(&self.inner);
    }

    pub fn select_scene(&self, index: usize) {
        navigate_to(&self.inner, index);
    }

    /// Answer the mode prompt with flat web viewing; terminal for this
    /// mount.
    pub fn select_web(&self) {
        self.inner.core.borrow_mut().select_web();
    }

    /// Answer the mode prompt with VR, or re-enter VR after a session
    /// ended.
    pub fn select_vr(&self) {
        let directive = self.inner.core.borrow_mut().select_vr();
        if let Some(directive) = directive {
            run_mode_directive(&self.inner, directive);
        }
    }

    /// Leave the immersive session and continue flat.
    pub fn exit_vr(&self) {
        let directives = self
            .inner
            .core
            .borrow_mut()
            .lifecycle_mut()
            .set_immersive_enabled(false);
        xr::execute(&self.inner, directives);
        let directives = self.inner.core.borrow_mut().session_ended(SessionEnd::User);
        xr::execute(&self.inner, directives);
    }

    /// The host closed the hotspot detail view.
    pub fn clear_interaction(&self) {
        self.inner.core.borrow_mut().clear_interaction();
    }

    pub fn set_on_hotspot_click(&self, callback: js_sys::Function) {
        self.inner.on_hotspot.replace(Some(callback));
    }

    pub fn set_on_mode_decision(&self, callback: js_sys::Function) {
        let fire = self.inner.prompt_pending.replace(false);
        if fire {
            let _ = callback.call0(&JsValue::NULL);
        }
        self.inner.on_mode_decision.replace(Some(callback));
    }

    pub fn set_on_presenting_change(&self, callback: js_sys::Function) {
        self.inner.on_presenting.replace(Some(callback));
    }

    pub fn set_on_error(&self, callback: js_sys::Function) {
        self.inner.on_error.replace(Some(callback));
    }

    /// Tear the mount down: end any session, stop the loops, release the
    /// GPU. Safe to call more than once.
    pub fn dispose(&self) {
        self.inner.alive.set(false);
        let directives = self.inner.core.borrow_mut().teardown();
        xr::execute(&self.inner, directives);
        if let Some(id) = self.inner.raf_id.take() {
            if let Some(w) = web::window() {
                let _ = w.cancel_animation_frame(id);
            }
        }
        self.inner.raf_tick.replace(None);
        log::info!("[viewer] disposed");
    }
}
