#![cfg(target_arch = "wasm32")]
use folio_core::input::{MotionPermission, PointerState};
use folio_core::page::NavMenu;
use folio_core::{AnimationContext, SceneConfig, SectionTable};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod contact;
mod dom;
mod events;
mod frame;
mod motion;
mod observers;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let (vw, vh) = dom::viewport_size(&window);
    let pointer = Rc::new(RefCell::new(PointerState::new(vw, vh)));
    let mut rng = StdRng::from_entropy();
    let aspect = if vh > 0.0 { (vw / vh) as f32 } else { 1.0 };
    let anim = Rc::new(RefCell::new(AnimationContext::new(
        &SceneConfig::default(),
        SectionTable::portfolio(),
        aspect,
        &mut rng,
    )));

    let doc = document.clone();
    on_dom_ready(&document, move || {
        // The backdrop is optional; page utilities are wired either way
        let canvas = match dom::backdrop_canvas(&doc) {
            Ok(c) => {
                // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
                dom::sync_canvas_backing_size(&c);
                Some(c)
            }
            Err(e) => {
                log::warn!("backdrop canvas unavailable: {:?}", e);
                None
            }
        };
        let wiring = events::Wiring {
            window,
            document: doc,
            pointer: pointer.clone(),
            anim: anim.clone(),
            canvas: canvas.clone(),
            menu: Rc::new(RefCell::new(NavMenu::default())),
            motion: Rc::new(RefCell::new(MotionPermission::NotRequired)),
        };
        wire_page(&wiring);

        if let Some(canvas) = canvas {
            spawn_local(run_backdrop(canvas, anim, pointer, rng));
        }
    });
    Ok(())
}

async fn run_backdrop(
    canvas: web::HtmlCanvasElement,
    anim: Rc<RefCell<AnimationContext>>,
    pointer: Rc<RefCell<PointerState>>,
    rng: StdRng,
) {
    let Some(gpu) = frame::init_gpu(&canvas, &anim).await else {
        return;
    };
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        anim,
        pointer,
        canvas,
        gpu,
        rng,
        clock: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    log::info!("[frame] loop running");
}

fn wire_page(w: &events::Wiring) {
    events::wire_all(w);
    if let Err(e) = observers::wire_sections(&w.document, w.anim.clone()) {
        log::error!("section observer: {:?}", e);
    }
    if let Err(e) = observers::wire_fade_ins(&w.document) {
        log::error!("fade-in observer: {:?}", e);
    }
    // `load` already fired before we got here
    if w.document.ready_state() == web::DocumentReadyState::Complete {
        events::hide_loader(&w.document);
    }
}

/// Run `f` once the document has parsed: now, or on `DOMContentLoaded`.
fn on_dom_ready(document: &web::Document, f: impl FnOnce() + 'static) {
    if document.ready_state() != web::DocumentReadyState::Loading {
        f();
        return;
    }
    let closure = Closure::once(f);
    let options = web::AddEventListenerOptions::new();
    options.set_once(true);
    _ = document.add_event_listener_with_callback_and_add_event_listener_options(
        "DOMContentLoaded",
        closure.as_ref().unchecked_ref(),
        &options,
    );
    closure.forget();
}
