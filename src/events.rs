use crate::{contact, dom, motion};
use folio_core::events::{orientation_bindings, Binding, EventSource, Handler, BINDINGS};
use folio_core::events::{LOADER_ID, MENU_TOGGLE_ID, NAV_ID, SCROLL_PROGRESS_ID};
use folio_core::input::{MotionPermission, PointerState};
use folio_core::page::{self, NavMenu};
use folio_core::tilt::{self, Bounds, Tilt};
use folio_core::{AnimationContext, LOADER_HIDE_DELAY_MS};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Shared state every handler may reach.
#[derive(Clone)]
pub struct Wiring {
    pub window: web::Window,
    pub document: web::Document,
    pub pointer: Rc<RefCell<PointerState>>,
    pub anim: Rc<RefCell<AnimationContext>>,
    /// Absent when the backdrop could not be set up.
    pub canvas: Option<web::HtmlCanvasElement>,
    pub menu: Rc<RefCell<NavMenu>>,
    pub motion: Rc<RefCell<MotionPermission>>,
}

/// Attach every row of the binding table plus the orientation rows that fit
/// this platform.
pub fn wire_all(w: &Wiring) {
    let gated = motion::permission_api_present();
    *w.motion.borrow_mut() = MotionPermission::initial(gated);
    for binding in BINDINGS.iter().chain(orientation_bindings(gated)) {
        wire_binding(w, binding);
    }
}

pub fn wire_binding(w: &Wiring, binding: &Binding) {
    if let Some(missing) = binding
        .requires
        .iter()
        .find(|id| w.document.get_element_by_id(id).is_none())
    {
        log::debug!("[events] skip {:?}: #{} missing", binding.handler, missing);
        return;
    }
    let targets = resolve_targets(w, binding.source);
    if targets.is_empty() {
        log::debug!("[events] skip {:?}: no {:?}", binding.handler, binding.source);
        return;
    }
    let closure = Closure::wrap(make_handler(w, binding.handler));
    let options = web::AddEventListenerOptions::new();
    options.set_once(binding.once);
    for target in &targets {
        _ = target.add_event_listener_with_callback_and_add_event_listener_options(
            binding.kind.as_str(),
            closure.as_ref().unchecked_ref(),
            &options,
        );
    }
    closure.forget();
}

fn resolve_targets(w: &Wiring, source: EventSource) -> Vec<web::EventTarget> {
    match source {
        EventSource::Window => vec![w.window.clone().into()],
        EventSource::Document => vec![w.document.clone().into()],
        EventSource::Body => w.document.body().map(Into::into).into_iter().collect(),
        EventSource::Id(id) => w
            .document
            .get_element_by_id(id)
            .map(Into::into)
            .into_iter()
            .collect(),
        EventSource::Selector(sel) => dom::query_all(&w.document, sel)
            .into_iter()
            .map(Into::into)
            .collect(),
    }
}

pub fn make_handler(w: &Wiring, handler: Handler) -> Box<dyn FnMut(web::Event)> {
    let w = w.clone();
    match handler {
        Handler::TrackPointer => Box::new(move |ev: web::Event| {
            if let Some(m) = ev.dyn_ref::<web::MouseEvent>() {
                w.pointer
                    .borrow_mut()
                    .on_mouse_move(m.client_x() as f64, m.client_y() as f64);
            }
        }),
        Handler::TrackOrientation => Box::new(move |ev: web::Event| {
            if let Some(o) = ev.dyn_ref::<web::DeviceOrientationEvent>() {
                let (width, _) = dom::viewport_size(&w.window);
                w.pointer
                    .borrow_mut()
                    .on_orientation(o.beta(), o.gamma(), width);
            }
        }),
        Handler::RequestMotionPermission => Box::new(move |_ev: web::Event| {
            if w.motion.borrow_mut().on_gesture() {
                motion::request_permission(w.clone());
            }
        }),
        Handler::ResizeViewport => Box::new(move |_ev: web::Event| resize_viewport(&w)),
        Handler::ScrollProgress => {
            Box::new(move |_ev: web::Event| update_scroll_progress(&w.document))
        }
        Handler::HideLoader => Box::new(move |_ev: web::Event| hide_loader(&w.document)),
        Handler::ToggleMenu => Box::new(move |_ev: web::Event| {
            let open = w.menu.borrow_mut().toggle();
            apply_menu(&w.document, open);
        }),
        Handler::CloseMenu => Box::new(move |_ev: web::Event| {
            w.menu.borrow_mut().close();
            apply_menu(&w.document, false);
        }),
        Handler::SubmitContact => Box::new(move |ev: web::Event| contact::on_submit(&ev)),
        Handler::TiltCard => Box::new(move |ev: web::Event| {
            let (Some(el), Some(m)) = (current_html_element(&ev), ev.dyn_ref::<web::MouseEvent>())
            else {
                return;
            };
            let rect = el.get_bounding_client_rect();
            let bounds = Bounds {
                left: rect.left(),
                top: rect.top(),
                width: rect.width(),
                height: rect.height(),
            };
            let tilt = Tilt::at(&bounds, m.client_x() as f64, m.client_y() as f64);
            dom::set_style(&el, "transform", &tilt.hover_transform());
        }),
        Handler::ResetTilt => Box::new(move |ev: web::Event| {
            if let Some(el) = current_html_element(&ev) {
                dom::set_style(&el, "transform", &tilt::neutral_transform());
            }
        }),
    }
}

fn current_html_element(ev: &web::Event) -> Option<web::HtmlElement> {
    ev.current_target()
        .and_then(|t| t.dyn_into::<web::HtmlElement>().ok())
}

fn resize_viewport(w: &Wiring) {
    let (width, height) = dom::viewport_size(&w.window);
    w.pointer.borrow_mut().set_viewport(width, height);
    if let Some(canvas) = &w.canvas {
        dom::sync_canvas_backing_size(canvas);
    }
    w.anim
        .borrow_mut()
        .camera
        .set_viewport(width as f32, height as f32);
}

pub fn update_scroll_progress(document: &web::Document) {
    let Some(bar) = dom::html_element_by_id(document, SCROLL_PROGRESS_ID) else {
        return;
    };
    let Some(root) = document.document_element() else {
        return;
    };
    let mut top = root.scroll_top() as f64;
    if top == 0.0 {
        if let Some(body) = document.body() {
            top = body.scroll_top() as f64;
        }
    }
    let pct = page::scroll_progress_percent(
        top,
        root.scroll_height() as f64,
        root.client_height() as f64,
    );
    dom::set_style(&bar, "width", &page::percent_width(pct));
}

pub fn hide_loader(document: &web::Document) {
    if let Some(loader) = dom::html_element_by_id(document, LOADER_ID) {
        _ = loader.class_list().add_1(page::HIDDEN_CLASS);
        dom::set_timeout(LOADER_HIDE_DELAY_MS, move || {
            dom::set_style(&loader, "display", "none");
        });
    }
}

fn apply_menu(document: &web::Document, open: bool) {
    for id in [MENU_TOGGLE_ID, NAV_ID] {
        if let Some(el) = document.get_element_by_id(id) {
            _ = el.class_list().toggle_with_force(page::ACTIVE_CLASS, open);
        }
    }
}
