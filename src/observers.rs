use crate::dom;
use folio_core::page::{
    fade_styles, StyleDecl, FADE_HIDDEN_STYLES, FADE_SELECTOR, SECTION_SELECTOR, VISIBLE_CLASS,
};
use folio_core::{AnimationContext, FADE_VISIBILITY_THRESHOLD, SECTION_VISIBILITY_THRESHOLD};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type EntryCallback = Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

fn observe(
    document: &web::Document,
    selector: &str,
    threshold: f64,
    mut on_entry: impl FnMut(&web::Element, bool) + 'static,
    mut prepare: impl FnMut(&web::Element),
) -> anyhow::Result<()> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _obs: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                on_entry(&entry.target(), entry.is_intersecting());
            }
        },
    ) as EntryCallback);
    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    callback.forget();

    for el in dom::query_all(document, selector) {
        prepare(&el);
        observer.observe(&el);
    }
    Ok(())
}

/// Watch page sections: the first time a different section becomes dominant
/// the backdrop retargets and warps. Sections are marked `visible` for CSS.
pub fn wire_sections(
    document: &web::Document,
    anim: Rc<RefCell<AnimationContext>>,
) -> anyhow::Result<()> {
    observe(
        document,
        SECTION_SELECTOR,
        SECTION_VISIBILITY_THRESHOLD,
        move |el, intersecting| {
            let seen = anim.borrow_mut().observe_section(&el.id(), intersecting);
            if seen.is_some() {
                _ = el.class_list().add_1(VISIBLE_CLASS);
            }
        },
        |_| {},
    )
}

fn apply_styles(el: &web::Element, styles: &[StyleDecl]) {
    if let Some(el) = el.dyn_ref::<web::HtmlElement>() {
        for (property, value) in styles {
            dom::set_style(el, property, value);
        }
    }
}

/// Hide fade-in targets, then reveal each one the first time it shows.
pub fn wire_fade_ins(document: &web::Document) -> anyhow::Result<()> {
    observe(
        document,
        FADE_SELECTOR,
        FADE_VISIBILITY_THRESHOLD,
        |el, intersecting| {
            if let Some(styles) = fade_styles(intersecting) {
                apply_styles(el, styles);
            }
        },
        |el| apply_styles(el, &FADE_HIDDEN_STYLES),
    )
}
