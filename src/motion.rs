use crate::events::{self, Wiring};
use folio_core::events::orientation_bindings;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// `DeviceOrientationEvent.requestPermission`, present on platforms that gate
/// motion sensors behind a user gesture.
fn permission_fn() -> Option<(JsValue, js_sys::Function)> {
    let window = web::window()?;
    let ctor = js_sys::Reflect::get(&window, &JsValue::from_str("DeviceOrientationEvent")).ok()?;
    if ctor.is_undefined() {
        return None;
    }
    let request = js_sys::Reflect::get(&ctor, &JsValue::from_str("requestPermission")).ok()?;
    let request = request.dyn_into::<js_sys::Function>().ok()?;
    Some((ctor, request))
}

pub fn permission_api_present() -> bool {
    permission_fn().is_some()
}

/// Ask for motion access; on grant attach the orientation listener. Denial
/// or a throwing request is logged and otherwise ignored.
///
/// Must be called from the gesture handler itself: the request is issued
/// before returning and only its answer is awaited later.
pub fn request_permission(w: Wiring) {
    let pending = ask();
    spawn_local(async move {
        let response = match pending {
            Ok(Some(promise)) => match JsFuture::from(promise).await {
                Ok(answer) => answer.as_string(),
                Err(e) => {
                    log::error!("[motion] permission request rejected: {:?}", e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                log::error!("[motion] permission request failed: {:?}", e);
                None
            }
        };
        let attach = w.motion.borrow_mut().resolve(response.as_deref());
        if attach {
            log::info!("[motion] permission granted");
            for binding in orientation_bindings(false) {
                events::wire_binding(&w, binding);
            }
        }
    });
}

fn ask() -> Result<Option<js_sys::Promise>, JsValue> {
    let Some((ctor, request)) = permission_fn() else {
        return Ok(None);
    };
    let promise = request.call0(&ctor)?.dyn_into::<js_sys::Promise>()?;
    Ok(Some(promise))
}
