use log::info;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::js_sys::{Function, Promise, Reflect};
use web_sys::Document;

const ENTER: [&str; 3] = ["requestFullscreen", "webkitRequestFullscreen", "msRequestFullscreen"];
const EXIT: [&str; 3] = ["exitFullscreen", "webkitExitFullscreen", "msExitFullscreen"];
const CURRENT: [&str; 3] = ["fullscreenElement", "webkitFullscreenElement", "msFullscreenElement"];

/// Calls the first of `names` that `target` implements. Promise rejections are
/// logged rather than surfaced.
fn call_first(target: &JsValue, names: &[&str], action: &'static str) -> bool {
    for name in names {
        let Ok(method) = Reflect::get(target, &JsValue::from_str(name)) else {
            continue;
        };
        let Some(method) = method.dyn_ref::<Function>() else {
            continue;
        };
        match method.call0(target) {
            Ok(result) => {
                if let Ok(promise) = result.dyn_into::<Promise>() {
                    spawn_local(async move {
                        if let Err(err) = JsFuture::from(promise).await {
                            info!("Error attempting to {} fullscreen: {:?}", action, err);
                        }
                    });
                }
            }
            Err(err) => info!("Error attempting to {} fullscreen: {:?}", action, err),
        }
        return true;
    }
    false
}

pub fn enter(document: &Document) {
    if let Some(root) = document.document_element() {
        call_first(&root, &ENTER, "enable");
    }
}

pub fn is_active(document: &Document) -> bool {
    CURRENT.iter().any(|name| {
        Reflect::get(document, &JsValue::from_str(name))
            .map(|value| !value.is_null() && !value.is_undefined())
            .unwrap_or(false)
    })
}

pub fn exit(document: &Document) {
    if is_active(document) {
        call_first(document, &EXIT, "exit");
    }
}
