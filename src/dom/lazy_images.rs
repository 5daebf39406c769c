use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlImageElement, Window};

use super::observer::{self, Observer};
use super::style::{select_in_document, set_class};

/// Swaps `data-src` into `src` as images scroll into view. Returns `None`
/// when the host has no `IntersectionObserver`; images then keep their
/// placeholder.
pub fn install(window: &Window, document: &Document) -> Option<Observer> {
    if !observer::is_supported(window) {
        return None;
    }

    let observer = Observer::new(None, None, |entries, observer| {
        for entry in entries.iter().filter(|e| e.is_intersecting()) {
            let target = entry.target();
            let Ok(image) = target.clone().dyn_into::<HtmlImageElement>() else {
                continue;
            };
            if let Some(src) = image.get_attribute("data-src") {
                debug!("Loading lazy image {}", src);
                image.set_src(&src);
            }
            set_class(&target, "lazy", false);
            observer.unobserve(&target);
        }
    })?;

    for image in select_in_document(document, "img[data-src]") {
        observer.observe(&image);
    }
    Some(observer)
}
