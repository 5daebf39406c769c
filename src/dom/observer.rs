use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};

/// Feature check for hosts without `IntersectionObserver`.
pub fn is_supported(window: &Window) -> bool {
    Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

/// Owned `IntersectionObserver`; disconnects on drop.
pub struct Observer {
    inner: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Observer {
    pub fn new<F>(threshold: Option<f64>, root_margin: Option<&str>, mut callback: F) -> Option<Self>
    where
        F: FnMut(Vec<IntersectionObserverEntry>, &IntersectionObserver) + 'static,
    {
        let callback = Closure::new(move |entries: Array, observer: IntersectionObserver| {
            let entries = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .collect();
            callback(entries, &observer);
        });

        let options = IntersectionObserverInit::new();
        if let Some(threshold) = threshold {
            options.set_threshold(&JsValue::from_f64(threshold));
        }
        if let Some(margin) = root_margin {
            options.set_root_margin(margin);
        }

        let inner = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
        Some(Self {
            inner,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &Element) {
        self.inner.observe(element);
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.inner.disconnect();
    }
}
