use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use super::style::set_style;

/// An element that may or may not exist on the page, looked up once.
#[derive(Clone, Debug, Default)]
pub struct Handle(Option<HtmlElement>);

impl Handle {
    pub fn query(document: &Document, selector: &str) -> Self {
        Self(
            document
                .query_selector(selector)
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<HtmlElement>().ok()),
        )
    }

    pub fn set_style(&self, property: &str, value: &str) {
        if let Some(element) = &self.0 {
            set_style(element, property, value);
        }
    }

    pub fn offset_height(&self) -> f64 {
        self.0.as_ref().map_or(0.0, |el| el.offset_height() as f64)
    }
}

/// The long-lived elements the page glue talks to directly.
#[derive(Clone, Debug)]
pub struct PageHandles {
    pub body: Handle,
    pub navbar: Handle,
    pub hero: Handle,
    pub hero_content: Handle,
    pub hero_visual: Handle,
}

impl PageHandles {
    pub fn resolve(document: &Document) -> Self {
        Self {
            body: Handle(document.body()),
            navbar: Handle::query(document, ".navbar"),
            hero: Handle::query(document, ".hero"),
            hero_content: Handle::query(document, ".hero-content"),
            hero_visual: Handle::query(document, ".hero-visual"),
        }
    }

    pub fn lock_body(&self, locked: bool) {
        self.body.set_style("overflow", if locked { "hidden" } else { "" });
    }
}
