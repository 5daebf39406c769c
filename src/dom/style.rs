use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::animation::reveal::RevealEffect;

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}

pub fn set_class(element: &Element, class: &str, on: bool) {
    let list = element.class_list();
    let _ = if on { list.add_1(class) } else { list.remove_1(class) };
}

/// All matches of `selector` under `root` that are `HtmlElement`s.
pub fn select_all(root: &Element, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn select_in_document(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Applies a reveal effect to the element it names. `Release` is left to the
/// caller since it concerns the observer, not the element.
pub fn apply_reveal(element: &HtmlElement, effect: &RevealEffect<usize>) {
    match effect {
        RevealEffect::Prepare {
            offset_px,
            transition,
            ..
        } => {
            set_style(element, "opacity", "0");
            set_style(element, "transform", &format!("translateY({}px)", offset_px));
            set_style(element, "transition", &transition.css());
        }
        RevealEffect::Reveal(_) => {
            set_style(element, "opacity", "1");
            set_style(element, "transform", "translateY(0)");
        }
        RevealEffect::CounterText { text, .. } => {
            element.set_text_content(Some(text));
        }
        RevealEffect::Release(_) => {}
    }
}
