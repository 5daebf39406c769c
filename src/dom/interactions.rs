//! Decorative behaviour wired straight onto the rendered markup: card hover,
//! icon ripples, hero parallax and smooth anchor scrolling.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, MouseEvent, Window};

use super::frame::FrameLoop;
use super::handles::PageHandles;
use super::listener::Listener;
use super::style::{select_in_document, set_style};
use crate::animation::geometry::{magnet_tilt, parallax, ripple, Rect};
use crate::animation::scroll::{anchor_destination, ScrollAnimation};
use crate::config::HOVER_CARDS;

const LIFT: &str = "translateY(-12px) scale(1.02)";
const RIPPLE_MS: u32 = 600;
const PRESS_MS: u32 = 150;

/// Anchors that open the demo modal instead of scrolling.
const MODAL_TRIGGERS: [&str; 2] = ["openDemoModal", "heroDemoBtn"];

fn rect_of(element: &Element) -> Rect {
    let r = element.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

fn pointer(event: &Event) -> Option<(f64, f64)> {
    let mouse = event.dyn_ref::<MouseEvent>()?;
    Some((mouse.client_x() as f64, mouse.client_y() as f64))
}

/// Tweens the window to a vertical offset. Starting a new tween replaces the
/// one in flight.
pub struct SmoothScroller {
    animation: Rc<RefCell<Option<ScrollAnimation>>>,
    frames: FrameLoop,
    window: Window,
}

impl SmoothScroller {
    pub fn new(window: &Window) -> Self {
        let animation: Rc<RefCell<Option<ScrollAnimation>>> = Rc::new(RefCell::new(None));
        let frame_animation = animation.clone();
        let frame_window = window.clone();
        let frames = FrameLoop::new(move |now| {
            let mut slot = frame_animation.borrow_mut();
            let Some(animation) = slot.as_mut() else {
                return false;
            };
            if let Some(y) = animation.frame(now) {
                frame_window.scroll_to_with_x_and_y(0.0, y);
            }
            if animation.is_done() {
                *slot = None;
                return false;
            }
            true
        });
        Self {
            animation,
            frames,
            window: window.clone(),
        }
    }

    pub fn scroll_to(&self, y: f64) {
        let from = self.window.page_y_offset().unwrap_or(0.0);
        *self.animation.borrow_mut() = Some(ScrollAnimation::new(from, y));
        self.frames.start();
    }
}

pub struct Interactions {
    _listeners: Vec<Listener>,
    _parallax: Rc<FrameLoop>,
    _scroller: Rc<SmoothScroller>,
}

impl Interactions {
    pub fn install(window: &Window, document: &Document, handles: &PageHandles) -> Self {
        let mut listeners = Vec::new();

        for card in select_in_document(document, HOVER_CARDS) {
            listeners.extend(hover_card(&card));
        }
        for icon in select_in_document(document, ".icon") {
            listeners.push(ripple_icon(document, &icon));
        }

        let parallax_frames = {
            let handles = handles.clone();
            let window = window.clone();
            Rc::new(FrameLoop::new(move |_| {
                let scrolled = window.page_y_offset().unwrap_or(0.0);
                // an absent hero measures 0px tall and never produces layers
                if let Some(layers) = parallax(scrolled, handles.hero.offset_height()) {
                    handles
                        .hero_content
                        .set_style("transform", &format!("translateY({}px)", layers.content_offset));
                    handles.hero_visual.set_style(
                        "transform",
                        &format!("translateY({}px) scale({})", layers.visual_offset, layers.visual_scale),
                    );
                    handles
                        .hero
                        .set_style("background-position", &format!("center {}px", layers.background_offset));
                }
                false
            }))
        };
        {
            let frames = parallax_frames.clone();
            listeners.push(Listener::new(window, "scroll", move |_| frames.start()));
        }

        let scroller = Rc::new(SmoothScroller::new(window));
        for anchor in select_in_document(document, "a[href^=\"#\"]") {
            let is_modal_trigger =
                MODAL_TRIGGERS.contains(&anchor.id().as_str()) || anchor.class_list().contains("demo-btn");
            if is_modal_trigger {
                continue;
            }
            let scroller = scroller.clone();
            let document = document.clone();
            let handles = handles.clone();
            let href = anchor.get_attribute("href").unwrap_or_default();
            listeners.push(Listener::new(&anchor, "click", move |event| {
                event.prevent_default();
                let Some(target) = document
                    .query_selector(&href)
                    .ok()
                    .flatten()
                    .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                else {
                    return;
                };
                let destination = anchor_destination(target.offset_top() as f64, handles.navbar.offset_height());
                scroller.scroll_to(destination);
            }));
        }

        Self {
            _listeners: listeners,
            _parallax: parallax_frames,
            _scroller: scroller,
        }
    }
}

fn hover_card(card: &HtmlElement) -> [Listener; 3] {
    let lifted = card.clone();
    let enter = Listener::new(card, "mouseenter", move |_| {
        set_style(&lifted, "transform", LIFT);
        set_style(&lifted, "box-shadow", "0 32px 80px rgba(0, 0, 0, 0.12)");
        set_style(&lifted, "transition", "all 0.4s cubic-bezier(0.4, 0, 0.2, 1)");
    });

    let settled = card.clone();
    let leave = Listener::new(card, "mouseleave", move |_| {
        set_style(&settled, "transform", "translateY(0) scale(1)");
        set_style(&settled, "box-shadow", "0 16px 48px rgba(0, 0, 0, 0.04)");
    });

    let tilted = card.clone();
    let tilt = Listener::new(card, "mousemove", move |event| {
        let Some((x, y)) = pointer(&event) else {
            return;
        };
        let (rotate_x, rotate_y) = magnet_tilt(x, y, &rect_of(&tilted));
        set_style(
            &tilted,
            "transform",
            &format!("{} rotateX({}deg) rotateY({}deg)", LIFT, rotate_x, rotate_y),
        );
    });

    [enter, leave, tilt]
}

fn ripple_icon(document: &Document, icon: &HtmlElement) -> Listener {
    let document = document.clone();
    let target = icon.clone();
    Listener::new(icon, "click", move |event| {
        let icon = &target;
        if let Some((x, y)) = pointer(&event) {
            let geometry = ripple(x, y, &rect_of(icon));
            if let Ok(span) = document
                .create_element("span")
                .map(|el| el.unchecked_into::<HtmlElement>())
            {
                span.style().set_css_text(&format!(
                    "position: absolute; width: {size}px; height: {size}px; left: {left}px; top: {top}px; \
                     background: rgba(0, 0, 0, 0.1); border-radius: 50%; transform: scale(0); \
                     animation: ripple 0.6s linear; pointer-events: none;",
                    size = geometry.size,
                    left = geometry.left,
                    top = geometry.top,
                ));
                set_style(icon, "position", "relative");
                let _ = icon.append_child(&span);
                Timeout::new(RIPPLE_MS, move || span.remove()).forget();
            }
        }

        set_style(icon, "transform", "scale(0.9)");
        set_style(icon, "background", "rgba(0, 0, 0, 0.08)");
        let icon = icon.clone();
        Timeout::new(PRESS_MS, move || {
            set_style(&icon, "transform", "scale(1)");
            set_style(&icon, "background", "rgba(0, 0, 0, 0.03)");
        })
        .forget();
    })
}
