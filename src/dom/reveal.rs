//! Binds [`RevealEngine`]s to the document.

use std::cell::RefCell;
use std::rc::Rc;

use log::{info, warn};
use web_sys::{Document, Element, HtmlElement, IntersectionObserver, Node, Window};

use super::frame::{now, FrameLoop};
use super::listener::Listener;
use super::observer::{self, Observer};
use super::style::{apply_reveal, select_all, select_in_document};
use crate::animation::counter::parse_target;
use crate::animation::geometry::{visibility, Rect};
use crate::animation::reveal::{Intersection, RevealConfig, RevealEffect, RevealEngine, TargetSpec};
use crate::config::COUNTER_SELECTOR;

/// One engine configuration plus the selectors that feed it.
pub struct RevealPass {
    pub config: RevealConfig,
    pub targets: &'static str,
    pub children: Option<&'static str>,
}

/// An engine and the elements its node keys index into.
struct Stage {
    engine: RevealEngine<usize>,
    nodes: Vec<HtmlElement>,
}

impl Stage {
    fn build(document: &Document, pass: &RevealPass) -> Self {
        let mut engine = RevealEngine::new(pass.config.clone());
        let mut nodes: Vec<HtmlElement> = Vec::new();

        for target in select_in_document(document, pass.targets) {
            let id = target.id();
            let children = pass
                .children
                .map(|selector| select_all(&target, selector))
                .unwrap_or_default();
            let counters: Vec<(HtmlElement, f64)> = select_all(&target, COUNTER_SELECTOR)
                .into_iter()
                .filter_map(|el| {
                    let value = parse_target(&el.get_attribute("data-target")?)?;
                    Some((el, value))
                })
                .collect();

            let mut spec = TargetSpec::new(nodes.len());
            nodes.push(target);
            if !id.is_empty() {
                spec = spec.with_id(id);
            }

            let mut child_keys = Vec::with_capacity(children.len());
            for child in children {
                child_keys.push(nodes.len());
                nodes.push(child);
            }
            let mut counter_keys = Vec::with_capacity(counters.len());
            for (el, value) in counters {
                counter_keys.push((nodes.len(), value));
                nodes.push(el);
            }

            engine.register(spec.with_children(child_keys).with_counters(counter_keys));
        }

        Self { engine, nodes }
    }

    fn target_of(&self, element: &Element) -> Option<usize> {
        let element: &Node = element;
        self.engine
            .pending()
            .find(|(_, node)| {
                self.nodes
                    .get(**node)
                    .map_or(false, |el| el.is_same_node(Some(element)))
            })
            .map(|(id, _)| id)
    }

    fn apply(&self, effects: &[RevealEffect<usize>], observer: Option<&IntersectionObserver>) {
        for effect in effects {
            let key = match effect {
                RevealEffect::Prepare { node, .. }
                | RevealEffect::Reveal(node)
                | RevealEffect::Release(node)
                | RevealEffect::CounterText { node, .. } => *node,
            };
            let Some(element) = self.nodes.get(key) else {
                continue;
            };
            match effect {
                RevealEffect::Release(_) => {
                    if let Some(observer) = observer {
                        observer.unobserve(element);
                    }
                }
                other => apply_reveal(element, other),
            }
        }
    }

    /// Geometry-based notifications for hosts without an observer.
    fn measure(&self, window: &Window) -> Vec<Intersection> {
        let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let viewport = Rect::new(0.0, 0.0, width, height);
        let margin = self.engine.config().root_margin;

        self.engine
            .pending()
            .filter_map(|(id, node)| {
                let rect = self.nodes.get(*node)?.get_bounding_client_rect();
                let rect = Rect::new(rect.left(), rect.top(), rect.width(), rect.height());
                let seen = visibility(&rect, &viewport, &margin);
                Some(Intersection {
                    target: id,
                    is_intersecting: seen.is_intersecting,
                    ratio: seen.ratio,
                })
            })
            .collect()
    }
}

/// Every installed reveal pass, driven by one shared frame loop.
pub struct RevealDriver {
    _observers: Vec<Observer>,
    _fallback: Option<Listener>,
    _frames: Rc<FrameLoop>,
}

impl RevealDriver {
    pub fn install(window: &Window, document: &Document, passes: &[RevealPass]) -> Self {
        let stages: Vec<Rc<RefCell<Stage>>> = passes
            .iter()
            .map(|pass| Rc::new(RefCell::new(Stage::build(document, pass))))
            .collect();

        for stage in &stages {
            let stage = stage.borrow();
            stage.apply(&stage.engine.setup_effects(), None);
        }

        let frames = {
            let stages = stages.clone();
            Rc::new(FrameLoop::new(move |now| {
                let mut busy = false;
                for stage in &stages {
                    let mut stage = stage.borrow_mut();
                    let effects = stage.engine.tick(now);
                    stage.apply(&effects, None);
                    busy |= !stage.engine.is_idle();
                }
                busy
            }))
        };

        let mut observers = Vec::new();
        let mut fallback = None;

        if observer::is_supported(window) {
            for stage in &stages {
                let (threshold, margin) = {
                    let config = stage.borrow().engine.config().clone();
                    (config.threshold, config.root_margin.css())
                };
                let callback_stage = stage.clone();
                let callback_frames = frames.clone();
                let observer = Observer::new(Some(threshold), Some(&margin), move |entries, observer| {
                    let mut stage = callback_stage.borrow_mut();
                    let batch: Vec<Intersection> = entries
                        .iter()
                        .filter_map(|entry| {
                            Some(Intersection {
                                target: stage.target_of(&entry.target())?,
                                is_intersecting: entry.is_intersecting(),
                                ratio: entry.intersection_ratio(),
                            })
                        })
                        .collect();
                    let effects = stage.engine.notify(now(), &batch);
                    stage.apply(&effects, Some(observer));
                    if !stage.engine.is_idle() {
                        callback_frames.start();
                    }
                });

                match observer {
                    Some(observer) => {
                        let stage = stage.borrow();
                        for (_, node) in stage.engine.pending() {
                            if let Some(element) = stage.nodes.get(*node) {
                                observer.observe(element);
                            }
                        }
                        observers.push(observer);
                    }
                    None => warn!("IntersectionObserver rejected its options; pass left hidden"),
                }
            }
        } else {
            warn!("IntersectionObserver unavailable, measuring on scroll instead");
            let stages = stages.clone();
            let frames = frames.clone();
            let measure_window = window.clone();
            let listener = Listener::new(window, "scroll", move |_| {
                let at = now();
                for stage in &stages {
                    let mut stage = stage.borrow_mut();
                    let batch = stage.measure(&measure_window);
                    let effects = stage.engine.notify(at, &batch);
                    stage.apply(&effects, None);
                    if !stage.engine.is_idle() {
                        frames.start();
                    }
                }
            });
            listener.fire();
            fallback = Some(listener);
        }

        let watched: usize = stages.iter().map(|s| s.borrow().engine.len()).sum();
        info!("Reveal engine watching {} targets across {} passes", watched, stages.len());

        Self {
            _observers: observers,
            _fallback: fallback,
            _frames: frames,
        }
    }
}
