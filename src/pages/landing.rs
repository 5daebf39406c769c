use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{info, warn};
use web_sys::{Document, ScrollBehavior, ScrollToOptions, Window};
use yew::functional::UseForceUpdateHandle;
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::components::demo_form::FormPlacement;
use crate::components::hero::Hero;
use crate::components::modals::{DemoModal, ImageModal, PreviewLoader};
use crate::components::navbar::Navbar;
use crate::components::notification::{EasterEggMessage, LoadingOverlay, SuccessNotification};
use crate::components::sections::Sections;
use crate::config::{LandingConfig, REVEAL_CARDS, STAGGER_CHILDREN};
use crate::controller::nav::menu_close_delay;
use crate::controller::page::{Dismissed, PageController};
use crate::dom::fullscreen;
use crate::dom::handles::PageHandles;
use crate::dom::interactions::Interactions;
use crate::dom::lazy_images;
use crate::dom::listener::Listener;
use crate::dom::observer::Observer;
use crate::dom::reveal::{RevealDriver, RevealPass};
use crate::dom::style::select_in_document;

/// Shared handle on the controller. Every mutation goes through
/// [`Page::update`], which redraws only when the controller reports a change.
#[derive(Clone)]
struct Page {
    state: Rc<RefCell<PageController>>,
    redraw: UseForceUpdateHandle,
}

impl Page {
    fn update(&self, f: impl FnOnce(&mut PageController) -> bool) {
        let changed = f(&mut self.state.borrow_mut());
        if changed {
            self.redraw.force_update();
        }
    }

    fn after(&self, ms: u32, f: impl FnOnce(&mut PageController) -> bool + 'static) {
        let page = self.clone();
        Timeout::new(ms, move || page.update(f)).forget();
    }

    fn config(&self) -> LandingConfig {
        self.state.borrow().config().clone()
    }

    fn begin_preview(&self, document: &Document) {
        let begun = self.state.borrow_mut().preview.begin();
        let Some(generation) = begun else {
            return;
        };
        self.redraw.force_update();

        let config = self.config();
        self.after(config.preview_loader_fade_in_ms, move |p| p.preview.show_loader(generation));
        fullscreen::enter(document);
        self.after(config.preview_open_delay_ms, move |p| p.preview.open(generation));
        self.after(
            config.preview_open_delay_ms + config.preview_loader_fade_out_ms,
            move |p| p.preview.drop_loader(generation),
        );
    }

    fn close_preview(&self, document: &Document) {
        self.update(|p| p.preview.close());
        fullscreen::exit(document);
    }

    fn start_easter_egg(&self, generation: u32) {
        let config = self.config();
        self.after(config.easter_egg_spin_ms, move |p| p.stop_logo_spin(generation));
        self.after(config.easter_egg_message_ms, move |p| p.fade_easter_egg(generation));
        self.after(
            config.easter_egg_message_ms + config.easter_egg_fade_ms,
            move |p| p.remove_easter_egg(generation),
        );
    }

    fn show_notice(&self) {
        let generation = self.state.borrow_mut().show_notice();
        self.redraw.force_update();
        self.after(self.config().notification_ms, move |p| p.hide_notice(generation));
    }

    fn dismiss_loading_overlay(&self) {
        let config = self.config();
        self.after(config.overlay_hold_ms, PageController::fade_overlay);
        self.after(config.overlay_hold_ms + config.overlay_fade_ms, PageController::remove_overlay);
    }
}

/// Everything attached to the document on mount; dropping it detaches.
struct Installed {
    handles: PageHandles,
    _reveal: RevealDriver,
    _images: Option<Observer>,
    _interactions: Interactions,
    _listeners: Vec<Listener>,
}

fn install(page: &Page, window: &Window, document: &Document) -> Installed {
    let config = page.config();
    let handles = PageHandles::resolve(document);

    let mut passes = vec![RevealPass {
        config: config.sections.clone(),
        targets: "section",
        children: Some(STAGGER_CHILDREN),
    }];
    if let Some(cards) = &config.cards {
        passes.push(RevealPass {
            config: cards.clone(),
            targets: REVEAL_CARDS,
            children: None,
        });
    }
    let reveal = RevealDriver::install(window, document, &passes);
    let images = lazy_images::install(window, document);
    let interactions = Interactions::install(window, document, &handles);

    let mut listeners = Vec::new();

    {
        let page = page.clone();
        let scroll_window = window.clone();
        let scroll_document = document.clone();
        listeners.push(Listener::new(window, "scroll", move |_| {
            let scroll_top = scroll_window.page_y_offset().unwrap_or(0.0);
            let sections: Vec<(String, f64)> = select_in_document(&scroll_document, "section[id]")
                .into_iter()
                .map(|section| (section.id(), section.offset_top() as f64))
                .collect();
            page.update(|p| p.on_scroll(scroll_top, &sections));
        }));
    }

    for event in ["fullscreenchange", "webkitfullscreenchange"] {
        let page = page.clone();
        let change_document = document.clone();
        listeners.push(Listener::new(document, event, move |_| {
            if !fullscreen::is_active(&change_document) {
                page.update(PageController::on_fullscreen_exit);
            }
        }));
    }

    if is_loaded(&document.ready_state()) {
        page.dismiss_loading_overlay();
    } else {
        let page = page.clone();
        listeners.push(Listener::new(window, "load", move |_| page.dismiss_loading_overlay()));
    }

    info!("Landing page interactions installed");

    Installed {
        handles,
        _reveal: reveal,
        _images: images,
        _interactions: interactions,
        _listeners: listeners,
    }
}

/// `document.readyState` once every subresource has finished loading.
fn is_loaded(ready_state: &str) -> bool {
    ready_state == "complete"
}

fn document() -> Option<Document> {
    web_sys::window()?.document()
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let state = use_mut_ref(|| PageController::new(LandingConfig::default()));
    let redraw = use_force_update();
    let page = Page { state, redraw };
    let installed: Rc<RefCell<Option<Installed>>> = use_mut_ref(|| None);

    {
        let page = page.clone();
        let installed = installed.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let document = window.as_ref().and_then(|w| w.document());
                match (window, document) {
                    (Some(window), Some(document)) => {
                        *installed.borrow_mut() = Some(install(&page, &window, &document));
                    }
                    _ => warn!("No window to attach to; page stays static"),
                }
                move || {
                    installed.borrow_mut().take();
                }
            },
            (),
        );
    }

    {
        let page = page.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            let outcome = page.state.borrow_mut().on_key(&e.key(), e.key_code());
            if !outcome.changed() {
                return;
            }
            page.redraw.force_update();
            if outcome.dismissed == Some(Dismissed::Preview) {
                if let Some(document) = document() {
                    fullscreen::exit(&document);
                }
            }
            if let Some(generation) = outcome.easter_egg {
                page.start_easter_egg(generation);
            }
        });
    }

    let snapshot = page.state.borrow().clone();

    {
        let installed = installed.clone();
        use_effect_with_deps(
            move |locked| {
                if let Some(installed) = installed.borrow().as_ref() {
                    installed.handles.lock_body(*locked);
                }
                || ()
            },
            snapshot.body_locked(),
        );
    }

    let on_toggle = {
        let page = page.clone();
        use_callback(
            move |_: (), _| {
                page.update(|p| {
                    p.toggle_menu();
                    true
                })
            },
            (),
        )
    };

    let on_link = {
        let page = page.clone();
        use_callback(
            move |index: usize, _| {
                let delay = menu_close_delay(index, page.config().menu_close_step_ms);
                page.after(delay, PageController::close_menu);
            },
            (),
        )
    };

    let on_demo = {
        let page = page.clone();
        use_callback(
            move |e: MouseEvent, _| {
                e.prevent_default();
                e.stop_propagation();
                page.update(PageController::open_demo);
            },
            (),
        )
    };

    let on_close_demo = {
        let page = page.clone();
        use_callback(move |_: (), _| page.update(PageController::close_demo), ())
    };

    let on_preview = {
        let page = page.clone();
        use_callback(
            move |_: MouseEvent, _| {
                if let Some(document) = document() {
                    page.begin_preview(&document);
                }
            },
            (),
        )
    };

    let on_close_preview = {
        let page = page.clone();
        use_callback(
            move |_: (), _| {
                if let Some(document) = document() {
                    page.close_preview(&document);
                }
            },
            (),
        )
    };

    let on_submitted = {
        let page = page.clone();
        use_callback(
            move |placement: FormPlacement, _| {
                page.show_notice();
                match placement {
                    FormPlacement::Modal => page.update(PageController::close_demo),
                    FormPlacement::Inline => scroll_to_top(),
                }
            },
            (),
        )
    };

    let config = snapshot.config();

    html! {
        <>
            <style>
                {r#"
                    * {
                        box-sizing: border-box;
                    }
                    body {
                        margin: 0;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        color: #0f172a;
                        background: #fff;
                    }
                    .navbar {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 1000;
                        backdrop-filter: blur(12px);
                        transition: transform 0.3s ease, background 0.3s ease, padding 0.3s ease;
                        padding: 20px 0;
                    }
                    .navbar-scrolled {
                        padding: 10px 0;
                        box-shadow: 0 4px 24px rgba(0, 0, 0, 0.06);
                    }
                    .navbar-hidden {
                        transform: translateY(-100%);
                    }
                    .nav-container {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 24px;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-menu {
                        display: flex;
                        gap: 28px;
                        list-style: none;
                        margin: 0;
                        padding: 0;
                    }
                    .nav-link {
                        color: inherit;
                        text-decoration: none;
                        opacity: 0.7;
                    }
                    .nav-link.active {
                        opacity: 1;
                        font-weight: 600;
                    }
                    .hamburger {
                        display: none;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .hamburger .bar {
                        display: block;
                        width: 24px;
                        height: 2px;
                        margin: 5px 0;
                        background: #0f172a;
                        transition: transform 0.3s ease, opacity 0.3s ease;
                    }
                    .hamburger.active .bar:nth-child(1) {
                        transform: translateY(7px) rotate(45deg);
                    }
                    .hamburger.active .bar:nth-child(2) {
                        opacity: 0;
                    }
                    .hamburger.active .bar:nth-child(3) {
                        transform: translateY(-7px) rotate(-45deg);
                    }
                    .logo-icon {
                        display: inline-block;
                    }
                    .container, .hero-container {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 24px;
                    }
                    section {
                        padding: 120px 0;
                    }
                    .hero {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        background: radial-gradient(circle at top right, #e0f2fe, #fff 60%);
                    }
                    .hero-card {
                        position: relative;
                        border-radius: 24px;
                        overflow: hidden;
                        cursor: zoom-in;
                    }
                    .hero-card img {
                        width: 100%;
                        display: block;
                    }
                    .problem-grid, .advantages-grid, .features-grid, .stats-grid,
                    .steps, .security-grid, .pricing-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                        gap: 24px;
                    }
                    .problem-card, .advantage-card, .feature-card, .step-card,
                    .security-item, .pricing-card, .outcome-card, .highlight-card {
                        padding: 32px;
                        border-radius: 20px;
                        background: #fff;
                        box-shadow: 0 16px 48px rgba(0, 0, 0, 0.04);
                    }
                    .icon {
                        width: 56px;
                        height: 56px;
                        border-radius: 16px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                        background: rgba(0, 0, 0, 0.03);
                        cursor: pointer;
                        transition: transform 0.15s ease, background 0.15s ease;
                    }
                    .stat-number {
                        font-size: 48px;
                        font-weight: 700;
                    }
                    .image-modal, .demo-modal {
                        position: fixed;
                        inset: 0;
                        z-index: 2000;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        opacity: 0;
                        visibility: hidden;
                        transition: opacity 0.3s ease, visibility 0.3s ease;
                    }
                    .image-modal.active, .demo-modal.active {
                        opacity: 1;
                        visibility: visible;
                    }
                    .modal-overlay {
                        position: absolute;
                        inset: 0;
                        background: rgba(15, 23, 42, 0.7);
                    }
                    .modal-content {
                        position: relative;
                        max-width: 640px;
                        width: 90%;
                        max-height: 90vh;
                        overflow: auto;
                        padding: 40px;
                        border-radius: 24px;
                        background: #fff;
                    }
                    .image-modal-content {
                        max-width: 95vw;
                        padding: 0;
                        background: transparent;
                    }
                    .image-modal-content img {
                        width: 100%;
                        display: block;
                    }
                    .modal-close {
                        position: absolute;
                        top: 12px;
                        right: 16px;
                        border: none;
                        background: none;
                        font-size: 28px;
                        cursor: pointer;
                    }
                    .loading-spinner {
                        width: 48px;
                        height: 48px;
                        border: 3px solid rgba(0, 0, 0, 0.08);
                        border-top-color: #1e90ff;
                        border-radius: 50%;
                        animation: spin 1s linear infinite;
                    }
                    .lazy {
                        filter: blur(8px);
                    }
                    @keyframes spin {
                        from { transform: rotate(0deg); }
                        to { transform: rotate(360deg); }
                    }
                    @keyframes ripple {
                        to { transform: scale(4); opacity: 0; }
                    }
                    @media (max-width: 768px) {
                        .hamburger {
                            display: block;
                        }
                        .nav-menu {
                            position: fixed;
                            top: 64px;
                            left: -100%;
                            width: 100%;
                            height: calc(100vh - 64px);
                            flex-direction: column;
                            align-items: center;
                            padding-top: 40px;
                            background: rgba(255, 255, 255, 0.98);
                            transition: left 0.3s ease;
                        }
                        .nav-menu.active {
                            left: 0;
                        }
                    }
                "#}
            </style>
            <LoadingOverlay phase={snapshot.overlay} fade_ms={config.overlay_fade_ms} />
            <Navbar
                menu_open={snapshot.nav.menu_open}
                scrolled={snapshot.nav.scrolled}
                hidden={snapshot.nav.hidden}
                active_section={snapshot.nav.active_section.clone()}
                background={snapshot.navbar_background()}
                logo_spinning={snapshot.easter_egg.logo_spinning}
                {on_toggle}
                {on_link}
                on_demo={on_demo.clone()}
            />
            <Hero on_preview={on_preview} {on_demo} />
            <Sections on_submitted={on_submitted.clone()} />
            <footer class="footer">
                <div class="container">
                    <p>{"© VoxEasy. Made for people who would rather be out in the field."}</p>
                    <a href="#home">{"Back to top"}</a>
                </div>
            </footer>
            <ImageModal open={snapshot.preview.open} on_close={on_close_preview} />
            <PreviewLoader loader={snapshot.preview.loader} fade_ms={config.preview_loader_fade_out_ms} />
            <DemoModal open={snapshot.demo_open} on_close={on_close_demo} {on_submitted} />
            <SuccessNotification visible={snapshot.notice.visible} />
            <EasterEggMessage phase={snapshot.easter_egg.message} fade_ms={config.easter_egg_fade_ms} />
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_waits_for_the_complete_ready_state() {
        assert!(is_loaded("complete"));
        assert!(!is_loaded("interactive"));
        assert!(!is_loaded("loading"));
    }
}
