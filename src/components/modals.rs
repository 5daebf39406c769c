use yew::prelude::*;

use super::demo_form::{DemoForm, FormPlacement};
use crate::controller::modal::Loader;

pub const HERO_IMAGE_SRC: &str = "/assets/voxeasy-dashboard.png";

#[derive(Properties, PartialEq)]
pub struct ImageModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(ImageModal)]
pub fn image_modal(props: &ImageModalProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div id="imageModal" class={classes!("image-modal", props.open.then_some("active"))}>
            <div class="modal-overlay" onclick={close.clone()}></div>
            <div class="modal-content image-modal-content">
                <button class="modal-close" aria-label="Close preview" onclick={close}>{"×"}</button>
                <img src={HERO_IMAGE_SRC} alt="VoxEasy dashboard" />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DemoModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub on_submitted: Callback<FormPlacement>,
}

#[function_component(DemoModal)]
pub fn demo_modal(props: &DemoModalProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div id="demoModal" class={classes!("demo-modal", props.open.then_some("active"))}>
            <div class="modal-overlay" onclick={close.clone()}></div>
            <div class="modal-content">
                <button class="modal-close" aria-label="Close" onclick={close}>{"×"}</button>
                <h2>{"Book a demo"}</h2>
                <p>{"See how VoxEasy fits your team in a 30 minute walkthrough."}</p>
                <DemoForm
                    placement={FormPlacement::Modal}
                    submit_label="Request Demo"
                    on_submitted={props.on_submitted.clone()}
                />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PreviewLoaderProps {
    pub loader: Loader,
    pub fade_ms: u32,
}

/// The "Entering VoxEasy..." screen covering the switch to fullscreen.
#[function_component(PreviewLoader)]
pub fn preview_loader(props: &PreviewLoaderProps) -> Html {
    let opacity = match props.loader {
        Loader::Absent => return html! {},
        Loader::Mounted | Loader::Fading => "0",
        Loader::Shown => "1",
    };

    html! {
        <div
            id="modalLoader"
            style={format!(
                "position: fixed; inset: 0; background: linear-gradient(135deg, #0f172a 0%, #1e293b 100%); \
                 display: flex; flex-direction: column; align-items: center; justify-content: center; \
                 z-index: 10002; opacity: {}; transition: opacity {}ms ease;",
                opacity, props.fade_ms
            )}
        >
            <div class="loading-spinner" style="border-color: rgba(255, 255, 255, 0.15); border-top-color: #fff;"></div>
            <div style="margin-top: 24px; color: #fff; font-size: 18px; letter-spacing: 0.05em;">
                {"Entering VoxEasy..."}
            </div>
        </div>
    }
}
