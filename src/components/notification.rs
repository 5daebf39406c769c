use yew::prelude::*;

use crate::controller::page::{MessagePhase, OverlayPhase};

#[derive(Properties, PartialEq)]
pub struct SuccessNotificationProps {
    pub visible: bool,
}

#[function_component(SuccessNotification)]
pub fn success_notification(props: &SuccessNotificationProps) -> Html {
    html! {
        <div id="successNotification" class={classes!("success-notification", props.visible.then_some("show"))}>
            <style>
                {r#"
                    .success-notification {
                        position: fixed;
                        top: 100px;
                        right: 24px;
                        max-width: 360px;
                        padding: 20px 24px;
                        border-radius: 16px;
                        background: #10b981;
                        color: #fff;
                        box-shadow: 0 16px 48px rgba(0, 0, 0, 0.15);
                        transform: translateX(120%);
                        opacity: 0;
                        transition: transform 0.4s cubic-bezier(0.4, 0, 0.2, 1), opacity 0.4s ease;
                        z-index: 10001;
                    }
                    .success-notification.show {
                        transform: translateX(0);
                        opacity: 1;
                    }
                    .success-notification h4 {
                        margin: 0 0 6px 0;
                    }
                    .success-notification p {
                        margin: 0;
                        font-size: 14px;
                    }
                "#}
            </style>
            <h4>{"Request received"}</h4>
            <p>{"Thanks! Our team will reach out within one business day to schedule your demo."}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingOverlayProps {
    pub phase: OverlayPhase,
    pub fade_ms: u32,
}

/// Full-page spinner shown until the page has finished loading.
#[function_component(LoadingOverlay)]
pub fn loading_overlay(props: &LoadingOverlayProps) -> Html {
    let opacity = match props.phase {
        OverlayPhase::Visible => "1",
        OverlayPhase::Fading => "0",
        OverlayPhase::Gone => return html! {},
    };

    html! {
        <div
            class="loading-overlay"
            style={format!(
                "position: fixed; inset: 0; background: #fff; display: flex; align-items: center; \
                 justify-content: center; z-index: 10000; opacity: {}; transition: opacity {}ms ease;",
                opacity, props.fade_ms
            )}
        >
            <div class="loading-spinner"></div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct EasterEggMessageProps {
    pub phase: MessagePhase,
    pub fade_ms: u32,
}

#[function_component(EasterEggMessage)]
pub fn easter_egg_message(props: &EasterEggMessageProps) -> Html {
    let (opacity, scale) = match props.phase {
        MessagePhase::Shown => ("1", "1"),
        MessagePhase::Fading => ("0", "0.8"),
        MessagePhase::Hidden => return html! {},
    };

    html! {
        <div
            class="easter-egg-message"
            style={format!(
                "position: fixed; top: 50%; left: 50%; transform: translate(-50%, -50%) scale({}); \
                 background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; \
                 padding: 2rem; border-radius: 20px; text-align: center; z-index: 10000; \
                 box-shadow: 0 20px 60px rgba(0, 0, 0, 0.3); opacity: {}; transition: all {}ms ease;",
                scale, opacity, props.fade_ms
            )}
        >
            <h3>{"🎉 Easter Egg Found!"}</h3>
            <p>{"You discovered the VoxEasy secret! 🚀"}</p>
            <small>{"Thanks for exploring our website thoroughly!"}</small>
        </div>
    }
}
