use yew::prelude::*;

use super::modals::HERO_IMAGE_SRC;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_preview: Callback<MouseEvent>,
    pub on_demo: Callback<MouseEvent>,
}

/// Hero section. The content and visual columns are moved by the parallax
/// handler, so they carry no inline style of their own.
#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    html! {
        <section id="home" class="hero">
            <div class="hero-container">
                <div class="hero-content">
                    <span class="hero-badge">{"Voice-first documentation"}</span>
                    <h1 class="hero-title">{"Say it once. VoxEasy writes it down."}</h1>
                    <p class="hero-subtitle">
                        {"Field teams speak their notes and VoxEasy turns them into structured, searchable reports before they are back at their desk."}
                    </p>
                    <div class="hero-actions">
                        <a href="#" id="heroDemoBtn" class="btn btn-primary" onclick={props.on_demo.clone()}>
                            {"Book a Demo"}
                        </a>
                        <a href="#how-it-works" class="btn btn-secondary">{"See how it works"}</a>
                    </div>
                </div>
                <div class="hero-visual">
                    <div class="hero-card">
                        <img
                            id="heroImage"
                            src={HERO_IMAGE_SRC}
                            alt="VoxEasy dashboard"
                            onclick={props.on_preview.clone()}
                        />
                        <span class="preview-hint" onclick={props.on_preview.clone()}>
                            {"Click to preview"}
                        </span>
                    </div>
                </div>
            </div>
        </section>
    }
}
