use log::{info, Level};
use yew::prelude::*;

mod config;
mod animation {
    pub mod counter;
    pub mod easing;
    pub mod geometry;
    pub mod reveal;
    pub mod scroll;
    pub mod timeline;
}
mod controller {
    pub mod konami;
    pub mod modal;
    pub mod nav;
    pub mod page;
}
mod form {
    pub mod submit;
    pub mod validation;
}
mod dom {
    pub mod frame;
    pub mod fullscreen;
    pub mod handles;
    pub mod interactions;
    pub mod lazy_images;
    pub mod listener;
    pub mod observer;
    pub mod reveal;
    pub mod style;
}
mod components {
    pub mod demo_form;
    pub mod hero;
    pub mod modals;
    pub mod navbar;
    pub mod notification;
    pub mod sections;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <main>
            <Landing />
        </main>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
