use yew::prelude::*;
use log::info;

mod config;
mod dom;
mod error;
mod observer;
mod slider;
mod components {
    pub mod cookie_notice;
    pub mod lazy_image;
    pub mod modal;
    pub mod nav;
    pub mod reveal;
    pub mod slider;
    pub mod tabs;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <Landing />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
