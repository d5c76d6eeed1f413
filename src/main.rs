use log::info;
use yew::prelude::*;

mod config;
mod scroll;
mod reveal {
    pub mod controller;
    pub mod hook;
    pub mod registry;
}
mod components {
    pub mod footer;
    pub mod header;
    pub mod modal;
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

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting The Orca Studios landing page");
    yew::Renderer::<App>::new().render();
}
