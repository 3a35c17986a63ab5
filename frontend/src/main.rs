use basis_landing::{config, pages::landing::Landing};
use log::info;
use yew::prelude::*;

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
    if let Err(err) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", err).into());
    }

    info!("Starting landing page");
    yew::Renderer::<App>::new().render();
}
