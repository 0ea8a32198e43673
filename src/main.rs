#![allow(non_snake_case)]

use dioxus::prelude::*;

// Modules
mod components;
mod hooks;
mod services;
mod utils;

use components::MobileMockup;

const MOCKUP_CSS: Asset = asset!("/assets/mobile_mockup.css");

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::info!("Starting mobile mockup");

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Stylesheet { href: MOCKUP_CSS }
        div {
            class: "mockup-stage",
            MobileMockup {}
        }
    }
}
