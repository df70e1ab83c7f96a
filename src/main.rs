use dioxus::prelude::*;

mod booking;
mod components;
mod config;
mod notifications;
mod utils;
mod views;

use config::AppConfig;
use views::main_layout::MainLayout;

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
fn App() -> Element {
    let config = use_context_provider(AppConfig::default);

    rsx! {
        document::Title { "{config.page_title()}" }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        MainLayout {}
    }
}

fn main() {
    console_error_panic_hook::set_once();
    dioxus::launch(App);
}
