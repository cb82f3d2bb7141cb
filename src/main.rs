use dioxus::prelude::*;
use dotenv::dotenv;
use std::env;

mod components;
mod config;
mod logging;
mod provider;
mod tools;

use components::ChatTab;
use config::ApiConfig;

// Load environment variables from .env file if it exists
fn load_env() {
    // Runs before logging is initialized, so plain stderr it is.
    match dotenv() {
        Ok(_) => eprintln!("Loaded environment from .env file"),
        Err(_) => eprintln!("No .env file found, using default environment"),
    }
}

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    load_env();

    if let Err(err) = logging::init() {
        eprintln!("Failed to initialize logging: {}", err);
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

/// Single chat page. The metadata API location and provider key come from
/// the environment once at startup.
#[component]
fn Home() -> Element {
    let api_config = use_signal(ApiConfig::from_env);
    let api_key = use_signal(|| env::var("OPENROUTER_API_KEY").ok());

    let config = api_config.read().clone();
    let base_url = config.base_url.clone();
    let key = api_key.read().clone();
    let key_missing = key.is_none();

    rsx! {
        div { class: "app-shell",
            header { class: "app-header",
                h1 { class: "app-title", "SeriesChat" }
                span { class: "caption", "IMDb API: {base_url}" }
            }
            if key_missing {
                div { class: "tool-error-panel banner",
                    p { "OPENROUTER_API_KEY is not set. Add it to your environment or .env file to chat." }
                }
            }
            ChatTab { api_key: key, api_config: config }
        }
    }
}
