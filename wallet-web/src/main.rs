//! Eco-Eeelien web app
//!
//! Leptos front end for the recycling rewards prototype: landing page, dashboard and
//! token exchange, with a Phantom wallet button shared across pages.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::new(log_level()));
    log::info!("Eco-Eeelien starting");

    hide_loading_screen();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

fn log_level() -> log::Level {
    match lib_core::config::core_config().log_level.as_str() {
        "trace" => log::Level::Trace,
        "debug" => log::Level::Debug,
        "warn" => log::Level::Warn,
        "error" => log::Level::Error,
        _ => log::Level::Info,
    }
}

/// Hide the static loading placeholder from index.html
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("No document available");
        return;
    };

    match document.get_element_by_id("leptos-loading") {
        Some(loading) => {
            if let Some(html_element) = loading.dyn_ref::<HtmlElement>() {
                html_element.class_list().add_1("hidden").ok();
            }
            loading.set_attribute("style", "display: none !important;").ok();
        }
        None => log::debug!("Loading element not found"),
    }
}
