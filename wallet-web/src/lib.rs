//! CryptoDevs Web - Leptos CSR Frontend
//!
//! Site navigation bar with an injected-wallet connect button. The crate is
//! built to WebAssembly with Trunk; [`start`] is the wasm entry point.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

pub mod app;
pub mod components;
pub mod pages;
pub mod render;
pub mod styles;
pub mod utils;

use app::App;
use render::{RenderContext, RenderError};
use utils::constants::LOADING_ELEMENT_ID;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("CryptoDevs frontend starting");

    hide_loading_screen();

    if let Err(e) = mount() {
        log::error!("Not mounting app: {}", e);
    }
}

/// Mount [`App`] to `<body>`.
///
/// The navbar is client-only, so this refuses to run anywhere
/// [`RenderContext::current`] is not a browser.
pub fn mount() -> Result<(), RenderError> {
    components::navbar::DIRECTIVE.check(RenderContext::current())?;

    leptos::mount::mount_to_body(App);
    log::debug!("App mounted");
    Ok(())
}

/// Hide the static loading placeholder from `index.html`.
///
/// Returns `false` when the element is not in the document (already removed,
/// or the page was served without it).
pub fn hide_loading_screen() -> bool {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("No document available");
        return false;
    };

    let Some(loading_element) = document.get_element_by_id(LOADING_ELEMENT_ID) else {
        log::debug!("Loading element '{}' not found", LOADING_ELEMENT_ID);
        return false;
    };

    if let Some(html_element) = loading_element.dyn_ref::<HtmlElement>() {
        if let Err(e) = html_element.class_list().add_1("hidden") {
            log::warn!("Could not add 'hidden' class: {:?}", e);
        }
    }

    // Also set display:none in case the stylesheet has not loaded yet
    if let Err(e) = loading_element.set_attribute("style", "display: none !important;") {
        log::warn!("Could not set loading element style: {:?}", e);
    }

    log::debug!("Loading screen hidden");
    true
}
