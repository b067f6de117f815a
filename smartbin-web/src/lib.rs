#![forbid(unsafe_code)]
//! Browser front end for the Smart Bin demo.
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod dom;
pub mod logger;
pub mod pages;
pub mod paths;
pub mod router;
pub mod storage;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logger::init(logger::level_from_query(&dom::location_search()));
    log::info!("smart bin starting");
    yew::Renderer::<app::App>::new().render();
}
