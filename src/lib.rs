/// Domain Research Hub - links to third-party domain research services
/// Built with Rust + WASM + Yew

pub mod bridge;
pub mod browser;
pub mod catalog;
pub mod domain;
pub mod links;
pub mod selection;
pub mod storage;
pub mod tool_data;
pub mod ui;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

/// `{ value }` with the normalized domain, or `{ error }` with the reason
#[wasm_bindgen]
pub fn sanitize_and_validate(raw: &str) -> JsValue {
    to_js(&bridge::domain_response(raw))
}

/// `{ url }` for the tool and domain, or `{ error }`
#[wasm_bindgen]
pub fn generate_link(tool_id: &str, domain: &str) -> JsValue {
    to_js(&bridge::link_response(tool_id, domain))
}

/// The tool catalog as an array of plain objects
#[wasm_bindgen]
pub fn tool_catalog() -> JsValue {
    to_js(catalog::catalog())
}

// Start the Yew app for the dashboard page
#[wasm_bindgen]
pub fn start_dashboard() {
    yew::Renderer::<ui::dashboard::App>::new().render();
}

fn to_js<T: serde::Serialize + ?Sized>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or_else(|e| {
        log::error!("Failed to serialize response: {:?}", e);
        JsValue::NULL
    })
}
