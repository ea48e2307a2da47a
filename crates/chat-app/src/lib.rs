//! Chat App, the WASM entry point.
//!
//! This crate is the composition root (DI wiring layer).
//! It assembles the platform adapters, the controllers and the egui views.

mod app;
mod history;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use chat_types::{ChatError, Result};

/// Id of the `<canvas>` the page provides for egui
pub const CANVAS_ID: &str = "chat_canvas";

/// WASM entry point, called from index.html
#[wasm_bindgen(start)]
pub async fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Chat client starting...");

    if let Err(e) = start().await {
        log::error!("Failed to start: {}", e);
    }
}

async fn start() -> Result<()> {
    let canvas = find_canvas(CANVAS_ID)?;
    let web_options = eframe::WebOptions::default();

    eframe::WebRunner::new()
        .start(
            canvas,
            web_options,
            Box::new(|cc| Ok(Box::new(app::ChatApp::new(cc)))),
        )
        .await
        .map_err(|e| ChatError::JsInterop(format!("{:?}", e)))
}

fn find_canvas(id: &str) -> Result<web_sys::HtmlCanvasElement> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ChatError::JsInterop("No document".to_string()))?;

    document
        .get_element_by_id(id)
        .ok_or_else(|| ChatError::JsInterop(format!("No canvas element with id '{}'", id)))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| ChatError::JsInterop(format!("Element '{}' is not a canvas", id)))
}
