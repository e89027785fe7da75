//! folio - single-page portfolio app
//!
//! An eframe app that runs natively and in the browser (WASM on a host
//! canvas). A fixed-population particle field animates behind the page
//! content; sections reveal counters and skill bars as they scroll into
//! view; the contact form delegates delivery to the visitor's mail client
//! through a generated mailto link.

pub mod anim;
pub mod app;
pub mod content;
pub mod field;
pub mod form;
pub mod theme;
pub mod time;

pub use app::FolioApp;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

/// Browser entry point: attach the app to the host page's canvas.
///
/// A missing or unsupported drawing surface is a fatal, log-once condition:
/// the page keeps working, just without the app.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let canvas = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("canvas"))
            .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok());

        let Some(canvas) = canvas else {
            tracing::error!("no #canvas element on host page, app disabled");
            return;
        };

        if let Err(e) = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(FolioApp::new(cc)))),
            )
            .await
        {
            tracing::error!(?e, "failed to start eframe runner, app disabled");
        }
    });
}
