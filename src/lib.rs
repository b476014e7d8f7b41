//! Annotator WASM Module
//!
//! Computes where connector lines between linked annotations start and
//! finish on a rendered document page.

pub mod api;
pub mod errors;
pub mod layout;
pub mod links;
pub mod models;

// Re-export commonly used types
pub use errors::LinkError;
pub use models::*;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        wasm_bindgen::throw_str(&format!("failed to initialize logger: {}", e));
    }

    log::info!("Annotator WASM module initialized");
}
