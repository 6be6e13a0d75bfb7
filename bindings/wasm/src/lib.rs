use wasm_bindgen::prelude::*;

mod common;
mod map;

pub use map::{county_svg, counties_svg, view_box, view_box_report};

/// Called automatically when the WASM module is instantiated.
/// Sets up panic hook so Rust panics appear as console.error in the browser,
/// and routes warnings (e.g. skipped paths) to the console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    civicmap_core::init_console_logger(log::LevelFilter::Warn);
}
