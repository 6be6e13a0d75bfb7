#![doc = "civicmap public API"]
#[cfg(feature = "download")]
pub mod api;
#[cfg(feature = "wasm-console")]
mod console;
mod error;
pub mod geom;
pub mod io;
pub mod model;

#[doc(inline)]
pub use error::{PathError, ViewBoxError};

#[doc(inline)]
pub use geom::{BoundingBox, SkippedPath, ViewBox, ViewBoxReport, fit_view_box, path_bounds, try_fit_view_box};

#[doc(inline)]
pub use io::svg::{RenderOptions, map_to_svg_string, write_map, write_map_file};

#[cfg(feature = "wasm-console")]
pub use console::init_console_logger;
