//! SVG map rendering.

mod map;
mod writer;

pub use map::{RenderOptions, map_to_svg_string, write_map, write_map_file};
pub use writer::{SvgStringWriter, SvgWriter};
pub(crate) use writer::{escape_attr, write_svg_footer, write_svg_header, write_svg_styles};
