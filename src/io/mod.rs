//! File formats: JSON payloads in, SVG maps out.

pub mod json;
pub mod svg;
