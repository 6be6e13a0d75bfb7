//! SVG writing operations.

use std::{fs::File, io::{BufWriter, Write}, path::Path};

use anyhow::{Context, Result};

use crate::geom::{BoundingBox, ViewBox};

pub struct SvgWriter {
    writer: BufWriter<File>
}

/// String-based SVG writer for WASM/browser use
pub struct SvgStringWriter {
    buffer: Vec<u8>
}

/// Implement std::io::Write so `write!` / `writeln!` work.
impl Write for SvgWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> { self.writer.write(buf) }

    fn flush(&mut self) -> std::io::Result<()> { self.writer.flush() }

    fn write_all(&mut self, buf: &[u8]) -> std::io::Result<()> { self.writer.write_all(buf) }
}

impl Write for SvgStringWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
}

impl Default for SvgStringWriter {
    fn default() -> Self { Self::new() }
}

impl SvgStringWriter {
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Get the SVG string
    pub fn into_string(self) -> Result<String> {
        String::from_utf8(self.buffer)
            .context("[io::svg] SVG output is not valid UTF-8")
    }
}

impl SvgWriter {
    /// Create a new SVG writer to a file path
    pub fn new(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("[io::svg] Failed to create {}", path.display()))?;

        Ok(Self { writer: BufWriter::new(file) })
    }
}

/// Write the XML declaration and opening <svg> tag.
///
/// The fitted bounds are recorded as `data-*` attributes so a front end can
/// map pointer positions back to path coordinates.
pub(crate) fn write_svg_header<W: Write>(writer: &mut W, view_box: &ViewBox, width: u32, height: u32, bounds: &BoundingBox) -> Result<()> {
    writeln!(writer, r##"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"##)?;
    write!(writer, r##"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="{view_box}" preserveAspectRatio="xMidYMid meet""##)?;
    if let Some(rect) = bounds.to_rect() {
        write!(writer, r##" data-min-x="{}" data-min-y="{}" data-max-x="{}" data-max-y="{}""##,
            rect.min().x, rect.min().y, rect.max().x, rect.max().y,
        )?;
    }
    writeln!(writer, ">")?;
    Ok(())
}

/// Write SVG styles for map shapes.
pub(crate) fn write_svg_styles<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, r##"<defs>
<style>
    .shape {{ fill: #ffffff; stroke: #9ca3af; stroke-width: 0.6; vector-effect: non-scaling-stroke; }}
    .shape.hl {{ fill: #ef4444; }}
</style>
</defs>"##)?;
    Ok(())
}

/// Write the closing </svg> tag.
pub(crate) fn write_svg_footer<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, "</svg>")?;
    Ok(())
}

/// Escape text for use inside a double-quoted XML attribute.
pub(crate) fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_writer_collects_header_and_footer() {
        let mut w = SvgStringWriter::new();
        let view_box = ViewBox { x: 0.0, y: 0.0, width: 15.0, height: 15.0 };
        write_svg_header(&mut w, &view_box, 800, 500, &BoundingBox::new(0.0, 0.0, 15.0, 15.0)).unwrap();
        write_svg_footer(&mut w).unwrap();
        let svg = w.into_string().unwrap();
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains(r#"viewBox="0 0 15 15""#));
        assert!(svg.contains(r#"data-max-x="15""#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn empty_bounds_omit_data_attributes() {
        let mut w = SvgStringWriter::new();
        write_svg_header(&mut w, &ViewBox::ZERO, 10, 10, &BoundingBox::EMPTY).unwrap();
        let svg = w.into_string().unwrap();
        assert!(svg.contains(r#"viewBox="0 0 0 0""#));
        assert!(!svg.contains("data-min-x"));
    }

    #[test]
    fn attributes_are_escaped() {
        assert_eq!(escape_attr(r#"Murang'a & "Kiharu" <x>"#), "Murang&apos;a &amp; &quot;Kiharu&quot; &lt;x&gt;");
    }
}
