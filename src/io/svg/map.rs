use std::{collections::HashSet, io::Write, path::Path};

use anyhow::Result;

use crate::{
    geom::{ViewBoxReport, fit_view_box},
    io::svg::{SvgStringWriter, SvgWriter, escape_attr, write_svg_footer, write_svg_header, write_svg_styles},
    model::MapShape,
};

/// Output size and highlighted shape for a rendered map.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    /// Extra room around the fitted shapes, in path units.
    pub padding: f64,
    /// Name of the shape to draw highlighted (case-insensitive).
    pub highlight: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: 800, height: 500, padding: 0.0, highlight: None }
    }
}

/// Write `shapes` as a standalone SVG document fitted to their bounds.
///
/// Shapes whose outline cannot be parsed are left out of both the viewBox and
/// the drawing; the returned report lists them.
pub fn write_map<W: Write>(writer: &mut W, shapes: &[MapShape], options: &RenderOptions) -> Result<ViewBoxReport> {
    let report = fit_view_box(shapes.iter().map(|s| s.path.as_str()));
    let skipped = report.skipped_indices().into_iter().collect::<HashSet<_>>();

    for s in &report.skipped {
        log::warn!("[io::svg] leaving out {:?}: {}", shapes[s.index].name, s.error);
    }

    let view_box = if options.padding > 0.0 && !report.bounds.is_empty() {
        report.view_box.padded(options.padding).unwrap_or_else(|| {
            log::warn!("[io::svg] padding {} overflows the viewBox, ignoring it", options.padding);
            report.view_box
        })
    } else {
        report.view_box
    };

    write_svg_header(writer, &view_box, options.width, options.height, &report.bounds)?;
    write_svg_styles(writer)?;

    for (i, shape) in shapes.iter().enumerate() {
        if skipped.contains(&i) { continue }
        let highlighted = options.highlight.as_deref()
            .is_some_and(|name| name.eq_ignore_ascii_case(&shape.name));
        let class = if highlighted { "shape hl" } else { "shape" };
        writeln!(writer, r#"<path id="shape-{}" data-name="{}" class="{class}" d="{}"/>"#,
            shape.id, escape_attr(&shape.name), escape_attr(&shape.path),
        )?;
    }

    write_svg_footer(writer)?;
    writer.flush()?;

    Ok(report)
}

/// Render `shapes` to an SVG file at `path`.
pub fn write_map_file(path: &Path, shapes: &[MapShape], options: &RenderOptions) -> Result<ViewBoxReport> {
    let mut writer = SvgWriter::new(path)?;
    write_map(&mut writer, shapes, options)
}

/// Render `shapes` to an SVG string.
pub fn map_to_svg_string(shapes: &[MapShape], options: &RenderOptions) -> Result<String> {
    let mut writer = SvgStringWriter::new();
    write_map(&mut writer, shapes, options)?;
    writer.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(id: u64, name: &str, path: &str) -> MapShape {
        MapShape { id, name: name.into(), path: path.into() }
    }

    fn shapes() -> Vec<MapShape> {
        vec![
            shape(1, "Westlands", "M0 0L10 0L10 10L0 10Z"),
            shape(2, "Broken", "not a path"),
            shape(3, "Langata", "M5 5L15 5L15 15L5 15Z"),
        ]
    }

    #[test]
    fn renders_valid_shapes_and_skips_broken_ones() {
        let svg = map_to_svg_string(&shapes(), &RenderOptions::default()).unwrap();
        assert!(svg.contains(r#"viewBox="0 0 15 15""#));
        assert!(svg.contains(r#"id="shape-1" data-name="Westlands""#));
        assert!(svg.contains(r#"id="shape-3" data-name="Langata""#));
        assert!(!svg.contains("Broken"));
        assert_eq!(svg.matches("<path ").count(), 2);
    }

    #[test]
    fn highlight_marks_one_shape() {
        let options = RenderOptions { highlight: Some("langata".into()), ..Default::default() };
        let svg = map_to_svg_string(&shapes(), &options).unwrap();
        assert_eq!(svg.matches(r#"class="shape hl""#).count(), 1);
        assert!(svg.contains(r#"id="shape-3" data-name="Langata" class="shape hl""#));
    }

    #[test]
    fn padding_expands_view_box() {
        let options = RenderOptions { padding: 1.0, ..Default::default() };
        let svg = map_to_svg_string(&shapes(), &options).unwrap();
        assert!(svg.contains(r#"viewBox="-1 -1 17 17""#));
    }

    #[test]
    fn overflowing_padding_is_ignored() {
        for padding in [f64::INFINITY, f64::MAX] {
            let options = RenderOptions { padding, ..Default::default() };
            let svg = map_to_svg_string(&shapes(), &options).unwrap();
            assert!(svg.contains(r#"viewBox="0 0 15 15""#));
            assert!(!svg.contains("inf"));
        }
    }

    #[test]
    fn duplicate_names_get_distinct_ids() {
        let shapes = vec![
            shape(7, "Central", "M0 0L1 1"),
            shape(8, "Central", "M2 2L3 3"),
        ];
        let svg = map_to_svg_string(&shapes, &RenderOptions::default()).unwrap();
        assert!(svg.contains(r#"id="shape-7""#));
        assert!(svg.contains(r#"id="shape-8""#));
        assert_eq!(svg.matches(r#"data-name="Central""#).count(), 2);
    }

    #[test]
    fn empty_map_is_still_a_valid_document() {
        let svg = map_to_svg_string(&[], &RenderOptions::default()).unwrap();
        assert!(svg.contains(r#"viewBox="0 0 0 0""#));
        assert!(!svg.contains("inf") && !svg.contains("NaN"));
    }

    #[test]
    fn report_lists_skipped_shape() {
        let mut out = Vec::new();
        let report = write_map(&mut out, &shapes(), &RenderOptions::default()).unwrap();
        assert_eq!(report.skipped_indices(), vec![1]);
    }

    #[test]
    fn writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("county.svg");
        write_map_file(&path, &shapes(), &RenderOptions::default()).unwrap();
        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains(r#"viewBox="0 0 15 15""#));
    }
}
