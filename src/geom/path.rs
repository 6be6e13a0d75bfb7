use kurbo::{BezPath, ParamCurveExtrema, PathEl, Point};

use crate::{error::PathError, geom::BoundingBox};

/// Axis-aligned bounds of an SVG path string.
///
/// Curve segments contribute their exact extrema, not their control points.
/// Move-only subpaths (e.g. `"M3 3Z"`) contribute the point they move to.
pub fn path_bounds(d: &str) -> Result<BoundingBox, PathError> {
    let path = BezPath::from_svg(d).map_err(|e| PathError::Syntax(e.to_string()))?;

    if !path.elements().iter().all(|el| el_points(el).iter().all(|p| p.is_finite())) {
        return Err(PathError::NonFinite)
    }

    let anchors = path.elements().iter().filter_map(|el| match el {
        PathEl::MoveTo(p) => Some(BoundingBox::point(p.x, p.y)),
        _ => None,
    });
    let segments = path.segments().map(|seg| BoundingBox::from(seg.bounding_box()));
    let bounds: BoundingBox = anchors.chain(segments).collect();

    if bounds.is_empty() { return Err(PathError::Empty) }
    if !bounds.is_finite() || !bounds.width().is_finite() || !bounds.height().is_finite() {
        return Err(PathError::NonFinite)
    }

    Ok(bounds)
}

/// Points carried by a single path element.
fn el_points(el: &PathEl) -> Vec<Point> {
    match *el {
        PathEl::MoveTo(p) | PathEl::LineTo(p) => vec![p],
        PathEl::QuadTo(p1, p2) => vec![p1, p2],
        PathEl::CurveTo(p1, p2, p3) => vec![p1, p2, p3],
        PathEl::ClosePath => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::path_bounds;
    use crate::{error::PathError, geom::BoundingBox};

    #[test]
    fn square_bounds() {
        let b = path_bounds("M0 0L10 0L10 10L0 10Z").unwrap();
        assert_eq!(b, BoundingBox::new(0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn relative_commands_are_resolved() {
        let b = path_bounds("m5 5 l10 0 l0 10 l-10 0 z").unwrap();
        assert_eq!(b, BoundingBox::new(5.0, 5.0, 15.0, 15.0));
    }

    #[test]
    fn lone_move_is_a_point() {
        assert_eq!(path_bounds("M3 3Z").unwrap(), BoundingBox::point(3.0, 3.0));
    }

    #[test]
    fn multiple_subpaths_are_all_counted() {
        let b = path_bounds("M0 0L1 1Z M-4 2L-3 9Z").unwrap();
        assert_eq!(b, BoundingBox::new(-4.0, 0.0, 1.0, 9.0));
    }

    #[test]
    fn cubic_uses_curve_extrema_not_control_points() {
        // Control points reach y=10, the curve itself peaks at y=7.5.
        let b = path_bounds("M0 0C0 10 10 10 10 0").unwrap();
        assert!((b.max_y - 7.5).abs() < 1e-9);
        assert_eq!(b.min_x, 0.0);
        assert_eq!(b.max_x, 10.0);
        assert_eq!(b.min_y, 0.0);
    }

    #[test]
    fn comma_separated_coordinates_parse() {
        let b = path_bounds("M33.5,-1.25 L34,-0.5 L33.75,0.75Z").unwrap();
        assert_eq!(b, BoundingBox::new(33.5, -1.25, 34.0, 0.75));
    }

    #[test]
    fn unknown_command_is_syntax_error() {
        assert!(matches!(path_bounds("M0 0 X5 5"), Err(PathError::Syntax(_))));
        assert!(matches!(path_bounds("garbage"), Err(PathError::Syntax(_))));
    }

    #[test]
    fn blank_path_is_empty() {
        assert_eq!(path_bounds(""), Err(PathError::Empty));
        assert_eq!(path_bounds("   "), Err(PathError::Empty));
    }

    #[test]
    fn overflowing_coordinate_is_rejected() {
        assert_eq!(path_bounds("M0 0L1e999 0"), Err(PathError::NonFinite));
    }

    #[test]
    fn extent_overflowing_f64_is_rejected() {
        // Both corners are finite, the width is not.
        assert_eq!(path_bounds("M-1e308 0L1e308 0"), Err(PathError::NonFinite));
        assert_eq!(path_bounds("M0 -1e308L0 1e308"), Err(PathError::NonFinite));
        assert!(path_bounds("M0 0L1e308 1e308").is_ok());
    }
}
