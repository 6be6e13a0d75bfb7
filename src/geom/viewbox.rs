//! Fitting a set of path outlines into a single SVG `viewBox`.

use std::fmt;

use serde::Serialize;

use crate::{
    error::{PathError, ViewBoxError},
    geom::{BoundingBox, path_bounds},
};

/// The rectangle an SVG renderer maps onto its drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    /// Fallback used when there is nothing to fit.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, width: 0.0, height: 0.0 };

    /// Derive a viewBox from a bounding box.
    ///
    /// None if the box is empty, not finite, or its width or height overflows.
    pub fn from_bounds(bounds: &BoundingBox) -> Option<Self> {
        if bounds.is_empty() || !bounds.is_finite() { return None }
        Self {
            x: bounds.min_x,
            y: bounds.min_y,
            width: bounds.max_x - bounds.min_x,
            height: bounds.max_y - bounds.min_y,
        }.finite()
    }

    /// Expand the viewBox by `pad` on every side, or None if the result is not finite.
    pub fn padded(&self, pad: f64) -> Option<Self> {
        Self {
            x: self.x - pad,
            y: self.y - pad,
            width: self.width + 2.0 * pad,
            height: self.height + 2.0 * pad,
        }.finite()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }

    fn finite(self) -> Option<Self> {
        self.is_finite().then_some(self)
    }
}

impl fmt::Display for ViewBox {
    /// Format as the SVG attribute value: "x y width height".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // +0.0 folds negative zero so the output never reads "-0"
        write!(f, "{} {} {} {}", self.x + 0.0, self.y + 0.0, self.width + 0.0, self.height + 0.0)
    }
}

/// A path that was left out of a lenient fit.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedPath {
    pub index: usize,
    pub error: PathError,
}

/// Result of a lenient fit: the viewBox of every valid path plus what was skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewBoxReport {
    pub view_box: ViewBox,
    pub bounds: BoundingBox,
    pub skipped: Vec<SkippedPath>,
    /// The valid paths together span more than `f64` can hold; `view_box` is `ZERO`.
    pub overflowed: bool,
}

impl ViewBoxReport {
    /// True when every input path contributed to the box.
    pub fn is_complete(&self) -> bool { self.skipped.is_empty() && !self.overflowed }

    /// Indices of the paths that were left out, in input order.
    pub fn skipped_indices(&self) -> Vec<usize> {
        self.skipped.iter().map(|s| s.index).collect()
    }
}

/// Fit every valid path, skipping malformed ones.
///
/// A bad record never poisons the rest of the map: its index and error are
/// reported and the remaining paths still produce a box. With no valid paths,
/// or when their combined extent overflows, the result is [`ViewBox::ZERO`].
pub fn fit_view_box<I, S>(paths: I) -> ViewBoxReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut skipped = Vec::new();

    let bounds: BoundingBox = paths.into_iter().enumerate()
        .filter_map(|(index, d)| match path_bounds(d.as_ref()) {
            Ok(b) => Some(b),
            Err(error) => {
                log::warn!("[viewbox] skipping path {index}: {error}");
                skipped.push(SkippedPath { index, error });
                None
            }
        })
        .collect();

    let fitted = ViewBox::from_bounds(&bounds);
    let overflowed = fitted.is_none() && !bounds.is_empty();
    if overflowed {
        log::warn!("[viewbox] combined extent overflows, falling back to {}", ViewBox::ZERO);
    }

    let view_box = fitted.unwrap_or(ViewBox::ZERO);
    log::debug!("[viewbox] fitted {view_box} ({} skipped)", skipped.len());

    ViewBoxReport { view_box, bounds, skipped, overflowed }
}

/// Fit every path, failing on the first malformed one, on empty input, or
/// when the combined extent overflows.
pub fn try_fit_view_box<I, S>(paths: I) -> Result<ViewBox, ViewBoxError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let bounds = try_aggregate_bounds(paths)?;
    if bounds.is_empty() { return Err(ViewBoxError::EmptyInput) }
    ViewBox::from_bounds(&bounds).ok_or(ViewBoxError::Overflow)
}

/// Fold the bounds of every path, failing on the first malformed one.
///
/// Empty input yields [`BoundingBox::EMPTY`].
pub fn try_aggregate_bounds<I, S>(paths: I) -> Result<BoundingBox, ViewBoxError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    paths.into_iter().enumerate()
        .map(|(index, d)| path_bounds(d.as_ref())
            .map_err(|source| ViewBoxError::InvalidPath { index, source }))
        .try_fold(BoundingBox::EMPTY, |acc, b| b.map(|b| acc.merge(b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARES: [&str; 2] = ["M0 0L10 0L10 10L0 10Z", "M5 5L15 5L15 15L5 15Z"];

    #[test]
    fn overlapping_squares() {
        let report = fit_view_box(SQUARES);
        assert!(report.is_complete());
        assert_eq!(report.bounds, BoundingBox::new(0.0, 0.0, 15.0, 15.0));
        assert_eq!(report.view_box.to_string(), "0 0 15 15");
    }

    #[test]
    fn degenerate_point() {
        let report = fit_view_box(["M3 3Z"]);
        assert_eq!(report.bounds, BoundingBox::point(3.0, 3.0));
        assert_eq!(report.view_box.to_string(), "3 3 0 0");
    }

    #[test]
    fn empty_input_is_zero_box() {
        let report = fit_view_box(Vec::<String>::new());
        assert_eq!(report.view_box, ViewBox::ZERO);
        assert_eq!(report.view_box.to_string(), "0 0 0 0");
        assert!(report.bounds.is_empty());
    }

    #[test]
    fn strict_empty_input_is_error() {
        assert_eq!(try_fit_view_box(Vec::<&str>::new()), Err(ViewBoxError::EmptyInput));
    }

    #[test]
    fn fractional_and_negative_coordinates_format_plainly() {
        let vb = fit_view_box(["M33.5 -4.75L42 4.5"]).view_box;
        assert_eq!(vb.to_string(), "33.5 -4.75 8.5 9.25");
    }

    #[test]
    fn negative_zero_prints_as_zero() {
        let vb = ViewBox { x: -0.0, y: -0.0, width: 1.0, height: 2.0 };
        assert_eq!(vb.to_string(), "0 0 1 2");
    }

    #[test]
    fn padding_grows_every_side() {
        let vb = ViewBox { x: 0.0, y: 0.0, width: 10.0, height: 5.0 }.padded(1.0).unwrap();
        assert_eq!(vb.to_string(), "-1 -1 12 7");
    }

    #[test]
    fn non_finite_padding_is_refused() {
        let vb = ViewBox { x: 0.0, y: 0.0, width: 10.0, height: 5.0 };
        assert_eq!(vb.padded(f64::INFINITY), None);
        assert_eq!(vb.padded(f64::NAN), None);
        assert_eq!(vb.padded(f64::MAX), None);
    }

    #[test]
    fn overflowing_extent_has_no_view_box() {
        let bounds = BoundingBox::new(-1e308, 0.0, 1e308, 1.0);
        assert!(bounds.is_finite());
        assert_eq!(ViewBox::from_bounds(&bounds), None);
    }

    #[test]
    fn strict_reports_first_bad_index() {
        let paths = [SQUARES[0], "garbage", SQUARES[1], "M0 0 X"];
        let err = try_fit_view_box(paths).unwrap_err();
        assert_eq!(err.index(), Some(1));
        assert!(matches!(err, ViewBoxError::InvalidPath { source: PathError::Syntax(_), .. }));
    }

    #[test]
    fn strict_succeeds_on_clean_input() {
        assert_eq!(try_fit_view_box(SQUARES).unwrap().to_string(), "0 0 15 15");
    }
}
