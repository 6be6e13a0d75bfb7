use geo::{Coord, Rect};

/// An axis-aligned bounding box, accumulated by min/max folding.
///
/// `BoundingBox::EMPTY` is the identity of [`BoundingBox::merge`]: it has
/// `+inf` minimums and `-inf` maximums, so merging it with any box returns
/// that box unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Default for BoundingBox {
    fn default() -> Self { Self::EMPTY }
}

impl BoundingBox {
    /// The box with no observations yet.
    pub const EMPTY: Self = Self {
        min_x: f64::INFINITY,
        min_y: f64::INFINITY,
        max_x: f64::NEG_INFINITY,
        max_y: f64::NEG_INFINITY,
    };

    /// Build a box from two corners, in any order.
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { min_x: x0.min(x1), min_y: y0.min(y1), max_x: x0.max(x1), max_y: y0.max(y1) }
    }

    /// The degenerate box covering a single point.
    pub fn point(x: f64, y: f64) -> Self {
        Self { min_x: x, min_y: y, max_x: x, max_y: y }
    }

    /// True until at least one point has been folded in.
    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    /// True when every bound is a finite number.
    pub fn is_finite(&self) -> bool {
        self.min_x.is_finite() && self.min_y.is_finite() && self.max_x.is_finite() && self.max_y.is_finite()
    }

    /// Smallest box containing both `self` and `other`.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// True if `other` lies entirely inside `self` (boundaries included).
    pub fn contains(&self, other: &Self) -> bool {
        other.is_empty()
            || (self.min_x <= other.min_x && self.min_y <= other.min_y
                && self.max_x >= other.max_x && self.max_y >= other.max_y)
    }

    pub fn width(&self) -> f64 { if self.is_empty() { 0.0 } else { self.max_x - self.min_x } }

    pub fn height(&self) -> f64 { if self.is_empty() { 0.0 } else { self.max_y - self.min_y } }

    /// Convert to a `geo::Rect`, or None for the empty box.
    pub fn to_rect(&self) -> Option<Rect<f64>> {
        (!self.is_empty()).then(|| Rect::new(
            Coord { x: self.min_x, y: self.min_y },
            Coord { x: self.max_x, y: self.max_y },
        ))
    }
}

impl From<Rect<f64>> for BoundingBox {
    fn from(rect: Rect<f64>) -> Self {
        Self { min_x: rect.min().x, min_y: rect.min().y, max_x: rect.max().x, max_y: rect.max().y }
    }
}

impl From<kurbo::Rect> for BoundingBox {
    fn from(rect: kurbo::Rect) -> Self {
        Self::new(rect.x0, rect.y0, rect.x1, rect.y1)
    }
}

impl FromIterator<BoundingBox> for BoundingBox {
    fn from_iter<I: IntoIterator<Item = BoundingBox>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::merge)
    }
}
