//! Path bounds and viewBox fitting.

mod bbox;
mod path;
mod viewbox;

pub use bbox::BoundingBox;
pub use path::path_bounds;
pub use viewbox::{SkippedPath, ViewBox, ViewBoxReport, fit_view_box, try_aggregate_bounds, try_fit_view_box};
