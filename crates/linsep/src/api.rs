//! Curated surface for the CLI and other collaborators.
//!
//! Important
//! - Prefer these re-exports over deep module paths; internal layout may change.

// 2D exact geometry
pub use crate::geom2::{
    convex_hull, hulls_intersect, on_segment_bbox, orient, point_in_convex_polygon,
    segments_intersect, Hull2, Point2,
};
// Synthetic inputs
pub use crate::sample::{
    draw_point_sets, Layout, PointSets, ReplayToken as SampleReplay, SampleCfg, SampleError,
};
// Entry points
pub use crate::separability::{
    is_linearly_separable_parallel, is_linearly_separable_sequential, Strategy,
};
