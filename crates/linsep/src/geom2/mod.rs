//! Exact 2D geometry for the separability test.
//!
//! Purpose
//! - Orientation, segment and point-in-polygon predicates with boundary-inclusive
//!   semantics (touching counts as intersecting).
//! - Andrew's monotone chain hull producing strictly convex CCW vertex lists.
//! - Convex hull overlap via edge pairs plus a nesting fallback.
//!
//! Conventions
//! - No tolerances. Every comparison is against exact zero; collinear and
//!   coincident inputs are handled by explicit size-0/1/2 cases.
//! - Code cross-refs: `Hull2`, `convex_hull`, `hulls_intersect`

mod hull;
mod intersect;
mod predicates;
mod types;

pub use hull::convex_hull;
pub use intersect::hulls_intersect;
pub use predicates::{on_segment_bbox, orient, point_in_convex_polygon, segments_intersect};
pub use types::{Hull2, Point2};

#[cfg(test)]
mod tests;
