//! Linear separability of two planar point sets.
//!
//! Two finite point sets are reported separable when their convex hulls neither
//! overlap nor touch. The geometry is exact: no epsilon is applied anywhere, so
//! results follow the natural `f64` semantics of the inputs.
//!
//! Layout
//! - `geom2`: predicates, monotone-chain hull, hull intersection.
//! - `separability`: the sequential and parallel entry points.
//! - `sample`: reproducible synthetic point sets for demos and benches.
//!
//! API Policy
//! - Callers outside this workspace should import through `api` or `prelude`;
//!   module paths may move.

pub mod api;
pub mod geom2;
pub mod sample;
pub mod separability;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{Hull2, Point2};
pub use separability::{
    is_linearly_separable_parallel, is_linearly_separable_sequential, Strategy,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::{
        convex_hull, hulls_intersect, orient, point_in_convex_polygon, segments_intersect, Hull2,
        Point2,
    };
    pub use crate::sample::{draw_point_sets, Layout, PointSets, ReplayToken, SampleCfg};
    pub use crate::separability::{
        is_linearly_separable_parallel, is_linearly_separable_sequential, Strategy,
    };
    pub use nalgebra::Vector2 as Vec2;
}
