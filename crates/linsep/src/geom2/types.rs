//! Point and hull types.
//!
//! - `Point2`: plain `Vector2<f64>`; equality is exact coordinate equality.
//! - `Hull2`: strictly convex CCW vertex list, only built by `convex_hull`.

use nalgebra::Vector2;

use super::{hulls_intersect, point_in_convex_polygon};

/// A point in the plane.
pub type Point2 = Vector2<f64>;

/// Convex hull of a finite point set.
///
/// Invariants:
/// - Vertices are distinct and listed counter-clockwise.
/// - For `len() >= 3` no three cyclically consecutive vertices are collinear.
/// - `len() == 2` is a segment (collinear input), `len() == 1` a single point,
///   `len() == 0` the hull of an empty set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Hull2 {
    pub(crate) vertices: Vec<Point2>,
}

impl Hull2 {
    #[inline]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
    #[inline]
    pub fn into_vertices(self) -> Vec<Point2> {
        self.vertices
    }

    /// Cyclic edges `(v[i], v[(i+1) % n])`, wrap-around edge included.
    ///
    /// A single-vertex hull yields one degenerate edge `(p, p)`; a segment hull
    /// yields the segment in both directions.
    pub fn edges(&self) -> impl Iterator<Item = (Point2, Point2)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Inside or on the boundary.
    #[inline]
    pub fn contains(&self, p: Point2) -> bool {
        point_in_convex_polygon(p, self)
    }

    /// Overlap or touch.
    #[inline]
    pub fn intersects(&self, other: &Hull2) -> bool {
        hulls_intersect(self, other)
    }
}
