use super::predicates::{point_in_convex_polygon, segments_intersect};
use super::types::Hull2;

/// Convex hulls `a` and `b` overlap or touch.
///
/// Pairwise edge test over all cyclic edges (O(na·nb)); if no edges meet, the
/// hulls are either disjoint or nested, and one representative vertex per hull
/// decides nesting. An empty hull never intersects anything.
pub fn hulls_intersect(a: &Hull2, b: &Hull2) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    let edges_meet = a
        .edges()
        .any(|(p1, p2)| b.edges().any(|(p3, p4)| segments_intersect(p1, p2, p3, p4)));
    if edges_meet {
        return true;
    }
    point_in_convex_polygon(a.vertices()[0], b) || point_in_convex_polygon(b.vertices()[0], a)
}
