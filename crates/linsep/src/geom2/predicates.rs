//! Orientation, segment and containment predicates.
//!
//! All predicates are boundary-inclusive: a shared endpoint, a point on an edge,
//! or overlapping collinear segments all count as contact.

use super::types::{Hull2, Point2};

/// Signed area of the parallelogram spanned by `a - o` and `b - o`.
///
/// Positive for a left turn `o → a → b`, negative for a right turn, zero when
/// collinear.
#[inline]
pub fn orient(o: Point2, a: Point2, b: Point2) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// `q` lies in the closed axis-aligned box spanned by `p` and `r`.
///
/// Only meaningful as a segment test once `q` is known to be collinear with `p`–`r`.
#[inline]
pub fn on_segment_bbox(p: Point2, q: Point2, r: Point2) -> bool {
    p.x.min(r.x) <= q.x && q.x <= p.x.max(r.x) && p.y.min(r.y) <= q.y && q.y <= p.y.max(r.y)
}

/// Closed segments `p1–p2` and `p3–p4` share at least one point.
pub fn segments_intersect(p1: Point2, p2: Point2, p3: Point2, p4: Point2) -> bool {
    let d1 = orient(p3, p4, p1);
    let d2 = orient(p3, p4, p2);
    let d3 = orient(p1, p2, p3);
    let d4 = orient(p1, p2, p4);

    if strictly_opposite(d1, d2) && strictly_opposite(d3, d4) {
        return true;
    }

    (d1 == 0.0 && on_segment_bbox(p3, p1, p4))
        || (d2 == 0.0 && on_segment_bbox(p3, p2, p4))
        || (d3 == 0.0 && on_segment_bbox(p1, p3, p2))
        || (d4 == 0.0 && on_segment_bbox(p1, p4, p2))
}

#[inline]
fn strictly_opposite(a: f64, b: f64) -> bool {
    (a > 0.0 && b < 0.0) || (a < 0.0 && b > 0.0)
}

/// `p` lies inside or on the boundary of `hull`.
pub fn point_in_convex_polygon(p: Point2, hull: &Hull2) -> bool {
    let v = hull.vertices();
    match v.len() {
        0 => false,
        1 => p == v[0],
        2 => orient(v[0], v[1], p) == 0.0 && on_segment_bbox(v[0], p, v[1]),
        // CCW order: inside means never strictly right of a directed edge.
        _ => hull.edges().all(|(a, b)| orient(a, b, p) >= 0.0),
    }
}
