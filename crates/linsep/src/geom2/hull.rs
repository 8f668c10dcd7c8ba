use std::cmp::Ordering;

use super::predicates::orient;
use super::types::{Hull2, Point2};

/// Andrew's monotone chain convex hull (returns hull in CCW order).
///
/// Duplicates collapse before the sweep and collinear boundary points are
/// dropped, so the result is strictly convex. The lexicographic sort fully
/// orders the points, which makes the output independent of input order.
pub fn convex_hull(points: &[Point2]) -> Hull2 {
    let mut pts: Vec<Point2> = points.iter().map(|p| canonical(*p)).collect();
    pts.sort_by(lex_cmp);
    pts.dedup();
    if pts.len() <= 1 {
        return Hull2 { vertices: pts };
    }
    let mut lower: Vec<Point2> = Vec::with_capacity(pts.len());
    for p in &pts {
        push_left_turn(&mut lower, *p);
    }
    let mut upper: Vec<Point2> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        push_left_turn(&mut upper, *p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    Hull2 { vertices: hull }
}

/// Pop while the last two stack points and `p` fail to make a strict left turn.
#[inline]
fn push_left_turn(chain: &mut Vec<Point2>, p: Point2) {
    while chain.len() >= 2 && orient(chain[chain.len() - 2], chain[chain.len() - 1], p) <= 0.0 {
        chain.pop();
    }
    chain.push(p);
}

// -0.0 and 0.0 are the same coordinate; `total_cmp` would keep them apart.
#[inline]
fn canonical(p: Point2) -> Point2 {
    Point2::new(p.x + 0.0, p.y + 0.0)
}

#[inline]
fn lex_cmp(a: &Point2, b: &Point2) -> Ordering {
    match a.x.total_cmp(&b.x) {
        Ordering::Equal => a.y.total_cmp(&b.y),
        o => o,
    }
}
