//! Separability decision: two hulls, one intersection test.
//!
//! Both entry points are pure and return identical verdicts for identical
//! inputs. The parallel variant only changes how the two hulls are built.

use std::fmt;
use std::str::FromStr;
use std::thread;

use crate::geom2::{convex_hull, hulls_intersect, Point2};

/// `true` iff the hulls of `a` and `b` neither overlap nor touch.
pub fn is_linearly_separable_sequential(a: &[Point2], b: &[Point2]) -> bool {
    let hull_a = convex_hull(a);
    let hull_b = convex_hull(b);
    !hulls_intersect(&hull_a, &hull_b)
}

/// Same verdict as [`is_linearly_separable_sequential`], hulls built on two threads.
///
/// Each scoped worker reads only its own slice and hands its hull back through
/// its join handle. Both are joined before the intersection test runs. A
/// panicking worker is resumed on the caller.
pub fn is_linearly_separable_parallel(a: &[Point2], b: &[Point2]) -> bool {
    let (hull_a, hull_b) = thread::scope(|s| {
        let task_a = s.spawn(|| convex_hull(a));
        let task_b = s.spawn(|| convex_hull(b));
        let hull_a = task_a
            .join()
            .unwrap_or_else(|payload| std::panic::resume_unwind(payload));
        let hull_b = task_b
            .join()
            .unwrap_or_else(|payload| std::panic::resume_unwind(payload));
        (hull_a, hull_b)
    });
    !hulls_intersect(&hull_a, &hull_b)
}

/// Selects an entry point by name (`sequential` / `parallel`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    Sequential,
    Parallel,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Sequential, Strategy::Parallel];

    #[inline]
    pub fn run(self, a: &[Point2], b: &[Point2]) -> bool {
        match self {
            Strategy::Sequential => is_linearly_separable_sequential(a, b),
            Strategy::Parallel => is_linearly_separable_parallel(a, b),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Sequential => "sequential",
            Strategy::Parallel => "parallel",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStrategyError(pub String);

impl fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown strategy `{}` (expected `sequential` or `parallel`)",
            self.0
        )
    }
}

impl std::error::Error for ParseStrategyError {}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" | "seq" => Ok(Strategy::Sequential),
            "parallel" | "par" => Ok(Strategy::Parallel),
            other => Err(ParseStrategyError(other.to_string())),
        }
    }
}
