//! Timing and console output for separability checks.

use linsep::api::{Point2, Strategy};
use std::time::{Duration, Instant};

/// One timed run of a strategy.
#[derive(Clone, Copy, Debug)]
pub struct Timed {
    pub strategy: Strategy,
    pub separable: bool,
    pub elapsed: Duration,
}

pub fn run_timed(strategy: Strategy, a: &[Point2], b: &[Point2]) -> Timed {
    let t0 = Instant::now();
    let separable = strategy.run(a, b);
    let elapsed = t0.elapsed();
    tracing::info!(
        strategy = strategy.name(),
        separable,
        elapsed_s = elapsed.as_secs_f64(),
        "check"
    );
    Timed {
        strategy,
        separable,
        elapsed,
    }
}

pub fn verdict_label(separable: bool) -> &'static str {
    if separable {
        "SEPARABLE"
    } else {
        "NOT SEPARABLE"
    }
}

pub fn format_timed(t: &Timed) -> String {
    format!(
        "  [{:<10}]  verdict: {:<13}  |  time: {:.6} s",
        t.strategy.name(),
        verdict_label(t.separable),
        t.elapsed.as_secs_f64()
    )
}

/// `None` when the parallel run took no measurable time.
pub fn speedup(sequential: &Timed, parallel: &Timed) -> Option<f64> {
    let par = parallel.elapsed.as_secs_f64();
    (par > 0.0).then(|| sequential.elapsed.as_secs_f64() / par)
}

/// First `max_show` points, then a "shown k of n" trailer.
pub fn format_points(label: &str, pts: &[Point2], max_show: usize) -> Vec<String> {
    let mut lines = Vec::with_capacity(pts.len().min(max_show) + 2);
    lines.push(format!("  {label} ({} points):", pts.len()));
    for p in pts.iter().take(max_show) {
        lines.push(format!("    ({:.3}, {:.3})", p.x, p.y));
    }
    if pts.len() > max_show {
        lines.push(format!("    ... (shown {max_show} of {})", pts.len()));
    }
    lines
}
