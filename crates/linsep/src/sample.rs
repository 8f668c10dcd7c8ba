//! Reproducible synthetic point-set pairs.
//!
//! Purpose
//! - Feed demos, the CLI and benches with point sets of known character:
//!   guaranteed separable, thoroughly mixed, or unconstrained.
//!
//! Model
//! - `Separable`: A is drawn left of `x = -margin`, B right of `x = margin`.
//! - `Mixed` / `Random`: both sets uniform in the square `[-range, range]²`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use std::fmt;

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom2::Point2;

/// How the two sets are placed relative to each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// Split by a vertical gap of width `2 * margin` around `x = 0`.
    Separable,
    /// Both sets share a smaller square; overlap is all but certain.
    Mixed,
    /// Both sets share the full square; verdict not known in advance.
    Random,
}

impl Layout {
    pub fn name(self) -> &'static str {
        match self {
            Layout::Separable => "separable",
            Layout::Mixed => "mixed",
            Layout::Random => "random",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleCfg {
    pub layout: Layout,
    /// Points per set.
    pub count: usize,
    /// Half-width of the sampling square.
    pub coord_range: f64,
    /// Half-width of the empty gap (`Separable` only).
    pub margin: f64,
}

impl SampleCfg {
    /// Per-layout defaults: range 100 and margin 5 for `Separable`, range 50
    /// for `Mixed`, range 100 for `Random`.
    pub fn new(layout: Layout, count: usize) -> Self {
        let coord_range = match layout {
            Layout::Mixed => 50.0,
            Layout::Separable | Layout::Random => 100.0,
        };
        Self {
            layout,
            count,
            coord_range,
            margin: 5.0,
        }
    }

    fn validate(&self) -> Result<(), SampleError> {
        if !self.coord_range.is_finite() || self.coord_range <= 0.0 {
            return Err(SampleError::invalid(format!(
                "coord_range must be finite and positive, got {}",
                self.coord_range
            )));
        }
        // Sampling intervals span up to 2 * range.
        if !(2.0 * self.coord_range).is_finite() {
            return Err(SampleError::invalid(format!(
                "coord_range {} is too large: interval width overflows f64",
                self.coord_range
            )));
        }
        if self.layout == Layout::Separable {
            if !self.margin.is_finite() || self.margin < 0.0 {
                return Err(SampleError::invalid(format!(
                    "margin must be finite and non-negative, got {}",
                    self.margin
                )));
            }
            if self.margin >= self.coord_range {
                return Err(SampleError::invalid(format!(
                    "margin {} leaves no room inside coord_range {}",
                    self.margin, self.coord_range
                )));
            }
        }
        Ok(())
    }
}

/// Error type for the sampler.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleError {
    InvalidParams { reason: String },
}

impl SampleError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid sampler params: {reason}"),
        }
    }
}

impl std::error::Error for SampleError {}

/// Identifies one drawn pair of point sets.
///
/// `seed` names a run (the CLI uses the UNIX time by default); `index`
/// selects the n-th pair within that run, so a bench sweep can redraw any
/// single pair without replaying the ones before it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    /// First pair of run `seed`.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self { seed, index: 0 }
    }

    /// Token for the pair after this one in the same run.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            index: self.index.wrapping_add(1),
            ..self
        }
    }

    fn rng(self) -> StdRng {
        let index_key = splitmix64(self.index.wrapping_add(GOLDEN_GAMMA));
        StdRng::seed_from_u64(splitmix64(self.seed ^ index_key))
    }
}

const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// SplitMix64 finalizer.
#[inline]
fn splitmix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// A drawn pair of point sets.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSets {
    pub a: Vec<Point2>,
    pub b: Vec<Point2>,
}

/// Draw two point sets of `cfg.count` points each.
pub fn draw_point_sets(cfg: &SampleCfg, tok: ReplayToken) -> Result<PointSets, SampleError> {
    cfg.validate()?;
    let mut rng = tok.rng();
    let r = cfg.coord_range;
    let (xa, xb) = match cfg.layout {
        Layout::Separable => ((-r, -cfg.margin), (cfg.margin, r)),
        Layout::Mixed | Layout::Random => ((-r, r), (-r, r)),
    };
    let a = uniform_box(&mut rng, cfg.count, xa, (-r, r));
    let b = uniform_box(&mut rng, cfg.count, xb, (-r, r));
    Ok(PointSets { a, b })
}

fn uniform_box<R: Rng>(rng: &mut R, n: usize, x: (f64, f64), y: (f64, f64)) -> Vec<Point2> {
    (0..n)
        .map(|_| Vector2::new(rng.gen_range(x.0..=x.1), rng.gen_range(y.0..=y.1)))
        .collect()
}
