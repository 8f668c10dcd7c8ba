use anyhow::{Context, Result};
use linsep::api::{Point2, PointSets};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// On-disk pair of point sets: `{"set_a": [[x, y], ...], "set_b": [[x, y], ...]}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub set_a: Vec<[f64; 2]>,
    pub set_b: Vec<[f64; 2]>,
}

impl Dataset {
    pub fn from_points(a: &[Point2], b: &[Point2]) -> Self {
        Self {
            set_a: a.iter().map(|p| [p.x, p.y]).collect(),
            set_b: b.iter().map(|p| [p.x, p.y]).collect(),
        }
    }

    pub fn to_points(&self) -> PointSets {
        PointSets {
            a: self.set_a.iter().map(|&[x, y]| Point2::new(x, y)).collect(),
            b: self.set_b.iter().map(|&[x, y]| Point2::new(x, y)).collect(),
        }
    }

    /// Pretty-printed JSON; parent directories are created as needed.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating dataset dir {}", parent.display()))?;
            }
        }
        fs::write(path, serde_json::to_vec_pretty(self)?)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
    }
}

impl From<&PointSets> for Dataset {
    fn from(sets: &PointSets) -> Self {
        Self::from_points(&sets.a, &sets.b)
    }
}
