//! Weight rounding granularities
//!
//! Every weight formula rounds onto one of five grids. Values are scaled to
//! the grid, rounded, then scaled back. A small tolerance absorbs binary
//! floating point noise so that values already on the grid stay put. The
//! tolerance grows with the scaled value, since a kilogram-scale capital
//! hull sits near 1e9 grid steps where a single ulp exceeds any fixed epsilon.

use serde::{Deserialize, Serialize};

const EPSILON: f64 = 1e-9;
const RELATIVE_EPSILON: f64 = 1e-12;

fn tolerance(scaled: f64) -> f64 {
    (scaled.abs() * RELATIVE_EPSILON).max(EPSILON)
}

/// Rounding grid for a weight category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    Ton,
    HalfTon,
    QuarterTon,
    TenthTon,
    /// Kilogram scale (0.001 t)
    Kilogram,
}

impl Granularity {
    pub const ALL: [Granularity; 5] = [
        Granularity::Ton,
        Granularity::HalfTon,
        Granularity::QuarterTon,
        Granularity::TenthTon,
        Granularity::Kilogram,
    ];

    /// Number of grid steps in one ton
    pub fn steps_per_ton(self) -> f64 {
        match self {
            Granularity::Ton => 1.0,
            Granularity::HalfTon => 2.0,
            Granularity::QuarterTon => 4.0,
            Granularity::TenthTon => 10.0,
            Granularity::Kilogram => 1000.0,
        }
    }

    /// Round up to the grid
    pub fn ceil(self, tons: f64) -> f64 {
        let steps = self.steps_per_ton();
        let scaled = tons * steps;
        (scaled - tolerance(scaled)).ceil() / steps
    }

    /// Round down to the grid
    pub fn floor(self, tons: f64) -> f64 {
        let steps = self.steps_per_ton();
        let scaled = tons * steps;
        (scaled + tolerance(scaled)).floor() / steps
    }

    /// Round to the nearest grid point, halves going up
    pub fn round(self, tons: f64) -> f64 {
        let steps = self.steps_per_ton();
        let scaled = tons * steps;
        (scaled + 0.5 + tolerance(scaled)).floor() / steps
    }

    /// Round up, but never coarser than half a ton
    pub fn ceil_max_half(self, tons: f64) -> f64 {
        match self {
            Granularity::Ton => Granularity::HalfTon.ceil(tons),
            other => other.ceil(tons),
        }
    }
}
