//! Mean, eccentric and true anomaly.

use std::f64::consts;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{
    bodies::Body,
    kepler::orbits,
    scale::SceneScale,
    time::{days_since, J2000},
};

/// Fixed-point iterations spent on Kepler's equation.
pub const KEPLER_ITERATIONS: usize = 10;

/// Mean anomaly (`deg`, in `[0, 360)`) of a body with the given orbital
/// period at `date`, measured from `epoch`.
///
/// The rate uses `|period|`; retrograde motion is applied by the position
/// transform. A zero period yields 0.
pub fn mean_anomaly(period_days: f64, date: OffsetDateTime, epoch: OffsetDateTime) -> f64 {
    if period_days == 0.0 {
        return 0.0;
    }
    let raw = 360.0 * days_since(date, epoch) / period_days.abs();
    normalize_degrees(raw)
}

/// Wrap an angle into `[0, 360)`.
pub fn normalize_degrees(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Solve `E = M + e·sin(E)` for the eccentric anomaly (`rad`).
///
/// Always runs [`KEPLER_ITERATIONS`] steps from `E = M`, so equal inputs give
/// identical outputs.
pub fn solve_eccentric_anomaly(mean_anomaly_deg: f64, e: f64) -> f64 {
    let ma = mean_anomaly_deg * consts::PI / 180.0;
    let mut ea = ma;
    for _ in 0..KEPLER_ITERATIONS {
        ea = ma + e * libm::sin(ea);
    }
    ea
}

/// True anomaly (`rad`) from the eccentric anomaly, for `0 <= e < 1`.
pub fn true_anomaly(ea: f64, e: f64) -> f64 {
    2.0 * libm::atan2(
        libm::sqrt(1.0 + e) * libm::sin(ea / 2.0),
        libm::sqrt(1.0 - e) * libm::cos(ea / 2.0),
    )
}

/// Orbital state of one body at one instant. Recomputed on demand; it has no
/// identity beyond its inputs.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrbitalState {
    /// `deg`
    pub mean_anomaly: f64,
    /// `rad`
    pub eccentric_anomaly: f64,
    /// `rad`
    pub true_anomaly: f64,
    /// Scene units
    pub position: Vector3<f64>,
}

impl OrbitalState {
    pub fn at(
        body: &Body,
        date: OffsetDateTime,
        parent_position: Vector3<f64>,
        scale: &SceneScale,
    ) -> Self {
        if body.is_star() {
            return Self {
                mean_anomaly: 0.0,
                eccentric_anomaly: 0.0,
                true_anomaly: 0.0,
                position: Vector3::zeros(),
            };
        }
        let ma = mean_anomaly(body.orbital_period, date, J2000);
        let ea = solve_eccentric_anomaly(ma, body.eccentricity);
        let ta = true_anomaly(ea, body.eccentricity);
        let position = orbits::place(body, ea, ta, parent_position, scale);
        Self {
            mean_anomaly: ma,
            eccentric_anomaly: ea,
            true_anomaly: ta,
            position,
        }
    }
}
