//! Two-body Keplerian motion.

pub mod anomaly;
pub mod ecliptic;
pub mod orbits;

pub use anomaly::{mean_anomaly, solve_eccentric_anomaly, true_anomaly, OrbitalState};
pub use orbits::{
    distance_between, orbit_path, orbital_position, system_positions, system_positions_with,
};
