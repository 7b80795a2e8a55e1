//! Orbital angles for display.
//!
//! The position transform only applies inclination; the orientation angles
//! below are reported alongside it and never move a body.

use std::f64::consts;

use time::OffsetDateTime;

use crate::{
    bodies::Body,
    kepler::anomaly::{mean_anomaly, normalize_degrees, solve_eccentric_anomaly, true_anomaly},
    time::J2000,
};

/// Argument of perihelion (`deg`) by body id.
const ARGUMENT_OF_PERIHELION: &[(&str, f64)] = &[
    ("mercury", 29.12),
    ("venus", 54.85),
    ("earth", 114.21),
    ("mars", 286.50),
    ("jupiter", 273.87),
    ("saturn", 339.39),
    ("uranus", 96.99),
    ("neptune", 273.19),
    ("pluto", 113.76),
    ("ceres", 73.60),
    ("eris", 151.43),
    ("makemake", 297.24),
    ("haumea", 239.18),
];

/// Longitude of the ascending node (`deg`) by body id.
const LONGITUDE_OF_ASCENDING_NODE: &[(&str, f64)] = &[
    ("mercury", 48.33),
    ("venus", 76.68),
    ("earth", 348.74),
    ("mars", 49.56),
    ("jupiter", 100.46),
    ("saturn", 113.64),
    ("uranus", 74.01),
    ("neptune", 131.78),
    ("pluto", 110.30),
    ("ceres", 80.33),
    ("eris", 35.87),
    ("makemake", 79.38),
    ("haumea", 121.90),
];

fn lookup(table: &[(&str, f64)], id: &str) -> f64 {
    table
        .iter()
        .find(|(key, _)| *key == id)
        .map_or(0.0, |&(_, v)| v)
}

/// 0 for ids without a tabulated value.
pub fn argument_of_perihelion(id: &str) -> f64 {
    lookup(ARGUMENT_OF_PERIHELION, id)
}

/// 0 for ids without a tabulated value.
pub fn longitude_of_ascending_node(id: &str) -> f64 {
    lookup(LONGITUDE_OF_ASCENDING_NODE, id)
}

pub fn mean_anomaly_degrees(body: &Body, date: OffsetDateTime) -> f64 {
    if body.is_star() {
        return 0.0;
    }
    mean_anomaly(body.orbital_period, date, J2000)
}

pub fn true_anomaly_degrees(body: &Body, date: OffsetDateTime) -> f64 {
    if body.is_star() {
        return 0.0;
    }
    let ma = mean_anomaly(body.orbital_period, date, J2000);
    let ea = solve_eccentric_anomaly(ma, body.eccentricity);
    normalize_degrees(true_anomaly(ea, body.eccentricity) * 180.0 / consts::PI)
}

/// Heliocentric ecliptic longitude (`deg`), true anomaly plus argument of
/// perihelion.
pub fn ecliptic_longitude(body: &Body, date: OffsetDateTime) -> f64 {
    if body.is_star() {
        return 0.0;
    }
    normalize_degrees(true_anomaly_degrees(body, date) + argument_of_perihelion(&body.id))
}

#[cfg(test)]
mod tests {
    use time::Duration;

    use super::*;
    use crate::catalog;

    #[test]
    fn tables_default_to_zero() {
        assert_eq!(argument_of_perihelion("moon"), 0.0);
        assert_eq!(longitude_of_ascending_node("phobos"), 0.0);
        assert_eq!(longitude_of_ascending_node("neptune"), 131.78);
    }

    #[test]
    fn longitude_at_epoch_is_perihelion() {
        let system = catalog::builtin();
        let earth = system.get("earth").unwrap();
        assert!(true_anomaly_degrees(earth, J2000).abs() < 1e-9);
        assert!((ecliptic_longitude(earth, J2000) - 114.21).abs() < 1e-9);
        assert_eq!(ecliptic_longitude(system.star().unwrap(), J2000), 0.0);
    }

    #[test]
    fn angles_stay_in_range() {
        let system = catalog::builtin();
        let mut date = J2000 - Duration::days(40_000);
        while date < J2000 + Duration::days(40_000) {
            for body in &system.bodies {
                for angle in [
                    mean_anomaly_degrees(body, date),
                    true_anomaly_degrees(body, date),
                    ecliptic_longitude(body, date),
                ] {
                    assert!((0.0..360.0).contains(&angle), "{} {angle}", body.id);
                }
            }
            date += Duration::days(997);
        }
    }
}
