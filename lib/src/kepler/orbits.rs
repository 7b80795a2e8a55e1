//! Scene positions of orbiting bodies.

use std::{collections::HashMap, f64::consts, sync::Arc};

use nalgebra::Vector3;
use time::OffsetDateTime;
use tracing::warn;

use crate::{
    bodies::{Body, BodyKind, SolarSystem},
    kepler::anomaly::OrbitalState,
    scale::{clamped_satellite_distance, SceneScale},
};

/// Scene-unit semi-major axis of `body`.
///
/// Moons use the satellite scale, raised to the collision floor against their
/// parent; everything else uses the interplanetary scale.
pub fn semi_major_axis(body: &Body, scale: &SceneScale) -> f64 {
    match body.kind {
        BodyKind::Star => 0.0,
        BodyKind::Moon => {
            clamped_satellite_distance(body, body.parent.as_deref().unwrap_or_default(), scale)
        }
        BodyKind::Planet | BodyKind::DwarfPlanet => body.distance * scale.distance,
    }
}

/// Tilt an in-plane `(x, z)` point about the x axis by `i` radians.
fn tilt(x: f64, z: f64, i: f64) -> Vector3<f64> {
    Vector3::new(x, z * libm::sin(i), z * libm::cos(i))
}

/// Place `body` given its eccentric and true anomaly (`rad`).
pub(crate) fn place(
    body: &Body,
    ea: f64,
    ta: f64,
    parent_position: Vector3<f64>,
    scale: &SceneScale,
) -> Vector3<f64> {
    let a = semi_major_axis(body, scale);
    let r = a * (1.0 - body.eccentricity * libm::cos(ea));
    let angle = ta * body.orbit_direction();
    let offset = tilt(
        r * libm::cos(angle),
        r * libm::sin(angle),
        body.inclination * consts::PI / 180.0,
    );
    offset + parent_position
}

/// Position of `body` at `date` in scene units, relative to the scene origin.
///
/// `parent_position` must already be resolved for moons; pass the origin for
/// bodies orbiting the star. The star itself is always at the origin.
pub fn orbital_position(
    body: &Body,
    date: OffsetDateTime,
    parent_position: Vector3<f64>,
    scale: &SceneScale,
) -> Vector3<f64> {
    OrbitalState::at(body, date, parent_position, scale).position
}

/// Distance between two scene positions, in `AU`.
pub fn distance_between(p: &Vector3<f64>, q: &Vector3<f64>, scale: &SceneScale) -> f64 {
    (p - q).norm() / scale.distance
}

/// Sample the orbit of `body` as a closed polyline of `segments + 1` points.
pub fn orbit_path(
    body: &Body,
    parent_position: Vector3<f64>,
    scale: &SceneScale,
    segments: usize,
) -> Vec<Vector3<f64>> {
    if body.is_star() || segments == 0 {
        return Vec::new();
    }
    let a = semi_major_axis(body, scale);
    let e = body.eccentricity;
    let i = body.inclination * consts::PI / 180.0;
    let p = a * (1.0 - e * e);
    (0..=segments)
        .map(|k| {
            let theta = k as f64 / segments as f64 * consts::TAU;
            let r = p / (1.0 + e * libm::cos(theta));
            tilt(r * libm::cos(theta), r * libm::sin(theta), i) + parent_position
        })
        .collect()
}

/// Resolve every body of `system` at `date`, parents before their moons.
pub fn system_positions(
    system: &SolarSystem,
    date: OffsetDateTime,
    scale: &SceneScale,
) -> HashMap<Arc<str>, Vector3<f64>> {
    system_positions_with(system, |body, parent| {
        orbital_position(body, date, parent, scale)
    })
}

/// Parent-first resolution with a caller-supplied `position(body, parent)`.
pub fn system_positions_with(
    system: &SolarSystem,
    mut position: impl FnMut(&Body, Vector3<f64>) -> Vector3<f64>,
) -> HashMap<Arc<str>, Vector3<f64>> {
    let mut positions = HashMap::with_capacity(system.bodies.len());
    for body in system.bodies.iter().filter(|b| !b.is_moon()) {
        positions.insert(body.id.clone(), position(body, Vector3::zeros()));
    }
    for moon in system.bodies.iter().filter(|b| b.is_moon()) {
        let parent = moon.parent.as_ref().and_then(|p| positions.get(p)).copied();
        let parent = parent.unwrap_or_else(|| {
            warn!(moon = %moon.id, parent = ?moon.parent, "parent not resolved, using origin");
            Vector3::zeros()
        });
        positions.insert(moon.id.clone(), position(moon, parent));
    }
    positions
}

#[cfg(test)]
mod tests {
    use time::{macros::datetime, Duration};

    use super::*;
    use crate::{catalog, kepler::anomaly::mean_anomaly, time::J2000};

    fn planet(period: f64) -> Body {
        let mut body = catalog::builtin().get("earth").unwrap().clone();
        body.orbital_period = period;
        body.eccentricity = 0.0;
        body.inclination = 0.0;
        body
    }

    #[test]
    fn star_stays_at_origin() {
        let system = catalog::builtin();
        let sun = system.star().unwrap();
        let scale = SceneScale::default();
        for date in [J2000, datetime!(1066-10-14 09:00 UTC), datetime!(2999-01-01 00:00 UTC)] {
            let parent = Vector3::new(5.0, -3.0, 1.0);
            assert_eq!(orbital_position(sun, date, parent, &scale), Vector3::zeros());
        }
    }

    #[test]
    fn earth_at_epoch() {
        let system = catalog::builtin();
        let earth = system.get("earth").unwrap();
        let scale = SceneScale::default();
        let p = orbital_position(earth, J2000, Vector3::zeros(), &scale);
        // perihelion along +x
        assert!((p.x - 30.0 * (1.0 - 0.0167)).abs() < 1e-9, "{p:?}");
        assert!(p.y.abs() < 1e-12 && p.z.abs() < 1e-12);
    }

    #[test]
    fn deterministic() {
        let system = catalog::builtin();
        let scale = SceneScale::default();
        let date = datetime!(1987-03-04 05:06:07 UTC);
        for body in &system.bodies {
            let parent = Vector3::new(1.5, 0.25, -2.0);
            let a = orbital_position(body, date, parent, &scale);
            let b = orbital_position(body, date, parent, &scale);
            assert_eq!(a, b, "{}", body.id);
            assert!(a.iter().all(|c| c.is_finite()), "{}", body.id);
        }
    }

    #[test]
    fn retrograde_runs_backwards() {
        let scale = SceneScale::default();
        let pro = planet(5832.5);
        let retro = planet(-5832.5);
        let date = J2000 + Duration::days(100);
        let p = orbital_position(&pro, date, Vector3::zeros(), &scale);
        let r = orbital_position(&retro, date, Vector3::zeros(), &scale);
        let pro_angle = libm::atan2(p.z, p.x);
        let retro_angle = libm::atan2(r.z, r.x);
        assert!(pro_angle > 0.0);
        assert!((pro_angle + retro_angle).abs() < 1e-12);
        // same distance, mirrored across the x axis
        assert!((p.x - r.x).abs() < 1e-12 && (p.z + r.z).abs() < 1e-12);
    }

    #[test]
    fn inclination_lifts_out_of_plane() {
        let scale = SceneScale::default();
        let mut body = planet(365.25);
        body.inclination = 90.0;
        let date = J2000 + Duration::hours(24 * 365 / 4);
        let p = orbital_position(&body, date, Vector3::zeros(), &scale);
        assert!(p.z.abs() < 1e-9, "{p:?}");
        assert!(p.y > 29.0);
    }

    #[test]
    fn moons_follow_parents() {
        let system = catalog::builtin();
        let scale = SceneScale::default();
        let date = datetime!(2024-04-08 18:00 UTC);
        let positions = system_positions(&system, date, &scale);
        assert_eq!(positions.len(), system.bodies.len());
        let earth = positions["earth"];
        let moon = positions["moon"];
        let a = semi_major_axis(system.get("moon").unwrap(), &scale);
        let e = 0.0549;
        let d = (moon - earth).norm();
        assert!(d >= a * (1.0 - e) - 1e-9 && d <= a * (1.0 + e) + 1e-9, "{d}");
        let alone = orbital_position(system.get("moon").unwrap(), date, earth, &scale);
        assert_eq!(alone, moon);
    }

    #[test]
    fn resolver_sees_parents_first() {
        let mut system = catalog::builtin();
        let mut stray = system.get("moon").unwrap().clone();
        stray.id = "stray".into();
        stray.parent = Some("vulcan".into());
        system.bodies.insert(0, stray);

        let mut seen = Vec::new();
        let positions = system_positions_with(&system, |body, parent| {
            seen.push((body.id.clone(), parent));
            Vector3::new(seen.len() as f64, 0.0, 0.0)
        });
        assert_eq!(positions.len(), system.bodies.len());
        for (id, parent) in &seen {
            let body = system.get(id).unwrap();
            match body.parent.as_deref() {
                Some("vulcan") | None => assert_eq!(*parent, Vector3::zeros(), "{id}"),
                Some(p) => assert_eq!(*parent, positions[p], "{id}"),
            }
        }
        let first_moon = seen.iter().position(|(id, _)| system.get(id).unwrap().is_moon());
        assert_eq!(first_moon, Some(system.bodies.iter().filter(|b| !b.is_moon()).count()));
    }

    #[test]
    fn distances_in_au() {
        let scale = SceneScale::default();
        let p = Vector3::new(3.0, -7.5, 11.0);
        assert_eq!(distance_between(&p, &p, &scale), 0.0);
        let q = Vector3::new(33.0, -7.5, 11.0);
        assert!((distance_between(&p, &q, &scale) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn path_is_closed_and_contains_body() {
        let system = catalog::builtin();
        let scale = SceneScale::default();
        let mercury = system.get("mercury").unwrap();
        let path = orbit_path(mercury, Vector3::zeros(), &scale, 128);
        assert_eq!(path.len(), 129);
        assert!((path[0] - path[128]).norm() < 1e-9);
        let a = semi_major_axis(mercury, &scale);
        let e = mercury.eccentricity;
        for p in &path {
            let r = p.norm();
            assert!(r >= a * (1.0 - e) - 1e-9 && r <= a * (1.0 + e) + 1e-9);
        }
        assert!(orbit_path(system.star().unwrap(), Vector3::zeros(), &scale, 64).is_empty());
    }

    #[test]
    fn anomaly_matches_state() {
        let system = catalog::builtin();
        let scale = SceneScale::default();
        let mars = system.get("mars").unwrap();
        let date = datetime!(2020-07-30 11:50 UTC);
        let state = OrbitalState::at(mars, date, Vector3::zeros(), &scale);
        assert_eq!(state.mean_anomaly, mean_anomaly(687.0, date, J2000));
        assert_eq!(state.position, orbital_position(mars, date, Vector3::zeros(), &scale));
    }
}
