//! Scene scaling.
//!
//! True proportions would leave most bodies sub-pixel and put moons inside
//! their planets, so render sizes go through a curated per-body multiplier
//! and moon orbits are kept clear of the inflated parent.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::bodies::Body;

/// Multiplier used for ids missing from [`VISIBILITY`].
pub const DEFAULT_VISIBILITY: f64 = 100.0;

/// Render size multipliers keyed by body id. Hand tuned so every planet stays
/// visibly larger than its own moons.
const VISIBILITY: &[(&str, f64)] = &[
    ("sun", 0.3),
    ("mercury", 120.0),
    ("venus", 80.0),
    ("earth", 80.0),
    ("mars", 100.0),
    ("jupiter", 15.0),
    ("saturn", 18.0),
    ("uranus", 30.0),
    ("neptune", 30.0),
    ("pluto", 250.0),
    ("ceres", 350.0),
    ("eris", 250.0),
    ("makemake", 300.0),
    ("haumea", 300.0),
    ("moon", 120.0),
    ("phobos", 500.0),
    ("deimos", 600.0),
    ("io", 120.0),
    ("europa", 120.0),
    ("ganymede", 100.0),
    ("callisto", 100.0),
    ("titan", 100.0),
    ("enceladus", 250.0),
    ("mimas", 350.0),
    ("rhea", 180.0),
    ("dione", 220.0),
    ("iapetus", 180.0),
    ("miranda", 300.0),
    ("ariel", 220.0),
    ("umbriel", 220.0),
    ("titania", 180.0),
    ("oberon", 180.0),
    ("triton", 150.0),
];

/// Conversion factors from physical to scene units.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneScale {
    /// Scene units per `AU`.
    pub distance: f64,
    /// Scene units per `km` of body radius.
    pub size: f64,
    /// Scene units per `km` of satellite orbit.
    pub satellite_distance: f64,
    /// Uniform multiplier applied to every body in realistic mode.
    pub realistic_floor: f64,
    /// Clearance factor between a moon's orbit and the inflated bodies.
    pub collision_margin: f64,
}

impl Default for SceneScale {
    fn default() -> Self {
        Self {
            distance: 30.0,
            size: 0.000_01,
            satellite_distance: 0.000_02,
            realistic_floor: 100.0,
            collision_margin: 3.0,
        }
    }
}

pub fn visibility_multiplier(id: &str) -> f64 {
    VISIBILITY
        .iter()
        .find(|(key, _)| *key == id)
        .map_or(DEFAULT_VISIBILITY, |&(_, m)| m)
}

/// Render radius of `body` in scene units.
pub fn visual_size(body: &Body, realistic: bool, scale: &SceneScale) -> f64 {
    let base = body.radius * scale.size;
    if realistic {
        base * scale.realistic_floor
    } else {
        base * visibility_multiplier(&body.id)
    }
}

/// Smallest orbit radius that keeps `moon` clear of its parent once both are
/// drawn with their visibility multipliers.
pub fn min_safe_distance(moon: &Body, parent_id: &str, scale: &SceneScale) -> f64 {
    (visibility_multiplier(&moon.id) + visibility_multiplier(parent_id))
        * moon.radius
        * scale.size
        * scale.collision_margin
}

/// Satellite orbit radius as the scene would place it without the clamp.
pub fn physical_satellite_distance(moon: &Body, scale: &SceneScale) -> f64 {
    moon.distance * scale.satellite_distance
}

/// Scene semi-major axis of a moon orbiting `parent`. Raises the physical
/// value to [`min_safe_distance`] when it is smaller; never lowers it.
pub fn safe_orbital_distance(moon: &Body, parent: &Body, scale: &SceneScale) -> f64 {
    clamped_satellite_distance(moon, &parent.id, scale)
}

pub(crate) fn clamped_satellite_distance(moon: &Body, parent_id: &str, scale: &SceneScale) -> f64 {
    let physical = physical_satellite_distance(moon, scale);
    let floor = min_safe_distance(moon, parent_id, scale);
    if physical < floor {
        trace!(moon = %moon.id, physical, floor, "satellite orbit raised to collision floor");
        floor
    } else {
        physical
    }
}

/// Whether the collision floor replaces the physical distance for `moon`.
pub fn satellite_clamp_engaged(moon: &Body, scale: &SceneScale) -> bool {
    let parent = moon.parent.as_deref().unwrap_or_default();
    physical_satellite_distance(moon, scale) < min_safe_distance(moon, parent, scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn unknown_ids_use_default() {
        assert_eq!(visibility_multiplier("vulcan"), DEFAULT_VISIBILITY);
        assert_eq!(visibility_multiplier("jupiter"), 15.0);
    }

    #[test]
    fn realistic_mode_keeps_proportions() {
        let system = catalog::builtin();
        let scale = SceneScale::default();
        let earth = system.get("earth").unwrap();
        let moon = system.get("moon").unwrap();
        let ratio = visual_size(earth, true, &scale) / visual_size(moon, true, &scale);
        assert!((ratio - earth.radius / moon.radius).abs() < 1e-12);
        assert!((visual_size(earth, true, &scale) - 6371.0 * 1e-5 * 100.0).abs() < 1e-12);
        assert!((visual_size(earth, false, &scale) - 6371.0 * 1e-5 * 80.0).abs() < 1e-12);
    }

    #[test]
    fn planets_dwarf_their_moons() {
        let system = catalog::builtin();
        let scale = SceneScale::default();
        for moon in system.bodies.iter().filter(|b| b.is_moon()) {
            let parent = system.get(moon.parent.as_deref().unwrap()).unwrap();
            assert!(
                visual_size(parent, false, &scale) > visual_size(moon, false, &scale),
                "{} outgrows {}",
                moon.id,
                parent.id
            );
        }
    }

    #[test]
    fn clamp_engages_for_the_moon() {
        let system = catalog::builtin();
        let scale = SceneScale::default();
        let earth = system.get("earth").unwrap();
        let moon = system.get("moon").unwrap();
        let floor = min_safe_distance(moon, "earth", &scale);
        assert!(physical_satellite_distance(moon, &scale) < floor);
        assert!(satellite_clamp_engaged(moon, &scale));
        assert_eq!(safe_orbital_distance(moon, earth, &scale), floor);
    }

    #[test]
    fn clamp_never_lowers() {
        let system = catalog::builtin();
        let scale = SceneScale::default();
        let jupiter = system.get("jupiter").unwrap();
        let callisto = system.get("callisto").unwrap();
        assert!(!satellite_clamp_engaged(callisto, &scale));
        assert_eq!(
            safe_orbital_distance(callisto, jupiter, &scale),
            physical_satellite_distance(callisto, &scale)
        );
        for moon in system.bodies.iter().filter(|b| b.is_moon()) {
            let parent = system.get(moon.parent.as_deref().unwrap()).unwrap();
            assert!(
                safe_orbital_distance(moon, parent, &scale)
                    >= physical_satellite_distance(moon, &scale)
            );
        }
    }
}
