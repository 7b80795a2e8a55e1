//! Definitions of celestial bodies.

use std::sync::Arc;

use color_eyre::eyre::{self, bail, WrapErr};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BodyKind {
    Star,
    Planet,
    DwarfPlanet,
    Moon,
}

/// Surface temperature range (`°C`).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    pub min: f64,
    pub max: f64,
}

/// A celestial body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Stable catalog key, e.g. `"earth"`.
    pub id: Arc<str>,
    pub name: Arc<str>,
    pub kind: BodyKind,
    /// The id of the body this one orbits. Only moons have one.
    #[serde(default)]
    pub parent: Option<Arc<str>>,
    /// Display color, `#RRGGBB`.
    pub color: Arc<str>,
    /// Mean radius (`km`)
    pub radius: f64,
    /// Mass (`kg`)
    pub mass: f64,
    /// Semi-major axis. `AU` for bodies orbiting the star, `km` for moons.
    pub distance: f64,
    /// Sidereal orbital period (`days`). Negative for retrograde orbits.
    pub orbital_period: f64,
    /// Length of sidereal day (`hours`). Negative for retrograde spin.
    pub rotation_period: f64,
    /// Obliquity (`deg`)
    pub axial_tilt: f64,
    pub temperature: Temperature,
    pub eccentricity: f64,
    /// Inclination to the reference plane (`deg`)
    pub inclination: f64,
    #[serde(default)]
    pub has_rings: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub facts: Vec<String>,
}

impl Body {
    pub fn is_star(&self) -> bool {
        self.kind == BodyKind::Star
    }

    pub fn is_moon(&self) -> bool {
        self.kind == BodyKind::Moon
    }

    /// Sign of the axial spin, independent of orbital direction.
    pub fn spin_direction(&self) -> f64 {
        if self.rotation_period < 0.0 {
            -1.0
        } else {
            1.0
        }
    }

    /// Sign of the orbital motion.
    pub fn orbit_direction(&self) -> f64 {
        if self.orbital_period < 0.0 {
            -1.0
        } else {
            1.0
        }
    }
}

/// A read-only catalog of bodies in declaration order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SolarSystem {
    pub bodies: Vec<Body>,
}

impl SolarSystem {
    /// Parse a catalog from RON, rejecting duplicate ids and moons whose
    /// parent is not in the catalog.
    pub fn from_ron(src: &str) -> eyre::Result<Self> {
        let system: SolarSystem = ron::from_str(src).wrap_err("failed to parse body catalog")?;
        system.validate()?;
        Ok(system)
    }

    pub fn to_ron(&self) -> eyre::Result<String> {
        Ok(ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::default(),
        )?)
    }

    fn validate(&self) -> eyre::Result<()> {
        if let Some(id) = self.bodies.iter().map(|b| &b.id).duplicates().next() {
            bail!("duplicate body id `{id}`");
        }
        for body in &self.bodies {
            if let Some(parent) = &body.parent {
                if self.get(parent).is_none() {
                    bail!("body `{}` orbits unknown parent `{parent}`", body.id);
                }
            }
        }
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| &*b.id == id)
    }

    pub fn star(&self) -> Option<&Body> {
        self.bodies.iter().find(|b| b.is_star())
    }

    pub fn moons_of<'a>(&'a self, parent: &'a str) -> impl Iterator<Item = &'a Body> + 'a {
        self.bodies
            .iter()
            .filter(move |b| b.is_moon() && b.parent.as_deref() == Some(parent))
    }

    pub fn of_kind(&self, kind: BodyKind) -> impl Iterator<Item = &Body> + '_ {
        self.bodies.iter().filter(move |b| b.kind == kind)
    }

    /// Case-insensitive substring search over names and ids.
    pub fn search(&self, query: &str) -> Vec<&Body> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        self.bodies
            .iter()
            .filter(|b| {
                b.name.to_lowercase().contains(&query) || b.id.to_lowercase().contains(&query)
            })
            .collect()
    }
}
