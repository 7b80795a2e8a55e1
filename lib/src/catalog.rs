//! The built-in catalog: the Sun, the eight planets, five dwarf planets and
//! the major moons.

use std::sync::Arc;

use crate::bodies::{Body, BodyKind, SolarSystem, Temperature};

struct Entry {
    id: &'static str,
    name: &'static str,
    kind: BodyKind,
    parent: Option<&'static str>,
    color: &'static str,
    radius: f64,
    mass: f64,
    distance: f64,
    orbital_period: f64,
    rotation_period: f64,
    axial_tilt: f64,
    temperature: (f64, f64),
    eccentricity: f64,
    inclination: f64,
    has_rings: bool,
    description: &'static str,
    facts: &'static [&'static str],
}

impl Entry {
    fn to_body(&self) -> Body {
        Body {
            id: Arc::from(self.id),
            name: Arc::from(self.name),
            kind: self.kind,
            parent: self.parent.map(Arc::from),
            color: Arc::from(self.color),
            radius: self.radius,
            mass: self.mass,
            distance: self.distance,
            orbital_period: self.orbital_period,
            rotation_period: self.rotation_period,
            axial_tilt: self.axial_tilt,
            temperature: Temperature {
                min: self.temperature.0,
                max: self.temperature.1,
            },
            eccentricity: self.eccentricity,
            inclination: self.inclination,
            has_rings: self.has_rings,
            description: self.description.to_owned(),
            facts: self.facts.iter().map(|&f| f.to_owned()).collect(),
        }
    }
}

pub fn builtin() -> SolarSystem {
    SolarSystem {
        bodies: ENTRIES.iter().map(Entry::to_body).collect(),
    }
}

#[rustfmt::skip]
const ENTRIES: &[Entry] = &[
    Entry {
        id: "sun",
        name: "Sun",
        kind: BodyKind::Star,
        parent: None,
        color: "#FDB813",
        radius: 696340.0,
        mass: 1.989e30,
        distance: 0.0,
        orbital_period: 0.0,
        rotation_period: 609.12,
        axial_tilt: 7.25,
        temperature: (5500.0, 5500.0),
        eccentricity: 0.0,
        inclination: 0.0,
        has_rings: false,
        description: "The Sun is the star at the center of our Solar System. It is a nearly perfect sphere of hot plasma.",
        facts: &[
            "Contains 99.86% of the Solar System's mass",
            "About 4.6 billion years old",
            "Takes 225-250 million years to orbit the Milky Way",
            "Core temperature reaches 15 million °C",
        ],
    },
    Entry {
        id: "mercury",
        name: "Mercury",
        kind: BodyKind::Planet,
        parent: None,
        color: "#B5B5B5",
        radius: 2439.7,
        mass: 3.301e23,
        distance: 0.387,
        orbital_period: 87.97,
        rotation_period: 1407.6,
        axial_tilt: 0.034,
        temperature: (-180.0, 430.0),
        eccentricity: 0.2056,
        inclination: 7.0,
        has_rings: false,
        description: "Mercury is the smallest planet in our Solar System and closest to the Sun.",
        facts: &[
            "No atmosphere to retain heat",
            "Most cratered planet in the Solar System",
            "One day on Mercury = 59 Earth days",
            "Has a large iron core",
        ],
    },
    Entry {
        id: "venus",
        name: "Venus",
        kind: BodyKind::Planet,
        parent: None,
        color: "#E6C229",
        radius: 6051.8,
        mass: 4.867e24,
        distance: 0.723,
        orbital_period: 224.7,
        rotation_period: -5832.5,
        axial_tilt: 177.4,
        temperature: (462.0, 462.0),
        eccentricity: 0.0067,
        inclination: 3.4,
        has_rings: false,
        description: "Venus is the second planet from the Sun and the hottest planet in our Solar System.",
        facts: &[
            "Rotates backwards compared to most planets",
            "Day is longer than its year",
            "Surface pressure is 90x Earth's",
            "Called Earth's \"sister planet\"",
        ],
    },
    Entry {
        id: "earth",
        name: "Earth",
        kind: BodyKind::Planet,
        parent: None,
        color: "#6B93D6",
        radius: 6371.0,
        mass: 5.972e24,
        distance: 1.0,
        orbital_period: 365.25,
        rotation_period: 23.93,
        axial_tilt: 23.44,
        temperature: (-89.0, 57.0),
        eccentricity: 0.0167,
        inclination: 0.0,
        has_rings: false,
        description: "Earth is the third planet from the Sun and the only known planet to harbor life.",
        facts: &[
            "Only planet not named after a god",
            "71% of surface is water",
            "Has a powerful magnetic field",
            "Orbits Sun at 107,000 km/h",
        ],
    },
    Entry {
        id: "mars",
        name: "Mars",
        kind: BodyKind::Planet,
        parent: None,
        color: "#C1440E",
        radius: 3389.5,
        mass: 6.39e23,
        distance: 1.524,
        orbital_period: 687.0,
        rotation_period: 24.62,
        axial_tilt: 25.19,
        temperature: (-125.0, 20.0),
        eccentricity: 0.0934,
        inclination: 1.85,
        has_rings: false,
        description: "Mars is the fourth planet from the Sun, often called the \"Red Planet\".",
        facts: &[
            "Has the tallest volcano in the Solar System (Olympus Mons)",
            "Has two small moons: Phobos and Deimos",
            "A year on Mars is 687 Earth days",
            "Has seasons like Earth",
        ],
    },
    Entry {
        id: "jupiter",
        name: "Jupiter",
        kind: BodyKind::Planet,
        parent: None,
        color: "#D8CA9D",
        radius: 69911.0,
        mass: 1.898e27,
        distance: 5.203,
        orbital_period: 4333.0,
        rotation_period: 9.93,
        axial_tilt: 3.13,
        temperature: (-145.0, -145.0),
        eccentricity: 0.0489,
        inclination: 1.3,
        has_rings: false,
        description: "Jupiter is the largest planet in our Solar System, a gas giant with a Great Red Spot.",
        facts: &[
            "Could fit 1,300 Earths inside it",
            "Has at least 95 known moons",
            "Great Red Spot is a storm lasting 400+ years",
            "Has the shortest day of all planets",
        ],
    },
    Entry {
        id: "saturn",
        name: "Saturn",
        kind: BodyKind::Planet,
        parent: None,
        color: "#F4D59E",
        radius: 58232.0,
        mass: 5.683e26,
        distance: 9.537,
        orbital_period: 10759.0,
        rotation_period: 10.7,
        axial_tilt: 26.73,
        temperature: (-178.0, -178.0),
        eccentricity: 0.0565,
        inclination: 2.49,
        has_rings: true,
        description: "Saturn is the sixth planet from the Sun, famous for its stunning ring system.",
        facts: &[
            "Rings are mostly ice and rock",
            "Least dense planet - would float on water",
            "Has 146 known moons",
            "Winds can reach 1,800 km/h",
        ],
    },
    Entry {
        id: "uranus",
        name: "Uranus",
        kind: BodyKind::Planet,
        parent: None,
        color: "#D1E7E7",
        radius: 25362.0,
        mass: 8.681e25,
        distance: 19.191,
        orbital_period: 30687.0,
        rotation_period: -17.24,
        axial_tilt: 97.77,
        temperature: (-224.0, -224.0),
        eccentricity: 0.0457,
        inclination: 0.77,
        has_rings: true,
        description: "Uranus is the seventh planet from the Sun, an ice giant that rotates on its side.",
        facts: &[
            "Rotates on its side at 98° tilt",
            "First planet discovered with telescope",
            "Has 27 known moons",
            "Named after Greek god of the sky",
        ],
    },
    Entry {
        id: "neptune",
        name: "Neptune",
        kind: BodyKind::Planet,
        parent: None,
        color: "#5B5DDF",
        radius: 24622.0,
        mass: 1.024e26,
        distance: 30.069,
        orbital_period: 60190.0,
        rotation_period: 16.11,
        axial_tilt: 28.32,
        temperature: (-218.0, -218.0),
        eccentricity: 0.0113,
        inclination: 1.77,
        has_rings: true,
        description: "Neptune is the eighth and farthest planet from the Sun, known for its vivid blue color.",
        facts: &[
            "Has the strongest winds in the Solar System",
            "Takes 165 years to orbit the Sun",
            "Discovered through mathematical predictions",
            "Has 16 known moons",
        ],
    },
    Entry {
        id: "pluto",
        name: "Pluto",
        kind: BodyKind::DwarfPlanet,
        parent: None,
        color: "#D2B48C",
        radius: 1188.3,
        mass: 1.303e22,
        distance: 39.482,
        orbital_period: 90560.0,
        rotation_period: -153.3,
        axial_tilt: 122.53,
        temperature: (-233.0, -223.0),
        eccentricity: 0.2488,
        inclination: 17.16,
        has_rings: false,
        description: "Pluto is a dwarf planet in the Kuiper Belt, once considered the ninth planet.",
        facts: &[
            "Reclassified as dwarf planet in 2006",
            "Has 5 known moons",
            "Smaller than Earth's Moon",
            "Has a heart-shaped glacier",
        ],
    },
    Entry {
        id: "ceres",
        name: "Ceres",
        kind: BodyKind::DwarfPlanet,
        parent: None,
        color: "#9E9E9E",
        radius: 473.0,
        mass: 9.393e20,
        distance: 2.77,
        orbital_period: 1682.0,
        rotation_period: 9.07,
        axial_tilt: 4.0,
        temperature: (-105.0, -34.0),
        eccentricity: 0.0758,
        inclination: 10.59,
        has_rings: false,
        description: "Ceres is the largest object in the asteroid belt between Mars and Jupiter.",
        facts: &[
            "Contains 1/3 of asteroid belt's mass",
            "First asteroid ever discovered (1801)",
            "Has bright spots (salt deposits)",
            "May have subsurface ocean",
        ],
    },
    Entry {
        id: "eris",
        name: "Eris",
        kind: BodyKind::DwarfPlanet,
        parent: None,
        color: "#E8E8E8",
        radius: 1163.0,
        mass: 1.66e22,
        distance: 67.67,
        orbital_period: 203830.0,
        rotation_period: 25.9,
        axial_tilt: 78.0,
        temperature: (-243.0, -217.0),
        eccentricity: 0.44,
        inclination: 44.19,
        has_rings: false,
        description: "Eris is one of the most massive dwarf planets, located in the scattered disc.",
        facts: &[
            "Discovery led to Pluto's reclassification",
            "Named after Greek goddess of discord",
            "Has one known moon: Dysnomia",
            "Most distant known natural object",
        ],
    },
    Entry {
        id: "makemake",
        name: "Makemake",
        kind: BodyKind::DwarfPlanet,
        parent: None,
        color: "#CD853F",
        radius: 715.0,
        mass: 3.1e21,
        distance: 45.79,
        orbital_period: 112897.0,
        rotation_period: 22.48,
        axial_tilt: 29.0,
        temperature: (-243.0, -238.0),
        eccentricity: 0.159,
        inclination: 29.0,
        has_rings: false,
        description: "Makemake is a dwarf planet in the Kuiper Belt, one of the brightest objects there.",
        facts: &[
            "Named after Rapa Nui creator god",
            "No known atmosphere",
            "Second brightest Kuiper Belt object",
            "Has one known moon",
        ],
    },
    Entry {
        id: "haumea",
        name: "Haumea",
        kind: BodyKind::DwarfPlanet,
        parent: None,
        color: "#F5F5DC",
        radius: 816.0,
        mass: 4.006e21,
        distance: 43.13,
        orbital_period: 103410.0,
        rotation_period: 3.92,
        axial_tilt: 126.0,
        temperature: (-241.0, -241.0),
        eccentricity: 0.195,
        inclination: 28.22,
        has_rings: false,
        description: "Haumea is an elongated dwarf planet with the fastest rotation in the Solar System.",
        facts: &[
            "Egg-shaped due to rapid rotation",
            "Has two moons and a ring",
            "Named after Hawaiian goddess",
            "Rotates once every 4 hours",
        ],
    },
    Entry {
        id: "moon",
        name: "Moon",
        kind: BodyKind::Moon,
        parent: Some("earth"),
        color: "#C4C4C4",
        radius: 1737.4,
        mass: 7.342e22,
        distance: 384400.0,
        orbital_period: 27.32,
        rotation_period: 655.7,
        axial_tilt: 1.54,
        temperature: (-173.0, 127.0),
        eccentricity: 0.0549,
        inclination: 5.14,
        has_rings: false,
        description: "The Moon is Earth's only natural satellite and the fifth largest moon in the Solar System.",
        facts: &[
            "12 humans have walked on it",
            "Slowly drifting away from Earth",
            "Same face always points to Earth",
            "Causes Earth's tides",
        ],
    },
    Entry {
        id: "phobos",
        name: "Phobos",
        kind: BodyKind::Moon,
        parent: Some("mars"),
        color: "#8B7355",
        radius: 11.267,
        mass: 1.0659e16,
        distance: 9376.0,
        orbital_period: 0.319,
        rotation_period: 7.66,
        axial_tilt: 0.0,
        temperature: (-40.0, -4.0),
        eccentricity: 0.0151,
        inclination: 1.093,
        has_rings: false,
        description: "Phobos is the larger and closer of Mars' two moons, destined to crash into Mars in 50 million years.",
        facts: &[
            "Orbits Mars 3 times per Martian day",
            "Will crash into Mars or break apart",
            "Has a large crater called Stickney",
            "May be a captured asteroid",
        ],
    },
    Entry {
        id: "deimos",
        name: "Deimos",
        kind: BodyKind::Moon,
        parent: Some("mars"),
        color: "#9E8B7D",
        radius: 6.2,
        mass: 1.4762e15,
        distance: 23463.0,
        orbital_period: 1.263,
        rotation_period: 30.3,
        axial_tilt: 0.0,
        temperature: (-40.0, -4.0),
        eccentricity: 0.00033,
        inclination: 0.93,
        has_rings: false,
        description: "Deimos is the smaller and farther of Mars' two moons.",
        facts: &[
            "Named after Greek god of terror",
            "Smoother than Phobos",
            "Slowly spiraling away from Mars",
            "About 15 km across",
        ],
    },
    Entry {
        id: "io",
        name: "Io",
        kind: BodyKind::Moon,
        parent: Some("jupiter"),
        color: "#FFFF00",
        radius: 1821.6,
        mass: 8.93e22,
        distance: 421700.0,
        orbital_period: 1.77,
        rotation_period: 42.46,
        axial_tilt: 0.0,
        temperature: (-143.0, -143.0),
        eccentricity: 0.0041,
        inclination: 0.05,
        has_rings: false,
        description: "Io is the innermost Galilean moon of Jupiter and the most volcanically active body in the Solar System.",
        facts: &[
            "Over 400 active volcanoes",
            "Surface constantly reshaped by lava",
            "Discovered by Galileo in 1610",
            "Sulfur gives it yellow color",
        ],
    },
    Entry {
        id: "europa",
        name: "Europa",
        kind: BodyKind::Moon,
        parent: Some("jupiter"),
        color: "#F5DEB3",
        radius: 1560.8,
        mass: 4.8e22,
        distance: 671034.0,
        orbital_period: 3.55,
        rotation_period: 85.22,
        axial_tilt: 0.1,
        temperature: (-160.0, -160.0),
        eccentricity: 0.009,
        inclination: 0.47,
        has_rings: false,
        description: "Europa is one of Jupiter's Galilean moons, believed to have a subsurface ocean.",
        facts: &[
            "May have more water than Earth",
            "Ice crust may be 10-30 km thick",
            "Top candidate for extraterrestrial life",
            "Has a thin oxygen atmosphere",
        ],
    },
    Entry {
        id: "ganymede",
        name: "Ganymede",
        kind: BodyKind::Moon,
        parent: Some("jupiter"),
        color: "#A9A9A9",
        radius: 2634.1,
        mass: 1.4819e23,
        distance: 1070400.0,
        orbital_period: 7.15,
        rotation_period: 171.7,
        axial_tilt: 0.2,
        temperature: (-163.0, -163.0),
        eccentricity: 0.0013,
        inclination: 0.2,
        has_rings: false,
        description: "Ganymede is the largest moon in our Solar System, even bigger than Mercury.",
        facts: &[
            "Larger than planet Mercury",
            "Only moon with its own magnetic field",
            "Has both rocky and icy surface",
            "May have underground ocean",
        ],
    },
    Entry {
        id: "callisto",
        name: "Callisto",
        kind: BodyKind::Moon,
        parent: Some("jupiter"),
        color: "#708090",
        radius: 2410.3,
        mass: 1.0759e23,
        distance: 1882700.0,
        orbital_period: 16.69,
        rotation_period: 400.5,
        axial_tilt: 0.0,
        temperature: (-139.0, -139.0),
        eccentricity: 0.0074,
        inclination: 0.19,
        has_rings: false,
        description: "Callisto is Jupiter's second-largest moon and the most heavily cratered object in the Solar System.",
        facts: &[
            "Surface is 4 billion years old",
            "Possible subsurface ocean",
            "No geological activity",
            "Potential site for future base",
        ],
    },
    Entry {
        id: "titan",
        name: "Titan",
        kind: BodyKind::Moon,
        parent: Some("saturn"),
        color: "#DAA520",
        radius: 2574.7,
        mass: 1.3452e23,
        distance: 1221870.0,
        orbital_period: 15.95,
        rotation_period: 382.7,
        axial_tilt: 0.0,
        temperature: (-179.0, -179.0),
        eccentricity: 0.0288,
        inclination: 0.34,
        has_rings: false,
        description: "Titan is Saturn's largest moon and the only moon with a dense atmosphere.",
        facts: &[
            "Has lakes of liquid methane",
            "Thicker atmosphere than Earth",
            "Only moon with stable surface liquid",
            "Huygens probe landed here in 2005",
        ],
    },
    Entry {
        id: "enceladus",
        name: "Enceladus",
        kind: BodyKind::Moon,
        parent: Some("saturn"),
        color: "#FFFFFF",
        radius: 252.1,
        mass: 1.08e20,
        distance: 238042.0,
        orbital_period: 1.37,
        rotation_period: 32.9,
        axial_tilt: 0.0,
        temperature: (-198.0, -198.0),
        eccentricity: 0.0047,
        inclination: 0.02,
        has_rings: false,
        description: "Enceladus is a small icy moon of Saturn with active geysers.",
        facts: &[
            "Shoots water vapor into space",
            "Brightest object in Solar System",
            "Has subsurface ocean",
            "May harbor microbial life",
        ],
    },
    Entry {
        id: "mimas",
        name: "Mimas",
        kind: BodyKind::Moon,
        parent: Some("saturn"),
        color: "#C0C0C0",
        radius: 198.2,
        mass: 3.75e19,
        distance: 185539.0,
        orbital_period: 0.94,
        rotation_period: 22.6,
        axial_tilt: 0.0,
        temperature: (-209.0, -209.0),
        eccentricity: 0.0196,
        inclination: 1.53,
        has_rings: false,
        description: "Mimas is one of Saturn's moons, famous for its large crater making it look like the Death Star.",
        facts: &[
            "Looks like Star Wars Death Star",
            "Herschel crater is 1/3 its diameter",
            "Smallest known spherical moon",
            "Made mostly of water ice",
        ],
    },
    Entry {
        id: "rhea",
        name: "Rhea",
        kind: BodyKind::Moon,
        parent: Some("saturn"),
        color: "#E8E8E8",
        radius: 763.8,
        mass: 2.306e21,
        distance: 527108.0,
        orbital_period: 4.52,
        rotation_period: 108.4,
        axial_tilt: 0.0,
        temperature: (-174.0, -174.0),
        eccentricity: 0.0012,
        inclination: 0.35,
        has_rings: false,
        description: "Rhea is Saturn's second-largest moon and may have its own thin ring system.",
        facts: &[
            "Second largest moon of Saturn",
            "May have faint ring system",
            "Very thin atmosphere of oxygen",
            "Heavily cratered ice world",
        ],
    },
    Entry {
        id: "dione",
        name: "Dione",
        kind: BodyKind::Moon,
        parent: Some("saturn"),
        color: "#F5F5F5",
        radius: 561.4,
        mass: 1.095e21,
        distance: 377396.0,
        orbital_period: 2.74,
        rotation_period: 65.7,
        axial_tilt: 0.0,
        temperature: (-186.0, -186.0),
        eccentricity: 0.0022,
        inclination: 0.02,
        has_rings: false,
        description: "Dione is a medium-sized moon of Saturn with ice cliffs.",
        facts: &[
            "Has bright ice cliffs",
            "Shares orbit with two tiny moons",
            "May have subsurface ocean",
            "Heavily cratered on one side",
        ],
    },
    Entry {
        id: "iapetus",
        name: "Iapetus",
        kind: BodyKind::Moon,
        parent: Some("saturn"),
        color: "#8B4513",
        radius: 734.5,
        mass: 1.806e21,
        distance: 3560820.0,
        orbital_period: 79.32,
        rotation_period: 1903.7,
        axial_tilt: 0.0,
        temperature: (-143.0, -173.0),
        eccentricity: 0.0286,
        inclination: 15.47,
        has_rings: false,
        description: "Iapetus is Saturn's third-largest moon, known for its two-tone coloration.",
        facts: &[
            "Half black, half white surface",
            "Has a massive equatorial ridge",
            "Orbits far from Saturn",
            "Discovered by Cassini in 1671",
        ],
    },
    Entry {
        id: "miranda",
        name: "Miranda",
        kind: BodyKind::Moon,
        parent: Some("uranus"),
        color: "#A9A9A9",
        radius: 235.8,
        mass: 6.59e19,
        distance: 129900.0,
        orbital_period: 1.41,
        rotation_period: 33.9,
        axial_tilt: 0.0,
        temperature: (-187.0, -187.0),
        eccentricity: 0.0013,
        inclination: 4.34,
        has_rings: false,
        description: "Miranda is Uranus's smallest major moon, known for its bizarre surface.",
        facts: &[
            "Has 20 km high cliffs",
            "May have been shattered and reformed",
            "Extreme varied terrain",
            "Discovered by Kuiper in 1948",
        ],
    },
    Entry {
        id: "ariel",
        name: "Ariel",
        kind: BodyKind::Moon,
        parent: Some("uranus"),
        color: "#D3D3D3",
        radius: 578.9,
        mass: 1.353e21,
        distance: 190900.0,
        orbital_period: 2.52,
        rotation_period: 60.5,
        axial_tilt: 0.0,
        temperature: (-213.0, -213.0),
        eccentricity: 0.0012,
        inclination: 0.26,
        has_rings: false,
        description: "Ariel is one of Uranus's major moons with a relatively young surface.",
        facts: &[
            "Brightest of Uranus's moons",
            "Has extensive canyon systems",
            "Shows signs of past activity",
            "Named after character in \"The Tempest\"",
        ],
    },
    Entry {
        id: "umbriel",
        name: "Umbriel",
        kind: BodyKind::Moon,
        parent: Some("uranus"),
        color: "#696969",
        radius: 584.7,
        mass: 1.172e21,
        distance: 266000.0,
        orbital_period: 4.14,
        rotation_period: 99.5,
        axial_tilt: 0.0,
        temperature: (-198.0, -198.0),
        eccentricity: 0.0039,
        inclination: 0.13,
        has_rings: false,
        description: "Umbriel is the darkest of Uranus's major moons.",
        facts: &[
            "Darkest major moon of Uranus",
            "Ancient, heavily cratered surface",
            "Has mysterious bright ring feature",
            "Named after a character in \"Rape of the Lock\"",
        ],
    },
    Entry {
        id: "titania",
        name: "Titania",
        kind: BodyKind::Moon,
        parent: Some("uranus"),
        color: "#C0C0C0",
        radius: 788.4,
        mass: 3.527e21,
        distance: 436300.0,
        orbital_period: 8.71,
        rotation_period: 209.0,
        axial_tilt: 0.0,
        temperature: (-203.0, -203.0),
        eccentricity: 0.0011,
        inclination: 0.34,
        has_rings: false,
        description: "Titania is the largest moon of Uranus.",
        facts: &[
            "Largest moon of Uranus",
            "Has fault valleys and craters",
            "May have subsurface ocean",
            "Named after Shakespeare's fairy queen",
        ],
    },
    Entry {
        id: "oberon",
        name: "Oberon",
        kind: BodyKind::Moon,
        parent: Some("uranus"),
        color: "#A9A9A9",
        radius: 761.4,
        mass: 3.014e21,
        distance: 583500.0,
        orbital_period: 13.46,
        rotation_period: 323.1,
        axial_tilt: 0.0,
        temperature: (-198.0, -198.0),
        eccentricity: 0.0014,
        inclination: 0.06,
        has_rings: false,
        description: "Oberon is the outermost major moon of Uranus.",
        facts: &[
            "Second largest moon of Uranus",
            "Heavily cratered surface",
            "Has dark material on crater floors",
            "Named after king of fairies",
        ],
    },
    Entry {
        id: "triton",
        name: "Triton",
        kind: BodyKind::Moon,
        parent: Some("neptune"),
        color: "#FFC0CB",
        radius: 1353.4,
        mass: 2.14e22,
        distance: 354759.0,
        orbital_period: -5.877,
        rotation_period: 141.0,
        axial_tilt: 0.0,
        temperature: (-235.0, -235.0),
        eccentricity: 0.000016,
        inclination: 156.885,
        has_rings: false,
        description: "Triton is Neptune's largest moon, believed to be a captured Kuiper Belt object.",
        facts: &[
            "Orbits Neptune backwards",
            "Has active nitrogen geysers",
            "Will eventually crash into Neptune",
            "Coldest known object in Solar System",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composition() {
        let system = builtin();
        assert_eq!(system.bodies.len(), 33);
        assert_eq!(system.of_kind(BodyKind::Star).count(), 1);
        assert_eq!(system.of_kind(BodyKind::Planet).count(), 8);
        assert_eq!(system.of_kind(BodyKind::DwarfPlanet).count(), 5);
        assert_eq!(system.of_kind(BodyKind::Moon).count(), 19);
        assert_eq!(&*system.star().unwrap().id, "sun");
    }

    #[test]
    fn elements_are_sane() {
        for body in builtin().bodies {
            assert!((0.0..0.45).contains(&body.eccentricity), "{}", body.id);
            assert!(body.radius > 0.0, "{}", body.id);
            assert_eq!(body.is_moon(), body.parent.is_some(), "{}", body.id);
        }
    }

    #[test]
    fn every_body_has_facts() {
        let system = builtin();
        assert!(system.bodies.iter().all(|b| b.facts.len() == 4));
        assert_eq!(
            system.get("venus").unwrap().facts[0],
            "Rotates backwards compared to most planets"
        );
    }
}
