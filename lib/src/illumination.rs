//! Day and night on Earth.
//!
//! The sub-solar point follows a one-harmonic seasonal model and regions are
//! classified by great-circle distance from it.

use std::{f64::consts, fmt};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::trace;

use crate::time::{day_of_year, utc_decimal_hour};

/// Earth's obliquity (`deg`), the bound on the sub-solar latitude.
pub const AXIAL_TILT: f64 = 23.44;

/// Ordinal day of the March equinox in the seasonal model.
const EQUINOX_DAY: f64 = 81.0;

/// Separation (`deg`) below which a region is in daylight.
pub const TERMINATOR: f64 = 90.0;

/// Separation (`deg`) below which a region is in civil twilight, the sun up
/// to 6° below the horizon.
pub const CIVIL_TWILIGHT: f64 = 96.0;

/// Where the sun is directly overhead.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubsolarPoint {
    /// `deg`, within `±AXIAL_TILT`
    pub latitude: f64,
    /// `deg`, in `(-180, 180]`
    pub longitude: f64,
}

pub fn subsolar_point(date: OffsetDateTime) -> SubsolarPoint {
    let mut longitude = (12.0 - utc_decimal_hour(date)) * 15.0;
    if longitude > 180.0 {
        longitude -= 360.0;
    } else if longitude <= -180.0 {
        longitude += 360.0;
    }

    let day = day_of_year(date) as f64;
    let latitude = AXIAL_TILT * libm::sin(2.0 * consts::PI / 365.0 * (day - EQUINOX_DAY));

    SubsolarPoint {
        latitude,
        longitude,
    }
}

/// Great-circle angle (`deg`) between two points given in degrees.
pub fn angular_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (lat1, lat2) = (lat1.to_radians(), lat2.to_radians());
    let dlat = lat2 - lat1;
    let dlon = (lon2 - lon1).to_radians();
    let a = libm::sin(dlat / 2.0).powi(2)
        + libm::cos(lat1) * libm::cos(lat2) * libm::sin(dlon / 2.0).powi(2);
    // rounding can push `a` past 1 for near-antipodal points
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * libm::atan2(libm::sqrt(a), libm::sqrt(1.0 - a));
    c.to_degrees()
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Illumination {
    Daylight,
    Twilight,
    Night,
}

impl Illumination {
    pub fn from_separation(deg: f64) -> Self {
        if deg < TERMINATOR {
            Self::Daylight
        } else if deg < CIVIL_TWILIGHT {
            Self::Twilight
        } else {
            Self::Night
        }
    }
}

/// A named location represented by its center.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Region {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

const fn region(name: &'static str, longitude: f64, latitude: f64) -> Region {
    Region {
        name,
        latitude,
        longitude,
    }
}

/// Region catalog in display order.
pub const REGIONS: &[Region] = &[
    // Asia
    region("Japan", 138.0, 36.0),
    region("China", 104.0, 35.0),
    region("India", 79.0, 21.0),
    region("Indonesia", 118.0, -2.0),
    region("Bhutan", 90.4, 27.5),
    region("Nepal", 84.0, 28.0),
    region("Bangladesh", 90.0, 24.0),
    region("Thailand", 101.0, 13.0),
    region("Vietnam", 106.0, 16.0),
    region("Philippines", 122.0, 13.0),
    region("South Korea", 128.0, 36.0),
    // Oceania
    region("Australia", 134.0, -25.0),
    region("New Zealand", 172.0, -41.0),
    // Europe
    region("UK", -2.0, 54.0),
    region("France", 2.0, 46.0),
    region("Germany", 10.0, 51.0),
    region("Spain", -4.0, 40.0),
    region("Italy", 12.0, 42.0),
    region("Poland", 19.0, 52.0),
    region("Russia", 100.0, 60.0),
    // Middle East
    region("Middle East", 45.0, 29.0),
    // Africa
    region("West Africa", -5.0, 10.0),
    region("East Africa", 37.0, 1.0),
    region("South Africa", 25.0, -29.0),
    region("Egypt", 30.0, 27.0),
    // Americas
    region("Eastern US", -77.0, 39.0),
    region("Central US", -95.0, 39.0),
    region("Western US", -118.0, 37.0),
    region("Canada", -106.0, 56.0),
    region("Mexico", -102.0, 23.0),
    region("Brazil", -52.0, -14.0),
    region("Argentina", -64.0, -34.0),
    region("Hawaii", -157.0, 20.0),
    region("Alaska", -153.0, 64.0),
];

impl Region {
    pub fn illumination(&self, sun: &SubsolarPoint) -> Illumination {
        let separation = angular_distance(sun.latitude, sun.longitude, self.latitude, self.longitude);
        trace!(region = self.name, separation, "region separation");
        Illumination::from_separation(separation)
    }
}

/// Region names grouped by illumination, each in catalog order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SunlitRegions {
    pub daylight: Vec<String>,
    pub twilight: Vec<String>,
    pub night: Vec<String>,
}

impl SunlitRegions {
    pub fn len(&self) -> usize {
        self.daylight.len() + self.twilight.len() + self.night.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn classify_regions(date: OffsetDateTime) -> SunlitRegions {
    classify_regions_in(date, REGIONS)
}

pub fn classify_regions_in(date: OffsetDateTime, regions: &[Region]) -> SunlitRegions {
    let sun = subsolar_point(date);
    let mut out = SunlitRegions::default();
    for region in regions {
        let bucket = match region.illumination(&sun) {
            Illumination::Daylight => &mut out.daylight,
            Illumination::Twilight => &mut out.twilight,
            Illumination::Night => &mut out.night,
        };
        bucket.push(region.name.to_owned());
    }
    out
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

/// Formats a coordinate like `23.4°N` or `77.0°W`.
pub fn format_coordinate(value: f64, axis: Axis) -> String {
    let hemisphere = match (axis, value >= 0.0) {
        (Axis::Latitude, true) => 'N',
        (Axis::Latitude, false) => 'S',
        (Axis::Longitude, true) => 'E',
        (Axis::Longitude, false) => 'W',
    };
    format!("{:.1}°{hemisphere}", value.abs())
}

impl fmt::Display for SubsolarPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}",
            format_coordinate(self.latitude, Axis::Latitude),
            format_coordinate(self.longitude, Axis::Longitude)
        )
    }
}

#[cfg(test)]
mod tests {
    use time::{macros::datetime, Duration};

    use super::*;

    #[test]
    fn june_solstice_noon() {
        let sun = subsolar_point(datetime!(2000-06-21 12:00 UTC));
        assert!(sun.longitude.abs() < 1e-9);
        assert!((sun.latitude - 23.4).abs() < 1.0, "{}", sun.latitude);
    }

    #[test]
    fn longitude_moves_west() {
        assert_eq!(subsolar_point(datetime!(2000-03-21 18:00 UTC)).longitude, -90.0);
        assert_eq!(subsolar_point(datetime!(2000-03-21 06:00 UTC)).longitude, 90.0);
        assert_eq!(subsolar_point(datetime!(2000-03-21 00:00 UTC)).longitude, 180.0);
        let late = subsolar_point(datetime!(2000-03-21 23:59:59 UTC)).longitude;
        assert!(late > -180.0 && late < -179.0, "{late}");
    }

    #[test]
    fn latitude_bounded_all_year() {
        let mut date = datetime!(1999-12-25 03:00 UTC);
        for _ in 0..800 {
            let sun = subsolar_point(date);
            assert!(sun.latitude.abs() <= AXIAL_TILT + 1e-9);
            assert!(sun.longitude > -180.0 && sun.longitude <= 180.0);
            date += Duration::hours(11);
        }
    }

    #[test]
    fn december_is_southern() {
        let sun = subsolar_point(datetime!(2023-12-21 12:00 UTC));
        assert!(sun.latitude < -23.0, "{}", sun.latitude);
    }

    #[test]
    fn haversine_known_values() {
        assert!(angular_distance(10.0, 20.0, 10.0, 20.0).abs() < 1e-12);
        assert!((angular_distance(0.0, 0.0, 0.0, 90.0) - 90.0).abs() < 1e-9);
        assert!((angular_distance(90.0, 0.0, -90.0, 0.0) - 180.0).abs() < 1e-9);
        assert!((angular_distance(0.0, 170.0, 0.0, -170.0) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn antipodes_stay_finite() {
        for &(lat, lon) in &[(0.0, 0.0), (23.44, -77.0), (-33.9, 151.2), (51.5074, -0.1278)] {
            let back = if lon > 0.0 { lon - 180.0 } else { lon + 180.0 };
            let d = angular_distance(lat, lon, -lat, back);
            assert!(d.is_finite(), "{lat} {lon}");
            assert!((d - 180.0).abs() < 1e-4, "{lat} {lon}: {d}");
        }
    }

    #[test]
    fn thresholds() {
        assert_eq!(Illumination::from_separation(89.9), Illumination::Daylight);
        assert_eq!(Illumination::from_separation(90.0), Illumination::Twilight);
        assert_eq!(Illumination::from_separation(95.9), Illumination::Twilight);
        assert_eq!(Illumination::from_separation(96.0), Illumination::Night);
    }

    #[test]
    fn every_region_classified_once() {
        let mut date = datetime!(2001-01-01 00:00 UTC);
        for _ in 0..200 {
            let sunlit = classify_regions(date);
            assert_eq!(sunlit.len(), REGIONS.len());
            for region in REGIONS {
                let hits = [&sunlit.daylight, &sunlit.twilight, &sunlit.night]
                    .iter()
                    .filter(|list| list.iter().any(|n| n == region.name))
                    .count();
                assert_eq!(hits, 1, "{}", region.name);
            }
            date += Duration::minutes(1789);
        }
    }

    #[test]
    fn noon_over_greenwich_in_june() {
        let sunlit = classify_regions(datetime!(2000-06-21 12:00 UTC));
        for name in ["UK", "France", "Egypt", "West Africa"] {
            assert!(sunlit.daylight.iter().any(|n| n == name), "{name}");
        }
        for name in ["Hawaii", "New Zealand"] {
            assert!(sunlit.night.iter().any(|n| n == name), "{name}");
        }
        let order: Vec<_> = REGIONS
            .iter()
            .map(|r| r.name)
            .filter(|n| sunlit.daylight.iter().any(|d| d == n))
            .collect();
        assert_eq!(sunlit.daylight, order);
    }

    #[test]
    fn coordinates_format() {
        assert_eq!(format_coordinate(23.44, Axis::Latitude), "23.4°N");
        assert_eq!(format_coordinate(-77.0, Axis::Longitude), "77.0°W");
        let sun = SubsolarPoint {
            latitude: -5.26,
            longitude: 0.0,
        };
        assert_eq!(sun.to_string(), "5.3°S, 0.0°E");
    }
}
