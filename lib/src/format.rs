//! Human readable figures for info panels.

use crate::bodies::Temperature;

/// Kilometres per astronomical unit.
pub const KM_PER_AU: f64 = 149_597_870.7;

/// Insert thousands separators into a string of ASCII digits.
fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Group the integer part of `x` and keep up to `max_fraction` decimals,
/// trailing zeros dropped.
fn grouped(x: f64, max_fraction: usize) -> String {
    let fixed = format!("{:.*}", max_fraction, x.abs());
    let (int, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac.trim_end_matches('0');
    let sign = if x < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };
    if frac.is_empty() {
        format!("{sign}{}", group_digits(int))
    } else {
        format!("{sign}{}.{frac}", group_digits(int))
    }
}

/// `0.00257` AU is shown as `384,400 km`; anything from 0.01 AU up as
/// `1.524 AU`.
pub fn format_distance(au: f64) -> String {
    if au < 0.01 {
        format!("{} km", grouped(au * KM_PER_AU, 0))
    } else {
        format!("{au:.3} AU")
    }
}

/// Large magnitudes in exponent form (`1.99e+30`), the rest grouped.
pub fn format_scientific(x: f64) -> String {
    if x >= 1e10 {
        let s = format!("{x:.2e}");
        match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => s,
        }
    } else {
        grouped(x, 3)
    }
}

pub fn format_temperature(t: &Temperature) -> String {
    if t.min == t.max {
        format!("{} °C", grouped(t.min, 1))
    } else {
        format!("{} °C to {} °C", grouped(t.min, 1), grouped(t.max, 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        assert_eq!(format_distance(384_400.0 / KM_PER_AU), "384,400 km");
        assert_eq!(format_distance(1.524), "1.524 AU");
        assert_eq!(format_distance(0.01), "0.010 AU");
        assert_eq!(format_distance(0.0), "0 km");
    }

    #[test]
    fn scientific() {
        assert_eq!(format_scientific(1.989e30), "1.99e+30");
        assert_eq!(format_scientific(6371.0), "6,371");
        assert_eq!(format_scientific(1_234_567.891_2), "1,234,567.891");
        assert_eq!(format_scientific(0.5), "0.5");
        assert_eq!(format_scientific(-1200.0), "-1,200");
    }

    #[test]
    fn temperatures() {
        let range = Temperature {
            min: -180.0,
            max: 430.0,
        };
        assert_eq!(format_temperature(&range), "-180 °C to 430 °C");
        let single = Temperature {
            min: 462.0,
            max: 462.0,
        };
        assert_eq!(format_temperature(&single), "462 °C");
    }
}
