//! Calendar time as seen by the engine.
//!
//! Every engine input is an [`OffsetDateTime`]. Offsets other than UTC are
//! accepted and normalised, so two instants that compare equal always produce
//! the same day counts.

use color_eyre::eyre::{self, WrapErr};
use time::{
    format_description::{well_known::Rfc3339, FormatItem},
    macros::{datetime, format_description},
    Date, OffsetDateTime, UtcOffset,
};

/// The reference epoch, 2000-01-01 12:00 UTC.
pub const J2000: OffsetDateTime = datetime!(2000-01-01 12:00 UTC);

pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian date of the Unix epoch.
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

const CALENDAR_DATE: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Fractional days elapsed from `epoch` to `date`, negative before the epoch.
pub fn days_since(date: OffsetDateTime, epoch: OffsetDateTime) -> f64 {
    (date - epoch).as_seconds_f64() / SECONDS_PER_DAY
}

/// 1-based UTC ordinal day (January 1st is day 1).
pub fn day_of_year(date: OffsetDateTime) -> u16 {
    date.to_offset(UtcOffset::UTC).ordinal()
}

/// UTC time of day in decimal hours. Sub-second parts are dropped.
pub fn utc_decimal_hour(date: OffsetDateTime) -> f64 {
    let (h, m, s) = date.to_offset(UtcOffset::UTC).to_hms();
    h as f64 + m as f64 / 60.0 + s as f64 / 3600.0
}

pub fn julian_date(date: OffsetDateTime) -> f64 {
    (date - OffsetDateTime::UNIX_EPOCH).as_seconds_f64() / SECONDS_PER_DAY + UNIX_EPOCH_JD
}

/// Parse a date handed over by a user interface.
///
/// Accepts RFC 3339 timestamps (`2000-06-21T12:00:00Z`) and bare calendar
/// dates (`1969-07-20`, taken as midnight UTC).
pub fn parse_date(input: &str) -> eyre::Result<OffsetDateTime> {
    let input = input.trim();
    if let Ok(date) = OffsetDateTime::parse(input, &Rfc3339) {
        return Ok(date);
    }
    let date = Date::parse(input, CALENDAR_DATE)
        .wrap_err_with(|| format!("invalid date `{input}`, expected YYYY-MM-DD or RFC 3339"))?;
    Ok(date.midnight().assume_utc())
}

/// Quick navigation targets.
pub const PRESET_DATES: &[(&str, OffsetDateTime)] = &[
    ("Moon Landing (1969)", datetime!(1969-07-20 00:00 UTC)),
    ("Voyager 1 Launch (1977)", datetime!(1977-09-05 00:00 UTC)),
    ("Pluto Flyby (2015)", datetime!(2015-07-14 00:00 UTC)),
    ("Mars 2020", datetime!(2020-07-30 00:00 UTC)),
    ("Year 2050", datetime!(2050-01-01 00:00 UTC)),
    ("Year 2100", datetime!(2100-01-01 00:00 UTC)),
];

/// Preset resolved at lookup time to the current instant.
pub const TODAY: &str = "Today";

/// Look up a preset by name, ignoring case. [`TODAY`] is always available.
pub fn preset(name: &str) -> Option<OffsetDateTime> {
    if name.eq_ignore_ascii_case(TODAY) {
        return Some(OffsetDateTime::now_utc());
    }
    PRESET_DATES
        .iter()
        .find(|(label, _)| label.eq_ignore_ascii_case(name))
        .map(|&(_, date)| date)
}

#[cfg(test)]
mod tests {
    use time::{macros::offset, Month};

    use super::*;

    #[test]
    fn epoch_is_day_zero() {
        assert_eq!(days_since(J2000, J2000), 0.0);
        assert!((days_since(datetime!(2000-01-02 12:00 UTC), J2000) - 1.0).abs() < 1e-12);
        assert!((days_since(datetime!(1999-12-31 00:00 UTC), J2000) + 1.5).abs() < 1e-12);
    }

    #[test]
    fn far_dates_stay_finite() {
        let ancient = Date::from_calendar_date(-4000, Month::March, 1)
            .unwrap()
            .midnight()
            .assume_utc();
        let days = days_since(ancient, J2000);
        assert!(days.is_finite());
        assert!(days < -2_190_000.0 && days > -2_200_000.0, "{days}");
    }

    #[test]
    fn ordinal_and_hour_use_utc() {
        let date = datetime!(2000-01-01 23:30 -02:00);
        assert_eq!(day_of_year(date), 2);
        assert!((utc_decimal_hour(date) - 1.5).abs() < 1e-12);
        assert_eq!(day_of_year(datetime!(2000-06-21 12:00 UTC)), 173);
        assert_eq!(date.offset(), offset!(-2));
    }

    #[test]
    fn julian_date_of_epoch() {
        assert!((julian_date(J2000) - 2_451_545.0).abs() < 1e-9);
    }

    #[test]
    fn parses_both_forms() {
        assert_eq!(parse_date("2000-01-01T12:00:00Z").unwrap(), J2000);
        assert_eq!(
            parse_date("1969-07-20").unwrap(),
            datetime!(1969-07-20 00:00 UTC)
        );
        assert!(parse_date("yesterday").is_err());
        assert!(parse_date("2001-02-30").is_err());
    }

    #[test]
    fn presets_lookup() {
        assert_eq!(preset("mars 2020"), Some(datetime!(2020-07-30 00:00 UTC)));
        assert_eq!(preset("nowhere"), None);
    }

    #[test]
    fn today_is_now() {
        let before = OffsetDateTime::now_utc();
        let today = preset("today").unwrap();
        let after = OffsetDateTime::now_utc();
        assert!(before <= today && today <= after);
        assert_eq!(preset(TODAY).unwrap().offset(), UtcOffset::UTC);
    }
}
