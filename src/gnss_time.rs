//! GPS week / time of week helpers
use hifitime::{Epoch, TimeScale};

use crate::constants::{SECONDS_PER_DAY, SECONDS_PER_HOUR};

/// Date descriptions we use
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// %d/%m/%Y, used in titles
    #[default]
    Display,
    /// %Y-%m-%d, used in file names
    FileName,
}

/// Builds the [Epoch] described by GPST week number and time of week (seconds)
pub fn utc_from_week_tow(week: u32, tow: f64) -> Epoch {
    let nanos = (tow * 1.0E9).round() as u64;
    Epoch::from_time_of_week(week, nanos, TimeScale::GPST)
}

/// Formats the UTC date of this [Epoch]
pub fn date_string(epoch: Epoch, fmt: DateFormat) -> String {
    let (y, m, d, _, _, _, _) = epoch.to_gregorian_utc();
    match fmt {
        DateFormat::Display => format!("{:02}/{:02}/{:04}", d, m, y),
        DateFormat::FileName => format!("{:04}-{:02}-{:02}", y, m, d),
    }
}

/// Hour of day described by this time of week, in GPST.
/// Hourly samples are selected on GPST full hours, so they are
/// labeled in GPST as well: UTC lags by the leap seconds
/// (tow 7200 of week 1860 is 01:59:42 UTC but labeled 2).
pub fn hour_of_day(tow: f64) -> u8 {
    (tow.rem_euclid(SECONDS_PER_DAY) / SECONDS_PER_HOUR).floor() as u8
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn gpst_week_tow() {
        // GPST origin, noon
        let t = utc_from_week_tow(0, 43200.0);
        assert_eq!(date_string(t, DateFormat::FileName), "1980-01-06");
        assert_eq!(date_string(t, DateFormat::Display), "06/01/1980");

        // 2015-09-01 is week 1860, day 2
        let t = utc_from_week_tow(1860, 2.0 * 86400.0 + 43200.0);
        assert_eq!(date_string(t, DateFormat::FileName), "2015-09-01");
    }
    #[test]
    fn tow_hour_of_day() {
        assert_eq!(hour_of_day(0.0), 0);
        assert_eq!(hour_of_day(3599.0), 0);
        assert_eq!(hour_of_day(7200.0), 2);
        assert_eq!(hour_of_day(86400.0 + 3600.0), 1);
        assert_eq!(hour_of_day(6.0 * 86400.0 + 23.0 * 3600.0), 23);
    }
}
