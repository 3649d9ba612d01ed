//! Countdown arithmetic.
//!
//! Target selection is calendar-aware (which year?), the remaining-time
//! breakdown is not: it is plain millisecond division with no DST handling.

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

const MS_PER_SECOND: u64 = 1_000;
const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: u64 = 24 * MS_PER_HOUR;

/// A month/day pair that recurs every year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualDate {
    month: u32,
    day: u32,
}

impl AnnualDate {
    pub const VALENTINES_DAY: AnnualDate = AnnualDate { month: 2, day: 14 };

    /// Accepts any date that exists in at least a leap year.
    pub fn new(month: u32, day: u32) -> Result<Self, ValidationError> {
        NaiveDate::from_ymd_opt(2024, month, day)
            .map(|_| Self { month, day })
            .ok_or(ValidationError::InvalidDate { month, day })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// `None` when the date does not exist that year (Feb 29).
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }
}

impl Default for AnnualDate {
    fn default() -> Self {
        Self::VALENTINES_DAY
    }
}

/// Next local midnight of `date` strictly after `now`.
///
/// Same year if `now` is strictly before it, otherwise the next year in which
/// the date exists.
pub fn next_occurrence<Tz: TimeZone>(now: &DateTime<Tz>, date: AnnualDate) -> DateTime<Tz> {
    let tz = now.timezone();
    let mut year = now.year();
    loop {
        if let Some(day) = date.in_year(year) {
            let candidate = local_midnight(&tz, day);
            if *now < candidate {
                return candidate;
            }
        }
        year += 1;
    }
}

fn local_midnight<Tz: TimeZone>(tz: &Tz, day: NaiveDate) -> DateTime<Tz> {
    let naive = day.and_time(NaiveTime::MIN);
    // Midnight can fall in a DST gap; treat it as UTC midnight then.
    tz.from_local_datetime(&naive)
        .earliest()
        .unwrap_or_else(|| tz.from_utc_datetime(&naive))
}

/// Time left until the countdown target, never negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRemaining {
    pub days: u64,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl TimeRemaining {
    pub fn from_millis(ms: u64) -> Self {
        Self {
            days: ms / MS_PER_DAY,
            hours: ((ms % MS_PER_DAY) / MS_PER_HOUR) as u32,
            minutes: ((ms % MS_PER_HOUR) / MS_PER_MINUTE) as u32,
            seconds: ((ms % MS_PER_MINUTE) / MS_PER_SECOND) as u32,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Values paired with their display labels, largest unit first.
    pub fn units(&self) -> [(u64, &'static str); 4] {
        [
            (self.days, "Days"),
            (u64::from(self.hours), "Hrs"),
            (u64::from(self.minutes), "Min"),
            (u64::from(self.seconds), "Sec"),
        ]
    }
}

impl fmt::Display for TimeRemaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}d {:02}h {:02}m {:02}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Floor decomposition of `max(0, target - now)`.
pub fn remaining<Tz1: TimeZone, Tz2: TimeZone>(
    target: &DateTime<Tz1>,
    now: &DateTime<Tz2>,
) -> TimeRemaining {
    let delta = target.with_timezone(&Utc) - now.with_timezone(&Utc);
    let ms = delta.num_milliseconds().max(0) as u64;
    TimeRemaining::from_millis(ms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset};

    fn utc(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, mi, s).unwrap()
    }

    #[test]
    fn before_the_day_targets_this_year() {
        let now = utc(2024, 2, 13, 0, 0, 0);
        let target = next_occurrence(&now, AnnualDate::VALENTINES_DAY);
        assert_eq!(target, utc(2024, 2, 14, 0, 0, 0));
    }

    #[test]
    fn after_the_day_targets_next_year() {
        let now = utc(2024, 2, 15, 0, 0, 0);
        let target = next_occurrence(&now, AnnualDate::VALENTINES_DAY);
        assert_eq!(target, utc(2025, 2, 14, 0, 0, 0));
    }

    #[test]
    fn exactly_midnight_rolls_over() {
        let now = utc(2024, 2, 14, 0, 0, 0);
        let target = next_occurrence(&now, AnnualDate::VALENTINES_DAY);
        assert_eq!(target, utc(2025, 2, 14, 0, 0, 0));
    }

    #[test]
    fn during_the_day_rolls_over() {
        let now = utc(2024, 2, 14, 18, 30, 0);
        let target = next_occurrence(&now, AnnualDate::VALENTINES_DAY);
        assert_eq!(target.year(), 2025);
    }

    #[test]
    fn leap_day_skips_to_next_leap_year() {
        let leap = AnnualDate::new(2, 29).unwrap();
        let now = utc(2024, 3, 1, 0, 0, 0);
        assert_eq!(next_occurrence(&now, leap), utc(2028, 2, 29, 0, 0, 0));
    }

    #[test]
    fn target_is_local_midnight() {
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let now = tokyo.with_ymd_and_hms(2024, 2, 13, 8, 0, 0).unwrap();
        let target = next_occurrence(&now, AnnualDate::VALENTINES_DAY);
        assert_eq!(target.with_timezone(&Utc), utc(2024, 2, 13, 15, 0, 0));
    }

    #[test]
    fn rejects_impossible_dates() {
        assert_eq!(
            AnnualDate::new(2, 30),
            Err(ValidationError::InvalidDate { month: 2, day: 30 })
        );
        assert!(AnnualDate::new(13, 1).is_err());
        assert!(AnnualDate::new(0, 1).is_err());
    }

    #[test]
    fn decomposes_one_of_each_unit() {
        let now = utc(2024, 2, 13, 0, 0, 0);
        let target = now + Duration::milliseconds(90_061_000);
        assert_eq!(
            remaining(&target, &now),
            TimeRemaining {
                days: 1,
                hours: 1,
                minutes: 1,
                seconds: 1
            }
        );
    }

    #[test]
    fn floors_partial_seconds() {
        let r = TimeRemaining::from_millis(59_999);
        assert_eq!(r.seconds, 59);
        assert_eq!(r.minutes, 0);
    }

    #[test]
    fn past_target_clamps_to_zero() {
        let now = utc(2024, 2, 15, 0, 0, 0);
        let target = utc(2024, 2, 14, 0, 0, 0);
        let r = remaining(&target, &now);
        assert!(r.is_zero());
    }

    #[test]
    fn days_are_unbounded() {
        let r = TimeRemaining::from_millis(400 * MS_PER_DAY + 5 * MS_PER_HOUR);
        assert_eq!(r.days, 400);
        assert_eq!(r.hours, 5);
    }

    #[test]
    fn display_pads_two_digits() {
        let r = TimeRemaining::from_millis(90_061_000);
        assert_eq!(r.to_string(), "01d 01h 01m 01s");
    }
}
