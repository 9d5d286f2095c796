//! Duration formatting and personal boost time checks.

use chrono::{DateTime, NaiveDateTime, TimeDelta, TimeZone};
use tracing::debug;

use crate::config::APP_CONFIG;

/// Formats seconds as `M:SS`, e.g. `125` becomes `"2:05"`.
///
/// Minutes use floor division and the seconds part keeps the sign of the
/// input, so negative values render as `"-3:-5"` for `-125`.
pub fn format_duration(seconds: i64) -> String {
    let mins = seconds.div_euclid(60);
    let secs = seconds % 60;
    format!("{mins}:{secs:02}")
}

/// Returns true when `current_time` lies within `PBT_WINDOW_MINUTES`
/// (inclusive) of the user's boost time on the same local calendar date.
///
/// `user_pbt` is read leniently: the first two `:`-separated parts are
/// taken as hours and minutes, a blank part counts as 0, fractions are
/// truncated toward zero, and values past the end of the day roll over
/// like a wall clock. The candidate is shifted forward by
/// `timezone_offset_minutes` of wall-clock time (pass 0 for no shift) and
/// then compared with `current_time` as real instants. A missing or
/// non-numeric part never matches.
pub fn is_within_pbt<Tz: TimeZone>(
    user_pbt: &str,
    current_time: &DateTime<Tz>,
    timezone_offset_minutes: i64,
) -> bool {
    let Some((hours, minutes)) = parse_lenient_hh_mm(user_pbt) else {
        debug!(user_pbt, "ignoring malformed boost time");
        return false;
    };

    let Some(midnight) = current_time.naive_local().date().and_hms_opt(0, 0, 0) else {
        return false;
    };

    let local_candidate = hours
        .checked_mul(60)
        .and_then(|m| m.checked_add(minutes))
        .and_then(|m| m.checked_add(timezone_offset_minutes))
        .and_then(TimeDelta::try_minutes)
        .and_then(|shift| midnight.checked_add_signed(shift));
    let candidate =
        local_candidate.and_then(|naive| resolve_local(&current_time.timezone(), naive));
    let Some(candidate) = candidate else {
        debug!(user_pbt, timezone_offset_minutes, "boost time out of range");
        return false;
    };

    let diff_ms = current_time.timestamp_millis().abs_diff(candidate.timestamp_millis());
    diff_ms as f64 / 60_000.0 <= f64::from(APP_CONFIG.pbt_window_minutes)
}

// Wall-clock times skipped by a DST gap are pushed forward past it.
fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> Option<DateTime<Tz>> {
    let hour = TimeDelta::try_hours(1)?;
    tz.from_local_datetime(&naive).earliest().or_else(|| {
        let before = naive.checked_sub_signed(hour)?;
        tz.from_local_datetime(&before).earliest()?.checked_add_signed(hour)
    })
}

fn parse_lenient_hh_mm(value: &str) -> Option<(i64, i64)> {
    let mut parts = value.split(':');
    let hours = parse_lenient_number(parts.next()?)?;
    let minutes = parse_lenient_number(parts.next()?)?;
    Some((hours, minutes))
}

fn parse_lenient_number(part: &str) -> Option<i64> {
    let part = part.trim();
    if part.is_empty() {
        return Some(0);
    }
    let value: f64 = part.parse().ok()?;
    value.is_finite().then(|| value.trunc() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn utc(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 1, h, m, s).unwrap()
    }

    #[test]
    fn format_duration_pads_seconds() {
        assert_eq!(format_duration(125), "2:05");
        assert_eq!(format_duration(59), "0:59");
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(3600), "60:00");
    }

    #[test]
    fn format_duration_negative_input_is_not_guarded() {
        assert_eq!(format_duration(-125), "-3:-5");
        assert_eq!(format_duration(-60), "-1:00");
    }

    #[test]
    fn inside_and_outside_window() {
        assert!(is_within_pbt("09:00", &utc(9, 15, 0), 0));
        assert!(is_within_pbt("09:00", &utc(8, 45, 0), 0));
        assert!(!is_within_pbt("09:00", &utc(10, 0, 0), 0));
    }

    #[test]
    fn window_boundary_is_inclusive() {
        assert!(is_within_pbt("09:00", &utc(9, 30, 0), 0));
        assert!(!is_within_pbt("09:00", &utc(9, 30, 1), 0));
        assert!(is_within_pbt("09:00", &utc(8, 30, 0), 0));
    }

    #[test]
    fn offset_shifts_candidate_forward() {
        // candidate 09:00 + 60 min = 10:00
        assert!(is_within_pbt("09:00", &utc(10, 0, 0), 60));
        assert!(!is_within_pbt("09:00", &utc(9, 0, 0), 60));
        assert!(is_within_pbt("09:00", &utc(8, 0, 0), -60));
    }

    #[test]
    fn uses_local_calendar_date_of_current_time() {
        let kst = FixedOffset::east_opt(9 * 3600).unwrap();
        let local = kst.with_ymd_and_hms(2026, 6, 1, 7, 10, 0).unwrap();
        assert!(is_within_pbt("07:00", &local, 0));
        assert!(!is_within_pbt("22:00", &local, 0));
    }

    #[test]
    fn malformed_pbt_never_matches() {
        let now = utc(9, 0, 0);
        assert!(!is_within_pbt("0900", &now, 0));
        assert!(!is_within_pbt("aa:bb", &now, 0));
        assert!(!is_within_pbt("", &now, 0));
        assert!(!is_within_pbt("9:inf", &now, 0));
    }

    #[test]
    fn lenient_parse_accepts_loose_forms() {
        assert!(is_within_pbt("9:0", &utc(9, 0, 0), 0));
        assert!(is_within_pbt("09:00:45", &utc(9, 0, 0), 0));
        // 24:00 rolls over to the next day's midnight
        assert!(is_within_pbt("24:00", &utc(23, 45, 0), 0));
    }

    #[test]
    fn blank_parts_count_as_zero() {
        assert!(is_within_pbt("9:", &utc(9, 0, 0), 0));
        assert!(is_within_pbt(":00", &utc(0, 0, 0), 0));
        assert!(is_within_pbt(" 9 : ", &utc(9, 20, 0), 0));
        assert!(!is_within_pbt("9:", &utc(9, 31, 0), 0));
    }

    #[test]
    fn fractional_parts_truncate_toward_zero() {
        assert!(is_within_pbt("9.5:00", &utc(9, 0, 0), 0));
        assert!(!is_within_pbt("9.5:00", &utc(9, 45, 0), 0));
        assert!(is_within_pbt("09:59.9", &utc(9, 59, 0), 0));
        assert!(is_within_pbt("-0.5:10", &utc(0, 10, 0), 0));
    }

    /// UTC-5, switching to UTC-4 at 02:00 local on 2026-03-08.
    #[derive(Debug, Clone, Copy)]
    struct SpringForwardZone;

    impl SpringForwardZone {
        fn standard() -> FixedOffset {
            FixedOffset::west_opt(5 * 3600).unwrap()
        }

        fn daylight() -> FixedOffset {
            FixedOffset::west_opt(4 * 3600).unwrap()
        }

        fn switch_local() -> NaiveDateTime {
            chrono::NaiveDate::from_ymd_opt(2026, 3, 8)
                .unwrap()
                .and_hms_opt(2, 0, 0)
                .unwrap()
        }
    }

    impl TimeZone for SpringForwardZone {
        type Offset = FixedOffset;

        fn from_offset(_offset: &FixedOffset) -> Self {
            SpringForwardZone
        }

        #[allow(deprecated)]
        fn offset_from_local_date(
            &self,
            local: &chrono::NaiveDate,
        ) -> chrono::LocalResult<FixedOffset> {
            match local.and_hms_opt(12, 0, 0) {
                Some(noon) => self.offset_from_local_datetime(&noon),
                None => chrono::LocalResult::None,
            }
        }

        fn offset_from_local_datetime(
            &self,
            local: &NaiveDateTime,
        ) -> chrono::LocalResult<FixedOffset> {
            let switch = Self::switch_local();
            if *local < switch {
                chrono::LocalResult::Single(Self::standard())
            } else if *local < switch + TimeDelta::try_hours(1).unwrap() {
                chrono::LocalResult::None
            } else {
                chrono::LocalResult::Single(Self::daylight())
            }
        }

        #[allow(deprecated)]
        fn offset_from_utc_date(&self, utc: &chrono::NaiveDate) -> FixedOffset {
            self.offset_from_utc_datetime(&utc.and_hms_opt(0, 0, 0).unwrap())
        }

        fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
            // 02:00 EST is 07:00 UTC
            if *utc < Self::switch_local() + TimeDelta::try_hours(5).unwrap() {
                Self::standard()
            } else {
                Self::daylight()
            }
        }
    }

    #[test]
    fn compares_real_instants_across_dst_switch() {
        let zone = SpringForwardZone;
        // 03:10 EDT is 07:10 UTC
        let now = zone.with_ymd_and_hms(2026, 3, 8, 3, 10, 0).unwrap();

        // 01:45 EST is 06:45 UTC, 25 real minutes earlier
        assert!(is_within_pbt("01:45", &now, 0));
        // 02:30 is skipped and lands on 03:30 EDT, 20 real minutes later
        assert!(is_within_pbt("02:30", &now, 0));
        // 01:30 EST is 06:30 UTC, 40 real minutes earlier
        assert!(!is_within_pbt("01:30", &now, 0));
    }

    #[test]
    fn huge_values_do_not_panic() {
        assert!(!is_within_pbt("9223372036854775807:00", &utc(9, 0, 0), 0));
        assert!(!is_within_pbt("09:00", &utc(9, 0, 0), i64::MAX));
    }
}
