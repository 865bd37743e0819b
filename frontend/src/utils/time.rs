use chrono::{DateTime, Datelike, NaiveDateTime, TimeZone, Utc, Weekday};
use chrono_tz::Tz;

use crate::config;

pub fn app_time_zone() -> Tz {
    config::current_time_zone()
}

/// `HH:MM` wall-clock time in `tz`.
pub fn format_clock(instant: DateTime<Utc>, tz: Tz) -> String {
    instant.with_timezone(&tz).format("%H:%M").to_string()
}

fn weekday_vi(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Thứ Hai",
        Weekday::Tue => "Thứ Ba",
        Weekday::Wed => "Thứ Tư",
        Weekday::Thu => "Thứ Năm",
        Weekday::Fri => "Thứ Sáu",
        Weekday::Sat => "Thứ Bảy",
        Weekday::Sun => "Chủ Nhật",
    }
}

/// Long Vietnamese date, e.g. `Thứ Sáu, 10 tháng 1, 2025`.
pub fn format_long_date(instant: DateTime<Utc>, tz: Tz) -> String {
    let local = instant.with_timezone(&tz);
    format!(
        "{}, {} tháng {}, {}",
        weekday_vi(local.weekday()),
        local.day(),
        local.month(),
        local.year()
    )
}

/// Parses the value of an `<input type="datetime-local">` as a wall-clock
/// time in `tz`.
pub fn parse_datetime_local(raw: &str, tz: Tz) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .ok()?;
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Asia::Ho_Chi_Minh;

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 10, 2, 5, 0).unwrap()
    }

    #[test]
    fn clock_uses_target_zone() {
        assert_eq!(format_clock(instant(), Ho_Chi_Minh), "09:05");
        assert_eq!(format_clock(instant(), chrono_tz::UTC), "02:05");
    }

    #[test]
    fn long_date_is_vietnamese() {
        assert_eq!(format_long_date(instant(), Ho_Chi_Minh), "Thứ Sáu, 10 tháng 1, 2025");
        let late_evening = Utc.with_ymd_and_hms(2025, 1, 11, 18, 0, 0).unwrap();
        assert_eq!(
            format_long_date(late_evening, Ho_Chi_Minh),
            "Chủ Nhật, 12 tháng 1, 2025"
        );
    }

    #[test]
    fn datetime_local_is_read_in_zone() {
        assert_eq!(
            parse_datetime_local("2025-01-10T09:05", Ho_Chi_Minh),
            Some(instant())
        );
        assert!(parse_datetime_local("", Ho_Chi_Minh).is_none());
        assert!(parse_datetime_local("10/01/2025", Ho_Chi_Minh).is_none());
    }
}
