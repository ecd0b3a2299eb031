//! Packed integer representations for the four calendar/time tags
//! (`LOCAL_DATE`, `LOCAL_TIME`, `LOCAL_DATE_TIME`, `INSTANT`), built on
//! `chrono`. The frame codec only ever sees the packed `i32`/`i64` values
//! (§4.2); these helpers are what a caller uses to get `chrono` types in and
//! out of a column without hand-rolling the packing.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

use crate::error::{Result, SawError};

/// Days since the Unix epoch (1970-01-01), matching `java.time.LocalDate.toEpochDay`.
pub fn date_to_epoch_day(date: NaiveDate) -> i32 {
    (date - epoch_date()).num_days() as i32
}

pub fn epoch_day_to_date(days: i32) -> NaiveDate {
    epoch_date() + chrono::Duration::days(days as i64)
}

/// Milliseconds since midnight.
pub fn time_to_millis(time: NaiveTime) -> i32 {
    (time - NaiveTime::from_hms_opt(0, 0, 0).unwrap())
        .num_milliseconds() as i32
}

pub fn millis_to_time(millis: i32) -> NaiveTime {
    NaiveTime::from_hms_opt(0, 0, 0).unwrap() + chrono::Duration::milliseconds(millis as i64)
}

/// Milliseconds since the Unix epoch, with no attached time zone.
pub fn date_time_to_millis(date_time: NaiveDateTime) -> i64 {
    date_time.and_utc().timestamp_millis()
}

pub fn millis_to_date_time(millis: i64) -> Result<NaiveDateTime> {
    Utc.timestamp_millis_opt(millis)
        .single()
        .map(|dt| dt.naive_utc())
        .ok_or_else(|| SawError::Corrupt(format!("{millis} is not a valid epoch millisecond value")))
}

/// Milliseconds since the Unix epoch in UTC.
pub fn instant_to_millis(instant: DateTime<Utc>) -> i64 {
    instant.timestamp_millis()
}

pub fn millis_to_instant(millis: i64) -> Result<DateTime<Utc>> {
    Utc.timestamp_millis_opt(millis)
        .single()
        .ok_or_else(|| SawError::Corrupt(format!("{millis} is not a valid epoch millisecond value")))
}

fn epoch_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_round_trips_through_epoch_day() {
        let date = NaiveDate::from_ymd_opt(2026, 7, 28).unwrap();
        assert_eq!(epoch_day_to_date(date_to_epoch_day(date)), date);
    }

    #[test]
    fn time_round_trips_through_millis_of_day() {
        let time = NaiveTime::from_hms_milli_opt(13, 45, 30, 250).unwrap();
        assert_eq!(millis_to_time(time_to_millis(time)), time);
    }

    #[test]
    fn date_time_round_trips_through_epoch_millis() {
        let date_time = NaiveDate::from_ymd_opt(2026, 7, 28)
            .unwrap()
            .and_hms_milli_opt(9, 0, 0, 500)
            .unwrap();
        assert_eq!(millis_to_date_time(date_time_to_millis(date_time)).unwrap(), date_time);
    }

    #[test]
    fn instant_round_trips_through_epoch_millis() {
        let instant = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        assert_eq!(millis_to_instant(instant_to_millis(instant)).unwrap(), instant);
    }

    #[test]
    fn millis_to_date_time_rejects_out_of_range_value() {
        assert!(matches!(millis_to_date_time(i64::MAX), Err(SawError::Corrupt(_))));
    }

    #[test]
    fn millis_to_instant_rejects_out_of_range_value() {
        assert!(matches!(millis_to_instant(i64::MIN), Err(SawError::Corrupt(_))));
    }
}
