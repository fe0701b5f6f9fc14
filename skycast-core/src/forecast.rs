//! Projection of a raw forecast series into bounded display lists
//!
//! The provider returns one sample every three hours for five days. The
//! dashboard shows either one card per day ([`select_daily_representatives`])
//! or the next dozen samples ([`select_first_k`]).
//!
//! The daily view picks the *first* sample of each calendar day. It does not
//! aggregate: a day's min/max are those of that single sample, not the
//! day's extremes.

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::model::ForecastSample;

/// Number of day cards in the daily view
pub const DAILY_FORECAST_DAYS: usize = 4;

/// Number of samples in the hourly view (about 36 hours at 3-hour cadence)
pub const HOURLY_WINDOW: usize = 12;

/// Calendar date used to group samples by day
pub type DateKey = NaiveDate;

fn utc_from_timestamp(timestamp: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(timestamp, 0).unwrap_or_default()
}

/// Date keying in `tz`
///
/// Pass `chrono::Local` for the viewer's zone; the offset is looked up per
/// timestamp, so a daylight-saving change inside the forecast is honoured.
///
/// ```
/// use chrono::{FixedOffset, NaiveDate};
/// use skycast_core::forecast::date_key_in;
///
/// let key = date_key_in(FixedOffset::east_opt(3600).unwrap());
/// // 23:30 UTC is already the next day at UTC+1
/// assert_eq!(key(84_600), NaiveDate::from_ymd_opt(1970, 1, 2).unwrap());
/// ```
pub fn date_key_in<Tz: TimeZone>(tz: Tz) -> impl Fn(i64) -> DateKey {
    move |timestamp| utc_from_timestamp(timestamp).with_timezone(&tz).date_naive()
}

/// Select at most `max_days` samples, one per distinct calendar day.
///
/// Scans `series` in order and keeps a sample only if its day has not been
/// seen yet. Input must be chronological; output keeps input order without
/// re-sorting. Scanning stops as soon as `max_days` samples are kept.
pub fn select_daily_representatives<F>(
    series: &[ForecastSample],
    max_days: usize,
    calendar_of: F,
) -> Vec<ForecastSample>
where
    F: Fn(i64) -> DateKey,
{
    let mut selected = Vec::with_capacity(max_days.min(series.len()));
    let mut seen: HashSet<DateKey> = HashSet::new();

    for sample in series {
        if selected.len() >= max_days {
            break;
        }
        if seen.insert(calendar_of(sample.timestamp)) {
            selected.push(sample.clone());
        }
    }

    selected
}

/// The first `k` samples, verbatim. Shorter input is returned whole.
pub fn select_first_k(series: &[ForecastSample], k: usize) -> &[ForecastSample] {
    &series[..k.min(series.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, LocalResult, NaiveDateTime, NaiveTime};

    const HOUR: i64 = 3600;
    const DAY: i64 = 24 * HOUR;
    // 2024-03-01T00:00:00Z
    const MARCH_1: i64 = 1_709_251_200;

    fn utc_key(timestamp: i64) -> DateKey {
        date_key_in(FixedOffset::east_opt(0).unwrap())(timestamp)
    }

    fn sample(timestamp: i64, temperature: f64) -> ForecastSample {
        ForecastSample {
            timestamp,
            min_temperature: temperature - 1.0,
            max_temperature: temperature + 1.0,
            temperature,
            wind_speed: 2.5,
            humidity_percent: 70,
            condition_label: "Clear".into(),
            condition_description: "clear sky".into(),
        }
    }

    /// `count` samples at 3-hour cadence starting at `start`
    fn series(start: i64, count: usize) -> Vec<ForecastSample> {
        (0..count)
            .map(|i| sample(start + i as i64 * 3 * HOUR, i as f64))
            .collect()
    }

    #[test]
    fn test_empty_series() {
        assert!(select_daily_representatives(&[], 4, utc_key).is_empty());
        assert!(select_first_k(&[], 12).is_empty());
    }

    #[test]
    fn test_sixteen_samples_over_four_days() {
        // Four daytime samples (09:00..18:00) on each of four days
        let samples: Vec<_> = (0..4)
            .flat_map(|day| {
                (0..4).map(move |slot| {
                    sample(MARCH_1 + day * DAY + (9 + slot * 3) * HOUR, slot as f64)
                })
            })
            .collect();
        assert_eq!(samples.len(), 16);

        let days = select_daily_representatives(&samples, 4, utc_key);

        assert_eq!(days.len(), 4);
        for (day, selected) in days.iter().enumerate() {
            assert_eq!(selected.timestamp, MARCH_1 + day as i64 * DAY + 9 * HOUR);
            let earliest = samples
                .iter()
                .find(|s| utc_key(s.timestamp) == utc_key(selected.timestamp))
                .unwrap();
            assert_eq!(selected, earliest);
        }
    }

    #[test]
    fn test_output_length_is_min_of_limit_and_distinct_days() {
        // 40 samples = 5 full days
        let samples = series(MARCH_1, 40);

        assert_eq!(select_daily_representatives(&samples, 4, utc_key).len(), 4);
        assert_eq!(select_daily_representatives(&samples, 5, utc_key).len(), 5);
        assert_eq!(select_daily_representatives(&samples, 9, utc_key).len(), 5);
        assert!(select_daily_representatives(&samples, 0, utc_key).is_empty());
    }

    #[test]
    fn test_each_entry_is_first_of_its_day() {
        let samples = series(MARCH_1 + 6 * HOUR, 24);

        let days = select_daily_representatives(&samples, 4, utc_key);

        assert_eq!(days[0].timestamp, MARCH_1 + 6 * HOUR);
        assert_eq!(days[1].timestamp, MARCH_1 + DAY);
        assert_eq!(days[2].timestamp, MARCH_1 + 2 * DAY);
        assert_eq!(days[3].timestamp, MARCH_1 + 3 * DAY);
    }

    #[test]
    fn test_order_preserved() {
        let samples = series(MARCH_1, 40);
        let days = select_daily_representatives(&samples, 5, utc_key);
        assert!(days.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
    }

    #[test]
    fn test_single_day_yields_one_entry() {
        let samples = series(MARCH_1, 8);
        let days = select_daily_representatives(&samples, 4, utc_key);
        assert_eq!(days.len(), 1);
        assert_eq!(days[0], samples[0]);
    }

    #[test]
    fn test_daily_min_max_come_from_single_sample() {
        // Day one has a cold first sample and a hot later one; the card
        // shows the first sample's range, not the day's extremes.
        let mut samples = series(MARCH_1, 8);
        samples[4].max_temperature = 35.0;

        let days = select_daily_representatives(&samples, 4, utc_key);

        assert_eq!(days[0].max_temperature, samples[0].max_temperature);
        assert_ne!(days[0].max_temperature, 35.0);
    }

    #[test]
    fn test_calendar_function_decides_grouping() {
        // 21:00 and 23:00 UTC share a day in UTC but split at UTC+2
        let samples = vec![
            sample(MARCH_1 + 21 * HOUR, 1.0),
            sample(MARCH_1 + 23 * HOUR, 2.0),
        ];
        let plus_two = date_key_in(FixedOffset::east_opt(2 * 3600).unwrap());

        assert_eq!(select_daily_representatives(&samples, 4, utc_key).len(), 1);
        assert_eq!(select_daily_representatives(&samples, 4, plus_two).len(), 2);
    }

    #[test]
    fn test_first_k_prefix() {
        let samples = series(MARCH_1, 40);

        let window = select_first_k(&samples, HOURLY_WINDOW);
        assert_eq!(window, &samples[..12]);

        let short = series(MARCH_1, 5);
        assert_eq!(select_first_k(&short, HOURLY_WINDOW), &short[..]);
        assert!(select_first_k(&samples, 0).is_empty());
    }

    #[test]
    fn test_date_key_handles_out_of_range() {
        // Must not panic on timestamps chrono cannot represent
        let key = date_key_in(FixedOffset::east_opt(0).unwrap());
        let _ = key(i64::MAX);
        let _ = key(0);
    }

    /// Europe/Athens around the 2024 spring change: +02:00 until
    /// 2024-03-31T01:00Z, +03:00 after
    #[derive(Debug, Clone, Copy)]
    struct AthensSpring2024;

    const ATHENS_SWITCH: i64 = 1_711_846_800;

    impl AthensSpring2024 {
        fn offset_at(utc_seconds: i64) -> FixedOffset {
            let hours = if utc_seconds < ATHENS_SWITCH { 2 } else { 3 };
            FixedOffset::east_opt(hours * 3600).unwrap()
        }
    }

    impl TimeZone for AthensSpring2024 {
        type Offset = FixedOffset;

        fn from_offset(_: &FixedOffset) -> Self {
            AthensSpring2024
        }

        fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<FixedOffset> {
            self.offset_from_local_datetime(&local.and_time(NaiveTime::from_hms_opt(0, 0, 0).unwrap()))
        }

        fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
            // Wall time read as +02:00; only wrong inside the skipped hour
            let utc = local.and_utc().timestamp() - 2 * HOUR;
            LocalResult::Single(Self::offset_at(utc))
        }

        fn offset_from_utc_date(&self, utc: &NaiveDate) -> FixedOffset {
            self.offset_from_utc_datetime(&utc.and_time(NaiveTime::from_hms_opt(0, 0, 0).unwrap()))
        }

        fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
            Self::offset_at(utc.and_utc().timestamp())
        }
    }

    // 2024-03-30T00:00:00Z
    const MARCH_30: i64 = 1_711_756_800;
    // 2024-03-31T21:00:00Z, midnight 1 April in Athens after the change
    const ATHENS_APRIL_1: i64 = 1_711_918_800;

    #[test]
    fn test_date_key_follows_dst_change() {
        let key = date_key_in(AthensSpring2024);
        assert_eq!(key(ATHENS_APRIL_1), NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
        assert_eq!(crate::display::hour_minute(ATHENS_APRIL_1, &AthensSpring2024), "00:00");

        // The winter offset alone puts the same instant on 31 March
        let winter = date_key_in(FixedOffset::east_opt(2 * 3600).unwrap());
        assert_eq!(winter(ATHENS_APRIL_1), NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
    }

    #[test]
    fn test_daily_representatives_across_dst_change() {
        let samples = series(MARCH_30, 16);

        let days = select_daily_representatives(&samples, 4, date_key_in(AthensSpring2024));
        let stamps: Vec<i64> = days.iter().map(|s| s.timestamp).collect();
        assert_eq!(stamps, vec![MARCH_30, MARCH_30 + DAY, ATHENS_APRIL_1]);
    }
}
