//! Display formatting shared by the dashboard panels
//!
//! Rounding follows the half-up convention (`2.5 -> 3`, `-2.5 -> -2`).

use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};

use crate::model::Units;

/// Round half-up to the nearest integer
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// `"12°C"`
pub fn temperature(value: f64, units: Units) -> String {
    format!("{}{}", round_half_up(value), units.temperature_suffix())
}

/// `"8°C ~ 14°C"`
pub fn temperature_range(min: f64, max: f64, units: Units) -> String {
    format!("{} ~ {}", temperature(min, units), temperature(max, units))
}

/// `"8° ~ 14°"`, for narrow cards
pub fn short_temperature_range(min: f64, max: f64) -> String {
    format!("{}° ~ {}°", round_half_up(min), round_half_up(max))
}

/// Wind speed as shown on the cards: `"<17 km/h"` or `"<11 mph"`.
///
/// Metric speeds arrive in m/s and are converted; imperial ones are already mph.
pub fn wind(speed: f64, units: Units) -> String {
    match units {
        Units::Metric => format!("<{} km/h", round_half_up(speed * 3.6)),
        Units::Imperial => format!("<{} mph", round_half_up(speed)),
    }
}

pub fn humidity(percent: u8) -> String {
    format!("{}%", percent)
}

fn at<Tz: TimeZone>(timestamp: i64, tz: &Tz) -> DateTime<Tz> {
    DateTime::<Utc>::from_timestamp(timestamp, 0)
        .unwrap_or_default()
        .with_timezone(tz)
}

/// `"Friday"`
pub fn weekday<Tz: TimeZone>(timestamp: i64, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    at(timestamp, tz).format("%A").to_string()
}

/// `"1 March"`
pub fn day_month<Tz: TimeZone>(timestamp: i64, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    at(timestamp, tz).format("%-d %B").to_string()
}

/// `"09:00"`, 24-hour clock
pub fn hour_minute<Tz: TimeZone>(timestamp: i64, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    at(timestamp, tz).format("%H:%M").to_string()
}
