//! Time zone for forecast dates and clock labels

use chrono::{FixedOffset, Local};
use skycast_core::display;
use skycast_core::forecast::{date_key_in, DateKey};

/// Zone the dashboard shows times in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewZone {
    /// The viewer's zone; the offset is looked up per timestamp
    #[default]
    Local,
    Fixed(FixedOffset),
}

impl ViewZone {
    pub fn date_key(&self, timestamp: i64) -> DateKey {
        match self {
            ViewZone::Local => date_key_in(Local)(timestamp),
            ViewZone::Fixed(offset) => date_key_in(*offset)(timestamp),
        }
    }

    pub fn weekday(&self, timestamp: i64) -> String {
        match self {
            ViewZone::Local => display::weekday(timestamp, &Local),
            ViewZone::Fixed(offset) => display::weekday(timestamp, offset),
        }
    }

    pub fn day_month(&self, timestamp: i64) -> String {
        match self {
            ViewZone::Local => display::day_month(timestamp, &Local),
            ViewZone::Fixed(offset) => display::day_month(timestamp, offset),
        }
    }

    pub fn hour_minute(&self, timestamp: i64) -> String {
        match self {
            ViewZone::Local => display::hour_minute(timestamp, &Local),
            ViewZone::Fixed(offset) => display::hour_minute(timestamp, offset),
        }
    }
}
