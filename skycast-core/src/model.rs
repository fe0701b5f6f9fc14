//! Data model shared by the client and the dashboard

use std::fmt;

use serde::Deserialize;

/// A latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}, {:.2}", self.latitude, self.longitude)
    }
}

/// What a query is about: a place name or a coordinate pair
#[derive(Debug, Clone, PartialEq)]
pub enum Locator {
    PlaceName(String),
    Coordinates(Coordinates),
}

impl Locator {
    /// Build a place-name locator
    pub fn place(name: impl Into<String>) -> Self {
        Locator::PlaceName(name.into())
    }

    /// Build a coordinate locator
    pub fn coords(latitude: f64, longitude: f64) -> Self {
        Locator::Coordinates(Coordinates::new(latitude, longitude))
    }

    pub fn is_place_name(&self) -> bool {
        matches!(self, Locator::PlaceName(_))
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::PlaceName(name) => write!(f, "{}", name),
            Locator::Coordinates(coords) => write!(f, "{}", coords),
        }
    }
}

/// Measurement system requested from the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

impl Units {
    /// Value of the provider's `units` query parameter
    pub fn as_query(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }

    pub fn temperature_suffix(&self) -> &'static str {
        match self {
            Units::Metric => "°C",
            Units::Imperial => "°F",
        }
    }
}

/// One forecast entry, as delivered by the provider every three hours
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSample {
    /// Unix timestamp (seconds, UTC)
    pub timestamp: i64,
    pub min_temperature: f64,
    pub max_temperature: f64,
    pub temperature: f64,
    /// m/s for metric, mph for imperial
    pub wind_speed: f64,
    pub humidity_percent: u8,
    /// Short condition group, e.g. "Rain"
    pub condition_label: String,
    /// Free-text condition, e.g. "light rain"
    pub condition_description: String,
}

/// Chronologically ordered forecast samples for one place
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ForecastSeries {
    pub place_name: String,
    pub country_code: String,
    samples: Vec<ForecastSample>,
}

impl ForecastSeries {
    pub fn new(
        place_name: impl Into<String>,
        country_code: impl Into<String>,
        samples: Vec<ForecastSample>,
    ) -> Self {
        Self {
            place_name: place_name.into(),
            country_code: country_code.into(),
            samples,
        }
    }

    pub fn samples(&self) -> &[ForecastSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Whether timestamps never decrease
    pub fn is_chronological(&self) -> bool {
        self.samples
            .windows(2)
            .all(|pair| pair[0].timestamp <= pair[1].timestamp)
    }

    /// Stable sort by timestamp
    pub(crate) fn sort_chronologically(&mut self) {
        self.samples.sort_by_key(|sample| sample.timestamp);
    }
}

/// Snapshot of the weather right now at one place
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub place_name: String,
    pub country_code: String,
    pub temperature: f64,
    pub min_temperature: f64,
    pub max_temperature: f64,
    pub wind_speed: f64,
    pub humidity_percent: u8,
    pub condition_label: String,
    pub condition_description: String,
    /// Unix timestamp of the observation
    pub observed_at: i64,
}
