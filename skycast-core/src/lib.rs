//! Core types and logic for skycast
//!
//! This crate holds everything that does not depend on the terminal:
//!
//! - **model**: forecast samples, current conditions, locators
//! - **forecast**: daily representative selection and the hourly window
//! - **icon**: the single condition-label to icon mapping
//! - **provider**: OpenWeatherMap payload schemas and boundary validation
//! - **client**: the HTTP client for the two provider endpoints
//! - **geolocation**: the coordinate source used on startup
//! - **display**: rounding and label formatting shared by every panel
//!
//! # Example
//!
//! ```ignore
//! use skycast_core::{forecast, Locator, Units, WeatherClient};
//!
//! let client = WeatherClient::new("api-key", Units::Metric)?;
//! let series = client.fetch_forecast(&Locator::place("Lisbon")).await?;
//! let days = forecast::select_daily_representatives(
//!     series.samples(),
//!     forecast::DAILY_FORECAST_DAYS,
//!     forecast::date_key_in(*chrono::Local::now().offset()),
//! );
//! ```

pub mod client;
pub mod display;
pub mod error;
pub mod forecast;
pub mod geolocation;
pub mod icon;
pub mod model;
pub mod provider;

pub use client::WeatherClient;
pub use error::{GeolocationError, WeatherError};
pub use geolocation::{Geolocator, StaticGeolocator};
pub use icon::{resolve_icon, IconAsset};
pub use model::{
    Coordinates, CurrentConditions, ForecastSample, ForecastSeries, Locator, Units,
};
