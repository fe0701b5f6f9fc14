//! OpenWeatherMap payload schemas
//!
//! Both endpoints report success or failure in a `cod` field inside the
//! JSON body. `/weather` sends it as a number (`200`), `/forecast` as a
//! string (`"200"`), and errors usually as a string (`"404"`) next to a
//! `message`. The HTTP status is not consulted.
//!
//! Parsing is two-step: first the envelope (`cod` + `message`), then, only
//! on success, the endpoint schema. Any shape mismatch is a transport error.

use serde::Deserialize;
use serde_json::Value;

use crate::error::WeatherError;
use crate::model::{CurrentConditions, ForecastSample, ForecastSeries};

const SUCCESS: u16 = 200;

/// The provider status code, in either of its spellings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ProviderCode {
    Number(u16),
    Text(String),
}

impl ProviderCode {
    pub fn value(&self) -> Option<u16> {
        match self {
            ProviderCode::Number(code) => Some(*code),
            ProviderCode::Text(text) => text.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Envelope {
    cod: Option<ProviderCode>,
    /// A string on failure, the number 0 on forecast success
    #[serde(default)]
    message: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
    temp_min: f64,
    temp_max: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct ConditionBlock {
    main: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct WindBlock {
    speed: f64,
}

#[derive(Debug, Default, Deserialize)]
struct SysBlock {
    #[serde(default)]
    country: String,
}

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    #[serde(default)]
    name: String,
    #[serde(default)]
    sys: SysBlock,
    main: MainBlock,
    weather: Vec<ConditionBlock>,
    wind: WindBlock,
    dt: i64,
}

#[derive(Debug, Deserialize)]
struct ForecastItem {
    dt: i64,
    main: MainBlock,
    weather: Vec<ConditionBlock>,
    wind: WindBlock,
}

#[derive(Debug, Default, Deserialize)]
struct CityBlock {
    #[serde(default)]
    name: String,
    #[serde(default)]
    country: String,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    list: Vec<ForecastItem>,
    #[serde(default)]
    city: CityBlock,
}

/// Check the envelope and hand back the raw document on success
fn check_envelope(body: &str) -> Result<Value, WeatherError> {
    let document: Value = serde_json::from_str(body)?;
    let envelope: Envelope = serde_json::from_value(document.clone())?;

    let code = envelope
        .cod
        .ok_or_else(|| WeatherError::transport("response has no provider code"))?;
    let code = code
        .value()
        .ok_or_else(|| WeatherError::transport(format!("unrecognised provider code {:?}", code)))?;

    if code != SUCCESS {
        let message = match envelope.message {
            Some(Value::String(text)) => text,
            _ => String::new(),
        };
        return Err(WeatherError::provider(code, message));
    }

    Ok(document)
}

fn first_condition(weather: Vec<ConditionBlock>) -> Result<ConditionBlock, WeatherError> {
    weather
        .into_iter()
        .next()
        .ok_or_else(|| WeatherError::transport("response has an empty weather array"))
}

/// Parse a `/weather` body
pub fn parse_current(body: &str) -> Result<CurrentConditions, WeatherError> {
    let document = check_envelope(body)?;
    let response: CurrentResponse = serde_json::from_value(document)?;
    let condition = first_condition(response.weather)?;

    Ok(CurrentConditions {
        place_name: response.name,
        country_code: response.sys.country,
        temperature: response.main.temp,
        min_temperature: response.main.temp_min,
        max_temperature: response.main.temp_max,
        wind_speed: response.wind.speed,
        humidity_percent: response.main.humidity,
        condition_label: condition.main,
        condition_description: condition.description,
        observed_at: response.dt,
    })
}

/// Parse a `/forecast` body
pub fn parse_forecast(body: &str) -> Result<ForecastSeries, WeatherError> {
    let document = check_envelope(body)?;
    let response: ForecastResponse = serde_json::from_value(document)?;

    let samples = response
        .list
        .into_iter()
        .map(|item| {
            let condition = first_condition(item.weather)?;
            Ok(ForecastSample {
                timestamp: item.dt,
                min_temperature: item.main.temp_min,
                max_temperature: item.main.temp_max,
                temperature: item.main.temp,
                wind_speed: item.wind.speed,
                humidity_percent: item.main.humidity,
                condition_label: condition.main,
                condition_description: condition.description,
            })
        })
        .collect::<Result<Vec<_>, WeatherError>>()?;

    let mut series = ForecastSeries::new(response.city.name, response.city.country, samples);
    if !series.is_chronological() {
        tracing::warn!("forecast list out of order, sorting by timestamp");
        series.sort_chronologically();
    }
    Ok(series)
}
