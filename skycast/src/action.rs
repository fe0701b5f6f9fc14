//! Actions
//!
//! Named `<Category><Verb>`; a `Did` marks the result of async work.

use skycast_core::{Coordinates, CurrentConditions, ForecastSeries, GeolocationError, WeatherError};

use crate::state::RequestId;

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Dashboard mounted; ask for the device location
    AppStart,
    LocationDidResolve(Coordinates),
    LocationDidFail(GeolocationError),

    SearchInputChange(String),
    SearchSubmit,

    CurrentDidLoad {
        request: RequestId,
        data: CurrentConditions,
    },
    CurrentDidError {
        request: RequestId,
        error: WeatherError,
    },
    ForecastDidLoad {
        request: RequestId,
        data: ForecastSeries,
    },
    ForecastDidError {
        request: RequestId,
        error: WeatherError,
    },

    UiToggleTheme,
    UiToggleForecastMode,
    UiTerminalResize(u16, u16),

    /// Spinner frame
    Tick,
    Quit,
}

impl skycast_dispatch::Action for Action {
    fn name(&self) -> &'static str {
        match self {
            Action::AppStart => "AppStart",
            Action::LocationDidResolve(_) => "LocationDidResolve",
            Action::LocationDidFail(_) => "LocationDidFail",
            Action::SearchInputChange(_) => "SearchInputChange",
            Action::SearchSubmit => "SearchSubmit",
            Action::CurrentDidLoad { .. } => "CurrentDidLoad",
            Action::CurrentDidError { .. } => "CurrentDidError",
            Action::ForecastDidLoad { .. } => "ForecastDidLoad",
            Action::ForecastDidError { .. } => "ForecastDidError",
            Action::UiToggleTheme => "UiToggleTheme",
            Action::UiToggleForecastMode => "UiToggleForecastMode",
            Action::UiTerminalResize(..) => "UiTerminalResize",
            Action::Tick => "Tick",
            Action::Quit => "Quit",
        }
    }

    /// Short form for logs; full payloads are too noisy
    fn summary(&self) -> String {
        match self {
            Action::CurrentDidLoad { request, data } => format!(
                "CurrentDidLoad {{ request: {}, place: {:?}, temp: {:.1} }}",
                request, data.place_name, data.temperature
            ),
            Action::ForecastDidLoad { request, data } => format!(
                "ForecastDidLoad {{ request: {}, place: {:?}, samples: {} }}",
                request,
                data.place_name,
                data.len()
            ),
            Action::CurrentDidError { request, error } => {
                format!("CurrentDidError {{ request: {}, error: {} }}", request, error)
            }
            Action::ForecastDidError { request, error } => {
                format!("ForecastDidError {{ request: {}, error: {} }}", request, error)
            }
            // Keystrokes are not logged verbatim
            Action::SearchInputChange(text) => {
                format!("SearchInputChange({} chars)", text.chars().count())
            }
            _ => format!("{:?}", self),
        }
    }
}
