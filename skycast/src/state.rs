//! Application state - single source of truth
//!
//! Components receive `&AppState` as props; only the reducer mutates it.

use std::fmt;

use serde::Deserialize;
use skycast_core::{CurrentConditions, ForecastSeries, Locator, Units};

/// Spinner frame period while a request is outstanding
pub const LOADING_ANIM_TICK_MS: u64 = 120;

/// Identifies one query (a current + forecast pair)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle of the latest query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    Pending(RequestId),
    Succeeded(RequestId),
    Failed(RequestId),
}

impl RequestStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, RequestStatus::Pending(_))
    }
}

/// Bookkeeping for the query whose results are still expected
#[derive(Debug, Clone, PartialEq)]
pub struct InFlight {
    pub id: RequestId,
    pub locator: Locator,
    pub current_pending: bool,
    pub forecast_pending: bool,
}

impl InFlight {
    pub fn new(id: RequestId, locator: Locator) -> Self {
        Self {
            id,
            locator,
            current_pending: true,
            forecast_pending: true,
        }
    }

    pub fn is_settled(&self) -> bool {
        !self.current_pending && !self.forecast_pending
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Which forecast projection is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ForecastMode {
    #[default]
    Daily,
    Hourly,
}

impl ForecastMode {
    pub fn toggle(&self) -> Self {
        match self {
            ForecastMode::Daily => ForecastMode::Hourly,
            ForecastMode::Hourly => ForecastMode::Daily,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ForecastMode::Daily => "Daily",
            ForecastMode::Hourly => "Hourly",
        }
    }
}

/// Everything the dashboard renders
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// Text in the search line
    pub search_input: String,
    pub current: Option<CurrentConditions>,
    pub forecast: Option<ForecastSeries>,
    /// Banner text; `None` hides the banner
    pub error: Option<String>,
    pub theme: Theme,
    pub forecast_mode: ForecastMode,
    pub units: Units,
    pub status: RequestStatus,
    pub in_flight: Option<InFlight>,
    /// Waiting for the startup location, and no search has replaced it
    pub locating: bool,
    /// Spinner frame counter
    pub tick_count: u32,
    pub last_request: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Theme::default(), Units::default())
    }
}

impl AppState {
    pub fn new(theme: Theme, units: Units) -> Self {
        Self {
            search_input: String::new(),
            current: None,
            forecast: None,
            error: None,
            theme,
            forecast_mode: ForecastMode::default(),
            units,
            status: RequestStatus::Idle,
            in_flight: None,
            locating: false,
            tick_count: 0,
            last_request: 0,
        }
    }

    /// Allocate an id greater than every id handed out before
    pub fn next_request_id(&mut self) -> RequestId {
        self.last_request += 1;
        RequestId(self.last_request)
    }

    /// Whether results for `id` are still wanted
    pub fn accepts(&self, id: RequestId) -> bool {
        self.in_flight.as_ref().is_some_and(|f| f.id == id)
    }

    pub fn is_loading(&self) -> bool {
        self.locating || self.status.is_pending()
    }
}
