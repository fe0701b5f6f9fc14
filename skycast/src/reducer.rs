//! Reducer - all state transitions
//!
//! `fn(&mut AppState, Action) -> DispatchResult<Effect>`: mutate state,
//! report whether it changed, and declare the async work to start. No I/O
//! happens here.

use skycast_core::{Locator, WeatherError};
use skycast_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{AppState, InFlight, RequestId, RequestStatus};

pub const PLACE_TRANSPORT_ERROR: &str = "Failed to fetch weather data.";
pub const COORDINATE_TRANSPORT_ERROR: &str = "Failed to fetch location weather data.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Half {
    Current,
    Forecast,
}

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        Action::AppStart => {
            state.locating = true;
            DispatchResult::changed_with(Effect::Locate)
        }

        Action::LocationDidResolve(coords) => {
            if !state.locating {
                tracing::debug!(%coords, "location arrived after a search, ignoring");
                return DispatchResult::unchanged();
            }
            state.locating = false;
            start_request(state, Locator::Coordinates(coords))
        }

        Action::LocationDidFail(error) => {
            if !state.locating {
                tracing::debug!(%error, "location failure arrived after a search, ignoring");
                return DispatchResult::unchanged();
            }
            state.locating = false;
            state.error = Some(error.to_string());
            DispatchResult::changed()
        }

        Action::SearchInputChange(text) => {
            if state.search_input == text {
                return DispatchResult::unchanged();
            }
            state.search_input = text;
            DispatchResult::changed()
        }

        Action::SearchSubmit => {
            let query = state.search_input.trim();
            if query.is_empty() {
                return DispatchResult::unchanged();
            }
            let locator = Locator::place(query);
            // A typed search supersedes the startup location lookup
            state.locating = false;
            start_request(state, locator)
        }

        Action::CurrentDidLoad { request, data } => {
            if !accept(state, request) {
                return DispatchResult::unchanged();
            }
            state.current = Some(data);
            state.error = None;
            settle(state, Half::Current);
            DispatchResult::changed()
        }

        Action::ForecastDidLoad { request, data } => {
            if !accept(state, request) {
                return DispatchResult::unchanged();
            }
            state.forecast = Some(data);
            settle(state, Half::Forecast);
            DispatchResult::changed()
        }

        Action::CurrentDidError { request, error } => {
            handle_failure(state, request, Half::Current, error)
        }

        Action::ForecastDidError { request, error } => {
            handle_failure(state, request, Half::Forecast, error)
        }

        Action::UiToggleTheme => {
            state.theme = state.theme.toggle();
            DispatchResult::changed()
        }

        Action::UiToggleForecastMode => {
            if state.forecast.is_none() {
                return DispatchResult::unchanged();
            }
            state.forecast_mode = state.forecast_mode.toggle();
            DispatchResult::changed()
        }

        Action::UiTerminalResize(width, height) => {
            tracing::debug!(width, height, "terminal resized");
            DispatchResult::changed()
        }

        Action::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            // Only the spinner animates
            if state.is_loading() {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        // Handled by the runtime
        Action::Quit => DispatchResult::unchanged(),
    }
}

/// Issue a fresh request, superseding any outstanding one
fn start_request(state: &mut AppState, locator: Locator) -> DispatchResult<Effect> {
    let request = state.next_request_id();
    tracing::info!(%request, %locator, "weather request started");

    state.status = RequestStatus::Pending(request);
    state.in_flight = Some(InFlight::new(request, locator.clone()));

    DispatchResult::changed_with_many(vec![
        Effect::FetchCurrent {
            request,
            locator: locator.clone(),
        },
        Effect::FetchForecast { request, locator },
    ])
}

fn accept(state: &AppState, request: RequestId) -> bool {
    let accepted = state.accepts(request);
    if !accepted {
        tracing::debug!(%request, "dropping result of superseded request");
    }
    accepted
}

/// Mark one half as answered; finish the request once both are in
fn settle(state: &mut AppState, half: Half) {
    let Some(flight) = state.in_flight.as_mut() else {
        return;
    };
    match half {
        Half::Current => flight.current_pending = false,
        Half::Forecast => flight.forecast_pending = false,
    }
    if !flight.is_settled() {
        return;
    }

    let id = flight.id;
    let was_place_query = flight.locator.is_place_name();
    state.in_flight = None;
    state.status = RequestStatus::Succeeded(id);
    if was_place_query {
        state.search_input.clear();
    }
    tracing::info!(request = %id, "weather request finished");
}

fn handle_failure(
    state: &mut AppState,
    request: RequestId,
    half: Half,
    error: WeatherError,
) -> DispatchResult<Effect> {
    if !accept(state, request) {
        return DispatchResult::unchanged();
    }
    let by_place = state
        .in_flight
        .as_ref()
        .is_some_and(|f| f.locator.is_place_name());

    match (&error, by_place) {
        (WeatherError::Provider { message, .. }, true) => {
            match half {
                Half::Current => {
                    state.error = Some(message.clone());
                    state.current = None;
                }
                Half::Forecast => state.forecast = None,
            }
            settle(state, half);
        }
        (WeatherError::Provider { code, message }, false) => {
            tracing::warn!(%request, ?half, code, %message, "provider rejected coordinate query");
            settle(state, half);
        }
        (WeatherError::Transport(detail), true) => {
            tracing::warn!(%request, ?half, %detail, "weather request failed");
            state.current = None;
            state.forecast = None;
            state.error = Some(PLACE_TRANSPORT_ERROR.to_string());
            fail(state, request);
        }
        (WeatherError::Transport(detail), false) => {
            tracing::warn!(%request, ?half, %detail, "location weather request failed");
            state.error = Some(COORDINATE_TRANSPORT_ERROR.to_string());
            fail(state, request);
        }
    }
    DispatchResult::changed()
}

/// End the request; results still on their way for it are dropped
fn fail(state: &mut AppState, request: RequestId) {
    state.in_flight = None;
    state.status = RequestStatus::Failed(request);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ForecastMode, Theme};
    use skycast_core::{
        Coordinates, CurrentConditions, ForecastSample, ForecastSeries, GeolocationError,
    };

    fn conditions(place: &str) -> CurrentConditions {
        CurrentConditions {
            place_name: place.into(),
            country_code: "GB".into(),
            temperature: 11.6,
            min_temperature: 9.0,
            max_temperature: 13.2,
            wind_speed: 4.1,
            humidity_percent: 81,
            condition_label: "Clouds".into(),
            condition_description: "broken clouds".into(),
            observed_at: 1_709_283_600,
        }
    }

    fn series(place: &str) -> ForecastSeries {
        let samples = (0..8)
            .map(|i| ForecastSample {
                timestamp: 1_709_283_600 + i * 10_800,
                min_temperature: 8.0,
                max_temperature: 12.0,
                temperature: 10.0,
                wind_speed: 3.0,
                humidity_percent: 70,
                condition_label: "Rain".into(),
                condition_description: "light rain".into(),
            })
            .collect();
        ForecastSeries::new(place, "GB", samples)
    }

    /// Type `query`, submit, and return the issued request id
    fn submit(state: &mut AppState, query: &str) -> RequestId {
        reducer(state, Action::SearchInputChange(query.into()));
        let result = reducer(state, Action::SearchSubmit);
        assert!(result.changed);
        match state.status {
            RequestStatus::Pending(id) => id,
            other => panic!("expected pending request, got {:?}", other),
        }
    }

    /// Start up, resolve the location and return the coordinate request id
    fn locate(state: &mut AppState, coords: Coordinates) -> RequestId {
        reducer(state, Action::AppStart);
        reducer(state, Action::LocationDidResolve(coords));
        match state.status {
            RequestStatus::Pending(id) => id,
            other => panic!("expected pending request, got {:?}", other),
        }
    }

    #[test]
    fn test_app_start_requests_location() {
        let mut state = AppState::default();
        let result = reducer(&mut state, Action::AppStart);

        assert!(result.changed);
        assert_eq!(result.effects, vec![Effect::Locate]);
        assert!(state.locating);
        assert!(state.is_loading());
    }

    #[test]
    fn test_location_resolves_to_coordinate_query() {
        let mut state = AppState::default();
        reducer(&mut state, Action::AppStart);

        let coords = Coordinates::new(51.5, -0.12);
        let result = reducer(&mut state, Action::LocationDidResolve(coords));

        assert!(!state.locating);
        let request = match state.status {
            RequestStatus::Pending(id) => id,
            other => panic!("unexpected status {:?}", other),
        };
        assert_eq!(
            result.effects,
            vec![
                Effect::FetchCurrent {
                    request,
                    locator: Locator::Coordinates(coords)
                },
                Effect::FetchForecast {
                    request,
                    locator: Locator::Coordinates(coords)
                },
            ]
        );
    }

    #[test]
    fn test_geolocation_denied_then_search_works() {
        let mut state = AppState::default();
        reducer(&mut state, Action::AppStart);
        reducer(
            &mut state,
            Action::LocationDidFail(GeolocationError::PermissionDenied),
        );

        assert_eq!(
            state.error.as_deref(),
            Some("Geolocation permission denied.")
        );
        assert!(state.current.is_none());
        assert!(state.forecast.is_none());
        assert!(!state.is_loading());

        let request = submit(&mut state, "London");
        reducer(
            &mut state,
            Action::CurrentDidLoad {
                request,
                data: conditions("London"),
            },
        );
        reducer(
            &mut state,
            Action::ForecastDidLoad {
                request,
                data: series("London"),
            },
        );

        assert_eq!(state.error, None);
        assert_eq!(state.current.as_ref().map(|c| c.place_name.as_str()), Some("London"));
        assert!(state.forecast.is_some());
        assert_eq!(state.status, RequestStatus::Succeeded(request));
    }

    #[test]
    fn test_geolocation_unsupported_message() {
        let mut state = AppState::default();
        reducer(&mut state, Action::AppStart);
        reducer(
            &mut state,
            Action::LocationDidFail(GeolocationError::Unsupported),
        );
        assert_eq!(state.error.as_deref(), Some("Geolocation is not supported."));
    }

    #[test]
    fn test_blank_submit_is_ignored() {
        let mut state = AppState::default();
        reducer(&mut state, Action::SearchInputChange("   ".into()));
        let result = reducer(&mut state, Action::SearchSubmit);

        assert!(!result.changed);
        assert!(!result.has_effects());
        assert_eq!(state.status, RequestStatus::Idle);
    }

    #[test]
    fn test_submit_trims_query() {
        let mut state = AppState::default();
        reducer(&mut state, Action::SearchInputChange("  Paris ".into()));
        let result = reducer(&mut state, Action::SearchSubmit);

        assert!(matches!(
            &result.effects[0],
            Effect::FetchCurrent { locator, .. } if *locator == Locator::place("Paris")
        ));
    }

    #[test]
    fn test_unknown_city_keeps_forecast_of_same_request() {
        let mut state = AppState::default();
        state.current = Some(conditions("Old"));
        let request = submit(&mut state, "Atlantis");

        reducer(
            &mut state,
            Action::CurrentDidError {
                request,
                error: WeatherError::provider(404, "city not found"),
            },
        );
        assert_eq!(state.error.as_deref(), Some("city not found"));
        assert!(state.current.is_none());

        reducer(
            &mut state,
            Action::ForecastDidLoad {
                request,
                data: series("Atlantis"),
            },
        );
        assert!(state.forecast.is_some());
        assert_eq!(state.error.as_deref(), Some("city not found"));
        assert_eq!(state.status, RequestStatus::Succeeded(request));
        assert_eq!(state.search_input, "");
    }

    #[test]
    fn test_forecast_provider_failure_clears_forecast_only() {
        let mut state = AppState::default();
        state.forecast = Some(series("Old"));
        let request = submit(&mut state, "Oslo");

        reducer(
            &mut state,
            Action::ForecastDidError {
                request,
                error: WeatherError::provider(404, "city not found"),
            },
        );
        assert!(state.forecast.is_none());
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_place_transport_failure_clears_both_and_drops_sibling() {
        let mut state = AppState::default();
        state.current = Some(conditions("Old"));
        state.forecast = Some(series("Old"));
        let request = submit(&mut state, "Rome");

        reducer(
            &mut state,
            Action::CurrentDidError {
                request,
                error: WeatherError::transport("connection refused"),
            },
        );
        assert_eq!(state.error.as_deref(), Some(PLACE_TRANSPORT_ERROR));
        assert!(state.current.is_none());
        assert!(state.forecast.is_none());
        assert_eq!(state.status, RequestStatus::Failed(request));
        assert_eq!(state.search_input, "Rome");

        let result = reducer(
            &mut state,
            Action::ForecastDidLoad {
                request,
                data: series("Rome"),
            },
        );
        assert!(!result.changed);
        assert!(state.forecast.is_none());
    }

    #[test]
    fn test_coordinate_provider_failure_leaves_state() {
        let mut state = AppState::default();
        state.error = Some("earlier".into());
        let request = locate(&mut state, Coordinates::new(0.0, 0.0));

        reducer(
            &mut state,
            Action::CurrentDidError {
                request,
                error: WeatherError::provider(401, "Invalid API key"),
            },
        );
        assert_eq!(state.error.as_deref(), Some("earlier"));
        assert!(state.current.is_none());
    }

    #[test]
    fn test_coordinate_transport_failure_keeps_data() {
        let mut state = AppState::default();
        state.current = Some(conditions("Here"));
        let request = locate(&mut state, Coordinates::new(10.0, 10.0));

        reducer(
            &mut state,
            Action::ForecastDidError {
                request,
                error: WeatherError::transport("timed out"),
            },
        );
        assert_eq!(state.error.as_deref(), Some(COORDINATE_TRANSPORT_ERROR));
        assert!(state.current.is_some());
        assert_eq!(state.status, RequestStatus::Failed(request));
    }

    #[test]
    fn test_coordinate_query_does_not_clear_input() {
        let mut state = AppState::default();
        let request = locate(&mut state, Coordinates::new(10.0, 10.0));
        reducer(&mut state, Action::SearchInputChange("Ber".into()));

        reducer(
            &mut state,
            Action::CurrentDidLoad {
                request,
                data: conditions("Here"),
            },
        );
        reducer(
            &mut state,
            Action::ForecastDidLoad {
                request,
                data: series("Here"),
            },
        );
        assert_eq!(state.search_input, "Ber");
        assert_eq!(state.status, RequestStatus::Succeeded(request));
    }

    #[test]
    fn test_stale_results_never_change_state() {
        let mut state = AppState::default();
        let first = submit(&mut state, "Madrid");
        let second = submit(&mut state, "Lima");
        assert_ne!(first, second);

        let before = state.clone();
        for action in [
            Action::CurrentDidLoad {
                request: first,
                data: conditions("Madrid"),
            },
            Action::ForecastDidLoad {
                request: first,
                data: series("Madrid"),
            },
            Action::CurrentDidError {
                request: first,
                error: WeatherError::transport("reset"),
            },
            Action::ForecastDidError {
                request: first,
                error: WeatherError::provider(404, "city not found"),
            },
        ] {
            let result = reducer(&mut state, action);
            assert!(!result.changed);
        }
        assert_eq!(state, before);

        reducer(
            &mut state,
            Action::CurrentDidLoad {
                request: second,
                data: conditions("Lima"),
            },
        );
        assert_eq!(state.current.as_ref().map(|c| c.place_name.as_str()), Some("Lima"));
    }

    #[test]
    fn test_success_clears_error() {
        let mut state = AppState::default();
        state.error = Some("city not found".into());
        let request = submit(&mut state, "Kyiv");
        reducer(
            &mut state,
            Action::CurrentDidLoad {
                request,
                data: conditions("Kyiv"),
            },
        );
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_theme_toggle_has_no_effects() {
        let mut state = AppState::default();
        let result = reducer(&mut state, Action::UiToggleTheme);
        assert!(result.changed);
        assert!(!result.has_effects());
        assert_eq!(state.theme, Theme::Dark);
    }

    #[test]
    fn test_forecast_mode_needs_forecast() {
        let mut state = AppState::default();
        let result = reducer(&mut state, Action::UiToggleForecastMode);
        assert!(!result.changed);
        assert_eq!(state.forecast_mode, ForecastMode::Daily);

        state.forecast = Some(series("Here"));
        let result = reducer(&mut state, Action::UiToggleForecastMode);
        assert!(result.changed);
        assert!(!result.has_effects());
        assert_eq!(state.forecast_mode, ForecastMode::Hourly);
    }

    #[test]
    fn test_tick_renders_only_while_loading() {
        let mut state = AppState::default();
        assert!(!reducer(&mut state, Action::Tick).changed);
        assert_eq!(state.tick_count, 1);

        submit(&mut state, "Quito");
        assert!(reducer(&mut state, Action::Tick).changed);
    }

    #[test]
    fn test_resize_redraws_without_effects() {
        let mut state = AppState::default();
        let before = state.clone();
        let result = reducer(&mut state, Action::UiTerminalResize(120, 40));
        assert!(result.changed);
        assert!(!result.has_effects());
        assert_eq!(state, before);
    }

    #[test]
    fn test_late_location_does_not_supersede_search() {
        let mut state = AppState::default();
        reducer(&mut state, Action::AppStart);
        let request = submit(&mut state, "Paris");
        assert!(!state.locating);

        let result = reducer(
            &mut state,
            Action::LocationDidResolve(Coordinates::new(48.8, 2.3)),
        );
        assert!(!result.changed);
        assert!(!result.has_effects());
        assert_eq!(state.status, RequestStatus::Pending(request));

        let result = reducer(
            &mut state,
            Action::CurrentDidLoad {
                request,
                data: conditions("Paris"),
            },
        );
        assert!(result.changed);
        assert_eq!(state.current.as_ref().map(|c| c.place_name.as_str()), Some("Paris"));
    }

    #[test]
    fn test_late_location_failure_keeps_search_state() {
        let mut state = AppState::default();
        reducer(&mut state, Action::AppStart);
        submit(&mut state, "Paris");

        let result = reducer(
            &mut state,
            Action::LocationDidFail(GeolocationError::PermissionDenied),
        );
        assert!(!result.changed);
        assert_eq!(state.error, None);
    }
}
