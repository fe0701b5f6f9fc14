//! Effects - side effects declared by the reducer
//!
//! The reducer stays pure; `main` turns these into spawned tasks.

use skycast_core::Locator;

use crate::state::RequestId;

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Ask the geolocator for coordinates
    Locate,
    FetchCurrent { request: RequestId, locator: Locator },
    FetchForecast { request: RequestId, locator: Locator },
}
