//! skycast - terminal weather dashboard
//!
//! Search a city (or start from the configured location) and see current
//! conditions plus a four-day or twelve-step hourly forecast. State lives in
//! [`state::AppState`] and changes only through [`reducer::reducer`]; network
//! work is declared as [`effect::Effect`] values and run by the binary.

pub mod action;
pub mod components;
pub mod config;
pub mod effect;
pub mod logging;
pub mod reducer;
pub mod state;
pub mod terminal;
pub mod theme;
pub mod zone;
