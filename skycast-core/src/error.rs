//! Error types for weather queries and location lookup

use thiserror::Error;

/// A failed weather request
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WeatherError {
    /// The provider answered with a non-success `cod` in its JSON body
    #[error("{message}")]
    Provider { code: u16, message: String },

    /// Network failure, unreadable body, or a payload that does not match the schema
    #[error("Transport error: {0}")]
    Transport(String),
}

impl WeatherError {
    pub fn provider(code: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            format!("request failed with provider code {}", code)
        } else {
            message
        };
        Self::Provider { code, message }
    }

    pub fn transport(detail: impl Into<String>) -> Self {
        Self::Transport(detail.into())
    }

    pub fn is_provider(&self) -> bool {
        matches!(self, Self::Provider { .. })
    }

    /// Text shown to the user for provider failures.
    ///
    /// Transport failures have no user text of their own; the dashboard
    /// substitutes a fixed message.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            Self::Provider { message, .. } => Some(message),
            Self::Transport(_) => None,
        }
    }
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for WeatherError {
    fn from(err: serde_json::Error) -> Self {
        Self::Transport(format!("malformed response: {}", err))
    }
}

/// Why coordinates could not be obtained
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeolocationError {
    #[error("Geolocation permission denied.")]
    PermissionDenied,

    #[error("Geolocation is not supported.")]
    Unsupported,
}
