//! Condition label to icon mapping
//!
//! One mapping for every panel and both themes. Themes only choose the
//! colour a glyph is painted with.

/// Icon shown next to a weather condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IconAsset {
    Sun,
    Rain,
    Clouds,
    Thunderstorm,
    /// Generic cloud for anything unrecognised
    #[default]
    Default,
}

impl IconAsset {
    /// Terminal glyph
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Sun => "☀",
            Self::Rain => "🌧",
            Self::Clouds => "⛅",
            Self::Thunderstorm => "⛈",
            Self::Default => "☁",
        }
    }

    /// Stable identifier, independent of rendering
    pub fn asset_name(&self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::Rain => "rain",
            Self::Clouds => "clouds",
            Self::Thunderstorm => "thunderstorm",
            Self::Default => "cloud",
        }
    }
}

/// Map a provider condition label to its icon. Never fails.
pub fn resolve_icon(condition_label: &str) -> IconAsset {
    match condition_label.trim().to_lowercase().as_str() {
        "clear" | "sunshine" => IconAsset::Sun,
        "rain" | "rainstorm" => IconAsset::Rain,
        "clouds" | "partly cloudy" => IconAsset::Clouds,
        "thunderstorm" => IconAsset::Thunderstorm,
        _ => IconAsset::Default,
    }
}
