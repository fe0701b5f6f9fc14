//! Colour palettes for the light and dark themes

use ratatui::style::{Color, Style, Stylize};
use skycast_core::Units;

use crate::state::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub error: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::Rgb(236, 243, 252),
                text: Color::Rgb(29, 78, 216),
                muted: Color::Rgb(100, 116, 139),
                accent: Color::Rgb(14, 116, 144),
                border: Color::Rgb(148, 163, 184),
                error: Color::Rgb(220, 38, 38),
            },
            Theme::Dark => Self {
                background: Color::Rgb(31, 41, 55),
                text: Color::White,
                muted: Color::Gray,
                accent: Color::Cyan,
                border: Color::Rgb(80, 80, 100),
                error: Color::Rgb(248, 113, 113),
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).bold()
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn key_hint(&self) -> Style {
        Style::default().fg(self.accent).bold()
    }
}

/// Colour for a temperature reading, cold to hot
pub fn temperature_color(value: f64, units: Units) -> Color {
    let celsius = match units {
        Units::Metric => value,
        Units::Imperial => (value - 32.0) * 5.0 / 9.0,
    };
    match celsius.round() as i64 {
        ..=-10 => Color::Rgb(150, 200, 255),
        -9..=0 => Color::Rgb(100, 180, 255),
        1..=10 => Color::Rgb(60, 190, 170),
        11..=20 => Color::Rgb(90, 190, 90),
        21..=30 => Color::Rgb(230, 180, 40),
        31..=40 => Color::Rgb(255, 150, 80),
        _ => Color::Rgb(255, 100, 100),
    }
}
