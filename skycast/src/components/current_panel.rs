//! Current conditions
//!
//! Shows the place, temperature with the day's range, the condition and
//! wind/humidity. Falls back to a loading line or a hint when no data is
//! present.

use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use skycast_core::{display, resolve_icon, CurrentConditions, Units};
use skycast_dispatch::Component;

use super::header::SPINNERS;
use crate::action::Action;
use crate::theme::{temperature_color, Palette};

pub const EMPTY_HINT: &str = "Type a city and press Enter";
pub const LOADING_TEXT: &str = "Fetching weather";

pub struct CurrentPanelProps<'a> {
    pub current: Option<&'a CurrentConditions>,
    pub units: Units,
    pub is_loading: bool,
    pub tick_count: u32,
    pub palette: Palette,
}

pub struct CurrentPanel;

impl CurrentPanel {
    pub const HEIGHT: u16 = 6;
}

impl Component<Action> for CurrentPanel {
    type Props<'a> = CurrentPanelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let palette = props.palette;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border())
            .title(Span::styled(" Now ", palette.title()));

        let lines = match props.current {
            Some(current) => conditions_lines(current, props.units, palette),
            None if props.is_loading => {
                let spinner = SPINNERS[props.tick_count as usize % SPINNERS.len()];
                vec![Line::from(vec![
                    Span::styled(spinner, Style::default().fg(palette.accent)),
                    Span::styled(format!(" {}...", LOADING_TEXT), palette.muted()),
                ])]
            }
            None => vec![Line::from(Span::styled(EMPTY_HINT, palette.muted()))],
        };

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

fn conditions_lines(current: &CurrentConditions, units: Units, palette: Palette) -> Vec<Line<'static>> {
    let icon = resolve_icon(&current.condition_label);
    let text = Style::default().fg(palette.text);

    let place = if current.country_code.is_empty() {
        current.place_name.clone()
    } else {
        format!("{}, {}", current.place_name, current.country_code)
    };

    vec![
        Line::from(vec![
            Span::styled(format!("{} ", icon.glyph()), text),
            Span::styled(place, text.bold()),
        ]),
        Line::from(vec![
            Span::styled(
                display::temperature(current.temperature, units),
                Style::default()
                    .fg(temperature_color(current.temperature, units))
                    .bold(),
            ),
            Span::styled("   ", text),
            Span::styled(
                display::temperature_range(current.min_temperature, current.max_temperature, units),
                palette.muted(),
            ),
        ]),
        Line::from(Span::styled(current.condition_description.to_uppercase(), text)),
        Line::from(vec![
            Span::styled(
                format!("Wind {}", display::wind(current.wind_speed, units)),
                palette.muted(),
            ),
            Span::styled("   ", text),
            Span::styled(
                format!("Humid: {}", display::humidity(current.humidity_percent)),
                palette.muted(),
            ),
        ]),
    ]
}
