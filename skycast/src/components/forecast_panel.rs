//! Forecast cards with a Daily/Hourly tab strip
//!
//! Daily view: one card per calendar day, first sample of each day, at most
//! four. Hourly view: the first twelve samples, two rows of six. Dates are
//! computed in the zone passed through props.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};
use skycast_core::forecast::{
    select_daily_representatives, select_first_k, DAILY_FORECAST_DAYS, HOURLY_WINDOW,
};
use skycast_core::{display, resolve_icon, ForecastSample, ForecastSeries, Units};
use skycast_dispatch::Component;

use crate::action::Action;
use crate::state::ForecastMode;
use crate::theme::{temperature_color, Palette};
use crate::zone::ViewZone;

pub const NO_FORECAST: &str = "No forecast yet";
const HOURLY_PER_ROW: usize = 6;

pub struct ForecastPanelProps<'a> {
    pub forecast: Option<&'a ForecastSeries>,
    pub mode: ForecastMode,
    pub units: Units,
    pub zone: ViewZone,
    pub palette: Palette,
}

pub struct ForecastPanel;

impl Component<Action> for ForecastPanel {
    type Props<'a> = ForecastPanelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let palette = props.palette;
        let title = match props.forecast {
            Some(series) if !series.place_name.is_empty() => {
                format!(" Forecast · {} ", series.place_name)
            }
            _ => " Forecast ".to_string(),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border())
            .title(Span::styled(title, palette.title()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(series) = props.forecast else {
            let hint = Line::from(Span::styled(NO_FORECAST, palette.muted()));
            frame.render_widget(Paragraph::new(hint), inner);
            return;
        };

        let [tabs_area, cards_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);
        render_tabs(frame, tabs_area, props.mode, palette);

        match props.mode {
            ForecastMode::Daily => {
                let days = select_daily_representatives(
                    series.samples(),
                    DAILY_FORECAST_DAYS,
                    |timestamp| props.zone.date_key(timestamp),
                );
                render_row(frame, cards_area, &days, DAILY_FORECAST_DAYS, &props, day_card);
            }
            ForecastMode::Hourly => {
                let hours = select_first_k(series.samples(), HOURLY_WINDOW);
                let rows: Vec<&[ForecastSample]> = hours.chunks(HOURLY_PER_ROW).collect();
                if rows.is_empty() {
                    return;
                }
                let row_areas = Layout::vertical(vec![
                    Constraint::Ratio(1, rows.len() as u32);
                    rows.len()
                ])
                .split(cards_area);
                for (row, row_area) in rows.iter().zip(row_areas.iter()) {
                    render_row(frame, *row_area, row, HOURLY_PER_ROW, &props, hour_card);
                }
            }
        }
    }
}

fn render_tabs(frame: &mut Frame, area: Rect, mode: ForecastMode, palette: Palette) {
    let selected = match mode {
        ForecastMode::Daily => 0,
        ForecastMode::Hourly => 1,
    };
    let tabs = Tabs::new([ForecastMode::Daily.label(), ForecastMode::Hourly.label()])
        .select(selected)
        .style(palette.muted())
        .highlight_style(Style::default().fg(palette.accent).bold().underlined());
    frame.render_widget(tabs, area);
}

type CardLines = fn(&ForecastSample, &ForecastPanelProps<'_>) -> Vec<Line<'static>>;

/// Lay `samples` out side by side in `slots` equal columns, one bordered card each
fn render_row(
    frame: &mut Frame,
    area: Rect,
    samples: &[ForecastSample],
    slots: usize,
    props: &ForecastPanelProps<'_>,
    card: CardLines,
) {
    if samples.is_empty() || slots == 0 {
        return;
    }
    let areas = Layout::horizontal(vec![Constraint::Ratio(1, slots as u32); slots]).split(area);
    for (sample, card_area) in samples.iter().zip(areas.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(props.palette.border());
        let lines = card(sample, props);
        frame.render_widget(Paragraph::new(lines).centered().block(block), *card_area);
    }
}

fn day_card(sample: &ForecastSample, props: &ForecastPanelProps<'_>) -> Vec<Line<'static>> {
    let palette = props.palette;
    let text = Style::default().fg(palette.text);
    let icon = resolve_icon(&sample.condition_label);

    vec![
        Line::from(Span::styled(
            props.zone.weekday(sample.timestamp),
            text.bold(),
        )),
        Line::from(Span::styled(
            props.zone.day_month(sample.timestamp),
            palette.muted(),
        )),
        Line::from(Span::styled(icon.glyph(), text)),
        Line::from(Span::styled(
            display::temperature_range(sample.min_temperature, sample.max_temperature, props.units),
            Style::default().fg(temperature_color(sample.max_temperature, props.units)),
        )),
        Line::from(Span::styled(sample.condition_description.to_uppercase(), text)),
        Line::from(Span::styled(
            display::wind(sample.wind_speed, props.units),
            palette.muted(),
        )),
        Line::from(Span::styled(
            format!("Humid: {}", display::humidity(sample.humidity_percent)),
            palette.muted(),
        )),
    ]
}

fn hour_card(sample: &ForecastSample, props: &ForecastPanelProps<'_>) -> Vec<Line<'static>> {
    let palette = props.palette;
    let text = Style::default().fg(palette.text);
    let icon = resolve_icon(&sample.condition_label);

    vec![
        Line::from(Span::styled(
            props.zone.hour_minute(sample.timestamp),
            text.bold(),
        )),
        Line::from(Span::styled(icon.glyph(), text)),
        Line::from(Span::styled(
            display::short_temperature_range(sample.min_temperature, sample.max_temperature),
            Style::default().fg(temperature_color(sample.max_temperature, props.units)),
        )),
        Line::from(Span::styled(sample.condition_description.to_uppercase(), text)),
        Line::from(Span::styled(
            display::wind(sample.wind_speed, props.units),
            palette.muted(),
        )),
        Line::from(Span::styled(
            format!("Humid: {}", display::humidity(sample.humidity_percent)),
            palette.muted(),
        )),
    ]
}
