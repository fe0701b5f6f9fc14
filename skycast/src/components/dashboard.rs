//! Root component: lays out the screen and routes keys
//!
//! Global keys (quit, theme, forecast mode) are handled here; everything
//! else goes to the search bar.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    widgets::Block,
    Frame,
};
use skycast_dispatch::{Component, EventKind};

use super::{
    CurrentPanel, CurrentPanelProps, ErrorBanner, ErrorBannerProps, ForecastPanel,
    ForecastPanelProps, Header, HeaderProps, HelpBar, HelpBarProps, SearchBar, SearchBarProps,
};
use crate::action::Action;
use crate::state::AppState;
use crate::theme::Palette;
use crate::zone::ViewZone;

pub struct DashboardProps<'a> {
    pub state: &'a AppState,
    /// Zone for forecast dates and clock times
    pub zone: ViewZone,
    pub is_focused: bool,
}

#[derive(Default)]
pub struct Dashboard {
    search: SearchBar,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component<Action> for Dashboard {
    type Props<'a> = DashboardProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        let EventKind::Key(key) = event else {
            return Vec::new();
        };
        if !props.is_focused {
            return Vec::new();
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => vec![Action::Quit],
            KeyCode::Char('c') if ctrl => vec![Action::Quit],
            KeyCode::Char('t') if ctrl => vec![Action::UiToggleTheme],
            KeyCode::Tab if props.state.forecast.is_some() => vec![Action::UiToggleForecastMode],
            _ => {
                let search_props = SearchBarProps {
                    value: &props.state.search_input,
                    is_focused: true,
                    palette: Palette::for_theme(props.state.theme),
                };
                self.search
                    .handle_event(event, search_props)
                    .into_iter()
                    .collect()
            }
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;
        let palette = Palette::for_theme(state.theme);

        frame.render_widget(Block::default().style(palette.base()), area);

        let banner_height = if state.error.is_some() {
            ErrorBanner::HEIGHT
        } else {
            0
        };
        let [header_area, search_area, banner_area, current_area, forecast_area, help_area] =
            Layout::vertical([
                Constraint::Length(Header::HEIGHT),
                Constraint::Length(SearchBar::HEIGHT),
                Constraint::Length(banner_height),
                Constraint::Length(CurrentPanel::HEIGHT),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .areas(area);

        Header.render(
            frame,
            header_area,
            HeaderProps {
                theme: state.theme,
                is_loading: state.is_loading(),
                tick_count: state.tick_count,
                palette,
            },
        );

        self.search.render(
            frame,
            search_area,
            SearchBarProps {
                value: &state.search_input,
                is_focused: props.is_focused,
                palette,
            },
        );

        if let Some(message) = state.error.as_deref() {
            ErrorBanner.render(frame, banner_area, ErrorBannerProps { message, palette });
        }

        CurrentPanel.render(
            frame,
            current_area,
            CurrentPanelProps {
                current: state.current.as_ref(),
                units: state.units,
                is_loading: state.is_loading(),
                tick_count: state.tick_count,
                palette,
            },
        );

        ForecastPanel.render(
            frame,
            forecast_area,
            ForecastPanelProps {
                forecast: state.forecast.as_ref(),
                mode: state.forecast_mode,
                units: state.units,
                zone: props.zone,
                palette,
            },
        );

        HelpBar.render(
            frame,
            help_area,
            HelpBarProps {
                palette,
                show_forecast_toggle: state.forecast.is_some(),
            },
        );
    }
}
