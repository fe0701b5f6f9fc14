use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use skycast_dispatch::Component;

use crate::action::Action;
use crate::theme::Palette;

pub struct HelpBar;

pub struct HelpBarProps {
    pub palette: Palette,
    /// Show the Tab hint (only meaningful with a forecast)
    pub show_forecast_toggle: bool,
}

impl Component<Action> for HelpBar {
    type Props<'a> = HelpBarProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let key = props.palette.key_hint();
        let text = props.palette.muted();

        let mut spans = vec![
            Span::styled(" enter", key),
            Span::styled(" search  ", text),
        ];
        if props.show_forecast_toggle {
            spans.push(Span::styled("tab", key));
            spans.push(Span::styled(" daily/hourly  ", text));
        }
        spans.extend([
            Span::styled("ctrl+t", key),
            Span::styled(" theme  ", text),
            Span::styled("esc", key),
            Span::styled(" quit ", text),
        ]);

        frame.render_widget(Paragraph::new(Line::from(spans).centered()), area);
    }
}
