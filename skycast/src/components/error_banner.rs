use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use skycast_dispatch::Component;

use crate::action::Action;
use crate::theme::Palette;

pub const ERROR_ICON: &str = "⚠ ";

pub struct ErrorBannerProps<'a> {
    pub message: &'a str,
    pub palette: Palette,
}

/// One line of error text; the dashboard only mounts it when an error is set
pub struct ErrorBanner;

impl ErrorBanner {
    pub const HEIGHT: u16 = 1;
}

impl Component<Action> for ErrorBanner {
    type Props<'a> = ErrorBannerProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let style = Style::default().fg(props.palette.error);
        let line = Line::from(vec![
            Span::styled(format!(" {}", ERROR_ICON), style),
            Span::styled(props.message, style.bold()),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}
