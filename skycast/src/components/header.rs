use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use skycast_dispatch::Component;

use crate::action::Action;
use crate::state::Theme;
use crate::theme::Palette;

pub const TITLE: &str = "☁ skycast";
pub const SPINNERS: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub struct HeaderProps {
    pub theme: Theme,
    pub is_loading: bool,
    pub tick_count: u32,
    pub palette: Palette,
}

pub struct Header;

impl Header {
    pub const HEIGHT: u16 = 1;
}

impl Component<Action> for Header {
    type Props<'a> = HeaderProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let palette = props.palette;
        let [left, right] =
            Layout::horizontal([Constraint::Min(1), Constraint::Length(14)]).areas(area);

        let mut spans = vec![Span::styled(format!(" {}", TITLE), palette.title())];
        if props.is_loading {
            let spinner = SPINNERS[props.tick_count as usize % SPINNERS.len()];
            spans.push(Span::styled(format!(" {}", spinner), palette.title()));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), left);

        let theme = Line::from(Span::styled(
            format!("{} mode ", props.theme.name()),
            palette.muted(),
        ))
        .right_aligned();
        frame.render_widget(Paragraph::new(theme), right);
    }
}
