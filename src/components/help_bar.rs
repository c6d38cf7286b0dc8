use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::Component;
use crate::action::Action;

pub struct HelpBar;

pub struct HelpBarProps;

impl Component<Action> for HelpBar {
    type Props<'a> = HelpBarProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, _props: Self::Props<'_>) {
        let help = Line::from(vec![
            Span::styled(" Enter", Style::default().fg(Color::Cyan).bold()),
            Span::styled(" search  ", Style::default().fg(Color::DarkGray)),
            Span::styled("Ctrl+U", Style::default().fg(Color::Cyan).bold()),
            Span::styled(" clear  ", Style::default().fg(Color::DarkGray)),
            Span::styled("Esc", Style::default().fg(Color::Cyan).bold()),
            Span::styled(" quit ", Style::default().fg(Color::DarkGray)),
        ])
        .centered();
        frame.render_widget(Paragraph::new(help), area);
    }
}
