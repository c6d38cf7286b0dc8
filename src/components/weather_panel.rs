//! Top-level view: search bar plus one of spinner, error banner,
//! weather card, or idle hint.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{
    Component, HelpBar, HelpBarProps, SearchBar, SearchBarProps, WeatherCard, WeatherCardProps,
};
use crate::action::Action;
use crate::dispatch::EventKind;
use crate::state::{SearchState, WeatherSnapshot};

pub const LOCATION_ICON: &str = "📍 ";
pub const ERROR_ICON: &str = "⚠";
pub const SPINNERS: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Props for WeatherPanel - read-only view of state
pub struct WeatherPanelProps<'a> {
    pub state: &'a SearchState,
}

/// The whole-screen weather lookup component.
pub struct WeatherPanel {
    search: SearchBar,
}

/// What the body area shows, in priority order: a pending request hides
/// everything else, then the error banner, then the result card.
enum BodyView<'a> {
    Loading,
    Error(&'a str),
    Ready(&'a WeatherSnapshot),
    Idle,
}

impl<'a> BodyView<'a> {
    fn from_state(state: &'a SearchState) -> Self {
        if state.loading {
            BodyView::Loading
        } else if let Some(error) = state.error.as_deref() {
            BodyView::Error(error)
        } else if let Some(snapshot) = state.snapshot.as_ref() {
            BodyView::Ready(snapshot)
        } else {
            BodyView::Idle
        }
    }
}

impl WeatherPanel {
    pub fn new() -> Self {
        Self {
            search: SearchBar::new(),
        }
    }

    /// Map a terminal event to actions, for the runtime loop.
    pub fn map_event(&mut self, event: &EventKind, state: &SearchState) -> Vec<Action> {
        self.handle_event(
            event,
            WeatherPanelProps { state },
        )
        .into_iter()
        .collect()
    }
}

impl Default for WeatherPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Component<Action> for WeatherPanel {
    type Props<'a> = WeatherPanelProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if let EventKind::Key(key) = event {
            let ctrl_c = key.modifiers.contains(KeyModifiers::CONTROL)
                && key.code == KeyCode::Char('c');
            if key.code == KeyCode::Esc || ctrl_c {
                return vec![Action::Quit];
            }
        }

        let search_props = SearchBarProps {
            value: &props.state.search_term,
            loading: props.state.loading,
            is_focused: true,
        };
        self.search
            .handle_event(event, search_props)
            .into_iter()
            .collect::<Vec<_>>()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;

        let loading_indicator = if state.loading {
            let spinner = SPINNERS[(state.tick_count as usize / 2) % SPINNERS.len()];
            format!(" {} ", spinner)
        } else {
            String::new()
        };

        let outer_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(80, 80, 100)))
            .title(format!(" ☁ Weather{}", loading_indicator))
            .title_style(Style::default().fg(Color::Cyan).bold())
            .title_alignment(Alignment::Center);

        frame.render_widget(outer_block.clone(), area);
        let inner = outer_block.inner(area);

        let chunks = Layout::vertical([
            Constraint::Length(SearchBar::HEIGHT),
            Constraint::Min(1),    // body
            Constraint::Length(1), // help bar
        ])
        .split(inner);

        let search_props = SearchBarProps {
            value: &state.search_term,
            loading: state.loading,
            is_focused: true,
        };
        self.search.render(frame, chunks[0], search_props);

        match BodyView::from_state(state) {
            BodyView::Loading => render_loading(frame, chunks[1], state.tick_count),
            BodyView::Error(message) => render_error(frame, chunks[1], message),
            BodyView::Ready(snapshot) => {
                let mut card = WeatherCard;
                card.render(frame, chunks[1], WeatherCardProps { snapshot });
            }
            BodyView::Idle => render_idle(frame, chunks[1]),
        }

        let mut help = HelpBar;
        help.render(frame, chunks[2], HelpBarProps);
    }
}

fn render_loading(frame: &mut Frame, area: Rect, tick_count: u32) {
    let spinner = SPINNERS[(tick_count as usize / 2) % SPINNERS.len()];
    let dots = ".".repeat((tick_count as usize / 3) % 4);

    let line = Line::from(vec![
        Span::styled(spinner, Style::default().fg(Color::Cyan)),
        Span::styled(
            format!(" Fetching weather{:<3}", dots),
            Style::default().fg(Color::Gray),
        ),
    ])
    .centered();

    let chunks = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .split(area);
    frame.render_widget(Paragraph::new(line), chunks[0]);
}

fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let lines = vec![
        Line::from(ERROR_ICON).centered(),
        Line::from(Span::styled(
            "Error",
            Style::default().fg(Color::Red).bold(),
        ))
        .centered(),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Rgb(200, 100, 100)),
        ))
        .centered(),
        Line::from("").centered(),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("Enter", Style::default().fg(Color::Cyan).bold()),
            Span::styled(" to retry", Style::default().fg(Color::DarkGray)),
        ])
        .centered(),
    ];

    let chunks = Layout::vertical([Constraint::Length(lines.len() as u16)])
        .flex(Flex::Center)
        .split(area);
    frame.render_widget(Paragraph::new(lines), chunks[0]);
}

fn render_idle(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled("Type a city and press ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Cyan).bold()),
    ])
    .centered();

    let chunks = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .split(area);
    frame.render_widget(Paragraph::new(line), chunks[0]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::testing::*;

    #[test]
    fn esc_quits() {
        let mut panel = WeatherPanel::new();
        let state = SearchState::default();

        let actions = panel.map_event(&EventKind::Key(key("esc")), &state);
        actions.assert_first(Action::Quit);
    }

    #[test]
    fn ctrl_c_quits() {
        let mut panel = WeatherPanel::new();
        let state = SearchState::default();

        let actions = panel.map_event(&EventKind::Key(key("ctrl+c")), &state);
        actions.assert_first(Action::Quit);
    }

    #[test]
    fn printable_keys_go_to_search_bar() {
        let mut panel = WeatherPanel::new();
        let state = SearchState::new("Pari");

        let actions = panel.map_event(&EventKind::Key(key("s")), &state);
        actions.assert_first(Action::QueryChange("Paris".into()));
    }

    #[test]
    fn enter_submits_from_anywhere() {
        let mut panel = WeatherPanel::new();
        let state = SearchState::default();

        let actions = panel.map_event(&EventKind::Key(key("enter")), &state);
        actions.assert_first(Action::QuerySubmit);
    }
}
