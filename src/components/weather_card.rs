//! Result card: location, condition art, temperatures, metric grid.

use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{Component, LOCATION_ICON};
use crate::action::Action;
use crate::icons;
use crate::state::WeatherSnapshot;

pub struct WeatherCard;

pub struct WeatherCardProps<'a> {
    pub snapshot: &'a WeatherSnapshot,
}

impl Component<Action> for WeatherCard {
    type Props<'a> = WeatherCardProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let snapshot = props.snapshot;

        let art = icons::condition_art(&snapshot.condition.category);
        let art_height = art.lines.len() as u16;

        let chunks = Layout::vertical([
            Constraint::Length(1), // location
            Constraint::Length(1),
            Constraint::Length(art_height),
            Constraint::Length(1), // current temperature
            Constraint::Length(1), // description
            Constraint::Length(1), // feels like
            Constraint::Length(1),
            Constraint::Length(2), // metric row
            Constraint::Length(1),
            Constraint::Length(2), // metric row
        ])
        .flex(Flex::Center)
        .split(area);

        let location = Line::from(vec![
            Span::raw(LOCATION_ICON),
            Span::styled(
                snapshot.location_line(),
                Style::default().fg(Color::White).bold(),
            ),
        ])
        .centered();
        frame.render_widget(Paragraph::new(location), chunks[0]);

        frame.render_widget(
            Paragraph::new(art).alignment(Alignment::Center),
            chunks[2],
        );

        let temp = Line::from(Span::styled(
            snapshot.current_temp(),
            Style::default()
                .fg(temp_to_color(snapshot.temperature.current))
                .bold(),
        ))
        .centered();
        frame.render_widget(Paragraph::new(temp), chunks[3]);

        let description = Line::from(Span::styled(
            snapshot.condition.description.clone(),
            Style::default().fg(Color::Gray),
        ))
        .centered();
        frame.render_widget(Paragraph::new(description), chunks[4]);

        let feels_like = Line::from(format!("Feels like: {}", snapshot.feels_like_temp()))
            .centered();
        frame.render_widget(Paragraph::new(feels_like), chunks[5]);

        let top = Layout::horizontal([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(chunks[7]);
        render_metric(frame, top[0], "Min/Max", snapshot.min_max());
        render_metric(frame, top[1], "Humidity", snapshot.humidity());
        render_metric(frame, top[2], "Wind", snapshot.wind_speed());

        let bottom = Layout::horizontal([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(chunks[9]);
        render_metric(frame, bottom[0], "Pressure", snapshot.pressure());
        render_metric(frame, bottom[1], "Visibility", snapshot.visibility_km());
    }
}

fn render_metric(frame: &mut Frame, area: Rect, label: &'static str, value: String) {
    let lines = vec![
        Line::from(Span::styled(
            label,
            Style::default().fg(Color::DarkGray).bold(),
        ))
        .centered(),
        Line::from(value).centered(),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// Temperature-based color for the headline reading.
fn temp_to_color(celsius: f64) -> Color {
    match celsius as i32 {
        ..=-10 => Color::Rgb(150, 200, 255),
        -9..=0 => Color::Rgb(100, 180, 255),
        1..=10 => Color::Rgb(100, 220, 200),
        11..=20 => Color::Rgb(150, 230, 150),
        21..=30 => Color::Rgb(255, 220, 100),
        31..=40 => Color::Rgb(255, 150, 80),
        _ => Color::Rgb(255, 100, 100),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::testing::RenderHarness;
    use crate::state::{Condition, Temperature, Wind};

    fn sample() -> WeatherSnapshot {
        WeatherSnapshot {
            location_name: "London".into(),
            country_code: "GB".into(),
            condition: Condition {
                category: "Clear".into(),
                description: "clear sky".into(),
            },
            temperature: Temperature {
                current: 20.0,
                feels_like: 19.0,
                min: 18.0,
                max: 22.0,
            },
            humidity_percent: 65,
            pressure_hpa: 1015,
            wind: Wind {
                speed_mps: 4.12,
                direction_deg: 300,
            },
            visibility_meters: 10000,
        }
    }

    #[test]
    fn renders_location_and_headline() {
        let mut render = RenderHarness::new(70, 20);
        let mut card = WeatherCard;
        let snapshot = sample();

        let output = render.render_to_string_plain(|frame| {
            card.render(frame, frame.area(), WeatherCardProps {
                snapshot: &snapshot,
            });
        });

        assert!(output.contains("London, GB"));
        assert!(output.contains("20°C"));
        assert!(output.contains("clear sky"));
        assert!(output.contains("Feels like: 19°C"));
    }

    #[test]
    fn renders_metric_grid() {
        let mut render = RenderHarness::new(70, 20);
        let mut card = WeatherCard;
        let snapshot = sample();

        let output = render.render_to_string_plain(|frame| {
            card.render(frame, frame.area(), WeatherCardProps {
                snapshot: &snapshot,
            });
        });

        assert!(output.contains("18°/22°"));
        assert!(output.contains("65%"));
        assert!(output.contains("4.12 m/s"));
        assert!(output.contains("1015 hPa"));
        assert!(output.contains("10.0 km"));
    }

    #[test]
    fn description_case_is_preserved() {
        let mut render = RenderHarness::new(70, 20);
        let mut card = WeatherCard;
        let mut snapshot = sample();
        snapshot.condition.description = "Heavy Intensity Rain".into();
        snapshot.condition.category = "Rain".into();

        let output = render.render_to_string_plain(|frame| {
            card.render(frame, frame.area(), WeatherCardProps {
                snapshot: &snapshot,
            });
        });

        assert!(output.contains("Heavy Intensity Rain"));
    }
}
