//! Condition art for the weather card.
//!
//! A fixed lookup from the provider's condition category to a small
//! piece of terminal art. Unrecognized categories fall back to the
//! default art, mirroring the closed-ish category set the provider
//! reports: Clear, Clouds, Rain, Drizzle, Thunderstorm, Snow.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};

const CLEAR: &str = r"    \   /
     .-.
  - (   ) -
     `-'
    /   \";

const CLOUDS: &str = r"      .--.
   .-(    ).
  (___.__)__)";

const RAIN: &str = r"      .--.
   .-(    ).
  (___.__)__)
   / / / /
  / / / /";

const DRIZZLE: &str = r"      .--.
   .-(    ).
  (___.__)__)
   . . . .
  . . . .";

const THUNDERSTORM: &str = r"      .--.
   .-(    ).
  (___.__)__)
    /_  /_
     /   /";

const SNOW: &str = r"      .--.
   .-(    ).
  (___.__)__)
   *  *  *
  *  *  *";

/// Select art and color for a condition category.
pub fn condition_art(category: &str) -> Text<'static> {
    match category {
        "Clear" => art(CLEAR, Color::Yellow),
        "Clouds" => art(CLOUDS, Color::Gray),
        "Rain" => art(RAIN, Color::Blue),
        "Drizzle" => art(DRIZZLE, Color::LightBlue),
        "Thunderstorm" => art(THUNDERSTORM, Color::Magenta),
        "Snow" => art(SNOW, Color::White),
        _ => art(CLEAR, Color::DarkGray),
    }
}

fn art(raw: &'static str, color: Color) -> Text<'static> {
    let lines = raw
        .lines()
        .map(|line| Line::from(Span::styled(line, Style::default().fg(color))))
        .collect::<Vec<_>>();
    Text::from(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &Text<'_>) -> String {
        text.lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn known_categories_have_distinct_art() {
        let rain = plain(&condition_art("Rain"));
        let snow = plain(&condition_art("Snow"));
        let clouds = plain(&condition_art("Clouds"));

        assert_ne!(rain, snow);
        assert_ne!(rain, clouds);
        assert!(rain.contains('/'));
        assert!(snow.contains('*'));
    }

    #[test]
    fn unknown_category_falls_back_to_default() {
        let fallback = plain(&condition_art("Tornado"));
        assert_eq!(fallback, plain(&condition_art("Mist")));
        assert_eq!(fallback, CLEAR);
    }
}
