//! Render tests for the full panel, driven through real state
//! transitions so the branch priority matches what a user sees.

use weather_tui::components::{Component, WeatherPanel, WeatherPanelProps};
use weather_tui::dispatch::testing::RenderHarness;
use weather_tui::state::{Condition, SearchState, Temperature, WeatherSnapshot, Wind};

fn sample_snapshot() -> WeatherSnapshot {
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

fn render(state: &SearchState) -> String {
    let mut render = RenderHarness::new(70, 24);
    let mut panel = WeatherPanel::new();
    render.render_to_string_plain(|frame| {
        panel.render(frame, frame.area(), WeatherPanelProps { state });
    })
}

#[test]
fn pending_request_shows_form_and_progress() {
    let mut state = SearchState::default();
    state.begin_request();

    let output = render(&state);

    assert!(output.contains("Enter city name"), "form stays visible");
    assert!(output.contains("Searching..."), "submit label flips");
    assert!(output.contains("Fetching weather"), "progress indicator");
}

#[test]
fn success_renders_weather_card() {
    let mut state = SearchState::default();
    state.begin_request();
    state.settle_ok(sample_snapshot());

    let output = render(&state);

    assert!(output.contains("London, GB"));
    assert!(output.contains("20°C"));
    assert!(output.contains("clear sky"), "description kept verbatim");
    assert!(output.contains("Feels like: 19°C"));
    assert!(output.contains("Get Weather"), "submit re-enabled");
}

#[test]
fn success_renders_metric_grid() {
    let mut state = SearchState::default();
    state.begin_request();
    state.settle_ok(sample_snapshot());

    let output = render(&state);

    assert!(output.contains("18°/22°"));
    assert!(output.contains("65%"));
    assert!(output.contains("4.12 m/s"));
    assert!(output.contains("1015 hPa"));
    assert!(output.contains("10.0 km"), "visibility meters -> km");
}

#[test]
fn not_found_shows_error_banner_and_no_card() {
    let mut state = SearchState::default();
    state.begin_request();
    state.settle_err("City not found. Please try another location.".into());

    let output = render(&state);

    assert!(output.contains("City not found. Please try another location."));
    assert!(!output.contains("°C"), "no temperature rendered");
    assert!(!output.contains("Feels like"));
}

#[test]
fn loading_hides_previous_card() {
    let mut state = SearchState::default();
    state.begin_request();
    state.settle_ok(sample_snapshot());

    // A new submission starts while the old snapshot is still held.
    state.begin_request();

    let output = render(&state);

    assert!(output.contains("Fetching weather"));
    assert!(!output.contains("London, GB"), "stale card hidden");
    assert!(!output.contains("20°C"));
}

#[test]
fn loading_hides_previous_error() {
    let mut state = SearchState::default();
    state.begin_request();
    state.settle_err("City not found. Please try another location.".into());
    state.begin_request();

    let output = render(&state);

    assert!(!output.contains("City not found"), "stale error hidden");
    assert!(output.contains("Fetching weather"));
}

#[test]
fn idle_state_renders_only_the_form() {
    let state = SearchState::default();

    let output = render(&state);

    assert!(output.contains("Enter city name"));
    assert!(output.contains("Type a city and press"));
    assert!(!output.contains("Fetching weather"));
    assert!(!output.contains("°C"));
}
