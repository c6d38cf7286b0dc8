//! Weather TUI entry point.
//!
//! Flow: keyboard events map to actions, the reducer updates state and
//! declares fetch effects, effects spawn API tasks whose results come
//! back as actions, and the panel re-renders on every state change. One
//! lookup is dispatched for the configured city before any user input.

use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use weather_tui::action::Action;
use weather_tui::api::WeatherClient;
use weather_tui::components::{WeatherPanel, WeatherPanelProps};
use weather_tui::config::Config;
use weather_tui::dispatch::{Component, EffectContext, EffectRuntime};
use weather_tui::effect::Effect;
use weather_tui::reducer::reducer;
use weather_tui::state::{SearchState, LOADING_ANIM_TICK_MS};

/// Terminal weather lookup
#[derive(Parser, Debug)]
#[command(name = "weather-tui")]
#[command(about = "Look up current weather for a city")]
struct Args {
    /// City fetched on startup
    #[arg(long, short, default_value = "London")]
    city: String,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "10")]
    timeout: u64,

    /// Append tracing output to this file (the TUI owns the terminal)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_tracing(path: &Path) -> io::Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_tracing(path)?;
    }

    // Resolve configuration before entering TUI mode so errors print
    // to a usable terminal.
    let config = match Config::from_env(&args.city, args.timeout) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    let client = match WeatherClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, config, client).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: Config,
    client: WeatherClient,
) -> io::Result<()> {
    let mut runtime = EffectRuntime::new(SearchState::new(&config.default_city), reducer);

    // Tick timer for the loading spinner
    runtime.subscriptions().interval(
        "tick",
        Duration::from_millis(LOADING_ANIM_TICK_MS),
        || Action::Tick,
    );

    // Fetch the configured city before any user input
    runtime.enqueue(Action::QuerySubmit);

    let ui = RefCell::new(WeatherPanel::new());

    runtime
        .run(
            terminal,
            |frame, area, state| {
                ui.borrow_mut()
                    .render(frame, area, WeatherPanelProps { state });
            },
            |event, state| ui.borrow_mut().map_event(event, state),
            |action| matches!(action, Action::Quit),
            move |effect, ctx: &mut EffectContext<Action>| handle_effect(effect, ctx, &client),
        )
        .await
}

/// Spawn one task per fetch. Keys are unique per request, so an
/// in-flight lookup is never cancelled by a newer one; the reducer
/// discards whichever response is stale.
fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>, client: &WeatherClient) {
    match effect {
        Effect::FetchWeather { city, seq } => {
            let client = client.clone();
            ctx.tasks().spawn(format!("weather-{seq}"), async move {
                match client.current_weather(&city).await {
                    Ok(snapshot) => Action::WeatherDidLoad { seq, snapshot },
                    Err(e) => Action::WeatherDidError {
                        seq,
                        message: e.to_string(),
                    },
                }
            });
        }
    }
}
