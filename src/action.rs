//! Actions following the intent / `Did*` result convention
//!
//! Intents (`QuerySubmit`) trigger async work; result actions
//! (`WeatherDidLoad`, `WeatherDidError`) carry the outcome back together
//! with the sequence number of the request that produced it.

use crate::dispatch;
use crate::state::WeatherSnapshot;

/// Application actions.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// The search bar input changed.
    QueryChange(String),

    /// Intent: look up the current search term.
    QuerySubmit,

    /// Result: lookup succeeded for the request with this sequence number.
    WeatherDidLoad { seq: u64, snapshot: WeatherSnapshot },

    /// Result: lookup failed for the request with this sequence number.
    WeatherDidError { seq: u64, message: String },

    /// Periodic tick for the loading animation.
    Tick,

    /// Exit the application.
    Quit,
}

impl dispatch::Action for Action {
    fn name(&self) -> &'static str {
        match self {
            Action::QueryChange(_) => "QueryChange",
            Action::QuerySubmit => "QuerySubmit",
            Action::WeatherDidLoad { .. } => "WeatherDidLoad",
            Action::WeatherDidError { .. } => "WeatherDidError",
            Action::Tick => "Tick",
            Action::Quit => "Quit",
        }
    }
}
