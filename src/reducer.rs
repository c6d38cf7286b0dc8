//! Reducer - pure function: (state, action) -> (changed, effects)
//!
//! All state mutations happen here. Async work is declared as effects
//! and executed by the main loop, so overlapping lookups are possible;
//! the sequence number check makes the last *submitted* query win
//! regardless of response arrival order.

use crate::action::Action;
use crate::dispatch::DispatchResult;
use crate::effect::Effect;
use crate::state::SearchState;

/// Handle all state transitions.
pub fn reducer(state: &mut SearchState, action: Action) -> DispatchResult<Effect> {
    match action {
        Action::QueryChange(text) => {
            state.search_term = text;
            DispatchResult::changed()
        }

        Action::QuerySubmit => {
            let city = state.search_term.trim();
            if city.is_empty() {
                // Whitespace-only input: no request, no state change.
                return DispatchResult::unchanged();
            }
            let city = city.to_string();
            let seq = state.begin_request();
            DispatchResult::changed_with(Effect::FetchWeather { city, seq })
        }

        Action::WeatherDidLoad { seq, snapshot } => {
            if !state.is_latest(seq) {
                // A newer request was issued after this one; drop it.
                return DispatchResult::unchanged();
            }
            state.settle_ok(snapshot);
            DispatchResult::changed()
        }

        Action::WeatherDidError { seq, message } => {
            if !state.is_latest(seq) {
                return DispatchResult::unchanged();
            }
            state.settle_err(message);
            DispatchResult::changed()
        }

        Action::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            if state.loading {
                // Re-render only while the spinner is visible.
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => {
            // Quit is intercepted by the main loop before dispatch.
            DispatchResult::unchanged()
        }
    }
}
