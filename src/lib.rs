//! Terminal weather lookup.
//!
//! One component tree over one state holder: the search bar edits the
//! query, submission dispatches a fetch effect, and the panel renders
//! whichever of loading / error / result the state holds. See
//! [`reducer::reducer`] for the full transition table and [`api`] for
//! the provider client.

pub mod action;
pub mod api;
pub mod components;
pub mod config;
pub mod dispatch;
pub mod effect;
pub mod icons;
pub mod reducer;
pub mod state;
