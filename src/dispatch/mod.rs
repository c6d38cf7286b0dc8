//! Minimal action/store/runtime layer for the weather UI.
//!
//! The flow is unidirectional: terminal events are mapped to actions,
//! actions run through a pure reducer that mutates state and declares
//! effects, effects are executed by the main loop (usually by spawning
//! an async task), and completed tasks feed result actions back through
//! the same channel.

pub mod action;
pub mod component;
pub mod event;
pub mod runtime;
pub mod store;
pub mod subscriptions;
pub mod tasks;
pub mod testing;

pub use action::Action;
pub use component::Component;
pub use event::{process_raw_event, spawn_event_poller, EventKind, RawEvent};
pub use runtime::{EffectContext, EffectRuntime, PollerConfig};
pub use store::{DispatchResult, EffectReducer, EffectStore};
pub use subscriptions::{SubKey, Subscriptions};
pub use tasks::{TaskKey, TaskManager};
