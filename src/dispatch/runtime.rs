//! Event/action/render loop.

use std::io;
use std::time::Duration;

use ratatui::backend::Backend;
use ratatui::layout::Rect;
use ratatui::{Frame, Terminal};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::dispatch::event::{process_raw_event, spawn_event_poller, EventKind, RawEvent};
use crate::dispatch::store::{EffectReducer, EffectStore};
use crate::dispatch::subscriptions::Subscriptions;
use crate::dispatch::tasks::TaskManager;
use crate::dispatch::Action;

/// Configuration for the crossterm event poller.
#[derive(Debug, Clone, Copy)]
pub struct PollerConfig {
    /// Timeout passed to each `crossterm::event::poll` call.
    pub poll_timeout: Duration,
    /// Sleep between poll cycles.
    pub loop_sleep: Duration,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            poll_timeout: Duration::from_millis(10),
            loop_sleep: Duration::from_millis(16),
        }
    }
}

/// Context passed to the effect handler.
pub struct EffectContext<'a, A> {
    action_tx: &'a mpsc::UnboundedSender<A>,
    tasks: &'a mut TaskManager<A>,
}

impl<'a, A: Action> EffectContext<'a, A> {
    /// Send an action directly, bypassing any task.
    pub fn emit(&self, action: A) {
        let _ = self.action_tx.send(action);
    }

    /// Access the task manager to spawn async work.
    pub fn tasks(&mut self) -> &mut TaskManager<A> {
        self.tasks
    }
}

/// Runtime driving the store, the terminal, and async side work.
pub struct EffectRuntime<S, A: Action, E> {
    store: EffectStore<S, A, E>,
    action_tx: mpsc::UnboundedSender<A>,
    action_rx: mpsc::UnboundedReceiver<A>,
    poller_config: PollerConfig,
    should_render: bool,
    tasks: TaskManager<A>,
    subscriptions: Subscriptions<A>,
}

impl<S: 'static, A: Action, E> EffectRuntime<S, A, E> {
    /// Create a runtime from initial state and an effect reducer.
    pub fn new(state: S, reducer: EffectReducer<S, A, E>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let tasks = TaskManager::new(action_tx.clone());
        let subscriptions = Subscriptions::new(action_tx.clone());
        Self {
            store: EffectStore::new(state, reducer),
            action_tx,
            action_rx,
            poller_config: PollerConfig::default(),
            should_render: true,
            tasks,
            subscriptions,
        }
    }

    /// Configure event polling behavior.
    pub fn with_event_poller(mut self, config: PollerConfig) -> Self {
        self.poller_config = config;
        self
    }

    /// Send an action into the runtime queue.
    pub fn enqueue(&self, action: A) {
        let _ = self.action_tx.send(action);
    }

    /// Clone the action sender.
    pub fn action_tx(&self) -> mpsc::UnboundedSender<A> {
        self.action_tx.clone()
    }

    /// Current state.
    pub fn state(&self) -> &S {
        self.store.state()
    }

    /// Access subscriptions (interval timers).
    pub fn subscriptions(&mut self) -> &mut Subscriptions<A> {
        &mut self.subscriptions
    }

    /// Run the event/action loop until an action satisfies `should_quit`.
    pub async fn run<B, FRender, FEvent, FQuit, FEffect, R>(
        &mut self,
        terminal: &mut Terminal<B>,
        mut render: FRender,
        mut map_event: FEvent,
        mut should_quit: FQuit,
        mut handle_effect: FEffect,
    ) -> io::Result<()>
    where
        B: Backend,
        FRender: FnMut(&mut Frame, Rect, &S),
        FEvent: FnMut(&EventKind, &S) -> R,
        R: IntoIterator<Item = A>,
        FQuit: FnMut(&A) -> bool,
        FEffect: FnMut(E, &mut EffectContext<A>),
    {
        let (event_tx, mut event_rx) = mpsc::unbounded_channel::<RawEvent>();
        let cancel_token = CancellationToken::new();
        let _poller = spawn_event_poller(
            event_tx,
            self.poller_config.poll_timeout,
            self.poller_config.loop_sleep,
            cancel_token.clone(),
        );

        loop {
            if self.should_render {
                let state = self.store.state();
                terminal.draw(|frame| render(frame, frame.area(), state))?;
                self.should_render = false;
            }

            tokio::select! {
                Some(raw_event) = event_rx.recv() => {
                    let event = process_raw_event(raw_event);
                    if matches!(event, EventKind::Resize(_, _)) {
                        self.should_render = true;
                    }
                    for action in map_event(&event, self.store.state()) {
                        let _ = self.action_tx.send(action);
                    }
                }

                Some(action) = self.action_rx.recv() => {
                    if should_quit(&action) {
                        break;
                    }

                    debug!(action = action.name(), "dispatching");
                    let result = self.store.dispatch(action);
                    if result.has_effects() {
                        let mut ctx = EffectContext {
                            action_tx: &self.action_tx,
                            tasks: &mut self.tasks,
                        };
                        for effect in result.effects {
                            handle_effect(effect, &mut ctx);
                        }
                    }
                    if result.changed {
                        self.should_render = true;
                    }
                }

                else => {
                    break;
                }
            }
        }

        cancel_token.cancel();
        self.subscriptions.cancel_all();
        self.tasks.cancel_all();

        Ok(())
    }
}
