//! Terminal event types and the crossterm poller task.

use std::time::Duration;

use crossterm::event::{self, KeyEvent, KeyEventKind, MouseEvent};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Raw event from crossterm before processing.
#[derive(Debug)]
pub enum RawEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
}

/// Event payload delivered to components.
#[derive(Debug, Clone)]
pub enum EventKind {
    /// Keyboard event (key press only; repeats and releases are filtered).
    Key(KeyEvent),
    /// Mouse event.
    Mouse(MouseEvent),
    /// Terminal resize.
    Resize(u16, u16),
    /// Periodic tick.
    Tick,
}

/// Convert a raw crossterm event into the component-facing kind.
pub fn process_raw_event(raw: RawEvent) -> EventKind {
    match raw {
        RawEvent::Key(key) => EventKind::Key(key),
        RawEvent::Mouse(mouse) => EventKind::Mouse(mouse),
        RawEvent::Resize(width, height) => EventKind::Resize(width, height),
    }
}

/// Spawn a blocking poller that forwards crossterm events to a channel.
///
/// The poller exits when the cancellation token fires or the receiving
/// side is dropped.
pub fn spawn_event_poller(
    event_tx: mpsc::UnboundedSender<RawEvent>,
    poll_timeout: Duration,
    loop_sleep: Duration,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        while !cancel.is_cancelled() {
            if event::poll(poll_timeout).unwrap_or(false) {
                let raw = match event::read() {
                    Ok(event::Event::Key(key)) if key.kind == KeyEventKind::Press => {
                        Some(RawEvent::Key(key))
                    }
                    Ok(event::Event::Mouse(mouse)) => Some(RawEvent::Mouse(mouse)),
                    Ok(event::Event::Resize(width, height)) => Some(RawEvent::Resize(width, height)),
                    _ => None,
                };
                if let Some(raw) = raw {
                    if event_tx.send(raw).is_err() {
                        break;
                    }
                }
            }
            std::thread::sleep(loop_sleep);
        }
    })
}
