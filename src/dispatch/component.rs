//! Component trait for pure UI elements

use ratatui::{layout::Rect, Frame};

use crate::dispatch::event::EventKind;

/// A pure UI component that renders from props and emits actions.
///
/// Props carry all read-only data needed for rendering; `handle_event`
/// returns actions instead of mutating external state. Internal UI
/// state such as a cursor position may live in `&mut self`, but data
/// mutations must go through the reducer.
pub trait Component<A> {
    /// Read-only data required to render the component.
    type Props<'a>;

    /// Handle an event and return actions to dispatch.
    ///
    /// Returns any `IntoIterator` of actions: `None` for nothing,
    /// `Some(action)` for one, `vec![...]` for several. The default
    /// implementation is for render-only components.
    #[allow(unused_variables)]
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        None::<A>
    }

    /// Render the component to the frame.
    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
