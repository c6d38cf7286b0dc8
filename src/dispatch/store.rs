//! Effect-aware state store.
//!
//! Reducers are pure functions `fn(&mut S, A) -> DispatchResult<E>`:
//! they mutate state, report whether a re-render is needed, and declare
//! side effects as data. The effects themselves are executed by the
//! main loop, never by the reducer.

use std::marker::PhantomData;

use crate::dispatch::Action;

/// Result of dispatching an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult<E> {
    /// Whether the state was modified by this action.
    pub changed: bool,
    /// Effects to be processed after dispatch.
    pub effects: Vec<E>,
}

impl<E> Default for DispatchResult<E> {
    fn default() -> Self {
        Self::unchanged()
    }
}

impl<E> DispatchResult<E> {
    /// No state change, no effects.
    #[inline]
    pub fn unchanged() -> Self {
        Self {
            changed: false,
            effects: vec![],
        }
    }

    /// State changed, no effects.
    #[inline]
    pub fn changed() -> Self {
        Self {
            changed: true,
            effects: vec![],
        }
    }

    /// State changed with a single effect.
    #[inline]
    pub fn changed_with(effect: E) -> Self {
        Self {
            changed: true,
            effects: vec![effect],
        }
    }

    /// A single effect without a state change.
    #[inline]
    pub fn effect(effect: E) -> Self {
        Self {
            changed: false,
            effects: vec![effect],
        }
    }

    /// Returns true if there are effects to process.
    #[inline]
    pub fn has_effects(&self) -> bool {
        !self.effects.is_empty()
    }
}

/// A reducer that can emit effects alongside state changes.
pub type EffectReducer<S, A, E> = fn(&mut S, A) -> DispatchResult<E>;

/// Store holding the application state behind an effect reducer.
pub struct EffectStore<S, A, E> {
    state: S,
    reducer: EffectReducer<S, A, E>,
    _marker: PhantomData<(A, E)>,
}

impl<S, A, E> EffectStore<S, A, E>
where
    A: Action,
{
    /// Create a store with the given initial state and reducer.
    pub fn new(state: S, reducer: EffectReducer<S, A, E>) -> Self {
        Self {
            state,
            reducer,
            _marker: PhantomData,
        }
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Dispatch an action through the reducer.
    #[inline]
    pub fn dispatch(&mut self, action: A) -> DispatchResult<E> {
        (self.reducer)(&mut self.state, action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    enum TestAction {
        Bump,
        Request,
        NoOp,
    }

    impl Action for TestAction {
        fn name(&self) -> &'static str {
            match self {
                TestAction::Bump => "Bump",
                TestAction::Request => "Request",
                TestAction::NoOp => "NoOp",
            }
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum TestEffect {
        Fetch,
    }

    #[derive(Default)]
    struct TestState {
        count: i32,
    }

    fn test_reducer(state: &mut TestState, action: TestAction) -> DispatchResult<TestEffect> {
        match action {
            TestAction::Bump => {
                state.count += 1;
                DispatchResult::changed()
            }
            TestAction::Request => DispatchResult::changed_with(TestEffect::Fetch),
            TestAction::NoOp => DispatchResult::unchanged(),
        }
    }

    #[test]
    fn dispatch_reports_change() {
        let mut store = EffectStore::new(TestState::default(), test_reducer);

        let result = store.dispatch(TestAction::Bump);
        assert!(result.changed);
        assert!(!result.has_effects());
        assert_eq!(store.state().count, 1);
    }

    #[test]
    fn dispatch_carries_effects() {
        let mut store = EffectStore::new(TestState::default(), test_reducer);

        let result = store.dispatch(TestAction::Request);
        assert!(result.changed);
        assert_eq!(result.effects, vec![TestEffect::Fetch]);
    }

    #[test]
    fn noop_leaves_state_untouched() {
        let mut store = EffectStore::new(TestState::default(), test_reducer);

        let result = store.dispatch(TestAction::NoOp);
        assert!(!result.changed);
        assert!(!result.has_effects());
        assert_eq!(store.state().count, 0);
    }
}
