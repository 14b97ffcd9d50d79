//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Transforms state based on intents.
///
/// The reducer is the only place where state transitions happen and must
/// stay free of side effects: `(State, Intent) -> State`. Rendering is done
/// by the caller from the difference between the old and new state.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
