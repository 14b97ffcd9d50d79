use crate::ui::mvi::Reducer;

use super::intent::WidgetIntent;
use super::state::{Phase, WidgetState};

pub struct WidgetReducer;

impl Reducer for WidgetReducer {
    type State = WidgetState;
    type Intent = WidgetIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // A trigger while loading is dropped, whatever its origin.
            WidgetIntent::Trigger if state.is_loading() => state,
            WidgetIntent::Trigger => WidgetState {
                phase: Phase::Loading,
                session: state.session + 1,
                ..state
            },
            WidgetIntent::Resolved { session, quote } => {
                if !state.is_loading() || session != state.session {
                    return state;
                }
                WidgetState {
                    phase: Phase::Rendered(quote),
                    counter: state.counter + 1,
                    ..state
                }
            }
            WidgetIntent::Failed { session, message } => {
                if !state.is_loading() || session != state.session {
                    return state;
                }
                WidgetState {
                    phase: Phase::Failed(message),
                    ..state
                }
            }
        }
    }
}
