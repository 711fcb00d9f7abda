use super::intent::Intent;
use super::state::UiState;

/// Pure state transition: `(State, Intent) -> State`.
///
/// Reducers never perform I/O. An intent that does not apply to the current
/// state returns the state unchanged.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
