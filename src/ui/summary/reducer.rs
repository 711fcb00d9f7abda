//! Reducer for the summarization request.

use crate::client::VALIDATION_MESSAGE;
use crate::ui::mvi::Reducer;

use super::intent::{Resolution, SummaryIntent};
use super::state::{Failure, FailureKind, SummaryState};

/// Reducer for summarization state transitions.
pub struct SummaryReducer;

impl Reducer for SummaryReducer {
    type State = SummaryState;
    type Intent = SummaryIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SummaryIntent::Submit { text, request_id } => match state {
                // One request at a time; a second submit while pending is ignored.
                pending @ SummaryState::Pending { .. } => pending,
                _ if text.trim().is_empty() => SummaryState::Failed(Failure {
                    kind: FailureKind::Validation,
                    message: VALIDATION_MESSAGE.to_string(),
                }),
                // Replaces any previous error or result.
                _ => SummaryState::Pending {
                    request_id,
                    animation_tick: 0,
                },
            },

            SummaryIntent::Resolve(Resolution {
                request_id,
                outcome,
            }) => match state {
                SummaryState::Pending {
                    request_id: current,
                    ..
                } if current == request_id => match outcome {
                    Ok(result) => SummaryState::Succeeded(result),
                    Err(failure) => SummaryState::Failed(failure),
                },
                // Stale: the request is not the one in flight.
                other => other,
            },

            SummaryIntent::AnimationTick => match state {
                SummaryState::Pending {
                    request_id,
                    animation_tick,
                } => SummaryState::Pending {
                    request_id,
                    animation_tick: animation_tick.wrapping_add(1),
                },
                other => other,
            },
        }
    }
}
