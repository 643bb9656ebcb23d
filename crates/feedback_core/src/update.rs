use feedback_logging::{feedback_debug, feedback_trace};

use crate::{validate, Effect, FormState, Msg, SubmitPhase};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: FormState, msg: Msg) -> (FormState, Vec<Effect>) {
    let effects = match msg {
        Msg::FieldEdited { field, value } => {
            if state.set_field(field, value) && state.is_confirmed() {
                // An edit after a confirmed submit starts a fresh cycle.
                state.reset_phase();
            }
            Vec::new()
        }
        Msg::SubmitClicked if state.is_confirmed() => {
            // Fields are unchanged since the confirmation; keep it on screen.
            feedback_debug!("submit ignored: already confirmed");
            Vec::new()
        }
        Msg::SubmitClicked => {
            let mut effects = Vec::new();
            if let Some(previous) = state.pending_submission() {
                effects.push(Effect::CancelConfirmation {
                    submission: previous,
                });
            }
            match validate(state.name(), state.message()) {
                Ok(()) => {
                    let submission = state.begin_submission();
                    feedback_debug!("submit accepted submission={}", submission);
                    effects.push(Effect::ScheduleConfirmation { submission });
                }
                Err(reason) => {
                    feedback_debug!("submit ignored: {}", reason);
                    if matches!(state.phase(), SubmitPhase::Pending { .. }) {
                        state.reset_phase();
                    }
                }
            }
            effects
        }
        Msg::ConfirmationElapsed { submission } => {
            if !state.confirm(submission) {
                feedback_trace!("stale confirmation submission={} ignored", submission);
            }
            Vec::new()
        }
    };

    (state, effects)
}
