use feedback_core::{update, Field, FormState, Msg, SubmitPhase};

#[test]
fn stale_confirmation_is_ignored() {
    let mut state = FormState::new();
    let before = state.clone();

    let (mut next, effects) = update(state.clone(), Msg::ConfirmationElapsed { submission: 7 });

    assert!(effects.is_empty());
    assert_eq!(next, before);
    assert!(!next.consume_dirty());
    assert!(!state.consume_dirty());
}

#[test]
fn identical_edit_does_not_dirty() {
    let (mut state, _) = update(
        FormState::new(),
        Msg::FieldEdited {
            field: Field::Name,
            value: String::new(),
        },
    );

    assert!(!state.consume_dirty());
    assert_eq!(state.phase(), &SubmitPhase::Idle);
}

#[test]
fn submit_on_fresh_form_is_silent() {
    let (mut state, effects) = update(FormState::new(), Msg::SubmitClicked);

    assert!(effects.is_empty());
    assert_eq!(state.view().confirmation, None);
    assert!(!state.consume_dirty());
}
