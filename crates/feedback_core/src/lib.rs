//! Feedback form core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod validate;
mod view_model;

pub use effect::Effect;
pub use msg::{Field, Msg};
pub use state::{FormState, SubmissionId, SubmitPhase};
pub use update::update;
pub use validate::{is_valid, validate, ValidationError};
pub use view_model::{confirmation_text, FormViewModel, PhaseView};
