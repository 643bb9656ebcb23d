use std::fmt;

use serde::Serialize;

/// Stable identifier of a rendered control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ControlId(u32);

impl ControlId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Raw interaction coming from whatever drives the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A text control now holds `text` in full.
    InputTextChanged { control_id: ControlId, text: String },
    ButtonClicked { control_id: ControlId },
}
