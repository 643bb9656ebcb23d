#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhaseView {
    #[default]
    Idle,
    Pending,
    Confirmed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormViewModel {
    pub name: String,
    pub message: String,
    pub phase: PhaseView,
    /// Text to show once a valid submit has been confirmed.
    pub confirmation: Option<String>,
    pub submit_enabled: bool,
}

/// The thank-you line, using the name exactly as typed.
pub fn confirmation_text(name: &str) -> String {
    format!("Спасибо, {name}!")
}
