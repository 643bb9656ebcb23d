use crate::ControlId;

pub const HEADING_TITLE: ControlId = ControlId::new(1001);
pub const INPUT_NAME: ControlId = ControlId::new(2001);
pub const INPUT_MESSAGE: ControlId = ControlId::new(2002);
pub const BUTTON_SUBMIT: ControlId = ControlId::new(3001);
pub const LABEL_CONFIRMATION: ControlId = ControlId::new(4001);

/// Visible strings of the form.
pub mod labels {
    pub const HEADING: &str = "Обратная связь";
    pub const NAME_PLACEHOLDER: &str = "Ваше имя";
    pub const MESSAGE_PLACEHOLDER: &str = "Ваше сообщение";
    pub const SUBMIT: &str = "Отправить";
}
