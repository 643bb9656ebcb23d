use thiserror::Error;
use tokio::sync::watch;

use crate::component::{Command, CommandSender};
use crate::{ControlId, Document, Element, Node, Role, UiEvent};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserEventError {
    #[error("form is no longer mounted")]
    Unmounted,
    #[error("element {0} is no longer rendered")]
    Detached(ControlId),
    #[error("element {0} does not accept text input")]
    NotEditable(ControlId),
    #[error("element {0} is not clickable")]
    NotClickable(ControlId),
    #[error("element {0} is disabled")]
    Disabled(ControlId),
}

/// Simulates a person using the form: one event per keystroke, each handled
/// before the next is sent.
#[derive(Clone)]
pub struct UserEvent {
    commands: CommandSender,
    document: watch::Receiver<Document>,
}

impl UserEvent {
    pub(crate) fn new(commands: CommandSender, document: watch::Receiver<Document>) -> Self {
        Self { commands, document }
    }

    /// Appends `text` to the element's current value, one character at a time.
    pub async fn type_text(&self, element: &Element, text: &str) -> Result<(), UserEventError> {
        let mut value = self.editable(element)?.value.unwrap_or_default();
        for ch in text.chars() {
            value.push(ch);
            self.commands.send(Command::Ui(UiEvent::InputTextChanged {
                control_id: element.id(),
                text: value.clone(),
            }))?;
            self.commands.flush().await?;
            // The field is controlled: continue from what the form rendered.
            value = self.editable(element)?.value.unwrap_or_default();
        }
        Ok(())
    }

    pub async fn clear(&self, element: &Element) -> Result<(), UserEventError> {
        self.editable(element)?;
        self.commands.send(Command::Ui(UiEvent::InputTextChanged {
            control_id: element.id(),
            text: String::new(),
        }))?;
        self.commands.flush().await
    }

    pub async fn click(&self, element: &Element) -> Result<(), UserEventError> {
        let node = self.current(element)?;
        if node.role != Role::Button {
            return Err(UserEventError::NotClickable(node.id));
        }
        if !node.enabled {
            return Err(UserEventError::Disabled(node.id));
        }
        self.commands.send(Command::Ui(UiEvent::ButtonClicked {
            control_id: node.id,
        }))?;
        self.commands.flush().await
    }

    fn current(&self, element: &Element) -> Result<Node, UserEventError> {
        self.document
            .borrow()
            .node(element.id())
            .cloned()
            .ok_or(UserEventError::Detached(element.id()))
    }

    fn editable(&self, element: &Element) -> Result<Node, UserEventError> {
        let node = self.current(element)?;
        if node.role != Role::Textbox {
            return Err(UserEventError::NotEditable(node.id));
        }
        if !node.enabled {
            return Err(UserEventError::Disabled(node.id));
        }
        Ok(node)
    }
}
