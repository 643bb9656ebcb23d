use feedback_core::{FormViewModel, PhaseView};

use crate::constants::*;
use crate::{Document, Node, Role};

/// Builds the document for a view. Control ids are stable across renders.
pub fn render(view: &FormViewModel) -> Document {
    let mut nodes = Vec::with_capacity(5);

    let mut heading = Node::new(HEADING_TITLE, Role::Heading);
    heading.text = Some(labels::HEADING.to_string());
    heading.level = Some(2);
    nodes.push(heading);

    let mut name = Node::new(INPUT_NAME, Role::Textbox);
    name.placeholder = Some(labels::NAME_PLACEHOLDER.to_string());
    name.value = Some(view.name.clone());
    nodes.push(name);

    let mut message = Node::new(INPUT_MESSAGE, Role::Textbox);
    message.placeholder = Some(labels::MESSAGE_PLACEHOLDER.to_string());
    message.value = Some(view.message.clone());
    message.multiline = true;
    nodes.push(message);

    let mut submit = Node::new(BUTTON_SUBMIT, Role::Button);
    submit.text = Some(labels::SUBMIT.to_string());
    submit.enabled = view.submit_enabled;
    submit.busy = view.phase == PhaseView::Pending;
    nodes.push(submit);

    if let Some(confirmation) = &view.confirmation {
        let mut status = Node::new(LABEL_CONFIRMATION, Role::Status);
        status.text = Some(confirmation.clone());
        nodes.push(status);
    }

    Document::new(nodes)
}
