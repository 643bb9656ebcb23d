use serde::Serialize;

use crate::ControlId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Heading,
    Textbox,
    Button,
    Status,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub id: ControlId,
    pub role: Role,
    /// Visible text content; `None` for text inputs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Current value of a text input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    pub multiline: bool,
    pub enabled: bool,
    /// Set on the submit button while a confirmation is pending.
    pub busy: bool,
}

impl Node {
    pub(crate) fn new(id: ControlId, role: Role) -> Self {
        Self {
            id,
            role,
            text: None,
            placeholder: None,
            value: None,
            level: None,
            multiline: false,
            enabled: true,
            busy: false,
        }
    }

    /// Name used by role queries: text content, falling back to the placeholder.
    pub fn accessible_name(&self) -> Option<&str> {
        self.text.as_deref().or(self.placeholder.as_deref())
    }
}

/// A rendered snapshot of the form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, id: ControlId) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
