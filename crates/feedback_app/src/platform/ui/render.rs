use feedback_engine::{Document, Node, Role};

/// Renders the form as plain terminal lines.
pub fn render_text(document: &Document) -> String {
    let mut out = String::new();
    for node in document.nodes() {
        out.push_str(&render_node(node));
        out.push('\n');
    }
    out
}

fn render_node(node: &Node) -> String {
    let text = node.text.as_deref().unwrap_or_default();
    match node.role {
        Role::Heading => format!("== {text} =="),
        Role::Textbox => {
            let placeholder = node.placeholder.as_deref().unwrap_or_default();
            match node.value.as_deref() {
                Some(value) if !value.is_empty() => format!("[{placeholder}] {value}"),
                _ => format!("[{placeholder}]"),
            }
        }
        Role::Button if node.busy => format!("<{text}> ..."),
        Role::Button if node.enabled => format!("<{text}>"),
        Role::Button => format!("<{text}> (disabled)"),
        Role::Status => format!("* {text}"),
    }
}

/// The confirmation line, if the form currently shows one.
pub fn status_line(document: &Document) -> Option<String> {
    document
        .nodes()
        .iter()
        .find(|node| node.role == Role::Status)
        .and_then(|node| node.text.clone())
}
