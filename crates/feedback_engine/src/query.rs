use std::fmt;

use regex::Regex;
use thiserror::Error;
use tokio::sync::watch;

use crate::{ControlId, Document, Node, Role};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("unable to find an element {query}")]
    NotFound { query: String },
    #[error("found {count} elements {query}, expected one")]
    MultipleFound { query: String, count: usize },
    #[error("element {query} is present")]
    Present { query: String },
}

/// How query text is compared against the document.
#[derive(Debug, Clone)]
pub enum TextMatch {
    /// Whole-string equality after collapsing whitespace in the candidate.
    Exact(String),
    /// Regex search anywhere in the candidate.
    Pattern(Regex),
}

impl TextMatch {
    pub fn exact(text: impl Into<String>) -> Self {
        Self::Exact(text.into())
    }

    /// Compiles `pattern`; prefix with `(?i)` for case-insensitive matching.
    pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(Self::Pattern)
    }

    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            Self::Exact(expected) => normalize(candidate) == *expected,
            Self::Pattern(regex) => regex.is_match(candidate),
        }
    }
}

impl From<&str> for TextMatch {
    fn from(text: &str) -> Self {
        Self::exact(text)
    }
}

impl From<String> for TextMatch {
    fn from(text: String) -> Self {
        Self::Exact(text)
    }
}

impl From<Regex> for TextMatch {
    fn from(regex: Regex) -> Self {
        Self::Pattern(regex)
    }
}

impl fmt::Display for TextMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(text) => write!(f, "\"{text}\""),
            Self::Pattern(regex) => write!(f, "/{}/", regex.as_str()),
        }
    }
}

fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Live view over a mounted form's rendered document.
#[derive(Clone)]
pub struct Screen {
    document: watch::Receiver<Document>,
}

impl Screen {
    pub(crate) fn new(document: watch::Receiver<Document>) -> Self {
        Self { document }
    }

    /// Snapshot of the current document.
    pub fn document(&self) -> Document {
        self.document.borrow().clone()
    }

    /// A receiver notified whenever the form re-renders.
    pub fn subscribe(&self) -> watch::Receiver<Document> {
        self.document.clone()
    }

    pub fn debug(&self) -> Result<String, serde_json::Error> {
        self.document.borrow().to_json_pretty()
    }

    pub fn get_by_role(
        &self,
        role: Role,
        name: impl Into<TextMatch>,
    ) -> Result<Element, QueryError> {
        let name = name.into();
        self.query_by_role(role, name.clone())?
            .ok_or_else(|| not_found(format!("with role {role:?} and name {name}")))
    }

    pub fn query_by_role(
        &self,
        role: Role,
        name: impl Into<TextMatch>,
    ) -> Result<Option<Element>, QueryError> {
        let name = name.into();
        self.single(format!("with role {role:?} and name {name}"), |node| {
            node.role == role && node.accessible_name().is_some_and(|n| name.matches(n))
        })
    }

    pub fn get_all_by_role(&self, role: Role) -> Vec<Element> {
        self.all(|node| node.role == role)
    }

    pub fn get_by_placeholder_text(
        &self,
        placeholder: impl Into<TextMatch>,
    ) -> Result<Element, QueryError> {
        let placeholder = placeholder.into();
        self.query_by_placeholder_text(placeholder.clone())?
            .ok_or_else(|| not_found(format!("with placeholder {placeholder}")))
    }

    pub fn query_by_placeholder_text(
        &self,
        placeholder: impl Into<TextMatch>,
    ) -> Result<Option<Element>, QueryError> {
        let placeholder = placeholder.into();
        self.single(format!("with placeholder {placeholder}"), |node| {
            node.placeholder
                .as_deref()
                .is_some_and(|p| placeholder.matches(p))
        })
    }

    pub fn get_by_text(&self, text: impl Into<TextMatch>) -> Result<Element, QueryError> {
        let text = text.into();
        self.query_by_text(text.clone())?
            .ok_or_else(|| not_found(format!("with text {text}")))
    }

    pub fn query_by_text(&self, text: impl Into<TextMatch>) -> Result<Option<Element>, QueryError> {
        let text = text.into();
        self.single(format!("with text {text}"), |node| {
            node.text.as_deref().is_some_and(|t| text.matches(t))
        })
    }

    pub fn query_all_by_text(&self, text: impl Into<TextMatch>) -> Vec<Element> {
        let text = text.into();
        self.all(|node| node.text.as_deref().is_some_and(|t| text.matches(t)))
    }

    /// Fails with [`QueryError::Present`] while any element shows `text`.
    pub fn expect_no_text(&self, text: impl Into<TextMatch>) -> Result<(), QueryError> {
        let text = text.into();
        if self.query_all_by_text(text.clone()).is_empty() {
            Ok(())
        } else {
            Err(QueryError::Present {
                query: format!("with text {text}"),
            })
        }
    }

    fn all(&self, predicate: impl Fn(&Node) -> bool) -> Vec<Element> {
        self.document
            .borrow()
            .nodes()
            .iter()
            .filter(|node| predicate(node))
            .map(|node| Element::new(node, self.document.clone()))
            .collect()
    }

    fn single(
        &self,
        query: String,
        predicate: impl Fn(&Node) -> bool,
    ) -> Result<Option<Element>, QueryError> {
        let mut found = self.all(predicate);
        match found.len() {
            0 => Ok(None),
            1 => Ok(found.pop()),
            count => Err(QueryError::MultipleFound { query, count }),
        }
    }
}

fn not_found(query: String) -> QueryError {
    QueryError::NotFound { query }
}

/// Handle to a rendered control. Reads always reflect the latest render.
#[derive(Clone)]
pub struct Element {
    id: ControlId,
    role: Role,
    document: watch::Receiver<Document>,
}

impl Element {
    fn new(node: &Node, document: watch::Receiver<Document>) -> Self {
        Self {
            id: node.id,
            role: node.role,
            document,
        }
    }

    pub fn id(&self) -> ControlId {
        self.id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Latest state of the underlying node, if it is still rendered.
    pub fn node(&self) -> Option<Node> {
        self.document.borrow().node(self.id).cloned()
    }

    pub fn value(&self) -> Option<String> {
        self.node().and_then(|node| node.value)
    }

    pub fn text(&self) -> Option<String> {
        self.node().and_then(|node| node.text)
    }

    pub fn is_enabled(&self) -> bool {
        self.node().is_some_and(|node| node.enabled)
    }

    pub fn is_busy(&self) -> bool {
        self.node().is_some_and(|node| node.busy)
    }

    pub fn is_connected(&self) -> bool {
        self.node().is_some()
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("id", &self.id)
            .field("role", &self.role)
            .finish()
    }
}
