//! Feedback form engine: rendering, mounting, timers and the query surface.
mod component;
mod config;
mod constants;
mod dom;
mod query;
mod render;
mod scheduler;
mod types;
mod user_event;
mod wait;

pub use component::{mount, MountedForm};
pub use config::{FormConfig, LogDestination, DEFAULT_CONFIRMATION_DELAY_MS};
pub use constants::labels;
pub use dom::{Document, Node, Role};
pub use query::{Element, QueryError, Screen, TextMatch};
pub use render::render;
pub use types::{ControlId, UiEvent};
pub use user_event::{UserEvent, UserEventError};
pub use wait::{wait_for, WaitError, WaitOptions};
