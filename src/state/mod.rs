//! Application state modules
//!
//! This module contains grouped state structs owned by BreezyApp.
//! Each state struct owns its related fields and poll methods.

mod card;
mod pager;
mod search;
mod theme;
mod ui;

pub use card::{CardState, RenderState};
pub use pager::{visible_count, Pager};
pub use search::SearchForm;
pub use theme::{ThemeController, ThemePreference};
pub use ui::UiState;

/// Events that state poll methods can return.
/// These communicate results back to BreezyApp without direct mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum StateEvent {
    /// Update the status message
    StatusMessage(String),

    /// Log an error message
    LogError(String),
}
