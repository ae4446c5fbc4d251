//! UI-related application state

use crate::ui::theme::Palette;

/// UI-related state
pub struct UiState {
    /// Colors for the active theme
    pub palette: Palette,
    /// Text typed into the country picker's filter box
    pub country_filter: String,
    /// Whether to show the About dialog
    pub show_about_dialog: bool,
}

impl UiState {
    /// Create a new UiState with the given palette
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            country_filter: String::new(),
            show_about_dialog: false,
        }
    }
}
