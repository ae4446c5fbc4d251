//! UI modules for Breezy
//!
//! Rendering code for the dashboard, one module per panel.

mod components;
mod current_card;
mod forecast_card;
mod search_panel;
pub mod theme;

pub use components::{
    render_about_dialog, render_header, render_intro, render_prompt, render_status_bar,
};
pub use current_card::render_current_card;
pub use forecast_card::render_forecast_card;
pub use search_panel::render_search_panel;
