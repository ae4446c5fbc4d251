//! Current conditions card

use eframe::egui::{self, RichText};

use crate::app::BreezyApp;
use crate::state::RenderState;
use crate::ui::components::{card_frame, condition_icon, render_card_error, render_loading};
use crate::ui::theme::Palette;
use crate::util::{format_humidity, format_temperature, format_wind, local_clock_time};
use crate::weather::CurrentConditions;

/// Width at which the detail tiles sit on a single row
const WIDE_TILES_WIDTH: f32 = 768.0;

/// Render the current weather card
pub fn render_current_card(app: &BreezyApp, ui: &mut egui::Ui) {
    let palette = &app.ui.palette;

    card_frame(palette, ui, |ui| match app.current.render() {
        RenderState::Loading => render_loading(ui),
        RenderState::Error(message) => render_card_error(palette, ui, message),
        RenderState::Ready(current) => render_conditions(palette, ui, current),
    });
}

fn render_conditions(palette: &Palette, ui: &mut egui::Ui, current: &CurrentConditions) {
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(current.heading())
                .size(28.0)
                .strong()
                .color(palette.heading),
        );
        ui.label(
            RichText::new(format!("{} - {}", current.label, current.description))
                .size(16.0)
                .color(palette.text_secondary),
        );

        ui.add_space(8.0);
        ui.label(condition_icon(current.condition(), 64.0));
        ui.label(
            RichText::new(format_temperature(current.temperature))
                .size(40.0)
                .strong()
                .color(palette.accent),
        );
        ui.label(
            RichText::new(format!("Feels like {}", format_temperature(current.feels_like)))
                .color(palette.text_muted),
        );
    });

    ui.add_space(16.0);

    let tiles = [
        ("Wind", format_wind(current.wind_speed)),
        ("Humidity", format_humidity(current.humidity)),
        ("Sunrise", local_clock_time(current.sunrise)),
        ("Sunset", local_clock_time(current.sunset)),
    ];

    let per_row = if ui.available_width() >= WIDE_TILES_WIDTH {
        4
    } else {
        2
    };

    for row in tiles.chunks(per_row) {
        ui.columns(per_row, |columns| {
            for (column, (title, value)) in columns.iter_mut().zip(row) {
                render_tile(palette, column, title, value);
            }
        });
        ui.add_space(8.0);
    }
}

fn render_tile(palette: &Palette, ui: &mut egui::Ui, title: &str, value: &str) {
    egui::Frame::new()
        .fill(palette.bg_tile)
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(title).size(12.0).color(palette.text_muted));
                ui.label(
                    RichText::new(value)
                        .size(18.0)
                        .strong()
                        .color(palette.text_primary),
                );
            });
        });
}
