//! Forecast card with horizontal paging

use eframe::egui::{self, RichText};

use crate::app::BreezyApp;
use crate::state::{visible_count, Pager, RenderState};
use crate::ui::components::{card_frame, condition_icon, render_card_error, render_loading};
use crate::ui::theme::Palette;
use crate::util::{format_temperature, local_slot};
use crate::weather::ForecastEntry;

/// Render the forecast card
pub fn render_forecast_card(app: &mut BreezyApp, ui: &mut egui::Ui) {
    let palette = app.ui.palette.clone();

    card_frame(&palette, ui, |ui| {
        ui.label(
            RichText::new("5-Day Forecast")
                .size(22.0)
                .strong()
                .color(palette.heading),
        );
        ui.add_space(12.0);

        match app.forecast.render() {
            RenderState::Loading => render_loading(ui),
            RenderState::Error(message) => render_card_error(&palette, ui, message),
            RenderState::Ready(entries) => {
                render_slides(&palette, ui, &mut app.pager, entries);
            }
        }
    });
}

fn render_slides(
    palette: &Palette,
    ui: &mut egui::Ui,
    pager: &mut Pager,
    entries: &[ForecastEntry],
) {
    let visible = slide_count(ui);
    let len = entries.len();

    ui.horizontal(|ui| {
        if ui
            .add_enabled(pager.can_prev(), egui::Button::new("◀"))
            .clicked()
        {
            pager.prev();
        }
        ui.label(
            RichText::new(pager.position_label(len, visible))
                .size(12.0)
                .color(palette.text_muted),
        );
        if ui
            .add_enabled(pager.can_next(len, visible), egui::Button::new("▶"))
            .clicked()
        {
            pager.next(len, visible);
        }
    });
    ui.add_space(8.0);

    let window = pager.window(entries, visible);
    if window.is_empty() {
        return;
    }

    ui.columns(visible, |columns| {
        for (column, entry) in columns.iter_mut().zip(window) {
            render_slide(palette, column, entry);
        }
    });
}

/// Slides shown at the current window width
fn slide_count(ui: &egui::Ui) -> usize {
    visible_count(ui.ctx().screen_rect().width())
}

fn render_slide(palette: &Palette, ui: &mut egui::Ui, entry: &ForecastEntry) {
    let (weekday, time) = local_slot(entry.timestamp);

    egui::Frame::new()
        .fill(palette.bg_slide)
        .corner_radius(egui::CornerRadius::same(12))
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(weekday).strong().color(palette.text_primary));
                ui.label(RichText::new(time).size(12.0).color(palette.text_muted));
                ui.add_space(4.0);
                ui.label(condition_icon(entry.condition(), 36.0));
                ui.label(
                    RichText::new(format_temperature(entry.temperature))
                        .size(18.0)
                        .strong()
                        .color(palette.text_primary),
                );
                ui.label(
                    RichText::new(&entry.description)
                        .size(12.0)
                        .color(palette.text_secondary),
                );
            });
        });
}
