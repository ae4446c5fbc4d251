//! Shared UI components for Breezy

use eframe::egui::{self, RichText, Vec2};

use crate::app::BreezyApp;
use crate::app_data::app_data;
use crate::ui::theme::Palette;
use crate::weather::Condition;

/// Render the top header: title, theme toggle, about button
pub fn render_header(app: &mut BreezyApp, ctx: &egui::Context) {
    let palette = app.ui.palette.clone();

    egui::TopBottomPanel::top("header")
        .frame(
            egui::Frame::new()
                .fill(palette.bg_card)
                .inner_margin(egui::Margin::same(14)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Breezy 2.0")
                        .size(34.0)
                        .strong()
                        .color(palette.accent),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let (icon, hint) = if app.theme.is_dark() {
                        ("🌙", "Switch to light mode")
                    } else {
                        ("☀", "Switch to dark mode")
                    };

                    let toggle = egui::Button::new(RichText::new(icon).size(20.0))
                        .fill(palette.accent)
                        .corner_radius(egui::CornerRadius::same(18))
                        .min_size(Vec2::new(44.0, 36.0));
                    if ui.add(toggle).on_hover_text(hint).clicked() {
                        app.toggle_theme();
                    }

                    if ui.button("About").clicked() {
                        app.ui.show_about_dialog = true;
                    }
                });
            });
        });
}

/// Status bar at bottom
pub fn render_status_bar(app: &BreezyApp, ctx: &egui::Context) {
    let palette = &app.ui.palette;

    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(&app.status_message).color(palette.text_secondary));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new("Weather data: OpenWeather")
                        .size(11.0)
                        .color(palette.text_muted),
                );
                if let Some(query) = app.search.committed() {
                    ui.separator();
                    ui.label(
                        RichText::new(query.to_string())
                            .size(11.0)
                            .color(palette.text_muted),
                    );
                }
            });
        });
    });
}

/// Short introduction above the search panel
pub fn render_intro(app: &BreezyApp, ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(8.0);
        ui.label(
            RichText::new(&app_data().messages.about)
                .size(18.0)
                .italics()
                .color(app.ui.palette.text_secondary),
        );
        ui.add_space(8.0);
    });
}

/// Placeholder shown until a valid search is submitted
pub fn render_prompt(app: &BreezyApp, ui: &mut egui::Ui) {
    ui.add_space(24.0);
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(&app_data().messages.prompt)
                .size(18.0)
                .color(app.ui.palette.text_muted),
        );
    });
}

/// Rounded card container
pub fn card_frame<R>(
    palette: &Palette,
    ui: &mut egui::Ui,
    content: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    egui::Frame::new()
        .fill(palette.bg_card)
        .corner_radius(egui::CornerRadius::same(16))
        .inner_margin(egui::Margin::same(24))
        .stroke(egui::Stroke::new(1.0, palette.border))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            content(ui)
        })
        .inner
}

/// Centered spinner used while a card is loading
pub fn render_loading(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(12.0);
        ui.add(egui::Spinner::new().size(48.0));
        ui.add_space(12.0);
    });
}

/// Single-line card error
pub fn render_card_error(palette: &Palette, ui: &mut egui::Ui, message: &str) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(message).size(16.0).color(palette.error));
    });
}

/// Condition glyph in its tint
pub fn condition_icon(condition: Condition, size: f32) -> RichText {
    let [r, g, b] = condition.tint();
    RichText::new(condition.icon())
        .size(size)
        .color(egui::Color32::from_rgb(r, g, b))
}

/// Render the About dialog
pub fn render_about_dialog(app: &mut BreezyApp, ctx: &egui::Context) {
    if !app.ui.show_about_dialog {
        return;
    }

    let palette = app.ui.palette.clone();

    egui::Window::new("About Breezy")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([320.0, 260.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);

                ui.label(
                    RichText::new("Breezy")
                        .size(24.0)
                        .strong()
                        .color(palette.accent),
                );

                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Version {}", env!("CARGO_PKG_VERSION")))
                        .color(palette.text_muted),
                );

                ui.add_space(12.0);
                ui.label(
                    RichText::new(env!("CARGO_PKG_DESCRIPTION")).color(palette.text_secondary),
                );

                ui.add_space(12.0);
                if ui.link("OpenWeather").clicked() {
                    if let Err(e) = open::that("https://openweathermap.org/") {
                        tracing::warn!("Failed to open browser: {}", e);
                    }
                }

                ui.add_space(12.0);
                ui.label(
                    RichText::new("Built with Rust + egui")
                        .size(11.0)
                        .color(palette.text_muted),
                );

                ui.add_space(12.0);
                if ui.button("Close").clicked() {
                    app.ui.show_about_dialog = false;
                }

                ui.add_space(8.0);
            });
        });
}
