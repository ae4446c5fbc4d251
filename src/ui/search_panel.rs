//! Search panel: city field, country picker, search button

use eframe::egui::{self, RichText, Vec2};

use crate::app::BreezyApp;
use crate::ui::components::card_frame;

/// Render the search panel
pub fn render_search_panel(app: &mut BreezyApp, ui: &mut egui::Ui) {
    let palette = app.ui.palette.clone();

    card_frame(&palette, ui, |ui| {
        let mut submit = false;

        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new("City:").color(palette.text_muted));
            let city = ui.add(
                egui::TextEdit::singleline(&mut app.search.city_input)
                    .hint_text("Enter city name")
                    .desired_width(220.0),
            );
            if city.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submit = true;
            }

            ui.add_space(12.0);

            ui.label(RichText::new("Country:").color(palette.text_muted));
            let selected_text = app
                .countries
                .by_code(&app.search.country_input)
                .map(|c| c.label())
                .unwrap_or_else(|| "Select Country".to_string());

            egui::ComboBox::from_id_salt("country_select")
                .selected_text(selected_text)
                .width(260.0)
                .height(320.0)
                .show_ui(ui, |ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut app.ui.country_filter)
                            .hint_text("Filter...")
                            .desired_width(f32::INFINITY),
                    );
                    ui.separator();

                    for country in app.countries.filter(&app.ui.country_filter) {
                        let selected = country.code == app.search.country_input;
                        if ui.selectable_label(selected, country.label()).clicked() {
                            app.search.country_input = country.code.clone();
                        }
                    }
                });

            ui.add_space(12.0);

            let button = egui::Button::new(RichText::new("Search").color(egui::Color32::WHITE))
                .fill(palette.accent)
                .min_size(Vec2::new(96.0, 28.0));
            if ui.add(button).clicked() {
                submit = true;
            }
        });

        if submit {
            app.submit_search();
        }
    });
}
