use eframe::egui;

use crate::app_data::app_data;
use crate::countries::CountryTable;
use crate::state::{CardState, Pager, SearchForm, StateEvent, ThemeController, UiState};
use crate::ui::{self, theme::Palette};
use crate::weather::{CurrentConditions, ForecastEntry, SearchQuery, WeatherClient};

/// Main application state
pub struct BreezyApp {
    /// Country picker entries
    pub countries: CountryTable,
    /// OpenWeather client shared by both cards
    pub client: WeatherClient,
    /// Theme slot and its persistence
    pub theme: ThemeController,
    /// Search inputs and committed query
    pub search: SearchForm,
    /// Current-conditions card
    pub current: CardState<CurrentConditions>,
    /// Forecast card
    pub forecast: CardState<Vec<ForecastEntry>>,
    /// Forecast slide window
    pub pager: Pager,
    /// UI-related state
    pub ui: UiState,
    /// Status message for the status bar
    pub status_message: String,
}

impl BreezyApp {
    /// Create a new application instance from resources prepared at startup
    pub fn new(
        client: WeatherClient,
        countries: CountryTable,
        theme: ThemeController,
    ) -> Self {
        let messages = &app_data().messages;
        let palette = Palette::for_preference(theme.preference());

        Self {
            countries,
            client,
            theme,
            search: SearchForm::default(),
            current: CardState::new("current weather", messages.current_error.as_str()),
            forecast: CardState::new("forecast", messages.forecast_error.as_str()),
            pager: Pager::default(),
            ui: UiState::new(palette),
            status_message: "Ready".to_string(),
        }
    }

    /// Handle the search button
    pub fn submit_search(&mut self) {
        if let Some(query) = self.search.submit() {
            self.start_fetches(query);
        } else if !self.search.is_submitted() {
            self.status_message = "Enter a city and select a country".to_string();
        }
    }

    /// Point both cards at `query`
    fn start_fetches(&mut self, query: SearchQuery) {
        let client = self.client.clone();
        let q = query.clone();
        let event = self
            .current
            .load(query.clone(), async move { client.current(&q).await });
        self.handle_event(event);

        let client = self.client.clone();
        let q = query.clone();
        let event = self
            .forecast
            .load(query, async move { client.forecast(&q).await });
        self.handle_event(event);

        self.pager.reset();
    }

    /// Flip the theme; the palette follows on the next frame
    pub fn toggle_theme(&mut self) {
        let preference = self.theme.toggle();
        self.status_message = format!("Switched to {} mode", preference);
    }

    /// Apply a theme change queued by the controller
    fn apply_pending_theme(&mut self, ctx: &egui::Context) {
        if let Some(preference) = self.theme.take_pending() {
            self.ui.palette = Palette::for_preference(preference);
            self.ui.palette.apply(ctx);
        }
    }

    /// Poll the card tasks for completion
    fn poll_tasks(&mut self, ctx: &egui::Context) {
        let mut events = self.current.poll(ctx);
        events.extend(self.forecast.poll(ctx));
        for event in events {
            self.handle_event(event);
        }
    }

    fn handle_event(&mut self, event: StateEvent) {
        match event {
            StateEvent::StatusMessage(message) => self.status_message = message,
            StateEvent::LogError(message) => tracing::error!("{}", message),
        }
    }
}

impl eframe::App for BreezyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_pending_theme(ctx);
        self.poll_tasks(ctx);

        ui::render_header(self, ctx);
        ui::render_status_bar(self, ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("main_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui::render_intro(self, ui);
                    ui::render_search_panel(self, ui);
                    ui.add_space(16.0);

                    if self.search.is_submitted() {
                        ui::render_current_card(self, ui);
                        ui.add_space(16.0);
                        ui::render_forecast_card(self, ui);
                    } else {
                        ui::render_prompt(self, ui);
                    }
                    ui.add_space(24.0);
                });
        });

        ui::render_about_dialog(self, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::MemoryPreferences;
    use crate::state::RenderState;
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_app(base_url: &str) -> BreezyApp {
        let client = WeatherClient::new(base_url, "test_key", Duration::from_secs(5)).unwrap();
        let theme = ThemeController::load(Box::new(MemoryPreferences::default()));
        BreezyApp::new(client, CountryTable::embedded(), theme)
    }

    async fn wait_for_cards(app: &mut BreezyApp, ctx: &egui::Context) {
        let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
        loop {
            app.poll_tasks(ctx);
            if !app.current.has_pending() && !app.forecast.has_pending() {
                break;
            }
            assert!(tokio::time::Instant::now() < deadline, "cards never settled");
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    }

    fn forecast_body(count: i64) -> serde_json::Value {
        let list: Vec<_> = (0..count)
            .map(|i| {
                serde_json::json!({
                    "dt": 1_700_000_000 + i * 10_800,
                    "main": {"temp": 10.0 + i as f64},
                    "weather": [{"main": "Clouds", "description": "scattered clouds"}]
                })
            })
            .collect();
        serde_json::json!({ "list": list })
    }

    #[tokio::test]
    async fn test_search_fills_both_cards() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .and(query_param("q", "London,GB"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "name": "London",
                "sys": {"country": "GB", "sunrise": 1700000000, "sunset": 1700030000},
                "weather": [{"main": "Drizzle", "description": "light drizzle"}],
                "main": {"temp": 9.87, "feels_like": 7.1, "humidity": 93},
                "wind": {"speed": 3.6}
            })))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/forecast"))
            .and(query_param("q", "London,GB"))
            .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(40)))
            .mount(&mock_server)
            .await;

        let ctx = egui::Context::default();
        let mut app = test_app(&mock_server.uri());
        app.search.city_input = "London".to_string();
        app.search.country_input = "GB".to_string();
        app.submit_search();

        assert!(app.search.is_submitted());
        assert_eq!(app.current.query(), Some(&SearchQuery::new("London", "GB")));
        assert_eq!(app.forecast.query(), Some(&SearchQuery::new("London", "GB")));

        wait_for_cards(&mut app, &ctx).await;

        let current = app.current.render().payload().unwrap();
        assert_eq!(current.heading(), "London, GB");
        assert_eq!(crate::util::format_temperature(current.temperature), "9.87°C");

        let entries = app.forecast.render().payload().unwrap();
        assert_eq!(entries.len(), 40);
        assert!(entries.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
    }

    #[tokio::test]
    async fn test_unknown_city_shows_fixed_errors() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "cod": "404",
                "message": "city not found"
            })))
            .mount(&mock_server)
            .await;

        let ctx = egui::Context::default();
        let mut app = test_app(&mock_server.uri());
        app.search.city_input = "Zzzzz".to_string();
        app.search.country_input = "XX".to_string();
        app.submit_search();

        wait_for_cards(&mut app, &ctx).await;

        let messages = &app_data().messages;
        assert_eq!(
            app.current.render(),
            &RenderState::Error(messages.current_error.clone())
        );
        assert!(app.current.render().payload().is_none());
        assert_eq!(app.forecast.render().error(), Some(messages.forecast_error.as_str()));
    }

    #[tokio::test]
    async fn test_failure_in_one_card_does_not_affect_other() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(8)))
            .mount(&mock_server)
            .await;

        let ctx = egui::Context::default();
        let mut app = test_app(&mock_server.uri());
        app.search.city_input = "Oslo".to_string();
        app.search.country_input = "NO".to_string();
        app.submit_search();

        wait_for_cards(&mut app, &ctx).await;

        assert!(app.current.render().error().is_some());
        assert_eq!(app.forecast.render().payload().map(|e| e.len()), Some(8));
    }

    #[tokio::test]
    async fn test_blank_search_keeps_cards_hidden() {
        let mut app = test_app("http://127.0.0.1:9");
        app.search.city_input = "   ".to_string();
        app.search.country_input = "GB".to_string();
        app.submit_search();

        assert!(!app.search.is_submitted());
        assert!(app.current.query().is_none());
        assert!(!app.current.has_pending());
    }

    #[tokio::test]
    async fn test_toggle_theme_updates_palette() {
        let ctx = egui::Context::default();
        let mut app = test_app("http://127.0.0.1:9");

        app.apply_pending_theme(&ctx);
        assert!(!app.ui.palette.dark);

        app.toggle_theme();
        app.apply_pending_theme(&ctx);
        assert!(app.ui.palette.dark);
        assert!(ctx.style().visuals.dark_mode);
        assert_eq!(app.status_message, "Switched to dark mode");
    }
}
