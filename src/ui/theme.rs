use eframe::egui::{self, Color32, Stroke, Visuals};

use crate::state::ThemePreference;

/// Palette color definitions
#[derive(Debug, Clone)]
pub struct Palette {
    pub dark: bool,

    // Base colors
    pub bg_page: Color32,
    pub bg_card: Color32,
    pub bg_tile: Color32,
    pub bg_slide: Color32,

    // Text colors
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,

    // Accent colors
    pub accent: Color32,
    pub accent_hover: Color32,
    pub heading: Color32,

    // Semantic colors
    pub error: Color32,

    // UI element colors
    pub border: Color32,
    pub selection: Color32,
}

impl Palette {
    pub fn for_preference(preference: ThemePreference) -> Self {
        match preference {
            ThemePreference::Light => Self::light(),
            ThemePreference::Dark => Self::dark(),
        }
    }

    /// Light palette - gray page, white cards, purple accent
    pub fn light() -> Self {
        Self {
            dark: false,

            bg_page: Color32::from_rgb(243, 244, 246),  // Gray-100
            bg_card: Color32::from_rgb(255, 255, 255),
            bg_tile: Color32::from_rgb(249, 250, 251),  // Gray-50
            bg_slide: Color32::from_rgb(243, 232, 255), // Purple-100

            text_primary: Color32::from_rgb(17, 24, 39),    // Gray-900
            text_secondary: Color32::from_rgb(55, 65, 81),  // Gray-700
            text_muted: Color32::from_rgb(107, 114, 128),   // Gray-500

            accent: Color32::from_rgb(168, 85, 247),       // Purple-500
            accent_hover: Color32::from_rgb(147, 51, 234), // Purple-600
            heading: Color32::from_rgb(220, 38, 38),       // Red-600

            error: Color32::from_rgb(239, 68, 68), // Red-500

            border: Color32::from_rgb(229, 231, 235), // Gray-200
            selection: Color32::from_rgb(168, 85, 247).gamma_multiply(0.3),
        }
    }

    /// Dark palette - near-black page, slate cards, lighter purple accent
    pub fn dark() -> Self {
        Self {
            dark: true,

            bg_page: Color32::from_rgb(17, 24, 39),   // Gray-900
            bg_card: Color32::from_rgb(31, 41, 55),   // Gray-800
            bg_tile: Color32::from_rgb(55, 65, 81),   // Gray-700
            bg_slide: Color32::from_rgb(107, 33, 168), // Purple-800

            text_primary: Color32::from_rgb(243, 244, 246),   // Gray-100
            text_secondary: Color32::from_rgb(209, 213, 219), // Gray-300
            text_muted: Color32::from_rgb(156, 163, 175),     // Gray-400

            accent: Color32::from_rgb(192, 132, 252),      // Purple-400
            accent_hover: Color32::from_rgb(168, 85, 247), // Purple-500
            heading: Color32::from_rgb(251, 146, 60),      // Orange-400

            error: Color32::from_rgb(248, 113, 113), // Red-400

            border: Color32::from_rgb(55, 65, 81), // Gray-700
            selection: Color32::from_rgb(192, 132, 252).gamma_multiply(0.3),
        }
    }

    /// Apply this palette to egui's visuals
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = if self.dark {
            Visuals::dark()
        } else {
            Visuals::light()
        };

        // Window and panel backgrounds
        visuals.window_fill = self.bg_card;
        visuals.panel_fill = self.bg_page;
        visuals.faint_bg_color = self.bg_tile;
        visuals.extreme_bg_color = self.bg_card;

        // Widget backgrounds
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_secondary);

        // Inactive widgets
        visuals.widgets.inactive.bg_fill = self.bg_tile;
        visuals.widgets.inactive.weak_bg_fill = self.bg_tile;
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_primary);

        // Hovered widgets
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, self.accent);
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, self.text_primary);

        // Active/pressed widgets
        visuals.widgets.active.bg_fill = self.accent_hover;
        visuals.widgets.active.weak_bg_fill = self.accent_hover;
        visuals.widgets.active.bg_stroke = Stroke::new(1.0, self.accent);

        // Selection
        visuals.selection.bg_fill = self.selection;
        visuals.selection.stroke = Stroke::new(1.0, self.accent);

        // Hyperlinks
        visuals.hyperlink_color = self.accent;

        // Window styling
        visuals.window_stroke = Stroke::new(1.0, self.border);

        // Pin egui's theme so it stops following the OS setting
        ctx.set_theme(if self.dark {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        });
        ctx.set_visuals(visuals);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_for_preference() {
        assert!(Palette::for_preference(ThemePreference::Dark).dark);
        assert!(!Palette::for_preference(ThemePreference::Light).dark);
    }

    #[test]
    fn test_apply_switches_visuals() {
        let ctx = egui::Context::default();

        Palette::dark().apply(&ctx);
        assert!(ctx.style().visuals.dark_mode);

        Palette::light().apply(&ctx);
        assert!(!ctx.style().visuals.dark_mode);
    }
}
