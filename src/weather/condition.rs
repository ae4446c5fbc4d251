//! Condition labels and their display icons

/// Coarse weather category used to pick an icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Clear,
    Clouds,
    Rain,
    Thunderstorm,
    Snow,
    Fog,
}

impl Condition {
    /// Map an OpenWeather `weather[0].main` label.
    ///
    /// "Mist" shares the fog icon; anything unrecognized falls back to `Clear`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Clear" => Self::Clear,
            "Clouds" => Self::Clouds,
            "Rain" => Self::Rain,
            "Thunderstorm" => Self::Thunderstorm,
            "Snow" => Self::Snow,
            "Fog" | "Mist" => Self::Fog,
            _ => Self::Clear,
        }
    }

    /// Glyph drawn with egui's bundled emoji font
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Clear => "☀",
            Self::Clouds => "☁",
            Self::Rain => "🌧",
            Self::Thunderstorm => "⛈",
            Self::Snow => "❄",
            Self::Fog => "🌫",
        }
    }

    /// Icon tint as RGB
    pub fn tint(&self) -> [u8; 3] {
        match self {
            Self::Clear => [234, 179, 8],        // Yellow-500
            Self::Clouds => [156, 163, 175],     // Gray-400
            Self::Rain => [59, 130, 246],        // Blue-500
            Self::Thunderstorm => [168, 85, 247], // Purple-500
            Self::Snow => [147, 197, 253],       // Blue-300
            Self::Fog => [107, 114, 128],        // Gray-500
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        assert_eq!(Condition::from_label("Clear"), Condition::Clear);
        assert_eq!(Condition::from_label("Clouds"), Condition::Clouds);
        assert_eq!(Condition::from_label("Rain"), Condition::Rain);
        assert_eq!(Condition::from_label("Thunderstorm"), Condition::Thunderstorm);
        assert_eq!(Condition::from_label("Snow"), Condition::Snow);
        assert_eq!(Condition::from_label("Fog"), Condition::Fog);
        assert_eq!(Condition::from_label("Mist"), Condition::Fog);
    }

    #[test]
    fn test_unknown_labels_fall_back_to_clear() {
        for label in ["Drizzle", "Haze", "Tornado", "", "rain", "CLOUDS"] {
            let condition = Condition::from_label(label);
            assert_eq!(condition, Condition::Clear, "label {:?}", label);
            assert_eq!(condition.icon(), Condition::Clear.icon());
        }
    }

    #[test]
    fn test_mist_and_fog_share_icon() {
        assert_eq!(
            Condition::from_label("Mist").icon(),
            Condition::from_label("Fog").icon()
        );
    }
}
