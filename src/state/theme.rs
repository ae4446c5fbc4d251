//! Theme preference state

use serde::Serialize;

use crate::prefs::PreferenceStore;

/// Preference key holding "dark" or "light"
pub const THEME_KEY: &str = "theme";

/// Light or dark appearance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
}

impl ThemePreference {
    /// Parse a stored value: only "dark" selects dark
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    /// Read the stored preference without writing anything back
    pub fn read(store: &dyn PreferenceStore) -> Self {
        Self::from_stored(store.get(THEME_KEY).as_deref())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl std::fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Owns the process-wide theme slot.
///
/// Initialized once from the preference store; `toggle` is the only mutation.
/// Each change is persisted and queued for the style layer, which picks it up
/// through `take_pending`.
pub struct ThemeController {
    preference: ThemePreference,
    store: Box<dyn PreferenceStore>,
    /// Preference the style layer still has to apply
    pending: Option<ThemePreference>,
}

impl ThemeController {
    /// Read the stored preference and queue it for the first frame
    pub fn load(store: Box<dyn PreferenceStore>) -> Self {
        let preference = ThemePreference::read(store.as_ref());
        tracing::debug!("Theme preference: {}", preference);

        let mut controller = Self {
            preference,
            store,
            pending: None,
        };
        controller.publish();
        controller
    }

    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    pub fn is_dark(&self) -> bool {
        self.preference.is_dark()
    }

    /// Flip between light and dark
    pub fn toggle(&mut self) -> ThemePreference {
        self.preference = self.preference.toggled();
        tracing::info!("Theme switched to {}", self.preference);
        self.publish();
        self.preference
    }

    /// Preference to hand to the style layer, if it changed since last taken
    pub fn take_pending(&mut self) -> Option<ThemePreference> {
        self.pending.take()
    }

    fn publish(&mut self) {
        if let Err(e) = self.store.set(THEME_KEY, self.preference.as_str()) {
            tracing::error!("Failed to save theme preference: {}", e);
        }
        self.pending = Some(self.preference);
    }
}
