/// Preference serialization for window.localStorage

use crate::tool_data::ToolDescriptor;
use serde::{Deserialize, Serialize};

/// Storage key holding the JSON list of favorited tool ids
pub const FAVORITES_KEY: &str = "domain-research-hub:favorites";

/// Storage key holding the theme name
pub const THEME_KEY: &str = "domain-research-hub:theme";

/// Theme chosen by the user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    /// Follow the browser's prefers-color-scheme
    #[default]
    System,
}

impl ThemePreference {
    /// Unknown or missing values fall back to `System`
    pub fn parse(raw: Option<&str>) -> ThemePreference {
        match raw.map(str::trim) {
            Some("light") => ThemePreference::Light,
            Some("dark") => ThemePreference::Dark,
            _ => ThemePreference::System,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }

    /// Cycle order for the theme button
    pub fn next(self) -> ThemePreference {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::System,
            ThemePreference::System => ThemePreference::Light,
        }
    }

    /// The concrete theme to render, given whether the system prefers dark
    pub fn effective(self, system_prefers_dark: bool) -> ThemePreference {
        match self {
            ThemePreference::System if system_prefers_dark => ThemePreference::Dark,
            ThemePreference::System => ThemePreference::Light,
            other => other,
        }
    }
}

/// Persisted user preferences
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Preferences {
    pub favorites: Vec<String>,
    pub theme: ThemePreference,
}

impl Preferences {
    pub fn new() -> Self {
        Preferences {
            favorites: Vec::new(),
            theme: ThemePreference::System,
        }
    }

    /// Read both keys through `get`. Absent or corrupt values become defaults.
    pub fn load<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let favorites = parse_favorites(get(FAVORITES_KEY).as_deref());
        let theme = ThemePreference::parse(get(THEME_KEY).as_deref());

        log::debug!(
            "Loaded preferences: {} favorites, theme {}",
            favorites.len(),
            theme.as_str()
        );

        Preferences { favorites, theme }
    }

    pub fn is_favorite(&self, tool_id: &str) -> bool {
        self.favorites.iter().any(|id| id == tool_id)
    }

    /// Add or remove a favorite. Returns true if the tool is now a favorite.
    pub fn toggle_favorite(&mut self, tool_id: &str) -> bool {
        let original_len = self.favorites.len();
        self.favorites.retain(|id| id != tool_id);

        if self.favorites.len() < original_len {
            false
        } else {
            self.favorites.push(tool_id.to_string());
            true
        }
    }

    pub fn set_theme(&mut self, theme: ThemePreference) {
        self.theme = theme;
    }

    /// Drop favorites whose tool no longer exists. Returns true if any were removed.
    pub fn retain_known_favorites(&mut self, catalog: &[ToolDescriptor]) -> bool {
        let original_len = self.favorites.len();
        self.favorites.retain(|id| catalog.iter().any(|tool| &tool.id == id));
        self.favorites.len() < original_len
    }

    /// Value written under `FAVORITES_KEY`
    pub fn favorites_json(&self) -> String {
        serde_json::to_string(&self.favorites).unwrap_or_else(|_| "[]".to_string())
    }
}

/// Decode the favorites list, collapsing duplicates and ignoring corruption
pub fn parse_favorites(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(ids) => ids.into_iter().fold(Vec::new(), |mut unique, id| {
            if !unique.contains(&id) {
                unique.push(id);
            }
            unique
        }),
        Err(e) => {
            log::warn!("Ignoring corrupt favorites value: {}", e);
            Vec::new()
        }
    }
}
