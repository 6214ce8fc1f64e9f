//! Viewer settings persisted through a key-value store.

use crate::error::Result;
use crate::render::{RenderOptions, MAX_FONT_SIZE_PT, MIN_FONT_SIZE_PT};

use super::KeyValueStore;

const FONT_SIZE_KEY: &str = "font_size";
const DARK_MODE_KEY: &str = "dark_mode";

const DEFAULT_FONT_SIZE_PT: f32 = 14.0;

/// User-facing viewer settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Base font size in points, kept within 10–32
    pub font_size_pt: f32,

    /// Dark color palette enabled
    pub dark_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            font_size_pt: DEFAULT_FONT_SIZE_PT,
            dark_mode: false,
        }
    }
}

impl Settings {
    /// Load settings from the store. Missing or unparseable values fall back
    /// to the defaults.
    pub fn load(store: &dyn KeyValueStore) -> Result<Self> {
        let mut settings = Self::default();

        if let Some(raw) = store.get(FONT_SIZE_KEY)? {
            match raw.parse::<f32>() {
                Ok(size) => {
                    settings.font_size_pt = size.clamp(MIN_FONT_SIZE_PT, MAX_FONT_SIZE_PT)
                }
                Err(_) => log::warn!("ignoring unparseable font_size value {raw:?}"),
            }
        }
        if let Some(raw) = store.get(DARK_MODE_KEY)? {
            match raw.parse::<bool>() {
                Ok(dark) => settings.dark_mode = dark,
                Err(_) => log::warn!("ignoring unparseable dark_mode value {raw:?}"),
            }
        }

        Ok(settings)
    }

    /// Persist the settings to the store.
    pub fn save(&self, store: &mut dyn KeyValueStore) -> Result<()> {
        store.set(FONT_SIZE_KEY, &self.font_size_pt.to_string())?;
        store.set(DARK_MODE_KEY, &self.dark_mode.to_string())
    }

    /// Set the font size, clamped to the accepted range.
    pub fn set_font_size(&mut self, pt: f32) {
        self.font_size_pt = pt.clamp(MIN_FONT_SIZE_PT, MAX_FONT_SIZE_PT);
    }

    /// Flip between the dark and light palettes.
    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    /// Render options matching these settings.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::new()
            .with_dark_mode(self.dark_mode)
            .with_font_size(self.font_size_pt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_defaults_when_store_empty() {
        let store = MemoryStore::new();
        let settings = Settings::load(&store).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.font_size_pt, 14.0);
        assert!(!settings.dark_mode);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let mut store = MemoryStore::new();
        let mut settings = Settings::default();
        settings.set_font_size(18.5);
        settings.toggle_dark_mode();
        settings.save(&mut store).unwrap();

        let loaded = Settings::load(&store).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_loaded_font_size_clamped() {
        let mut store = MemoryStore::new();
        store.set("font_size", "999").unwrap();
        let settings = Settings::load(&store).unwrap();
        assert_eq!(settings.font_size_pt, 32.0);
    }

    #[test]
    fn test_garbage_values_fall_back() {
        let mut store = MemoryStore::new();
        store.set("font_size", "huge").unwrap();
        store.set("dark_mode", "maybe").unwrap();
        let settings = Settings::load(&store).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_render_options_mirror_settings() {
        let settings = Settings {
            font_size_pt: 16.0,
            dark_mode: true,
        };
        let options = settings.render_options();
        assert!(options.dark_mode);
        assert_eq!(options.font_size_pt, 16.0);
    }
}
