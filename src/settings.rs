use std::path::{Path, PathBuf};
use std::time::Duration;

use eframe::egui::Color32;
use serde::Deserialize;

use crate::morph::MorphTiming;
use crate::render::FieldSettings;

/// Returns the path to the settings file: `~/.config/shape-morph/settings.json`
fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("shape-morph");
    path.push("settings.json");
    path
}

/// Animation and display tuning.
///
/// Read from JSON in the platform config directory if present. The file is
/// never written; the app keeps no state between runs.
/// Fields use `#[serde(default)]` so a partial file only overrides the
/// values it names.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    // Timing (milliseconds)
    pub morph_ms: u64,
    pub intro_morph_ms: u64,
    pub intro_hold_ms: u64,
    pub intro_lead_ms: u64,
    pub float_period_ms: u64,

    // Field
    pub particle_radius: f32,
    pub link_width: f32,
    pub link_threshold: f32,
    pub scale_fraction: f32,

    // Color (stored as u8 triples since Color32 isn't serde-friendly)
    pub color_r: u8,
    pub color_g: u8,
    pub color_b: u8,
    pub link_alpha: u8,
    pub background_r: u8,
    pub background_g: u8,
    pub background_b: u8,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            morph_ms: 800,
            intro_morph_ms: 500,
            intro_hold_ms: 300,
            intro_lead_ms: 600,
            float_period_ms: 3000,

            particle_radius: 2.5,
            link_width: 1.0,
            link_threshold: 0.2,
            scale_fraction: 0.7,

            color_r: 120,
            color_g: 200,
            color_b: 255,
            link_alpha: 50,
            background_r: 12,
            background_g: 16,
            background_b: 28,
        }
    }
}

impl AppSettings {
    /// Load settings from the config directory, falling back to defaults on any error.
    pub fn load() -> Self {
        Self::load_from(&settings_path())
    }

    /// Load settings from `path`, falling back to defaults on any error.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Failed to parse settings ({}), using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                log::info!("No settings file found ({}), using defaults", e);
                Self::default()
            }
        }
    }

    pub fn timing(&self) -> MorphTiming {
        MorphTiming {
            morph: Duration::from_millis(self.morph_ms),
            intro_morph: Duration::from_millis(self.intro_morph_ms),
            intro_hold: Duration::from_millis(self.intro_hold_ms),
            intro_lead: Duration::from_millis(self.intro_lead_ms),
            float_period: Duration::from_millis(self.float_period_ms),
        }
    }

    pub fn field(&self) -> FieldSettings {
        FieldSettings {
            color: Color32::from_rgb(self.color_r, self.color_g, self.color_b),
            link_color: Color32::from_rgba_unmultiplied(
                self.color_r,
                self.color_g,
                self.color_b,
                self.link_alpha,
            ),
            background: Color32::from_rgb(self.background_r, self.background_g, self.background_b),
            particle_radius: self.particle_radius,
            link_width: self.link_width,
            link_threshold: self.link_threshold,
            scale_fraction: self.scale_fraction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_component_defaults() {
        let settings = AppSettings::default();
        assert_eq!(settings.timing(), MorphTiming::default());

        let field = settings.field();
        let expected = FieldSettings::default();
        assert_eq!(field.color, expected.color);
        assert_eq!(field.link_color, expected.link_color);
        assert_eq!(field.background, expected.background);
        assert_eq!(field.link_threshold, expected.link_threshold);
        assert_eq!(field.scale_fraction, expected.scale_fraction);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings: AppSettings = serde_json::from_str(r#"{ "morph_ms": 1200 }"#).unwrap();
        assert_eq!(settings.morph_ms, 1200);
        assert_eq!(settings.intro_morph_ms, 500);
        assert_eq!(settings.timing().morph, Duration::from_millis(1200));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("shape-morph-does-not-exist/settings.json");
        assert_eq!(AppSettings::load_from(&path), AppSettings::default());
    }
}
