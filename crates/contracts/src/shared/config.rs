//! Application configuration.
//!
//! Defaults are compiled in. The frontend may fetch an override file in the
//! same TOML layout as [`DEFAULT_CONFIG`]; every key of the override is
//! optional and missing keys keep their default.

use crate::domain::a001_destination::{Coordinates, Destination};
use crate::shared::map::Viewport;
use serde::{Deserialize, Serialize};

/// Path of the optional override file, relative to the site root
pub const CONFIG_OVERRIDE_PATH: &str = "/peta_config.toml";

/// Default configuration in its file form
pub const DEFAULT_CONFIG: &str = r#"
[data]
url = "/story_map_indonesia.json"

[map]
center = [-2.5489, 118.0149]
zoom = 5
focus_zoom = 12
fit_padding = 0.1
library_timeout_ms = 5000

[tiles]
url = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png"
attribution = '&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors'
max_zoom = 18

[logging]
level = "debug"
"#;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub data: DataConfig,
    pub map: MapConfig,
    pub tiles: TileConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Location of the destination JSON file
    pub url: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            url: "/story_map_indonesia.json".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Initial center, roughly the middle of the archipelago
    pub center: Coordinates,
    pub zoom: u8,
    /// Zoom used when a destination gets selected
    pub focus_zoom: u8,
    /// Extra margin around the markers when fitting bounds, as a ratio
    pub fit_padding: f64,
    /// How long to wait for the map library before giving up
    pub library_timeout_ms: u32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: Coordinates::new(-2.5489, 118.0149),
            zoom: 5,
            focus_zoom: 12,
            fit_padding: 0.1,
            library_timeout_ms: 5000,
        }
    }
}

impl MapConfig {
    pub fn initial_viewport(&self) -> Viewport {
        Viewport::new(self.center, self.zoom)
    }

    /// Viewport after `destination` has been selected
    pub fn focus_viewport(&self, destination: &Destination) -> Viewport {
        Viewport::new(destination.coordinates, self.focus_zoom)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileConfig {
    /// Tile URL template with `{s}`, `{z}`, `{x}`, `{y}` placeholders
    pub url: String,
    pub attribution: String,
    pub max_zoom: u8,
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".into(),
            attribution: r#"&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors"#.into(),
            max_zoom: 18,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `error`, `warn`, `info`, `debug`, `trace` or `off`
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "debug".into(),
        }
    }
}

impl AppConfig {
    /// Parse a configuration file, filling missing keys with defaults
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.data.url.trim().is_empty() {
            anyhow::bail!("data.url must not be empty");
        }
        if self.map.zoom > self.tiles.max_zoom || self.map.focus_zoom > self.tiles.max_zoom {
            anyhow::bail!(
                "map zoom levels must not exceed tiles.max_zoom ({})",
                self.tiles.max_zoom
            );
        }
        if !(0.0..=1.0).contains(&self.map.fit_padding) {
            anyhow::bail!("map.fit_padding must be between 0 and 1");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = AppConfig::from_toml_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        assert_eq!(config.unwrap(), AppConfig::default());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [data]
            url = "/data/lokasi.json"

            [map]
            focus_zoom = 14
            "#,
        )
        .unwrap();
        assert_eq!(config.data.url, "/data/lokasi.json");
        assert_eq!(config.map.focus_zoom, 14);
        assert_eq!(config.map.zoom, 5);
        assert_eq!(config.tiles, TileConfig::default());
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(AppConfig::from_toml_str("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        assert!(AppConfig::from_toml_str("[map]\nzoom = \"five\"").is_err());
        assert!(AppConfig::from_toml_str("[map]\nfocus_zoom = 30").is_err());
        assert!(AppConfig::from_toml_str("[data]\nurl = \"\"").is_err());
        assert!(AppConfig::from_toml_str("[map]\nfit_padding = 2.0").is_err());
    }

    #[test]
    fn test_viewports() {
        let map = MapConfig::default();
        let initial = map.initial_viewport();
        assert_eq!(initial.center, Coordinates::new(-2.5489, 118.0149));
        assert_eq!(initial.zoom, 5);

        let focus = map.focus_viewport(&Destination::fallback());
        assert_eq!(focus.center, Coordinates::new(-6.1704, 106.8272));
        assert_eq!(focus.zoom, 12);
    }
}
