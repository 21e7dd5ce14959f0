//! Swipe settings loaded from TOML.
//!
//! - `parse_settings_toml(content)` validates a user file and builds the
//!   mapping table
//! - `default_settings()` returns `&'static Settings` parsed lazily from the
//!   embedded defaults
//! - Default values are embedded via `include_str!("default_settings.toml")`
//!
//! Settings are plain values: when the user edits them the host parses a new
//! `Settings` and hands it to the coordinator.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::geometry::Sensitivity;
use crate::mapping::ActionMappingTable;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

const DEFAULT_SENSITIVITY_X: Sensitivity = match Sensitivity::new(10) {
    Some(s) => s,
    None => panic!("sensitivity must be positive"),
};
const DEFAULT_SENSITIVITY_Y: Sensitivity = match Sensitivity::new(20) {
    Some(s) => s,
    None => panic!("sensitivity must be positive"),
};

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

/// Get or initialize the parsed defaults.
pub fn default_settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        parse_settings_toml(DEFAULT_SETTINGS_TOML).expect("embedded settings TOML must be valid")
    })
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("invalid mapping key {key:?}: {reason}")]
    InvalidMappingKey { key: String, reason: String },
}

/// Validated swipe behaviour switches and thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwipeSettings {
    /// Resolve swipes on any key through the mapping table.
    pub enabled: bool,
    /// Horizontal space-bar drags scrub the cursor while nothing is composed.
    pub space_continuous: bool,
    pub sensitivity_x: Sensitivity,
    pub sensitivity_y: Sensitivity,
}

impl Default for SwipeSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            space_continuous: true,
            sensitivity_x: DEFAULT_SENSITIVITY_X,
            sensitivity_y: DEFAULT_SENSITIVITY_Y,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    pub swipe: SwipeSettings,
    pub mapping: ActionMappingTable,
}

#[derive(Deserialize)]
struct RawSettings {
    #[serde(default)]
    swipe: RawSwipe,
    #[serde(default)]
    mapping: HashMap<String, String>,
}

#[derive(Deserialize)]
#[serde(default)]
struct RawSwipe {
    enabled: bool,
    space_continuous: bool,
    sensitivity_x: i64,
    sensitivity_y: i64,
}

impl Default for RawSwipe {
    fn default() -> Self {
        Self {
            enabled: true,
            space_continuous: true,
            sensitivity_x: i64::from(DEFAULT_SENSITIVITY_X.points()),
            sensitivity_y: i64::from(DEFAULT_SENSITIVITY_Y.points()),
        }
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let raw: RawSettings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;

    let swipe = SwipeSettings {
        enabled: raw.swipe.enabled,
        space_continuous: raw.swipe.space_continuous,
        sensitivity_x: sensitivity("swipe.sensitivity_x", raw.swipe.sensitivity_x)?,
        sensitivity_y: sensitivity("swipe.sensitivity_y", raw.swipe.sensitivity_y)?,
    };
    let mapping = ActionMappingTable::from_raw(&raw.mapping)?;
    tracing::debug!(entries = mapping.len(), "parsed swipe settings");

    Ok(Settings { swipe, mapping })
}

fn sensitivity(field: &str, value: i64) -> Result<Sensitivity, SettingsError> {
    u32::try_from(value)
        .ok()
        .and_then(Sensitivity::new)
        .ok_or_else(|| SettingsError::InvalidValue {
            field: field.to_string(),
            reason: "must be a positive number of points".to_string(),
        })
}
