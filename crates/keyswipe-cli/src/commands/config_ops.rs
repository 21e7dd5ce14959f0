use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use keyswipe_core::settings::{default_settings, default_toml, parse_settings_toml};
use keyswipe_core::{Settings, SettingsError};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

/// Read and validate a settings file.
pub fn read_settings(path: &Path) -> Result<Settings, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_settings_toml(&content)?)
}

/// Settings from `file`, or the embedded defaults. Exits on error.
pub fn load_settings(file: Option<&str>) -> Settings {
    match file {
        Some(file) => die!(read_settings(Path::new(file)), "Error: {}"),
        None => default_settings().clone(),
    }
}

pub fn summary(s: &Settings) -> String {
    format!(
        "OK: swipe.enabled={}, swipe.space_continuous={}, swipe.sensitivity_x={}, swipe.sensitivity_y={}, mapping={} entries",
        s.swipe.enabled,
        s.swipe.space_continuous,
        s.swipe.sensitivity_x.points(),
        s.swipe.sensitivity_y.points(),
        s.mapping.len()
    )
}

pub fn settings_export() {
    print!("{}", default_toml());
}

pub fn settings_validate(file: &str) {
    let s = die!(read_settings(Path::new(file)), "Error: {}");
    println!("{}", summary(&s));
}
