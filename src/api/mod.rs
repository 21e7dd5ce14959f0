//! UniFFI export layer: Swift bindings for the swipe engine.
//!
//! Each public type here maps to a generated Swift class, struct, enum or
//! protocol.

mod engine;
mod host;
mod types;

pub use engine::KsGestureEngine;
pub use host::KsKeyboardHost;
pub use types::{KsError, KsGesture, KsKey, KsKeyHints, KsKeyboardMode, KsPoint};

use std::path::Path;

use keyswipe_core::settings::{default_toml, parse_settings_toml};

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

#[uniffi::export]
fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[uniffi::export]
fn settings_default_config() -> String {
    default_toml().to_string()
}

/// Check a settings TOML string without applying it.
#[uniffi::export]
fn settings_validate(toml: String) -> Result<(), KsError> {
    parse_settings_toml(&toml)
        .map(|_| ())
        .map_err(|e| KsError::InvalidData { msg: e.to_string() })
}

#[uniffi::export]
fn trace_init(log_dir: String) {
    crate::trace_init::init_tracing(Path::new(&log_dir));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(settings_validate(settings_default_config()).is_ok());
    }

    #[test]
    fn bad_mapping_key_is_invalid_data() {
        let err = settings_validate("[mapping]\n\"e_Slide\" = \"3\"\n".into()).unwrap_err();
        assert!(err.to_string().starts_with("invalid data:"));
    }
}
