use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use keyswipe_core::settings::{default_settings, parse_settings_toml};
use keyswipe_core::KeyId;
use keyswipe_session::GestureCoordinator;

use super::host::{ForeignHost, KsKeyboardHost};
use super::types::{KsError, KsGesture, KsKey, KsKeyHints, KsPoint};

/// One swipe surface: a coordinator bound to the Swift keyboard controller.
#[derive(uniffi::Object)]
pub struct KsGestureEngine {
    coordinator: Mutex<GestureCoordinator<ForeignHost>>,
}

impl KsGestureEngine {
    fn lock(&self) -> MutexGuard<'_, GestureCoordinator<ForeignHost>> {
        // coordinator state stays consistent even if a host callback panicked
        self.coordinator
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[uniffi::export]
impl KsGestureEngine {
    /// Engine with the embedded default settings.
    #[uniffi::constructor]
    pub fn new(host: Arc<dyn KsKeyboardHost>) -> Arc<Self> {
        let coordinator = GestureCoordinator::new(ForeignHost(host), default_settings().clone());
        Arc::new(Self {
            coordinator: Mutex::new(coordinator),
        })
    }

    /// Engine configured from a settings TOML string.
    #[uniffi::constructor]
    pub fn with_settings(
        host: Arc<dyn KsKeyboardHost>,
        toml: String,
    ) -> Result<Arc<Self>, KsError> {
        let settings =
            parse_settings_toml(&toml).map_err(|e| KsError::InvalidData { msg: e.to_string() })?;
        let coordinator = GestureCoordinator::new(ForeignHost(host), settings);
        Ok(Arc::new(Self {
            coordinator: Mutex::new(coordinator),
        }))
    }

    pub fn handle_drag(&self, key: KsKey, start: KsPoint, current: KsPoint) {
        let key = KeyId::from(key);
        self.lock().handle_drag(&key, start.into(), current.into());
    }

    pub fn end_drag(&self) {
        self.lock().end_drag();
    }

    /// Deliver `Release` before `end_drag` so a finished swipe can suppress it.
    pub fn handle_gesture(&self, gesture: KsGesture, key: KsKey) {
        let key = KeyId::from(key);
        self.lock().handle_gesture(gesture.into(), &key);
    }

    /// Replace settings from TOML. On error the current settings are kept.
    pub fn apply_settings_toml(&self, toml: String) -> Result<(), KsError> {
        let settings =
            parse_settings_toml(&toml).map_err(|e| KsError::InvalidData { msg: e.to_string() })?;
        self.lock().apply_settings(settings);
        Ok(())
    }

    pub fn load_settings(&self, path: String) -> Result<(), KsError> {
        let content = std::fs::read_to_string(&path).map_err(|e| KsError::Io {
            msg: format!("{path}: {e}"),
        })?;
        self.apply_settings_toml(content)
    }

    pub fn is_dragging(&self) -> bool {
        self.lock().is_dragging()
    }

    /// Swipe labels to draw on `key` for the current layout.
    pub fn key_hints(&self, key: KsKey) -> KsKeyHints {
        let key = KeyId::from(key);
        self.lock().key_hints(&key).into()
    }
}
