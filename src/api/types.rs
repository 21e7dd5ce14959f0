use keyswipe_core::{KeyHints, KeyId, KeyboardMode, Point};
use keyswipe_session::KeyGesture;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum KsError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A touch location in points.
#[derive(Clone, Copy, Debug, uniffi::Record)]
pub struct KsPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, Default, PartialEq, uniffi::Record)]
pub struct KsKeyHints {
    pub up: Option<String>,
    pub down: Option<String>,
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum KsKeyboardMode {
    Alphabetic,
    Numeric,
    Symbolic,
    Emoji,
}

/// Key a touch started on. `Character` carries a single character; an
/// empty or longer string is treated as a key without swipe support.
#[derive(Clone, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum KsKey {
    Character { value: String },
    Backspace,
    Enter,
    Space,
    KeyboardMode { mode: KsKeyboardMode },
    Other { name: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum KsGesture {
    Press,
    Release,
    LongPress,
    DoubleTap,
    RepeatPress,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

impl From<KsPoint> for Point {
    fn from(p: KsPoint) -> Self {
        Point::new(p.x, p.y)
    }
}

impl From<KeyHints> for KsKeyHints {
    fn from(h: KeyHints) -> Self {
        Self {
            up: h.up,
            down: h.down,
        }
    }
}

impl From<KsKeyboardMode> for KeyboardMode {
    fn from(m: KsKeyboardMode) -> Self {
        match m {
            KsKeyboardMode::Alphabetic => KeyboardMode::Alphabetic,
            KsKeyboardMode::Numeric => KeyboardMode::Numeric,
            KsKeyboardMode::Symbolic => KeyboardMode::Symbolic,
            KsKeyboardMode::Emoji => KeyboardMode::Emoji,
        }
    }
}

impl From<KeyboardMode> for KsKeyboardMode {
    fn from(m: KeyboardMode) -> Self {
        match m {
            KeyboardMode::Alphabetic => KsKeyboardMode::Alphabetic,
            KeyboardMode::Numeric => KsKeyboardMode::Numeric,
            KeyboardMode::Symbolic => KsKeyboardMode::Symbolic,
            KeyboardMode::Emoji => KsKeyboardMode::Emoji,
        }
    }
}

impl From<KsKey> for KeyId {
    fn from(key: KsKey) -> Self {
        match key {
            KsKey::Character { value } => {
                let mut chars = value.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyId::Character(c),
                    _ => KeyId::Other(value),
                }
            }
            KsKey::Backspace => KeyId::Backspace,
            KsKey::Enter => KeyId::Enter,
            KsKey::Space => KeyId::Space,
            KsKey::KeyboardMode { mode } => KeyId::KeyboardMode(mode.into()),
            KsKey::Other { name } => KeyId::Other(name),
        }
    }
}

impl From<&KeyId> for KsKey {
    fn from(key: &KeyId) -> Self {
        match key {
            KeyId::Character(c) => KsKey::Character {
                value: c.to_string(),
            },
            KeyId::Backspace => KsKey::Backspace,
            KeyId::Enter => KsKey::Enter,
            KeyId::Space => KsKey::Space,
            KeyId::KeyboardMode(mode) => KsKey::KeyboardMode {
                mode: (*mode).into(),
            },
            KeyId::Other(name) => KsKey::Other { name: name.clone() },
        }
    }
}

impl From<KsGesture> for KeyGesture {
    fn from(g: KsGesture) -> Self {
        match g {
            KsGesture::Press => KeyGesture::Press,
            KsGesture::Release => KeyGesture::Release,
            KsGesture::LongPress => KeyGesture::LongPress,
            KsGesture::DoubleTap => KeyGesture::DoubleTap,
            KsGesture::RepeatPress => KeyGesture::RepeatPress,
        }
    }
}

impl From<KeyGesture> for KsGesture {
    fn from(g: KeyGesture) -> Self {
        match g {
            KeyGesture::Press => KsGesture::Press,
            KeyGesture::Release => KsGesture::Release,
            KeyGesture::LongPress => KsGesture::LongPress,
            KeyGesture::DoubleTap => KsGesture::DoubleTap,
            KeyGesture::RepeatPress => KsGesture::RepeatPress,
        }
    }
}
