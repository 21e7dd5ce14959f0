use std::borrow::Cow;
use std::fmt;

use crate::direction::Direction;

/// Keyboard layout currently shown by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyboardMode {
    Alphabetic,
    Numeric,
    Symbolic,
    Emoji,
}

impl KeyboardMode {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "alphabetic" => Some(Self::Alphabetic),
            "numeric" => Some(Self::Numeric),
            "symbolic" => Some(Self::Symbolic),
            "emoji" => Some(Self::Emoji),
            _ => None,
        }
    }
}

/// Identity of the key a touch started on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyId {
    Character(char),
    Backspace,
    /// The primary (return) key.
    Enter,
    Space,
    /// A key that switches the keyboard layout.
    KeyboardMode(KeyboardMode),
    /// Any key without swipe support (shift, globe, custom buttons).
    Other(String),
}

pub(crate) const BACKSPACE_BASE: &str = "backspace";
pub(crate) const ENTER_BASE: &str = "enter";
pub(crate) const SPACE_BASE: &str = "space";
pub(crate) const NUMERIC_TOGGLE_BASE: &str = "123";

impl KeyId {
    /// Base name used in mapping-table keys, given the layout currently shown.
    ///
    /// The numeric toggle only has a base on the alphabetic layout; keys that
    /// never carry swipe actions return `None`.
    pub fn mapping_base(&self, mode: KeyboardMode) -> Option<Cow<'static, str>> {
        match self {
            Self::Character(c) => Some(Cow::Owned(c.to_lowercase().collect())),
            Self::Backspace => Some(Cow::Borrowed(BACKSPACE_BASE)),
            Self::Enter => Some(Cow::Borrowed(ENTER_BASE)),
            Self::Space => Some(Cow::Borrowed(SPACE_BASE)),
            Self::KeyboardMode(KeyboardMode::Numeric) if mode == KeyboardMode::Alphabetic => {
                Some(Cow::Borrowed(NUMERIC_TOGGLE_BASE))
            }
            Self::KeyboardMode(_) | Self::Other(_) => None,
        }
    }

    /// Full mapping-table key for a swipe on this key, e.g. `e_SlideUp`.
    pub fn mapping_key(&self, direction: Direction, mode: KeyboardMode) -> Option<String> {
        self.mapping_base(mode)
            .map(|base| format!("{}{}", base, direction.suffix()))
    }

    /// Parse a key name as written in traces and on the command line.
    ///
    /// Single characters are character keys; `backspace`, `enter`, `space`
    /// and `123` name the fixed keys.
    pub fn from_name(name: &str) -> KeyId {
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return KeyId::Character(c);
        }
        match name {
            BACKSPACE_BASE => KeyId::Backspace,
            ENTER_BASE | "return" => KeyId::Enter,
            SPACE_BASE => KeyId::Space,
            NUMERIC_TOGGLE_BASE => KeyId::KeyboardMode(KeyboardMode::Numeric),
            "abc" => KeyId::KeyboardMode(KeyboardMode::Alphabetic),
            "#+=" => KeyId::KeyboardMode(KeyboardMode::Symbolic),
            "emoji" => KeyId::KeyboardMode(KeyboardMode::Emoji),
            other => KeyId::Other(other.to_string()),
        }
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Character(c) => write!(f, "{c}"),
            Self::Backspace => f.write_str(BACKSPACE_BASE),
            Self::Enter => f.write_str(ENTER_BASE),
            Self::Space => f.write_str(SPACE_BASE),
            Self::KeyboardMode(m) => write!(f, "mode({m:?})"),
            Self::Other(name) => f.write_str(name),
        }
    }
}
