//! Base key gestures and the default actions they trigger.

use std::fmt;

use keyswipe_core::{KeyId, KeyboardMode};

use crate::executor::ActionExecutor;

/// Non-drag interactions the host reports for a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyGesture {
    Press,
    Release,
    LongPress,
    DoubleTap,
    /// Fired repeatedly while a key is held.
    RepeatPress,
}

impl KeyGesture {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "press" => Some(Self::Press),
            "release" => Some(Self::Release),
            "longPress" | "long_press" => Some(Self::LongPress),
            "doubleTap" | "double_tap" => Some(Self::DoubleTap),
            "repeatPress" | "repeat_press" => Some(Self::RepeatPress),
            _ => None,
        }
    }
}

impl fmt::Display for KeyGesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Press => "press",
            Self::Release => "release",
            Self::LongPress => "longPress",
            Self::DoubleTap => "doubleTap",
            Self::RepeatPress => "repeatPress",
        };
        f.write_str(name)
    }
}

/// What a key does for a gesture when no swipe intervened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultAction {
    InsertText(String),
    DeleteBackward,
    SwitchMode(KeyboardMode),
}

impl DefaultAction {
    pub fn apply<E: ActionExecutor + ?Sized>(&self, executor: &mut E) {
        match self {
            Self::InsertText(text) => executor.insert_text(text),
            Self::DeleteBackward => executor.delete_backward(),
            Self::SwitchMode(mode) => executor.switch_keyboard_mode(*mode),
        }
    }
}

/// Default action for `gesture` on `key`, if any.
///
/// Backspace acts on press (and repeats while held) so deletion feels
/// immediate; text keys act on release so a drag can still cancel them.
pub fn default_action(gesture: KeyGesture, key: &KeyId) -> Option<DefaultAction> {
    match (gesture, key) {
        (KeyGesture::Press | KeyGesture::RepeatPress, KeyId::Backspace) => {
            Some(DefaultAction::DeleteBackward)
        }
        (KeyGesture::Press, KeyId::KeyboardMode(mode)) => Some(DefaultAction::SwitchMode(*mode)),
        (KeyGesture::Release, KeyId::Character(c)) => Some(DefaultAction::InsertText(c.to_string())),
        (KeyGesture::Release, KeyId::Space) => Some(DefaultAction::InsertText(" ".to_string())),
        (KeyGesture::Release, KeyId::Enter) => Some(DefaultAction::InsertText("\n".to_string())),
        _ => None,
    }
}

/// Decides which layout to show after a gesture has been handled.
pub trait KeyboardBehavior {
    fn preferred_mode_after(
        &self,
        gesture: KeyGesture,
        key: &KeyId,
        current: KeyboardMode,
    ) -> Option<KeyboardMode>;
}

/// Returns to the alphabetic layout after a space on the numeric or
/// symbolic layouts; otherwise keeps the current layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardBehavior;

impl KeyboardBehavior for StandardBehavior {
    fn preferred_mode_after(
        &self,
        gesture: KeyGesture,
        key: &KeyId,
        current: KeyboardMode,
    ) -> Option<KeyboardMode> {
        match (gesture, key, current) {
            (
                KeyGesture::Release,
                KeyId::Space,
                KeyboardMode::Numeric | KeyboardMode::Symbolic,
            ) => Some(KeyboardMode::Alphabetic),
            _ => None,
        }
    }
}
