use std::sync::Arc;

use keyswipe_core::{Instruction, KeyId, KeyboardMode};
use keyswipe_session::{ActionExecutor, FeedbackHandler, KeyGesture, KeyboardContext};

use super::types::{KsGesture, KsKey, KsKeyboardMode};

/// Keyboard controller implemented on the Swift side.
///
/// Callbacks run on the thread that called into the engine, with the
/// engine locked; they must not call back into the same engine.
#[uniffi::export(with_foreign)]
pub trait KsKeyboardHost: Send + Sync {
    fn insert_text(&self, text: String);
    fn delete_backward(&self);
    fn adjust_cursor(&self, offset: i32);
    fn switch_keyboard_mode(&self, mode: KsKeyboardMode);
    /// Return `false` to have the raw instruction inserted as text.
    fn run_functional_instruction(&self, raw: String) -> bool;
    fn has_composition(&self) -> bool;
    fn keyboard_mode(&self) -> KsKeyboardMode;
    fn trigger_feedback(&self, gesture: KsGesture, key: KsKey);
}

/// Adapts the foreign host to the session traits.
pub(super) struct ForeignHost(pub(super) Arc<dyn KsKeyboardHost>);

impl ActionExecutor for ForeignHost {
    fn insert_text(&mut self, text: &str) {
        self.0.insert_text(text.to_string());
    }

    fn delete_backward(&mut self) {
        self.0.delete_backward();
    }

    fn adjust_cursor(&mut self, offset: i32) {
        self.0.adjust_cursor(offset);
    }

    fn switch_keyboard_mode(&mut self, mode: KeyboardMode) {
        self.0.switch_keyboard_mode(mode.into());
    }

    fn run_functional_instruction(&mut self, instruction: &Instruction) -> bool {
        self.0
            .run_functional_instruction(instruction.as_str().to_string())
    }
}

impl KeyboardContext for ForeignHost {
    fn has_composition(&self) -> bool {
        self.0.has_composition()
    }

    fn keyboard_mode(&self) -> KeyboardMode {
        self.0.keyboard_mode().into()
    }
}

impl FeedbackHandler for ForeignHost {
    fn trigger_feedback(&mut self, gesture: KeyGesture, key: &KeyId) {
        self.0.trigger_feedback(gesture.into(), key.into());
    }
}
