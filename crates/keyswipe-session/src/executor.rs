//! Capabilities the gesture core drives but does not implement.
//!
//! The keyboard controller (or its FFI adapter) implements these traits and
//! is injected into the coordinator at construction.

use tracing::debug;

use keyswipe_core::{Action, Instruction, KeyId, KeyboardMode};

use crate::gesture::KeyGesture;

/// Effects a resolved action can have on the document and the keyboard.
pub trait ActionExecutor {
    fn insert_text(&mut self, text: &str);
    fn delete_backward(&mut self);
    /// Move the text cursor by `offset` characters (negative is left).
    fn adjust_cursor(&mut self, offset: i32);
    fn switch_keyboard_mode(&mut self, mode: KeyboardMode);
    /// Returns `false` when the instruction was not handled, in which case
    /// its raw string is inserted as text instead.
    fn run_functional_instruction(&mut self, instruction: &Instruction) -> bool;
}

/// Read-only state of the host keyboard.
pub trait KeyboardContext {
    /// Whether a composition (and therefore a candidate list) is active.
    fn has_composition(&self) -> bool;
    fn keyboard_mode(&self) -> KeyboardMode;
}

/// Haptic/audio feedback for gestures that reach base handling.
pub trait FeedbackHandler {
    fn trigger_feedback(&mut self, gesture: KeyGesture, key: &KeyId) {
        let _ = (gesture, key);
    }
}

/// Everything the coordinator needs from its host.
pub trait KeyboardHost: ActionExecutor + KeyboardContext + FeedbackHandler {}

impl<T: ActionExecutor + KeyboardContext + FeedbackHandler> KeyboardHost for T {}

/// Run a resolved action: instructions first, literal text as the fallback.
pub fn perform<E: ActionExecutor + ?Sized>(executor: &mut E, action: &Action) {
    match action {
        Action::InsertText(text) => executor.insert_text(text),
        Action::Instruction(instruction) => {
            if !executor.run_functional_instruction(instruction) {
                debug!(%instruction, "instruction not handled, inserting as text");
                executor.insert_text(instruction.as_str());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Log {
        handles: bool,
        calls: Vec<String>,
    }

    impl ActionExecutor for Log {
        fn insert_text(&mut self, text: &str) {
            self.calls.push(format!("insert {text}"));
        }
        fn delete_backward(&mut self) {
            self.calls.push("delete".into());
        }
        fn adjust_cursor(&mut self, offset: i32) {
            self.calls.push(format!("cursor {offset}"));
        }
        fn switch_keyboard_mode(&mut self, mode: KeyboardMode) {
            self.calls.push(format!("mode {mode:?}"));
        }
        fn run_functional_instruction(&mut self, instruction: &Instruction) -> bool {
            self.calls.push(format!("run {instruction}"));
            self.handles
        }
    }

    #[test]
    fn text_is_inserted() {
        let mut log = Log::default();
        perform(&mut log, &Action::parse("3").unwrap());
        assert_eq!(log.calls, ["insert 3"]);
    }

    #[test]
    fn handled_instruction_does_not_insert() {
        let mut log = Log {
            handles: true,
            ..Log::default()
        };
        perform(&mut log, &Action::parse("#selectIndex:1").unwrap());
        assert_eq!(log.calls, ["run #selectIndex:1"]);
    }

    #[test]
    fn unhandled_instruction_falls_back_to_text() {
        let mut log = Log::default();
        perform(&mut log, &Action::parse("#左手模式").unwrap());
        assert_eq!(log.calls, ["run #左手模式", "insert #左手模式"]);
    }
}
