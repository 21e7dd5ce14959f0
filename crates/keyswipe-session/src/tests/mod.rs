mod suppression;

use std::collections::HashMap;

use keyswipe_core::{
    ActionMappingTable, Instruction, InstructionKind, KeyId, KeyboardMode, Point, Settings,
    SwipeSettings,
};

use crate::{ActionExecutor, FeedbackHandler, GestureCoordinator, KeyGesture, KeyboardContext};

/// One observable call made by the coordinator into its host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Call {
    Insert(String),
    Delete,
    Cursor(i32),
    Mode(KeyboardMode),
    Instruction(String),
    Feedback(KeyGesture),
}

/// Host that records every call. Instructions are handled only when listed
/// in `handles`.
pub(super) struct RecordingHost {
    pub calls: Vec<Call>,
    pub composing: bool,
    pub mode: KeyboardMode,
    pub handles: Vec<InstructionKind>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            composing: false,
            mode: KeyboardMode::Alphabetic,
            handles: Vec::new(),
        }
    }

    /// Calls other than feedback.
    pub fn effects(&self) -> Vec<Call> {
        self.calls
            .iter()
            .filter(|c| !matches!(c, Call::Feedback(_)))
            .cloned()
            .collect()
    }

    pub fn cursor_offsets(&self) -> Vec<i32> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Cursor(n) => Some(*n),
                _ => None,
            })
            .collect()
    }
}

impl ActionExecutor for RecordingHost {
    fn insert_text(&mut self, text: &str) {
        self.calls.push(Call::Insert(text.to_string()));
    }

    fn delete_backward(&mut self) {
        self.calls.push(Call::Delete);
    }

    fn adjust_cursor(&mut self, offset: i32) {
        self.calls.push(Call::Cursor(offset));
    }

    fn switch_keyboard_mode(&mut self, mode: KeyboardMode) {
        self.mode = mode;
        self.calls.push(Call::Mode(mode));
    }

    fn run_functional_instruction(&mut self, instruction: &Instruction) -> bool {
        self.calls
            .push(Call::Instruction(instruction.as_str().to_string()));
        self.handles.contains(&instruction.kind)
    }
}

impl KeyboardContext for RecordingHost {
    fn has_composition(&self) -> bool {
        self.composing
    }

    fn keyboard_mode(&self) -> KeyboardMode {
        self.mode
    }
}

impl FeedbackHandler for RecordingHost {
    fn trigger_feedback(&mut self, gesture: KeyGesture, _key: &KeyId) {
        self.calls.push(Call::Feedback(gesture));
    }
}

/// Settings with sensitivity X = 10, Y = 20 and the given mapping.
pub(super) fn make_settings(pairs: &[(&str, &str)]) -> Settings {
    let raw: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Settings {
        swipe: SwipeSettings::default(),
        mapping: ActionMappingTable::from_raw(&raw).unwrap(),
    }
}

pub(super) fn make_coordinator(pairs: &[(&str, &str)]) -> GestureCoordinator<RecordingHost> {
    GestureCoordinator::new(RecordingHost::new(), make_settings(pairs))
}

/// Drag `key` from `start` through every point in `path`.
pub(super) fn drag(
    c: &mut GestureCoordinator<RecordingHost>,
    key: &KeyId,
    start: (f64, f64),
    path: &[(f64, f64)],
) {
    let start = Point::new(start.0, start.1);
    for &(x, y) in path {
        c.handle_drag(key, start, Point::new(x, y));
    }
}

/// Host sequence for lifting the finger: release, then end of drag.
pub(super) fn lift(c: &mut GestureCoordinator<RecordingHost>, key: &KeyId) {
    c.handle_gesture(KeyGesture::Release, key);
    c.end_drag();
}
