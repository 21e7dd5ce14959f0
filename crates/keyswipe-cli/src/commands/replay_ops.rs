//! Replay a recorded JSONL drag trace through a coordinator.
//!
//! One event per line; blank lines and lines starting with `#` are skipped:
//!
//! ```text
//! {"type":"drag","key":"e","start":{"x":100,"y":100},"current":{"x":100,"y":70}}
//! {"type":"gesture","gesture":"release","key":"e"}
//! {"type":"end"}
//! {"type":"composing","active":true}
//! ```

use std::fmt;
use std::fs;

use serde::{Deserialize, Serialize};
use tracing::debug;

use keyswipe_core::{Instruction, KeyId, KeyboardMode, Point, Settings};
use keyswipe_session::{
    ActionExecutor, FeedbackHandler, GestureCoordinator, KeyGesture, KeyboardContext,
};

use super::config_ops::load_settings;

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum TraceEvent {
    Drag {
        key: String,
        start: Point,
        current: Point,
    },
    End,
    Gesture {
        gesture: String,
        key: String,
    },
    Composing {
        active: bool,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        source: serde_json::Error,
    },
    #[error("line {line}: unknown gesture {name:?}")]
    UnknownGesture { line: usize, name: String },
}

/// One call the coordinator made into the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum HostCall {
    InsertText { text: String },
    DeleteBackward,
    AdjustCursor { offset: i32 },
    SwitchMode { mode: String },
    Instruction { raw: String, handled: bool },
    Feedback { gesture: String, key: String },
}

impl fmt::Display for HostCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsertText { text } => write!(f, "insert {text:?}"),
            Self::DeleteBackward => f.write_str("delete"),
            Self::AdjustCursor { offset } => write!(f, "cursor {offset:+}"),
            Self::SwitchMode { mode } => write!(f, "mode {mode}"),
            Self::Instruction { raw, handled } => {
                let status = if *handled { "handled" } else { "unhandled" };
                write!(f, "instruction {raw} ({status})")
            }
            Self::Feedback { gesture, key } => write!(f, "feedback {gesture} {key}"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ReplayOptions {
    pub composing: bool,
    pub mode: KeyboardMode,
    /// Report functional instructions as handled instead of falling back
    /// to text insertion.
    pub handle_instructions: bool,
}

impl Default for ReplayOptions {
    fn default() -> Self {
        Self {
            composing: false,
            mode: KeyboardMode::Alphabetic,
            handle_instructions: false,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReplayReport {
    pub events: usize,
    pub calls: Vec<HostCall>,
}

struct ReplayHost {
    calls: Vec<HostCall>,
    composing: bool,
    mode: KeyboardMode,
    handle_instructions: bool,
}

impl ActionExecutor for ReplayHost {
    fn insert_text(&mut self, text: &str) {
        self.calls.push(HostCall::InsertText {
            text: text.to_string(),
        });
    }

    fn delete_backward(&mut self) {
        self.calls.push(HostCall::DeleteBackward);
    }

    fn adjust_cursor(&mut self, offset: i32) {
        self.calls.push(HostCall::AdjustCursor { offset });
    }

    fn switch_keyboard_mode(&mut self, mode: KeyboardMode) {
        self.mode = mode;
        self.calls.push(HostCall::SwitchMode {
            mode: format!("{mode:?}"),
        });
    }

    fn run_functional_instruction(&mut self, instruction: &Instruction) -> bool {
        self.calls.push(HostCall::Instruction {
            raw: instruction.as_str().to_string(),
            handled: self.handle_instructions,
        });
        self.handle_instructions
    }
}

impl KeyboardContext for ReplayHost {
    fn has_composition(&self) -> bool {
        self.composing
    }

    fn keyboard_mode(&self) -> KeyboardMode {
        self.mode
    }
}

impl FeedbackHandler for ReplayHost {
    fn trigger_feedback(&mut self, gesture: KeyGesture, key: &KeyId) {
        self.calls.push(HostCall::Feedback {
            gesture: gesture.to_string(),
            key: key.to_string(),
        });
    }
}

/// Drive a fresh coordinator with every event of `trace`.
pub fn replay(
    trace: &str,
    settings: Settings,
    options: &ReplayOptions,
) -> Result<ReplayReport, ReplayError> {
    let host = ReplayHost {
        calls: Vec::new(),
        composing: options.composing,
        mode: options.mode,
        handle_instructions: options.handle_instructions,
    };
    let mut coordinator = GestureCoordinator::new(host, settings);
    let mut events = 0;

    for (idx, raw) in trace.lines().enumerate() {
        let raw = raw.trim();
        if raw.is_empty() || raw.starts_with('#') {
            continue;
        }
        let line = idx + 1;
        let event: TraceEvent =
            serde_json::from_str(raw).map_err(|source| ReplayError::Parse { line, source })?;
        debug!(line, ?event, "replay");
        events += 1;

        match event {
            TraceEvent::Drag {
                key,
                start,
                current,
            } => coordinator.handle_drag(&KeyId::from_name(&key), start, current),
            TraceEvent::End => coordinator.end_drag(),
            TraceEvent::Gesture { gesture, key } => {
                let gesture = KeyGesture::from_name(&gesture)
                    .ok_or(ReplayError::UnknownGesture { line, name: gesture })?;
                coordinator.handle_gesture(gesture, &KeyId::from_name(&key));
            }
            TraceEvent::Composing { active } => coordinator.host_mut().composing = active,
        }
    }

    Ok(ReplayReport {
        events,
        calls: coordinator.into_host().calls,
    })
}

pub fn replay_cmd(
    trace_file: &str,
    settings_file: Option<&str>,
    options: &ReplayOptions,
    json: bool,
) {
    let trace = die!(
        fs::read_to_string(trace_file),
        "Error reading {trace_file}: {}"
    );
    let settings = load_settings(settings_file);
    let report = die!(replay(&trace, settings, options), "Error: {}");

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).expect("JSON serialization failed")
        );
    } else {
        for call in &report.calls {
            println!("{call}");
        }
        println!("({} events, {} calls)", report.events, report.calls.len());
    }
}
