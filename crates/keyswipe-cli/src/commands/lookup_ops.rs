use std::process;

use keyswipe_core::{Action, Direction, KeyId, KeyboardMode, Settings};

use super::config_ops::load_settings;

/// Result of resolving one swipe against the table.
#[derive(Debug, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// The key carries no swipe mapping on this layout.
    NoBase,
    Unmapped(String),
    Mapped(String, &'a Action),
}

pub fn lookup<'a>(
    settings: &'a Settings,
    key: &KeyId,
    direction: Direction,
    mode: KeyboardMode,
) -> Lookup<'a> {
    let Some(mapping_key) = key.mapping_key(direction, mode) else {
        return Lookup::NoBase;
    };
    match settings.mapping.get(&mapping_key) {
        Some(action) => Lookup::Mapped(mapping_key, action),
        None => Lookup::Unmapped(mapping_key),
    }
}

pub fn describe(action: &Action) -> String {
    match action {
        Action::InsertText(text) => format!("text {text:?}"),
        Action::Instruction(i) => format!("instruction {:?} [{}]", i.kind, action.label()),
    }
}

pub fn lookup_cmd(key: &str, direction: &str, settings_file: Option<&str>, mode: KeyboardMode) {
    let Some(direction) = Direction::from_name(direction) else {
        eprintln!("Error: unknown direction {direction:?} (expected up, down, left or right)");
        process::exit(1);
    };
    let settings = load_settings(settings_file);
    let key = KeyId::from_name(key);

    match lookup(&settings, &key, direction, mode) {
        Lookup::NoBase => {
            eprintln!("Error: key {key} has no swipe mapping on the {mode:?} layout");
            process::exit(1);
        }
        Lookup::Unmapped(mapping_key) => println!("{mapping_key} -> (unmapped)"),
        Lookup::Mapped(mapping_key, action) => {
            println!("{mapping_key} -> {}", describe(action));
        }
    }
}
