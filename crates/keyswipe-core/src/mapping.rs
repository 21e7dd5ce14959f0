//! Read-only lookup from `(key, direction)` to a parsed [`Action`].

use std::collections::HashMap;

use crate::action::Action;
use crate::direction::Direction;
use crate::key::{KeyId, KeyboardMode};
use crate::settings::SettingsError;

/// Swipe labels for one key, as drawn above/below its main legend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyHints {
    pub up: Option<String>,
    pub down: Option<String>,
}

/// Mapping table keyed by `base + direction suffix` (e.g. `e_SlideUp`).
///
/// Empty values are dropped at build time, so every stored entry has an
/// effect. Legacy arrow suffixes are rewritten to the `_Slide*` form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionMappingTable {
    entries: HashMap<String, Action>,
}

impl ActionMappingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw configuration strings.
    pub fn from_raw<'a, I>(raw: I) -> Result<Self, SettingsError>
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let mut entries = HashMap::new();
        for (key, value) in raw {
            let Some((base, direction)) = Direction::split_key(key) else {
                return Err(SettingsError::InvalidMappingKey {
                    key: key.clone(),
                    reason: "must end in _SlideUp, _SlideDown, _SlideLeft or _SlideRight"
                        .to_string(),
                });
            };
            if base.is_empty() {
                return Err(SettingsError::InvalidMappingKey {
                    key: key.clone(),
                    reason: "missing key name before the direction".to_string(),
                });
            }
            if let Some(action) = Action::parse(value) {
                entries.insert(format!("{}{}", base, direction.suffix()), action);
            }
        }
        Ok(Self { entries })
    }

    /// Insert or replace one entry; an empty value removes it.
    pub fn insert(&mut self, base: &str, direction: Direction, value: &str) {
        let key = format!("{}{}", base, direction.suffix());
        match Action::parse(value) {
            Some(action) => {
                self.entries.insert(key, action);
            }
            None => {
                self.entries.remove(&key);
            }
        }
    }

    /// Look up by a full table key such as `backspace_SlideDown`.
    pub fn get(&self, key: &str) -> Option<&Action> {
        self.entries.get(key)
    }

    /// Action configured for a swipe on `key` in `direction`.
    pub fn lookup(&self, key: &KeyId, direction: Direction, mode: KeyboardMode) -> Option<&Action> {
        let table_key = key.mapping_key(direction, mode)?;
        self.entries.get(&table_key)
    }

    /// Labels for the vertical swipes of the key with mapping base `base`.
    pub fn hints(&self, base: &str) -> KeyHints {
        let label = |dir: Direction| {
            self.entries
                .get(&format!("{}{}", base, dir.suffix()))
                .map(Action::label)
                .filter(|l| !l.is_empty())
        };
        KeyHints {
            up: label(Direction::Up),
            down: label(Direction::Down),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Action)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::InstructionKind;

    fn table(pairs: &[(&str, &str)]) -> ActionMappingTable {
        let raw: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ActionMappingTable::from_raw(&raw).unwrap()
    }

    #[test]
    fn lookup_character_key() {
        let t = table(&[("e_SlideUp", "3")]);
        let m = KeyboardMode::Alphabetic;
        assert_eq!(
            t.lookup(&KeyId::Character('E'), Direction::Up, m),
            Some(&Action::InsertText("3".into()))
        );
        assert_eq!(t.lookup(&KeyId::Character('e'), Direction::Down, m), None);
    }

    #[test]
    fn empty_values_are_dropped() {
        let t = table(&[("backspace_SlideDown", ""), ("q_SlideUp", "  ")]);
        assert_eq!(t.len(), 1);
        assert_eq!(t.get("q_SlideUp"), Some(&Action::InsertText("  ".into())));
        assert_eq!(t.hints("q"), KeyHints::default());
        assert_eq!(
            t.lookup(&KeyId::Backspace, Direction::Down, KeyboardMode::Alphabetic),
            None
        );
    }

    #[test]
    fn legacy_arrows_are_normalised() {
        let t = table(&[("a↑", "!"), ("a↓", "#行首")]);
        assert_eq!(t.get("a_SlideUp"), Some(&Action::InsertText("!".into())));
        let Some(Action::Instruction(i)) = t.get("a_SlideDown") else {
            panic!("expected instruction");
        };
        assert_eq!(i.kind, InstructionKind::BeginOfSentence);
    }

    #[test]
    fn invalid_keys_are_rejected() {
        let raw: HashMap<String, String> = [("e_Up".to_string(), "3".to_string())].into();
        let err = ActionMappingTable::from_raw(&raw).unwrap_err();
        assert!(err.to_string().contains("e_Up"));

        let raw: HashMap<String, String> = [("_SlideUp".to_string(), "3".to_string())].into();
        assert!(ActionMappingTable::from_raw(&raw).is_err());
    }

    #[test]
    fn insert_and_remove() {
        let mut t = ActionMappingTable::new();
        t.insert("q", Direction::Left, "#左移");
        assert_eq!(t.len(), 1);
        t.insert("q", Direction::Left, "");
        assert!(t.is_empty());
    }

    #[test]
    fn hints_use_instruction_labels() {
        let t = table(&[
            ("s_SlideUp", "#中英切换"),
            ("s_SlideDown", " ~ "),
            ("d_SlideUp", "#复制"),
        ]);
        assert_eq!(
            t.hints("s"),
            KeyHints {
                up: Some("英".into()),
                down: Some("~".into())
            }
        );
        // instructions without a glyph are not drawn
        assert_eq!(t.hints("d"), KeyHints::default());
    }
}
