//! Building blocks of the swipe engine: geometry and thresholds, direction
//! classification, key identities, parsed actions, the mapping table and
//! TOML settings. Everything here is pure; the stateful session lives in
//! `keyswipe-session`.

pub mod action;
pub mod direction;
pub mod geometry;
pub mod key;
pub mod mapping;
pub mod settings;

pub use action::{Action, Instruction, InstructionKind};
pub use direction::{classify, Direction};
pub use geometry::{step, Point, Sensitivity, Steps};
pub use key::{KeyId, KeyboardMode};
pub use mapping::{ActionMappingTable, KeyHints};
pub use settings::{Settings, SettingsError, SwipeSettings};
