use std::fmt;

use crate::geometry::Steps;

/// Swipe direction resolved from discretised travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// Suffix appended to a key base to form a mapping-table key.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Up => "_SlideUp",
            Self::Down => "_SlideDown",
            Self::Left => "_SlideLeft",
            Self::Right => "_SlideRight",
        }
    }

    /// Single-character arrow used by older configuration files.
    pub fn arrow(self) -> char {
        match self {
            Self::Up => '↑',
            Self::Down => '↓',
            Self::Left => '←',
            Self::Right => '→',
        }
    }

    /// Split a mapping-table key into `(base, direction)`.
    ///
    /// Accepts both the `_Slide*` suffixes and the legacy arrows.
    pub fn split_key(key: &str) -> Option<(&str, Direction)> {
        for dir in Self::ALL {
            if let Some(base) = key.strip_suffix(dir.suffix()) {
                return Some((base, dir));
            }
            if let Some(base) = key.strip_suffix(dir.arrow()) {
                return Some((base, dir));
            }
        }
        None
    }

    /// Parse a direction name as typed on a command line (`up`, `Left`, `↓`...).
    pub fn from_name(name: &str) -> Option<Direction> {
        match name.to_ascii_lowercase().as_str() {
            "up" | "↑" => Some(Self::Up),
            "down" | "↓" => Some(Self::Down),
            "left" | "←" => Some(Self::Left),
            "right" | "→" => Some(Self::Right),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.write_str(name)
    }
}

/// Resolve a direction from step counts, or `None` when neither axis has
/// crossed its threshold.
///
/// When both axes are non-zero the horizontal axis wins. This is a fixed
/// tie-break, not an angle comparison.
pub fn classify(steps: Steps) -> Option<Direction> {
    match (steps.x, steps.y) {
        (0, 0) => None,
        (0, y) => Some(if y > 0 { Direction::Up } else { Direction::Down }),
        (x, _) => Some(if x > 0 {
            Direction::Left
        } else {
            Direction::Right
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn steps(x: i32, y: i32) -> Steps {
        Steps { x, y }
    }

    #[test]
    fn no_direction_without_steps() {
        assert_eq!(classify(Steps::ZERO), None);
    }

    #[test]
    fn single_axis() {
        assert_eq!(classify(steps(0, 1)), Some(Direction::Up));
        assert_eq!(classify(steps(0, -3)), Some(Direction::Down));
        assert_eq!(classify(steps(2, 0)), Some(Direction::Left));
        assert_eq!(classify(steps(-1, 0)), Some(Direction::Right));
    }

    // Pinned: a diagonal crossing both thresholds resolves horizontally even
    // when the vertical travel is much larger.
    #[test]
    fn diagonal_prefers_horizontal() {
        assert_eq!(classify(steps(1, 9)), Some(Direction::Left));
        assert_eq!(classify(steps(-1, -9)), Some(Direction::Right));
        assert_eq!(classify(steps(-1, 4)), Some(Direction::Right));
    }

    #[test]
    fn split_key_suffixes_and_arrows() {
        assert_eq!(Direction::split_key("e_SlideUp"), Some(("e", Direction::Up)));
        assert_eq!(
            Direction::split_key("backspace_SlideDown"),
            Some(("backspace", Direction::Down))
        );
        assert_eq!(Direction::split_key("q←"), Some(("q", Direction::Left)));
        assert_eq!(Direction::split_key("123→"), Some(("123", Direction::Right)));
        assert_eq!(Direction::split_key("e_Slide"), None);
        assert_eq!(Direction::split_key(""), None);
    }

    #[test]
    fn from_name() {
        assert_eq!(Direction::from_name("UP"), Some(Direction::Up));
        assert_eq!(Direction::from_name("→"), Some(Direction::Right));
        assert_eq!(Direction::from_name("north"), None);
    }

    proptest! {
        #[test]
        fn both_axes_always_horizontal(x in prop_oneof![-50i32..=-1, 1i32..=50], y in prop_oneof![-50i32..=-1, 1i32..=50]) {
            let dir = classify(steps(x, y)).unwrap();
            prop_assert!(dir.is_horizontal());
        }

        #[test]
        fn vertical_sign_matches(y in prop_oneof![-50i32..=-1, 1i32..=50]) {
            let dir = classify(steps(0, y)).unwrap();
            prop_assert_eq!(dir, if y > 0 { Direction::Up } else { Direction::Down });
        }
    }
}
