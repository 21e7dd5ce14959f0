//! Screen geometry and threshold discretisation.
//!
//! Touch samples arrive as floating-point screen coordinates (Y grows
//! downward). Each axis is discretised into integer "steps" of a configured
//! number of points so that sub-threshold jitter never produces an event.

use std::num::NonZeroU32;

use serde::Deserialize;

/// A screen coordinate in points.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Points a finger has to travel on one axis to register one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sensitivity(NonZeroU32);

impl Sensitivity {
    /// Returns `None` for zero, which would make every movement infinite.
    pub const fn new(points: u32) -> Option<Self> {
        match NonZeroU32::new(points) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    pub const fn points(self) -> u32 {
        self.0.get()
    }
}

/// Number of whole sensitivity units in `delta`, truncated toward zero.
///
/// `|delta| < sensitivity.points()` always yields 0.
pub fn step(delta: f64, sensitivity: Sensitivity) -> i32 {
    let raw = (delta / f64::from(sensitivity.points())).trunc();
    // `as` saturates on overflow and maps NaN to 0.
    raw as i32
}

/// Discretised travel on both axes since the gesture started.
///
/// Signs follow `start - current`: a finger moving up gives positive `y`,
/// a finger moving left gives positive `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Steps {
    pub x: i32,
    pub y: i32,
}

impl Steps {
    pub const ZERO: Steps = Steps { x: 0, y: 0 };

    pub fn between(start: Point, current: Point, sx: Sensitivity, sy: Sensitivity) -> Self {
        Self {
            x: step(start.x - current.x, sx),
            y: step(start.y - current.y, sy),
        }
    }

    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sens(points: u32) -> Sensitivity {
        Sensitivity::new(points).unwrap()
    }

    #[test]
    fn zero_sensitivity_rejected() {
        assert!(Sensitivity::new(0).is_none());
        assert_eq!(sens(20).points(), 20);
    }

    #[test]
    fn step_truncates_toward_zero() {
        assert_eq!(step(22.0, sens(20)), 1);
        assert_eq!(step(39.9, sens(20)), 1);
        assert_eq!(step(40.0, sens(20)), 2);
        assert_eq!(step(-22.0, sens(20)), -1);
        assert_eq!(step(-19.99, sens(20)), 0);
    }

    #[test]
    fn step_non_finite_is_zero() {
        assert_eq!(step(f64::NAN, sens(10)), 0);
    }

    #[test]
    fn steps_follow_start_minus_current() {
        let start = Point::new(100.0, 100.0);
        // finger moved up and to the left
        let s = Steps::between(start, Point::new(80.0, 78.0), sens(10), sens(20));
        assert_eq!(s, Steps { x: 2, y: 1 });
        // finger moved down and to the right
        let s = Steps::between(start, Point::new(125.0, 141.0), sens(10), sens(20));
        assert_eq!(s, Steps { x: -2, y: -2 });
    }

    proptest! {
        #[test]
        fn sub_threshold_delta_is_zero(points in 1u32..200, frac in -0.999f64..0.999) {
            let s = sens(points);
            let delta = frac * f64::from(points);
            prop_assert_eq!(step(delta, s), 0);
        }

        #[test]
        fn step_sign_matches_delta(points in 1u32..200, delta in -5000.0f64..5000.0) {
            let n = step(delta, sens(points));
            if n != 0 {
                prop_assert_eq!(n.signum() as f64, delta.signum());
            }
        }
    }
}
