use keyswipe_core::{classify, Direction, KeyId, Point, Sensitivity, Steps};

/// One touch-move tick delivered by the host.
#[derive(Debug, Clone, Copy)]
pub struct DragSample<'a> {
    pub key: &'a KeyId,
    /// Where the finger first touched down. A changed start means a new drag.
    pub start: Point,
    pub current: Point,
}

/// How horizontal movement on the active key is dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalMode {
    /// Fire the mapped action at most once per drag.
    Discrete,
    /// Report every change of the horizontal step count (cursor scrubbing).
    Continuous,
}

/// Per-sample parameters chosen by the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionParams {
    pub sensitivity_x: Sensitivity,
    pub sensitivity_y: Sensitivity,
    pub horizontal: HorizontalMode,
}

/// Effect requested by the session for one sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwipeEvent {
    /// First qualifying step of a drag; resolve through the mapping table.
    Discrete {
        key: KeyId,
        direction: Direction,
        steps: Steps,
    },
    /// Horizontal step count changed by `delta` (same sign convention as
    /// [`Steps`]: positive means the finger moved left).
    Continuous {
        key: KeyId,
        direction: Direction,
        delta: i32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    /// Tracking a drag that has not produced an effect yet.
    Active,
    /// The discrete action has fired; further steps are swallowed.
    Fired,
    /// Continuous events have been emitted and may keep coming.
    ContinuouslyFiring,
}

/// State of the finger-drag currently in progress.
///
/// A value type: [`update`](Self::update) and [`end`](Self::end) consume the
/// session and return the next one. One instance is shared by every key of a
/// swipe surface, which is safe because the host delivers a single drag at a
/// time; a changed start point always forces a full reset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GestureSession {
    active_key: Option<KeyId>,
    start: Option<Point>,
    /// Last discretised step counts, never raw points.
    last: Steps,
    fired: bool,
    dragging: bool,
}

impl GestureSession {
    pub fn new() -> Self {
        Self::default()
    }

    fn begin(sample: &DragSample<'_>) -> Self {
        Self {
            active_key: Some(sample.key.clone()),
            start: Some(sample.start),
            ..Self::default()
        }
    }

    pub fn phase(&self) -> SessionPhase {
        match (self.start, self.fired, self.dragging) {
            (None, _, _) => SessionPhase::Idle,
            (Some(_), true, _) => SessionPhase::Fired,
            (Some(_), false, true) => SessionPhase::ContinuouslyFiring,
            (Some(_), false, false) => SessionPhase::Active,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.start.is_none()
    }

    /// True once any step of this drag produced an effect; the coordinator
    /// uses it to suppress the key's release action.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    pub fn active_key(&self) -> Option<&KeyId> {
        self.active_key.as_ref()
    }

    pub fn start(&self) -> Option<Point> {
        self.start
    }

    pub fn last_steps(&self) -> Steps {
        self.last
    }

    /// Feed one sample. Samples must arrive in temporal order.
    #[must_use]
    pub fn update(
        self,
        sample: &DragSample<'_>,
        params: &SessionParams,
    ) -> (Self, Option<SwipeEvent>) {
        let mut next = if self.start == Some(sample.start) {
            self
        } else {
            Self::begin(sample)
        };

        let steps = Steps::between(
            sample.start,
            sample.current,
            params.sensitivity_x,
            params.sensitivity_y,
        );
        if steps == next.last {
            return (next, None);
        }

        let event = match params.horizontal {
            HorizontalMode::Continuous if steps.x != next.last.x => {
                let delta = steps.x - next.last.x;
                next.dragging = true;
                Some(SwipeEvent::Continuous {
                    key: sample.key.clone(),
                    direction: if delta > 0 {
                        Direction::Left
                    } else {
                        Direction::Right
                    },
                    delta,
                })
            }
            // Only the vertical count changed; a vertical swipe on a
            // continuous key still fires its discrete mapping.
            HorizontalMode::Continuous if steps.x != 0 => None,
            _ => next.discrete(sample.key, steps),
        };

        next.last = steps;
        (next, event)
    }

    fn discrete(&mut self, key: &KeyId, steps: Steps) -> Option<SwipeEvent> {
        if self.fired {
            return None;
        }
        let direction = classify(steps)?;
        self.fired = true;
        self.dragging = true;
        Some(SwipeEvent::Discrete {
            key: key.clone(),
            direction,
            steps,
        })
    }

    /// Touch-up. Always returns an idle session, whatever happened before.
    #[must_use]
    pub fn end(self) -> Self {
        Self::default()
    }
}
