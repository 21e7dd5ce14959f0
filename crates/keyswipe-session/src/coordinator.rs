use tracing::{debug, debug_span};

use keyswipe_core::{KeyHints, KeyId, Point, Settings};

use crate::executor::{perform, KeyboardHost};
use crate::gesture::{default_action, KeyGesture, KeyboardBehavior, StandardBehavior};
use crate::session::{DragSample, GestureSession, HorizontalMode, SessionParams, SwipeEvent};

/// Joins the swipe session with the keyboard's press/release handling.
///
/// The host reports touch-move ticks through [`handle_drag`](Self::handle_drag),
/// base gestures through [`handle_gesture`](Self::handle_gesture), and
/// touch-up through [`end_drag`](Self::end_drag). On touch-up the release
/// gesture must be delivered before `end_drag`, otherwise the drag state that
/// suppresses it is already gone.
pub struct GestureCoordinator<H, B = StandardBehavior> {
    host: H,
    behavior: B,
    settings: Settings,
    session: GestureSession,
}

impl<H: KeyboardHost> GestureCoordinator<H> {
    pub fn new(host: H, settings: Settings) -> Self {
        Self::with_behavior(host, settings, StandardBehavior)
    }
}

impl<H: KeyboardHost, B: KeyboardBehavior> GestureCoordinator<H, B> {
    pub fn with_behavior(host: H, settings: Settings, behavior: B) -> Self {
        Self {
            host,
            behavior,
            settings,
            session: GestureSession::new(),
        }
    }

    /// Replace settings after the user edited them. A drag in progress keeps
    /// its state and continues with the new thresholds and table.
    pub fn apply_settings(&mut self, settings: Settings) {
        debug!(entries = settings.mapping.len(), "settings applied");
        self.settings = settings;
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn session(&self) -> &GestureSession {
        &self.session
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_dragging()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    /// Swipe labels for `key` on the layout currently shown.
    pub fn key_hints(&self, key: &KeyId) -> KeyHints {
        key.mapping_base(self.host.keyboard_mode())
            .map(|base| self.settings.mapping.hints(&base))
            .unwrap_or_default()
    }

    /// Touch-move tick for `key`.
    pub fn handle_drag(&mut self, key: &KeyId, start: Point, current: Point) {
        let swipe = self.settings.swipe;
        let is_space = *key == KeyId::Space;
        let accepted = if is_space {
            swipe.enabled || swipe.space_continuous
        } else {
            swipe.enabled
        };
        if !accepted {
            return;
        }
        let _span = debug_span!("handle_drag", %key).entered();

        let horizontal = if is_space && swipe.space_continuous && !self.host.has_composition() {
            HorizontalMode::Continuous
        } else {
            HorizontalMode::Discrete
        };
        let params = SessionParams {
            sensitivity_x: swipe.sensitivity_x,
            sensitivity_y: swipe.sensitivity_y,
            horizontal,
        };
        let sample = DragSample {
            key,
            start,
            current,
        };

        let (session, event) = std::mem::take(&mut self.session).update(&sample, &params);
        self.session = session;
        if let Some(event) = event {
            self.dispatch(event);
        }
    }

    /// Touch-up. Unconditional and idempotent.
    pub fn end_drag(&mut self) {
        self.session = std::mem::take(&mut self.session).end();
    }

    /// Base gesture for `key`. A release that ends a drag which already
    /// produced an effect is dropped.
    pub fn handle_gesture(&mut self, gesture: KeyGesture, key: &KeyId) {
        let _span = debug_span!("handle_gesture", %gesture, %key).entered();

        if gesture == KeyGesture::Release && self.session.is_dragging() {
            debug!("release suppressed after swipe");
            return;
        }

        self.host.trigger_feedback(gesture, key);
        if let Some(action) = default_action(gesture, key) {
            action.apply(&mut self.host);
        }

        let current = self.host.keyboard_mode();
        if let Some(mode) = self.behavior.preferred_mode_after(gesture, key, current) {
            if mode != current {
                self.host.switch_keyboard_mode(mode);
            }
        }
    }

    fn dispatch(&mut self, event: SwipeEvent) {
        match event {
            SwipeEvent::Discrete {
                key,
                direction,
                steps,
            } => {
                let _span = debug_span!("swipe", %key, %direction).entered();
                if !self.settings.swipe.enabled {
                    debug!("swipe mapping disabled");
                    return;
                }
                let mode = self.host.keyboard_mode();
                match self.settings.mapping.lookup(&key, direction, mode) {
                    Some(action) => {
                        debug!(action = action.as_str(), ?steps, "sliding action mapping");
                        perform(&mut self.host, action);
                    }
                    None => debug!(?steps, "no mapping"),
                }
            }
            SwipeEvent::Continuous { delta, .. } => {
                // A finger moving left yields positive steps; the cursor
                // follows the finger.
                debug!(delta, "space drag");
                self.host.adjust_cursor(-delta);
            }
        }
    }
}
