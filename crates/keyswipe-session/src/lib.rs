//! Stateful swipe recognition for the soft keyboard.
//!
//! `GestureSession` turns ordered touch-move samples into at most one discrete
//! swipe per drag (or a stream of cursor deltas on the space bar), and
//! `GestureCoordinator` dispatches those through the mapping table while
//! keeping a finished swipe from also firing the key's release action.

mod coordinator;
mod executor;
mod gesture;
mod session;

#[cfg(test)]
mod tests;

pub use coordinator::GestureCoordinator;
pub use executor::{perform, ActionExecutor, FeedbackHandler, KeyboardContext, KeyboardHost};
pub use gesture::{default_action, DefaultAction, KeyGesture, KeyboardBehavior, StandardBehavior};
pub use session::{
    DragSample, GestureSession, HorizontalMode, SessionParams, SessionPhase, SwipeEvent,
};
