//! Swift-facing swipe engine for the keyboard extension.
//!
//! The gesture logic lives in `keyswipe-core` and `keyswipe-session`; this
//! crate only exports it through UniFFI.

uniffi::setup_scaffolding!();

mod api;
mod trace_init;

pub use api::{
    KsError, KsGesture, KsGestureEngine, KsKey, KsKeyHints, KsKeyboardHost, KsKeyboardMode,
    KsPoint,
};
