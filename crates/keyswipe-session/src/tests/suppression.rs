use keyswipe_core::{KeyId, KeyboardMode};

use super::*;

#[test]
fn test_tap_inserts_character() {
    let mut c = make_coordinator(&[("e_SlideUp", "3")]);
    let e = KeyId::Character('e');
    c.handle_gesture(KeyGesture::Press, &e);
    lift(&mut c, &e);

    assert_eq!(
        c.host().calls,
        [
            Call::Feedback(KeyGesture::Press),
            Call::Feedback(KeyGesture::Release),
            Call::Insert("e".into())
        ]
    );
    assert!(c.session().is_idle());
}

#[test]
fn test_release_after_swipe_is_suppressed() {
    let mut c = make_coordinator(&[("e_SlideUp", "3")]);
    let e = KeyId::Character('e');

    c.handle_gesture(KeyGesture::Press, &e);
    drag(&mut c, &e, (100.0, 100.0), &[(100.0, 70.0)]);
    c.handle_gesture(KeyGesture::LongPress, &e);
    lift(&mut c, &e);

    // no release feedback and no "e"
    assert_eq!(
        c.host().calls,
        [
            Call::Feedback(KeyGesture::Press),
            Call::Insert("3".into()),
            Call::Feedback(KeyGesture::LongPress)
        ]
    );
    assert!(!c.is_dragging());
}

#[test]
fn test_next_tap_after_swipe_is_normal() {
    let mut c = make_coordinator(&[("e_SlideUp", "3")]);
    let e = KeyId::Character('e');
    drag(&mut c, &e, (100.0, 100.0), &[(100.0, 70.0)]);
    lift(&mut c, &e);
    lift(&mut c, &e);
    assert_eq!(
        c.host().effects(),
        [Call::Insert("3".into()), Call::Insert("e".into())]
    );
}

#[test]
fn test_sub_threshold_drag_still_releases() {
    let mut c = make_coordinator(&[("e_SlideUp", "3")]);
    let e = KeyId::Character('e');
    drag(&mut c, &e, (100.0, 100.0), &[(104.0, 92.0), (97.0, 85.0)]);
    lift(&mut c, &e);
    assert_eq!(c.host().effects(), [Call::Insert("e".into())]);
}

#[test]
fn test_unmapped_swipe_suppresses_release() {
    let mut c = make_coordinator(&[]);
    let k = KeyId::Character('k');
    drag(&mut c, &k, (0.0, 0.0), &[(0.0, 40.0)]);
    lift(&mut c, &k);
    assert!(c.host().calls.is_empty());
}

#[test]
fn test_space_scrub_suppresses_space_and_mode_switch() {
    let mut c = make_coordinator(&[]);
    c.host_mut().mode = KeyboardMode::Numeric;
    drag(&mut c, &KeyId::Space, (50.0, 50.0), &[(30.0, 50.0)]);
    lift(&mut c, &KeyId::Space);

    assert_eq!(c.host().effects(), [Call::Cursor(-2)]);
    assert_eq!(c.host().mode, KeyboardMode::Numeric);
}

#[test]
fn test_space_tap_on_numeric_returns_to_alphabetic() {
    let mut c = make_coordinator(&[]);
    c.host_mut().mode = KeyboardMode::Numeric;
    lift(&mut c, &KeyId::Space);
    assert_eq!(
        c.host().effects(),
        [
            Call::Insert(" ".into()),
            Call::Mode(KeyboardMode::Alphabetic)
        ]
    );
}

#[test]
fn test_space_tap_on_alphabetic_keeps_mode() {
    let mut c = make_coordinator(&[]);
    lift(&mut c, &KeyId::Space);
    assert_eq!(c.host().effects(), [Call::Insert(" ".into())]);
}

#[test]
fn test_backspace_deletes_on_press() {
    let mut c = make_coordinator(&[]);
    c.handle_gesture(KeyGesture::Press, &KeyId::Backspace);
    c.handle_gesture(KeyGesture::RepeatPress, &KeyId::Backspace);
    lift(&mut c, &KeyId::Backspace);
    assert_eq!(c.host().effects(), [Call::Delete, Call::Delete]);
}

#[test]
fn test_mode_key_press_switches_layout() {
    let mut c = make_coordinator(&[]);
    let toggle = KeyId::KeyboardMode(KeyboardMode::Numeric);
    c.handle_gesture(KeyGesture::Press, &toggle);
    assert_eq!(c.host().effects(), [Call::Mode(KeyboardMode::Numeric)]);
    assert_eq!(c.host().mode, KeyboardMode::Numeric);
}

#[test]
fn test_enter_release_inserts_newline() {
    let mut c = make_coordinator(&[]);
    lift(&mut c, &KeyId::Enter);
    assert_eq!(c.host().effects(), [Call::Insert("\n".into())]);
}

// Pinned: the drag state is gone once end_drag ran, so a late release
// falls through to the key's default action.
#[test]
fn test_release_after_end_drag_is_not_suppressed() {
    let mut c = make_coordinator(&[("e_SlideUp", "3")]);
    let e = KeyId::Character('e');
    drag(&mut c, &e, (100.0, 100.0), &[(100.0, 70.0)]);
    c.end_drag();
    c.handle_gesture(KeyGesture::Release, &e);
    assert_eq!(
        c.host().effects(),
        [Call::Insert("3".into()), Call::Insert("e".into())]
    );
}

#[test]
fn test_missing_end_drag_is_recovered_by_new_start() {
    let mut c = make_coordinator(&[("e_SlideUp", "3")]);
    let e = KeyId::Character('e');
    drag(&mut c, &e, (100.0, 100.0), &[(100.0, 70.0)]);
    c.handle_gesture(KeyGesture::Release, &e);

    // touch-up lost; the next drag starts elsewhere
    drag(&mut c, &e, (10.0, 10.0), &[(12.0, 11.0)]);
    assert!(!c.is_dragging());
    lift(&mut c, &e);
    assert_eq!(
        c.host().effects(),
        [Call::Insert("3".into()), Call::Insert("e".into())]
    );
}
