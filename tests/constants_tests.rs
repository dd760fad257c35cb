// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so the pure DOM constants are included directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use action_items_core::constants::*;
use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn lifetimes_and_throttle_are_positive() {
    assert!(SPARKLE_THROTTLE_MS > 0.0);
    assert!(SPARKLE_LIFETIME_MS > SPARKLE_THROTTLE_MS);
    assert!(HEART_LIFETIME_MS > SPARKLE_LIFETIME_MS);
    // a burst finishes, delay included, well inside 1.25s
    assert!(HEART_LIFETIME_MS + (HEART_DELAY_MAX_MS as f64) < 1_250.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn burst_ranges_are_well_formed() {
    assert!(HEART_COUNT_REDUCED > 0);
    assert!(HEART_COUNT > HEART_COUNT_REDUCED);
    assert!(HEART_DY_MIN_PX < HEART_DY_MAX_PX);
    // upward bias: most of the dy range points up
    assert!(-HEART_DY_MIN_PX > HEART_DY_MAX_PX);
    assert!(HEART_DX_SPAN_PX > 0.0 && HEART_ROTATION_MAX_DEG > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scroll_constants_are_sane() {
    assert!(RIBBON_SHIFTS_PX.iter().all(|s| *s < 0.0));
    assert!(RIBBON_SHIFTS_PX[1] < RIBBON_SHIFTS_PX[0]); // back ribbon moves further
    assert!(CARD_REVEAL_AMOUNT > 0.0 && CARD_REVEAL_AMOUNT <= 1.0);
}

#[test]
fn dom_hooks_are_distinct_and_well_formed() {
    let ids = [ROOT_ID, HERO_ID, AGREE_BUTTON_ID, PRINT_BUTTON_ID, BACK_LINK_ID];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty() && !a.starts_with('#'));
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
    for sel in [RIBBON_SELECTOR, CARD_SELECTOR, AGREE_BAR_SELECTOR] {
        assert!(sel.starts_with('.'));
    }
    assert!(REDUCED_MOTION_QUERY.contains("prefers-reduced-motion"));
    assert_eq!(POINTER_MOVE_EVENT, "pointermove");
}
