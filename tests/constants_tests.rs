// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn tuning_matches_intended_feel() {
    assert_eq!(RING_EASE, 0.16);
    assert_eq!(RIPPLE_LIFETIME_MS, 650);
    assert_eq!(RING_SIZE_PX, 18.0);
    assert_eq!(DOT_SIZE_PX, 5.0);
    assert_eq!(RIPPLE_START_SIZE_PX, 10.0);
    assert_eq!(RING_PRESSED_SCALE, 0.92);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // Ease must make progress without overshooting
    assert!(RING_EASE > 0.0 && RING_EASE <= 1.0);

    // Press feedback shrinks the ring
    assert!(RING_PRESSED_SCALE < RING_IDLE_SCALE);

    // The dot sits inside the ring
    assert!(DOT_SIZE_PX < RING_SIZE_PX);

    // Ripples under the ring, dot on top
    assert!(Z_RIPPLE < Z_RING && Z_RING < Z_DOT);
}

#[test]
fn stylesheet_defines_referenced_names() {
    assert!(STYLESHEET.contains(&format!("@keyframes {}", RIPPLE_KEYFRAMES)));
    for class in [LAYER_CLASS, RING_CLASS, DOT_CLASS, RIPPLE_CLASS] {
        assert!(STYLESHEET.contains(&format!(".{}", class)), "missing .{}", class);
    }
    assert!(STYLESHEET.contains(&format!("[{}=\"true\"]", HOVER_ATTR)));
    assert!(FINE_POINTER_QUERY.contains("pointer: fine"));
}

#[test]
fn layer_does_not_form_its_own_stacking_context() {
    let rule = STYLESHEET
        .lines()
        .find(|l| l.starts_with(&format!(".{} ", LAYER_CLASS)))
        .expect("layer rule");
    assert!(rule.contains("display: contents"), "{}", rule);
    assert!(!rule.contains("z-index"), "{}", rule);
    assert!(!rule.contains("position"), "{}", rule);
}
