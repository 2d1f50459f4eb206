// Host-side tests for the activation phase machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod phase {
    include!("../src/core/phase.rs");
}

use phase::*;

#[test]
fn starts_inactive() {
    assert_eq!(Phase::default(), Phase::Inactive);
    assert!(!Phase::default().is_active());
}

#[test]
fn gaining_fine_pointer_activates() {
    assert_eq!(
        Phase::Inactive.on_capability(true),
        (Phase::Active, Transition::Activate)
    );
}

#[test]
fn losing_fine_pointer_deactivates() {
    assert_eq!(
        Phase::Active.on_capability(false),
        (Phase::Inactive, Transition::Deactivate)
    );
}

#[test]
fn repeated_capability_values_do_nothing() {
    assert_eq!(
        Phase::Active.on_capability(true),
        (Phase::Active, Transition::Stay)
    );
    assert_eq!(
        Phase::Inactive.on_capability(false),
        (Phase::Inactive, Transition::Stay)
    );
}

#[test]
fn unmount_releases_only_when_active() {
    assert_eq!(
        Phase::Active.on_unmount(),
        (Phase::Inactive, Transition::Deactivate)
    );
    assert_eq!(
        Phase::Inactive.on_unmount(),
        (Phase::Inactive, Transition::Stay)
    );
}

#[test]
fn docking_sequence_toggles_cleanly() {
    // touch-only -> mouse docked -> undocked -> docked again
    let mut phase = Phase::Inactive;
    let mut transitions = Vec::new();
    for fine in [false, true, true, false, true] {
        let (next, t) = phase.on_capability(fine);
        phase = next;
        transitions.push(t);
    }
    assert_eq!(
        transitions,
        vec![
            Transition::Stay,
            Transition::Activate,
            Transition::Stay,
            Transition::Deactivate,
            Transition::Activate,
        ]
    );
    assert!(phase.is_active());
}
