// Host-side tests for the interactive-element check.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod interactive {
    include!("../src/core/interactive.rs");
}

use interactive::*;

/// Minimal stand-in for a DOM element; tags are uppercase like `Element.tagName`.
struct FakeEl {
    tag: &'static str,
    attrs: Vec<(&'static str, &'static str)>,
}

fn el(tag: &'static str) -> FakeEl {
    FakeEl { tag, attrs: vec![] }
}

fn el_with(tag: &'static str, attrs: &[(&'static str, &'static str)]) -> FakeEl {
    FakeEl {
        tag,
        attrs: attrs.to_vec(),
    }
}

impl InteractiveProbe for &FakeEl {
    fn tag_name(&self) -> String {
        self.tag.to_string()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attrs
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.to_string())
    }
}

#[test]
fn native_interactive_tags_match() {
    for tag in ["A", "BUTTON", "INPUT", "SELECT", "TEXTAREA", "SUMMARY", "a"] {
        assert!(is_interactive(&&el(tag)), "{} should be interactive", tag);
    }
}

#[test]
fn plain_elements_do_not_match() {
    for tag in ["P", "SPAN", "DIV", "BODY", "HTML", "LABEL", "DETAILS"] {
        assert!(!is_interactive(&&el(tag)), "{} should not be interactive", tag);
    }
}

#[test]
fn role_button_matches_only_button_role() {
    assert!(is_interactive(&&el_with("DIV", &[("role", "button")])));
    assert!(!is_interactive(&&el_with("DIV", &[("role", "link")])));
}

#[test]
fn opt_in_marker_matches() {
    assert!(is_interactive(&&el_with(
        "DIV",
        &[(CURSOR_MARKER_ATTR, CURSOR_MARKER_VALUE)]
    )));
    assert!(!is_interactive(&&el_with("DIV", &[(CURSOR_MARKER_ATTR, "none")])));
}

#[test]
fn nested_span_inside_anchor_reports_interactive() {
    // span -> a -> div -> body, target first
    let chain = [el("SPAN"), el("A"), el("DIV"), el("BODY")];
    assert!(any_interactive(chain.iter()));
}

#[test]
fn text_outside_interactive_ancestors_reports_false() {
    let chain = [el("P"), el("SECTION"), el("MAIN"), el("BODY"), el("HTML")];
    assert!(!any_interactive(chain.iter()));
}

#[test]
fn empty_chain_is_not_interactive() {
    let chain: [FakeEl; 0] = [];
    assert!(!any_interactive(chain.iter()));
}
