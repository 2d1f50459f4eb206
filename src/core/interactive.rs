// Decides whether the element under the pointer counts as "interactive".
// Equivalent to `closest('a, button, [role="button"], input, select, textarea,
// summary, [data-cursor="interactive"]')`, expressed over a small trait so the
// ancestor walk can be exercised without a DOM.

/// Element tags that are interactive on their own.
pub const INTERACTIVE_TAGS: &[&str] = &["a", "button", "input", "select", "textarea", "summary"];

/// Opt-in marker: `data-cursor="interactive"` on any element.
pub const CURSOR_MARKER_ATTR: &str = "data-cursor";
pub const CURSOR_MARKER_VALUE: &str = "interactive";

/// Read-only view of an element for the interactive check.
pub trait InteractiveProbe {
    fn tag_name(&self) -> String;
    fn attribute(&self, name: &str) -> Option<String>;
}

/// True when the element itself matches.
pub fn is_interactive<N: InteractiveProbe + ?Sized>(node: &N) -> bool {
    let tag = node.tag_name();
    if INTERACTIVE_TAGS
        .iter()
        .any(|t| tag.eq_ignore_ascii_case(t))
    {
        return true;
    }
    if node.attribute("role").as_deref() == Some("button") {
        return true;
    }
    node.attribute(CURSOR_MARKER_ATTR).as_deref() == Some(CURSOR_MARKER_VALUE)
}

/// True when any element of `chain` matches. `chain` is expected to start at
/// the event target and walk up through its ancestors.
pub fn any_interactive<N, I>(chain: I) -> bool
where
    N: InteractiveProbe,
    I: IntoIterator<Item = N>,
{
    chain.into_iter().any(|n| is_interactive(&n))
}
