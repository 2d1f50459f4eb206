/// Presentation constants for the DOM overlay.
///
/// Behavioral tuning (ease, ripple lifetime, sizes) lives in
/// `core::constants`; this file holds what only the browser side needs:
/// the capability query, element ids, z-order and the stylesheet.
// Capability query for mouse-like pointers
pub const FINE_POINTER_QUERY: &str = "(hover: hover) and (pointer: fine)";

// Config overrides are read from `data-cursor-<key>` on <html>
pub const CONFIG_ATTR_PREFIX: &str = "data-cursor-";

// Element ids and classes
pub const STYLE_ELEMENT_ID: &str = "soft-cursor-style";
pub const LAYER_CLASS: &str = "soft-cursor-layer";
pub const RING_CLASS: &str = "soft-cursor-ring";
pub const DOT_CLASS: &str = "soft-cursor-dot";
pub const RIPPLE_CLASS: &str = "soft-cursor-ripple";
pub const RIPPLE_ID_ATTR: &str = "data-ripple-id";
pub const HOVER_ATTR: &str = "data-hover";

// Stacking order: ripples under the ring, dot on top
pub const Z_RIPPLE: i32 = 9998;
pub const Z_RING: i32 = 9999;
pub const Z_DOT: i32 = 10000;

// Keyframes name referenced by ripple markers
pub const RIPPLE_KEYFRAMES: &str = "soft-cursor-ripple";

/// Injected once per document. Sizes, lifetime and positions are set inline
/// since they come from `CursorConfig`.
///
/// The layer generates no box, so ring, dot and ripples stack against the
/// page with their own z-indices instead of inside a layer context.
pub const STYLESHEET: &str = "\
.soft-cursor-layer { display: contents; }
.soft-cursor-ring, .soft-cursor-dot, .soft-cursor-ripple {
  position: fixed; left: 0; top: 0; pointer-events: none;
  border-radius: 9999px; translate: -50% -50%; box-sizing: border-box;
}
.soft-cursor-ring {
  border: 1px solid rgba(236, 72, 153, 0.5);
  transition: width 160ms ease, height 160ms ease, border-color 160ms ease, box-shadow 160ms ease;
  will-change: transform;
}
.soft-cursor-ring[data-hover=\"true\"] {
  border-color: rgba(236, 72, 153, 0.85);
  box-shadow: 0 0 12px rgba(236, 72, 153, 0.3);
}
.soft-cursor-dot {
  background: rgba(236, 72, 153, 0.95);
  will-change: transform;
}
.soft-cursor-ripple {
  border: 1px solid rgba(236, 72, 153, 0.55);
  box-shadow: 0 0 18px rgba(236, 72, 153, 0.25);
}
@keyframes soft-cursor-ripple {
  from { transform: scale(1); opacity: 1; }
  to { transform: scale(6); opacity: 0; }
}
";
