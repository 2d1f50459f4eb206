use crate::constants::*;
use crate::core::{transform_css, CursorConfig, Ripple, RippleId};
use crate::dom;
use fnv::FnvHashMap;
use glam::Vec2;
use std::cell::RefCell;
use web_sys as web;

/// The DOM side of an active cursor: a fixed layer holding the ring, the dot
/// and one marker per live ripple.
pub struct CursorOverlay {
    document: web::Document,
    layer: web::HtmlElement,
    ring: web::HtmlElement,
    dot: web::HtmlElement,
    ripples: RefCell<FnvHashMap<RippleId, web::HtmlElement>>,
    ripple_size_px: f32,
    ripple_lifetime_ms: u32,
}

impl CursorOverlay {
    /// Build the elements and append them to `body`, with ring and dot
    /// already placed at `start`.
    pub fn attach(
        document: &web::Document,
        body: &web::HtmlElement,
        config: &CursorConfig,
        start: Vec2,
    ) -> anyhow::Result<Self> {
        dom::ensure_stylesheet(document, STYLESHEET);

        let layer = dom::create_element(document, "div", LAYER_CLASS)?;
        _ = layer.set_attribute("aria-hidden", "true");

        let ring = dom::create_element(document, "div", RING_CLASS)?;
        dom::set_size_px(&ring, config.ring_size_px);
        dom::set_style(&ring, "z-index", &Z_RING.to_string());
        _ = ring.set_attribute(HOVER_ATTR, "false");
        dom::set_style(&ring, "transform", &transform_css(start, config.ring_scale(false)));

        let dot = dom::create_element(document, "div", DOT_CLASS)?;
        dom::set_size_px(&dot, config.dot_size_px);
        dom::set_style(&dot, "z-index", &Z_DOT.to_string());
        dom::set_style(&dot, "transform", &transform_css(start, 1.0));

        _ = layer.append_child(&ring);
        _ = layer.append_child(&dot);
        body.append_child(&layer)
            .map_err(|e| anyhow::anyhow!("append cursor layer: {:?}", e))?;

        Ok(Self {
            document: document.clone(),
            layer,
            ring,
            dot,
            ripples: RefCell::new(FnvHashMap::default()),
            ripple_size_px: config.ripple_size_px,
            ripple_lifetime_ms: config.ripple_lifetime_ms,
        })
    }

    #[inline]
    pub fn place_ring(&self, pos: Vec2, scale: f32) {
        dom::set_style(&self.ring, "transform", &transform_css(pos, scale));
    }

    #[inline]
    pub fn place_dot(&self, pos: Vec2) {
        dom::set_style(&self.dot, "transform", &transform_css(pos, 1.0));
    }

    pub fn set_hovering(&self, hovering: bool) {
        _ = self
            .ring
            .set_attribute(HOVER_ATTR, if hovering { "true" } else { "false" });
    }

    pub fn spawn_ripple(&self, ripple: &Ripple) {
        let el = match dom::create_element(&self.document, "span", RIPPLE_CLASS) {
            Ok(el) => el,
            Err(e) => {
                log::warn!("[overlay] ripple marker: {:?}", e);
                return;
            }
        };
        _ = el.set_attribute(RIPPLE_ID_ATTR, &ripple.id.to_string());
        dom::set_size_px(&el, self.ripple_size_px);
        dom::set_style(&el, "left", &format!("{}px", ripple.pos.x));
        dom::set_style(&el, "top", &format!("{}px", ripple.pos.y));
        dom::set_style(&el, "z-index", &Z_RIPPLE.to_string());
        dom::set_style(
            &el,
            "animation",
            &format!("{} {}ms ease-out forwards", RIPPLE_KEYFRAMES, self.ripple_lifetime_ms),
        );
        _ = self.layer.append_child(&el);
        self.ripples.borrow_mut().insert(ripple.id, el);
    }

    /// Missing markers are ignored.
    pub fn remove_ripple(&self, id: RippleId) {
        if let Some(el) = self.ripples.borrow_mut().remove(&id) {
            el.remove();
        }
    }

    pub fn detach(&self) {
        self.ripples.borrow_mut().clear();
        self.layer.remove();
    }
}
