use crate::constants::STYLE_ELEMENT_ID;
use crate::core::InteractiveProbe;
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Current `innerWidth`/`innerHeight`; zero when unavailable.
pub fn viewport_size(window: &web::Window) -> Vec2 {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    Vec2::new(read(window.inner_width()), read(window.inner_height()))
}

/// Create a `<tag class=...>` as an `HtmlElement`.
pub fn create_element(
    document: &web::Document,
    tag: &str,
    class: &str,
) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{}>: {:?}", tag, e))?;
    el.set_class_name(class);
    el.dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn set_size_px(el: &web::HtmlElement, size: f32) {
    let px = format!("{}px", size);
    set_style(el, "width", &px);
    set_style(el, "height", &px);
}

/// Add the shared stylesheet unless the document already has it.
pub fn ensure_stylesheet(document: &web::Document, css: &str) {
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return;
    }
    let Some(head) = document.head() else {
        log::warn!("[dom] no <head>, cursor stylesheet not injected");
        return;
    };
    if let Ok(style) = document.create_element("style") {
        style.set_id(STYLE_ELEMENT_ID);
        style.set_text_content(Some(css));
        _ = head.append_child(&style);
    }
}

/// The element an event landed on; text nodes resolve to their parent.
pub fn event_element(ev: &web::Event) -> Option<web::Element> {
    let target = ev.target()?;
    match target.dyn_into::<web::Element>() {
        Ok(el) => Some(el),
        Err(other) => other
            .dyn_into::<web::Node>()
            .ok()
            .and_then(|n| n.parent_element()),
    }
}

/// `el`, then its parent, and so on up to the document element.
pub fn ancestors(el: web::Element) -> impl Iterator<Item = web::Element> {
    std::iter::successors(Some(el), |e| e.parent_element())
}

impl InteractiveProbe for web::Element {
    fn tag_name(&self) -> String {
        web::Element::tag_name(self)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }
}

/// A passive event listener that is removed from its target when dropped.
pub struct EventListener {
    target: web::EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn passive<F>(target: &web::EventTarget, event: &'static str, handler: F) -> Self
    where
        F: FnMut(web::Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let options = web::AddEventListenerOptions::new();
        options.set_passive(true);
        if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            log::warn!("[dom] addEventListener({}) failed: {:?}", event, e);
        }
        Self {
            target: target.clone(),
            event,
            callback,
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
