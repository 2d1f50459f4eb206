use crate::dom::EventListener;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Watches a media query and reports every change of its `matches` value.
///
/// Environments whose `MediaQueryList` has no `addEventListener` still get the
/// initial value; they just never see updates.
pub struct CapabilityWatch {
    mql: web::MediaQueryList,
    _change: Option<EventListener>,
}

impl CapabilityWatch {
    pub fn new(
        window: &web::Window,
        query: &str,
        mut on_change: impl FnMut(bool) + 'static,
    ) -> anyhow::Result<Self> {
        let mql = window
            .match_media(query)
            .map_err(|e| anyhow::anyhow!("matchMedia({}): {:?}", query, e))?
            .ok_or_else(|| anyhow::anyhow!("matchMedia({}) returned null", query))?;

        let can_listen =
            js_sys::Reflect::has(&mql, &JsValue::from_str("addEventListener")).unwrap_or(false);
        let change = if can_listen {
            let mql_cb = mql.clone();
            Some(EventListener::passive(&mql, "change", move |_ev: web::Event| {
                on_change(mql_cb.matches());
            }))
        } else {
            log::warn!("[capability] no change events for `{}`, value is fixed", query);
            None
        };

        Ok(Self {
            mql,
            _change: change,
        })
    }

    #[inline]
    pub fn matches(&self) -> bool {
        self.mql.matches()
    }
}
