use crate::constants::{CONFIG_ATTR_PREFIX, FINE_POINTER_QUERY};
use crate::core::{CursorConfig, CursorState, Phase, Transition, OVERRIDE_KEYS};
use crate::dom::{self, EventListener};
use crate::events::{self, CapabilityWatch};
use crate::frame::AnimationLoop;
use crate::overlay::CursorOverlay;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

/// State shared by the listeners, the frame loop and the ripple timers of one
/// active session.
pub struct Session {
    pub state: RefCell<CursorState>,
    pub overlay: CursorOverlay,
}

/// Resources held while `Active`. Dropping it removes the listeners, cancels
/// the pending frame and takes the elements out of the page.
struct ActiveSession {
    session: Rc<Session>,
    _listeners: Vec<EventListener>,
    _animation: AnimationLoop,
}

impl Drop for ActiveSession {
    fn drop(&mut self) {
        self.session.overlay.detach();
    }
}

struct CursorInner {
    window: web::Window,
    document: web::Document,
    body: web::HtmlElement,
    config: CursorConfig,
    phase: Cell<Phase>,
    active: RefCell<Option<ActiveSession>>,
}

/// A mounted soft ripple cursor. Follows the fine-pointer capability on its
/// own; dropping it unmounts.
pub struct Cursor {
    inner: Rc<CursorInner>,
    _watch: CapabilityWatch,
}

impl Cursor {
    pub fn mount(config: CursorConfig) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;
        let body = document
            .body()
            .ok_or_else(|| anyhow::anyhow!("no <body>"))?;

        let inner = Rc::new(CursorInner {
            window: window.clone(),
            document,
            body,
            config,
            phase: Cell::new(Phase::Inactive),
            active: RefCell::new(None),
        });

        let weak = Rc::downgrade(&inner);
        let watch = CapabilityWatch::new(&window, FINE_POINTER_QUERY, move |fine| {
            if let Some(inner) = weak.upgrade() {
                log::info!("[cursor] fine pointer: {}", fine);
                inner.apply_capability(fine);
            }
        })?;
        let fine = watch.matches();
        log::info!("[cursor] mounted, fine pointer: {}", fine);
        inner.apply_capability(fine);

        Ok(Self {
            inner,
            _watch: watch,
        })
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.inner.phase.get().is_active()
    }
}

impl Drop for Cursor {
    fn drop(&mut self) {
        let (next, t) = self.inner.phase.get().on_unmount();
        self.inner.transition(next, t);
        log::info!("[cursor] unmounted");
    }
}

impl CursorInner {
    fn apply_capability(&self, fine_pointer: bool) {
        let (next, t) = self.phase.get().on_capability(fine_pointer);
        self.transition(next, t);
    }

    fn transition(&self, next: Phase, t: Transition) {
        self.phase.set(next);
        match t {
            Transition::Activate => match self.activate() {
                Ok(active) => {
                    *self.active.borrow_mut() = Some(active);
                    log::debug!("[cursor] active");
                }
                Err(e) => {
                    log::error!("[cursor] activation failed: {:?}", e);
                    self.phase.set(Phase::Inactive);
                }
            },
            Transition::Deactivate => {
                let previous = self.active.borrow_mut().take();
                drop(previous);
                log::debug!("[cursor] inactive");
            }
            Transition::Stay => {}
        }
    }

    fn activate(&self) -> anyhow::Result<ActiveSession> {
        let viewport = dom::viewport_size(&self.window);
        let state = CursorState::new(self.config.clone(), viewport);
        let start = state.follower.smoothed;
        let overlay = CursorOverlay::attach(&self.document, &self.body, &self.config, start)?;
        let session = Rc::new(Session {
            state: RefCell::new(state),
            overlay,
        });

        // Positions are seeded above, before the first frame can run.
        let listeners = events::wire_pointer_handlers(&self.window, &session);
        let s = session.clone();
        let animation = AnimationLoop::start(move || {
            let (pos, scale) = s.state.borrow_mut().tick();
            s.overlay.place_ring(pos, scale);
        });
        if !animation.is_scheduled() {
            log::warn!("[cursor] frame loop did not schedule, ring will not follow");
        }

        Ok(ActiveSession {
            session,
            _listeners: listeners,
            _animation: animation,
        })
    }
}

/// Defaults, overridden by any `data-cursor-<key>` attributes on `<html>`.
/// Bad values are logged and skipped.
pub fn config_from_document(document: &web::Document) -> CursorConfig {
    let mut config = CursorConfig::default();
    let Some(root) = document.document_element() else {
        return config;
    };
    for key in OVERRIDE_KEYS {
        let attr = format!("{}{}", CONFIG_ATTR_PREFIX, key);
        if let Some(value) = root.get_attribute(&attr) {
            if let Err(e) = config.set(key, &value) {
                log::warn!("[config] {}", e);
            }
        }
    }
    config
}
