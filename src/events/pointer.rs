use crate::core::{any_interactive, RippleId};
use crate::cursor::Session;
use crate::dom::{self, EventListener};
use glam::Vec2;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Attach the four window-level pointer listeners for an active session.
/// The listeners go away when the returned guards are dropped.
pub fn wire_pointer_handlers(window: &web::Window, session: &Rc<Session>) -> Vec<EventListener> {
    vec![
        wire_pointermove(window, session.clone()),
        wire_pointerdown(window, session.clone()),
        wire_pointerup(window, session.clone()),
        wire_pointerover(window, session.clone()),
    ]
}

#[inline]
fn client_pos(ev: &web::Event) -> Option<Vec2> {
    let ev = ev.dyn_ref::<web::MouseEvent>()?;
    Some(Vec2::new(ev.client_x() as f32, ev.client_y() as f32))
}

#[inline]
fn buttons(ev: &web::Event) -> Option<u16> {
    ev.dyn_ref::<web::MouseEvent>().map(|m| m.buttons())
}

#[inline]
fn is_primary_button(ev: &web::Event) -> bool {
    ev.dyn_ref::<web::MouseEvent>()
        .map(|m| m.button() == 0)
        .unwrap_or(false)
}

fn wire_pointermove(window: &web::Window, s: Rc<Session>) -> EventListener {
    EventListener::passive(window, "pointermove", move |ev: web::Event| {
        let Some(pos) = client_pos(&ev) else {
            return;
        };
        let dot = {
            let mut st = s.state.borrow_mut();
            if let Some(mask) = buttons(&ev) {
                st.pointer_buttons(mask);
            }
            st.pointer_move(pos)
        };
        s.overlay.place_dot(dot);
    })
}

fn wire_pointerdown(window: &web::Window, s: Rc<Session>) -> EventListener {
    EventListener::passive(window, "pointerdown", move |ev: web::Event| {
        if !is_primary_button(&ev) {
            return;
        }
        let (ripple, lifetime_ms) = {
            let mut st = s.state.borrow_mut();
            let ripple = match client_pos(&ev) {
                Some(pos) => st.pointer_down_at(pos),
                None => st.pointer_down(),
            };
            (ripple, st.config.ripple_lifetime_ms)
        };
        s.overlay.place_dot(ripple.pos);
        s.overlay.spawn_ripple(&ripple);
        schedule_retirement(Rc::downgrade(&s), ripple.id, lifetime_ms);
    })
}

fn wire_pointerup(window: &web::Window, s: Rc<Session>) -> EventListener {
    EventListener::passive(window, "pointerup", move |_ev: web::Event| {
        s.state.borrow_mut().pointer_up();
    })
}

fn wire_pointerover(window: &web::Window, s: Rc<Session>) -> EventListener {
    EventListener::passive(window, "pointerover", move |ev: web::Event| {
        let Some(target) = dom::event_element(&ev) else {
            return;
        };
        let interactive = any_interactive(dom::ancestors(target));
        if s.state.borrow_mut().set_hovering(interactive) {
            s.overlay.set_hovering(interactive);
        }
    })
}

/// One-shot timer that drops the ripple from the session once its animation
/// has run. Holds only a weak handle: if the session is gone by then, the
/// callback does nothing.
fn schedule_retirement(session: Weak<Session>, id: RippleId, lifetime_ms: u32) {
    let Some(window) = web::window() else {
        retire(&session, id);
        return;
    };
    let session_cb = session.clone();
    let cb = Closure::once_into_js(move || retire(&session_cb, id));
    let delay = i32::try_from(lifetime_ms).unwrap_or(i32::MAX);
    if let Err(e) = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay)
    {
        log::warn!("[ripple] setTimeout failed for {}, retiring now: {:?}", id, e);
        retire(&session, id);
    }
}

fn retire(session: &Weak<Session>, id: RippleId) {
    let Some(s) = session.upgrade() else {
        return;
    };
    let retired = s.state.borrow_mut().retire_ripple(id);
    if let Some(r) = retired {
        s.overlay.remove_ripple(id);
        log::debug!("[ripple] {} retired after {:?}", id, r.born.elapsed());
    }
}
