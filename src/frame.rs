use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A `requestAnimationFrame` loop owned by whoever holds it.
///
/// The callback re-requests itself every frame. Dropping the loop cancels the
/// pending request and frees the closure; the closure only holds a weak
/// reference to itself, so there is no cycle to leak.
pub struct AnimationLoop {
    tick: Tick,
    handle: Rc<Cell<Option<i32>>>,
}

impl AnimationLoop {
    pub fn start(mut step: impl FnMut() + 'static) -> Self {
        let tick: Tick = Rc::new(RefCell::new(None));
        let handle = Rc::new(Cell::new(None::<i32>));

        let tick_weak = Rc::downgrade(&tick);
        let handle_tick = handle.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            handle_tick.set(None);
            step();
            if let Some(tick) = tick_weak.upgrade() {
                if let Some(cb) = tick.borrow().as_ref() {
                    handle_tick.set(request_frame(cb));
                }
            }
        }) as Box<dyn FnMut()>));

        if let Some(cb) = tick.borrow().as_ref() {
            handle.set(request_frame(cb));
        }
        Self { tick, handle }
    }

    #[inline]
    pub fn is_scheduled(&self) -> bool {
        self.handle.get().is_some()
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        if let Some(id) = self.handle.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        self.tick.borrow_mut().take();
    }
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
    let w = web::window()?;
    match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            log::error!("requestAnimationFrame failed: {:?}", e);
            None
        }
    }
}
