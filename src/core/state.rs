use super::config::CursorConfig;
use super::follow::Follower;
use super::ripple::{Ripple, RippleId, RippleSet};
use glam::Vec2;

/// Everything one active cursor session tracks between events and frames.
///
/// Event handlers and the frame loop mutate this; the DOM layer only reads
/// back the positions and flags it needs to paint.
#[derive(Debug)]
pub struct CursorState {
    pub config: CursorConfig,
    pub follower: Follower,
    pub pressed: bool,
    pub hovering_interactive: bool,
    pub ripples: RippleSet,
}

impl CursorState {
    /// New session state with both positions seeded to the viewport center.
    pub fn new(config: CursorConfig, viewport: Vec2) -> Self {
        let follower = Follower::centered(viewport, config.ease);
        Self {
            config,
            follower,
            pressed: false,
            hovering_interactive: false,
            ripples: RippleSet::new(),
        }
    }

    /// Record a raw pointer sample; returns where the dot goes (the sample
    /// itself, unsmoothed).
    #[inline]
    pub fn pointer_move(&mut self, pos: Vec2) -> Vec2 {
        self.follower.set_raw(pos);
        pos
    }

    /// Primary button down: mark pressed and spawn a ripple at the last
    /// sample. The caller schedules its removal after `ripple_lifetime_ms`.
    pub fn pointer_down(&mut self) -> Ripple {
        self.pressed = true;
        self.ripples.spawn(self.follower.raw)
    }

    /// Press at the event's own position: the sample and dot move there
    /// first, so a click without a preceding move lands under the pointer.
    pub fn pointer_down_at(&mut self, pos: Vec2) -> Ripple {
        self.pointer_move(pos);
        self.pointer_down()
    }

    /// Any button release clears the press.
    #[inline]
    pub fn pointer_up(&mut self) {
        self.pressed = false;
    }

    /// Reconcile with a `MouseEvent.buttons` mask. Chorded releases only
    /// report `pointermove`, so the press ends once the primary bit is gone.
    #[inline]
    pub fn pointer_buttons(&mut self, buttons: u16) {
        if buttons & 1 == 0 {
            self.pressed = false;
        }
    }

    /// Returns true when the flag changed.
    #[inline]
    pub fn set_hovering(&mut self, interactive: bool) -> bool {
        let changed = self.hovering_interactive != interactive;
        self.hovering_interactive = interactive;
        changed
    }

    /// One animation frame: advance the ring, return its position and scale.
    #[inline]
    pub fn tick(&mut self) -> (Vec2, f32) {
        let pos = self.follower.step();
        (pos, self.ring_scale())
    }

    #[inline]
    pub fn ring_scale(&self) -> f32 {
        self.config.ring_scale(self.pressed)
    }

    #[inline]
    pub fn retire_ripple(&mut self, id: RippleId) -> Option<Ripple> {
        self.ripples.remove(id)
    }
}
