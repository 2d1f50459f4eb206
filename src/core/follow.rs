use glam::Vec2;

/// One exponential smoothing step: move `current` toward `target` by `ease`
/// of the remaining distance, per axis.
#[inline]
pub fn ease_toward(current: Vec2, target: Vec2, ease: f32) -> Vec2 {
    current + (target - current) * ease
}

/// CSS transform placing an element at `pos` with a uniform `scale`.
#[inline]
pub fn transform_css(pos: Vec2, scale: f32) -> String {
    format!("translate3d({}px, {}px, 0) scale({})", pos.x, pos.y, scale)
}

/// Raw pointer sample plus the lagging position that chases it.
#[derive(Clone, Copy, Debug)]
pub struct Follower {
    pub raw: Vec2,
    pub smoothed: Vec2,
    pub ease: f32,
}

impl Follower {
    /// Both positions start at the viewport center so the ring does not fly
    /// in from the origin on the first frame.
    pub fn centered(viewport: Vec2, ease: f32) -> Self {
        let center = viewport * 0.5;
        Self {
            raw: center,
            smoothed: center,
            ease,
        }
    }

    #[inline]
    pub fn set_raw(&mut self, pos: Vec2) {
        self.raw = pos;
    }

    /// Advance one frame and return the new smoothed position.
    #[inline]
    pub fn step(&mut self) -> Vec2 {
        self.smoothed = ease_toward(self.smoothed, self.raw, self.ease);
        self.smoothed
    }
}
