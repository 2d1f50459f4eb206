// Behavioral tuning shared by the cursor core and the web frontend.

// Smoothing
pub const RING_EASE: f32 = 0.16; // fraction of the remaining distance covered per frame

// Ripples
pub const RIPPLE_LIFETIME_MS: u32 = 650; // expand/fade duration, then removal

// Visual sizing (CSS pixels)
pub const RING_SIZE_PX: f32 = 18.0;
pub const DOT_SIZE_PX: f32 = 5.0;
pub const RIPPLE_START_SIZE_PX: f32 = 10.0;

// Press feedback
pub const RING_PRESSED_SCALE: f32 = 0.92;
pub const RING_IDLE_SCALE: f32 = 1.0;
