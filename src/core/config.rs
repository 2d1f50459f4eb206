use super::constants::*;
use thiserror::Error;

/// Keys accepted by [`CursorConfig::set`]. The web frontend reads each one
/// from a `data-cursor-<key>` attribute on the document element.
pub const OVERRIDE_KEYS: &[&str] = &[
    "ease",
    "ripple-ms",
    "ring-size",
    "dot-size",
    "ripple-size",
    "pressed-scale",
];

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown cursor option `{0}`")]
    UnknownKey(String),
    #[error("cursor option `{key}`: `{value}` is not a number")]
    Invalid { key: String, value: String },
    #[error("cursor option `{key}`: {value} is out of range")]
    OutOfRange { key: String, value: f64 },
}

/// Tunables for one cursor instance.
#[derive(Clone, Debug, PartialEq)]
pub struct CursorConfig {
    pub ease: f32,
    pub ripple_lifetime_ms: u32,
    pub ring_size_px: f32,
    pub dot_size_px: f32,
    pub ripple_size_px: f32,
    pub pressed_scale: f32,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            ease: RING_EASE,
            ripple_lifetime_ms: RIPPLE_LIFETIME_MS,
            ring_size_px: RING_SIZE_PX,
            dot_size_px: DOT_SIZE_PX,
            ripple_size_px: RIPPLE_START_SIZE_PX,
            pressed_scale: RING_PRESSED_SCALE,
        }
    }
}

impl CursorConfig {
    /// Apply a single textual override. On error the config is left as is.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        if !OVERRIDE_KEYS.contains(&key) {
            return Err(ConfigError::UnknownKey(key.to_string()));
        }
        let v: f64 = value.trim().parse().map_err(|_| ConfigError::Invalid {
            key: key.to_string(),
            value: value.to_string(),
        })?;
        let out_of_range = || ConfigError::OutOfRange {
            key: key.to_string(),
            value: v,
        };
        if !v.is_finite() {
            return Err(out_of_range());
        }
        match key {
            "ease" => {
                if v <= 0.0 || v > 1.0 {
                    return Err(out_of_range());
                }
                self.ease = v as f32;
            }
            "ripple-ms" => {
                if v < 1.0 || v > u32::MAX as f64 {
                    return Err(out_of_range());
                }
                self.ripple_lifetime_ms = v.round() as u32;
            }
            "pressed-scale" => {
                if v <= 0.0 || v > 2.0 {
                    return Err(out_of_range());
                }
                self.pressed_scale = v as f32;
            }
            size => {
                if v <= 0.0 {
                    return Err(out_of_range());
                }
                let slot = match size {
                    "ring-size" => &mut self.ring_size_px,
                    "dot-size" => &mut self.dot_size_px,
                    _ => &mut self.ripple_size_px,
                };
                *slot = v as f32;
            }
        }
        Ok(())
    }

    /// Ring scale for the current press state.
    #[inline]
    pub fn ring_scale(&self, pressed: bool) -> f32 {
        if pressed {
            self.pressed_scale
        } else {
            RING_IDLE_SCALE
        }
    }
}
