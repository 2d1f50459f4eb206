pub mod config;
pub mod constants;
pub mod follow;
pub mod interactive;
pub mod phase;
pub mod ripple;
pub mod state;

pub use config::{ConfigError, CursorConfig, OVERRIDE_KEYS};
pub use follow::transform_css;
pub use interactive::{any_interactive, InteractiveProbe};
pub use phase::{Phase, Transition};
pub use ripple::{Ripple, RippleId};
pub use state::CursorState;
